mod embedding;
mod text;
mod vector_index;

pub use embedding::{Embedder, EmbeddingClient, InputType};
pub use text::build_product_text;
pub use vector_index::{PineconeClient, VectorIndex, ensure_index};
