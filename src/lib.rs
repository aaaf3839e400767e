pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod store;

pub use models::Config;
pub use pipeline::IndexSummary;
