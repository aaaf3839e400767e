use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use luxe_indexer::models::{Config, DEFAULT_INDEX_NAME, INDEX_SETTLE_SECS};
use luxe_indexer::pipeline;
use luxe_indexer::services::{EmbeddingClient, PineconeClient};
use luxe_indexer::store::MongoProductStore;

/// Embed the product catalog and upsert it into the Pinecone index.
#[derive(Debug, Parser)]
#[command(name = "luxe-indexer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_DB_URI")]
    mongo_uri: String,

    /// API key for the embedding service
    #[arg(long, env = "NVIDIA_API_KEY", hide_env_values = true)]
    nvidia_api_key: String,

    /// API key for the vector index
    #[arg(long, env = "PINECONE_API_KEY", hide_env_values = true)]
    pinecone_api_key: String,

    /// Target index name
    #[arg(long, env = "PINECONE_INDEX", default_value = DEFAULT_INDEX_NAME)]
    index: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config {
        mongo_uri: cli.mongo_uri,
        nvidia_api_key: cli.nvidia_api_key,
        pinecone_api_key: cli.pinecone_api_key,
        index_name: cli.index,
    };

    println!("Connecting to MongoDB...");
    let store = MongoProductStore::connect(&config).await?;

    let embedder = EmbeddingClient::new(&config);
    let index = PineconeClient::new(&config);

    let summary = pipeline::run(
        &store,
        &embedder,
        &index,
        &config.index_name,
        Duration::from_secs(INDEX_SETTLE_SECS),
    )
    .await?;

    println!(
        "Done! {} of {} products indexed ({} skipped)",
        summary.indexed, summary.fetched, summary.skipped
    );

    Ok(())
}
