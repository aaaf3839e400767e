//! One-shot ingestion pipeline: load every product, embed each one, then
//! upsert the vectors into the index in fixed-size batches.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::EmbeddingError;
use crate::models::{UPSERT_BATCH_SIZE, VectorRecord};
use crate::services::{Embedder, VectorIndex, build_product_text, ensure_index};
use crate::store::ProductStore;

/// Final counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub indexed: usize,
}

/// Per-record embedding outcome. A skip is the only non-fatal failure in
/// the pipeline; it carries the record id and error for logging.
enum RecordOutcome {
    Embedded(VectorRecord),
    Skipped { id: String, error: EmbeddingError },
}

/// Run the full pipeline once. Store, embedder, and index are injected so
/// the orchestration is testable against in-memory fakes.
///
/// Strictly sequential: one embedding call per record, one upsert per
/// batch, in order. Embedding failures skip the record; everything else is
/// fatal and propagates.
pub async fn run(
    store: &dyn ProductStore,
    embedder: &dyn Embedder,
    index: &dyn VectorIndex,
    index_name: &str,
    settle: Duration,
) -> Result<IndexSummary> {
    let products = store
        .fetch_all()
        .await
        .context("failed to fetch products")?;
    println!("Found {} products", products.len());

    if ensure_index(index, index_name, settle)
        .await
        .context("failed to provision vector index")?
    {
        println!("Created index '{}'", index_name);
    } else {
        println!("Index '{}' already exists", index_name);
    }

    let pb = ProgressBar::new(products.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut outcomes = Vec::with_capacity(products.len());
    for product in &products {
        pb.inc(1);
        let text = build_product_text(product);
        let preview: String = text.chars().take(120).collect();
        pb.println(format!("{}: embedding \"{}\"", product.label(), preview));

        let outcome = match embedder.embed_passage(&text).await {
            Ok(values) => RecordOutcome::Embedded(VectorRecord::from_product(product, values)),
            Err(error) => RecordOutcome::Skipped {
                id: product.id_string(),
                error,
            },
        };
        outcomes.push(outcome);
    }
    pb.finish_and_clear();

    let mut records = Vec::new();
    let mut skipped = 0;
    for outcome in outcomes {
        match outcome {
            RecordOutcome::Embedded(record) => records.push(record),
            RecordOutcome::Skipped { id, error } => {
                eprintln!("Failed to embed product {}: {}", id, error);
                skipped += 1;
            }
        }
    }

    for (i, batch) in records.chunks(UPSERT_BATCH_SIZE).enumerate() {
        index
            .upsert(index_name, batch)
            .await
            .with_context(|| format!("failed to upsert batch {}", i + 1))?;
        println!("Upserted batch {} ({} vectors)", i + 1, batch.len());
    }

    Ok(IndexSummary {
        fetched: products.len(),
        skipped,
        indexed: records.len(),
    })
}
