use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Generator;
use crate::recipe::Recipe;

/// A scripted generator for tests. Returns pre-defined batches in order.
pub struct MockGenerator {
    batches: Vec<Vec<Recipe>>,
    failure: Option<String>,
    index: AtomicUsize,
}

impl MockGenerator {
    pub fn new(batches: Vec<Vec<Recipe>>) -> Self {
        Self {
            batches,
            failure: None,
            index: AtomicUsize::new(0),
        }
    }

    /// A generator whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            batches: Vec::new(),
            failure: Some(message.to_string()),
            index: AtomicUsize::new(0),
        }
    }

    /// How many times `generate` has been called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _ingredients: &[String]) -> Result<Vec<Recipe>> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            bail!("{message}");
        }
        let batch = self.batches.get(i).ok_or_else(|| {
            anyhow::anyhow!("MockGenerator: no more batches (called {} times)", i + 1)
        })?;
        Ok(batch.clone())
    }
}
