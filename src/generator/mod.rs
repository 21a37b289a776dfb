pub mod mock;
pub mod template;

use anyhow::Result;
use async_trait::async_trait;

use crate::recipe::Recipe;

/// Where suggestions come from. Could be the built-in templates, a remote
/// recipe service, or a test script.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Short label shown in the banner.
    fn name(&self) -> &str;

    /// Turn pantry ingredients into a batch of recipes. Ids start at 1
    /// within the returned batch.
    async fn generate(&self, ingredients: &[String]) -> Result<Vec<Recipe>>;
}
