pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::recipe::Recipe;

/// Storage key holding the saved-recipe list.
pub const SAVED_RECIPES_KEY: &str = "pantryPalSavedRecipes";

/// Where saved recipes live between runs. The whole list is read once and
/// rewritten on every change.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// The persisted list, or empty if nothing was ever saved.
    async fn load(&self) -> Result<Vec<Recipe>>;
    /// Replace the persisted list.
    async fn persist(&self, recipes: &[Recipe]) -> Result<()>;
}
