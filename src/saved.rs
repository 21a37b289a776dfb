//! The user's favorites.

use chrono::{DateTime, Utc};

use crate::recipe::{Recipe, RecipeKey};

/// Saved recipes, a set keyed by (id, title) kept in the order saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedRecipes {
    recipes: Vec<Recipe>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted list. Later duplicates of a key are dropped.
    pub fn from_list(list: Vec<Recipe>) -> Self {
        let mut saved = Self::new();
        for recipe in list {
            if !saved.is_saved(&recipe.key()) {
                saved.recipes.push(recipe);
            }
        }
        saved
    }

    /// Store a copy of `recipe` stamped with `at`. No-op when the key is
    /// already present. Returns whether the collection changed.
    pub fn save(&mut self, recipe: &Recipe, at: DateTime<Utc>) -> bool {
        if self.is_saved(&recipe.key()) {
            return false;
        }
        let mut copy = recipe.clone();
        copy.saved_at = Some(at);
        self.recipes.push(copy);
        true
    }

    /// Drop the recipe with this key. Returns whether the collection changed.
    pub fn remove(&mut self, key: &RecipeKey) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| !key.matches(r));
        self.recipes.len() != before
    }

    pub fn is_saved(&self, key: &RecipeKey) -> bool {
        self.recipes.iter().any(|r| key.matches(r))
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
