//! Recipe records, their identity, and the plain-text export format.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How demanding a recipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        for difficulty in Difficulty::ALL {
            if difficulty.as_str().eq_ignore_ascii_case(s) {
                return Ok(difficulty);
            }
        }
        bail!("unknown difficulty: {s}")
    }
}

/// A generated or saved recipe suggestion.
///
/// Field names on the wire match the stored format (`cookingTime`,
/// `savedAt`), so lists written by earlier versions load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Position within one generation batch, starting at 1. Not durable.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Newline-delimited numbered steps.
    pub instructions: String,
    /// Free text, e.g. `"30 minutes"`.
    pub cooking_time: String,
    pub difficulty: Difficulty,
    /// Set only on saved copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Recipe {
    pub fn key(&self) -> RecipeKey {
        RecipeKey {
            id: self.id,
            title: self.title.clone(),
        }
    }

    /// Render the recipe as the plain-text block used for clipboard export.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&self.description);
        out.push_str("\n\nIngredients:\n");
        out.push_str(&self.ingredients.join("\n"));
        out.push_str("\n\nInstructions:\n");
        out.push_str(&self.instructions);
        out.push_str("\n\nCooking Time: ");
        out.push_str(&self.cooking_time);
        out.push_str("\nDifficulty: ");
        out.push_str(self.difficulty.as_str());
        out.push('\n');
        out
    }
}

/// Identity of a recipe in the saved collection: the (id, title) pair.
///
/// `id` restarts at 1 for every generation batch, so the title does most of
/// the disambiguation in practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeKey {
    pub id: u32,
    pub title: String,
}

impl RecipeKey {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.id == recipe.id && self.title == recipe.title
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)
    }
}
