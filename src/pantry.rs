//! The list of ingredients the user has on hand.

/// Duplicate-free, case-sensitive ingredient list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add comma-separated ingredients. Entries are trimmed, blanks are
    /// dropped and names already present are skipped. Returns how many
    /// were actually added.
    pub fn add(&mut self, input: &str) -> usize {
        let before = self.items.len();
        for name in split_ingredients(input) {
            if !self.items.contains(&name) {
                self.items.push(name);
            }
        }
        self.items.len() - before
    }

    /// Remove an exact entry. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Split user input on commas into trimmed, non-empty names.
pub fn split_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
