//! Filtering and sorting of recipe lists for display.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use clap::ValueEnum;
use icu_collator::{Collator, CollatorOptions};

use crate::recipe::{Difficulty, Recipe};

/// Which difficulties to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Easy => "easy",
            DifficultyFilter::Medium => "medium",
            DifficultyFilter::Hard => "hard",
        }
    }

    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            other => difficulty.as_str().eq_ignore_ascii_case(other.as_str()),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DifficultyFilter::All),
            "easy" => Ok(DifficultyFilter::Easy),
            "medium" => Ok(DifficultyFilter::Medium),
            "hard" => Ok(DifficultyFilter::Hard),
            other => {
                bail!("unknown difficulty filter: {other} (expected all, easy, medium or hard)")
            }
        }
    }
}

/// Display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOption {
    /// Newest first on the saved tab, generation order otherwise.
    #[default]
    Default,
    /// Shortest cooking time first.
    TimeAsc,
    /// Longest cooking time first.
    TimeDesc,
    /// By title.
    Alphabetical,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::TimeAsc => "time-asc",
            SortOption::TimeDesc => "time-desc",
            SortOption::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(SortOption::Default),
            "time-asc" => Ok(SortOption::TimeAsc),
            "time-desc" => Ok(SortOption::TimeDesc),
            "alphabetical" => Ok(SortOption::Alphabetical),
            other => bail!(
                "unknown sort option: {other} \
                 (expected default, time-asc, time-desc or alphabetical)"
            ),
        }
    }
}

/// Which list is being displayed. Only affects [`SortOption::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeView {
    Search,
    Saved,
}

/// Filter by difficulty, then sort a copy of the survivors. Stable; never
/// touches the input.
pub fn filter_and_sort(
    recipes: &[Recipe],
    filter: DifficultyFilter,
    sort: SortOption,
    view: RecipeView,
) -> Vec<Recipe> {
    let mut out: Vec<Recipe> = recipes
        .iter()
        .filter(|r| filter.accepts(r.difficulty))
        .cloned()
        .collect();

    match sort {
        SortOption::TimeAsc => out.sort_by_key(|r| leading_minutes(&r.cooking_time)),
        SortOption::TimeDesc => out.sort_by(|a, b| {
            leading_minutes(&b.cooking_time).cmp(&leading_minutes(&a.cooking_time))
        }),
        SortOption::Alphabetical => {
            let collator = TitleCollator::new();
            out.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
        SortOption::Default => {
            if view == RecipeView::Saved {
                // Newest first; entries without a timestamp sink to the bottom.
                out.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
            }
        }
    }
    out
}

/// Leading integer of a free-text duration, `parseInt` style: optional
/// whitespace and sign, then digits. Anything unparseable is 0; a digit run
/// too long for `i64` saturates.
pub fn leading_minutes(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return 0;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -value } else { value }
}

/// Orders titles the way people read them: accents sort with their base
/// letter, case only breaks ties, lowercase first.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    "collation data unavailable; sorting titles by code point"
                );
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a)),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison with a fresh [`TitleCollator`].
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}
