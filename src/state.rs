//! Application state and the reducer that evolves it.
//!
//! Every user interaction becomes an [`Action`]; [`AppState::reduce`]
//! returns the next state without touching I/O. Persistence, timers and
//! the clipboard live in [`Session`](crate::session::Session).

use chrono::{DateTime, Utc};

use crate::consts::EMPTY_PANTRY_MESSAGE;
use crate::engine::SearchOutcome;
use crate::pantry::Pantry;
use crate::query::{DifficultyFilter, RecipeView, SortOption, filter_and_sort};
use crate::recipe::{Recipe, RecipeKey};
use crate::saved::SavedRecipes;

/// Which list is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Saved,
}

impl Tab {
    pub fn view(&self) -> RecipeView {
        match self {
            Tab::Search => RecipeView::Search,
            Tab::Saved => RecipeView::Saved,
        }
    }
}

/// Everything the front-end renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub pantry: Pantry,
    pub recipes: Vec<Recipe>,
    pub saved: SavedRecipes,
    pub loading: bool,
    pub error: Option<String>,
    /// Recipe open in the detail view.
    pub selected: Option<Recipe>,
    pub tab: Tab,
    pub filter: DifficultyFilter,
    pub sort: SortOption,
    /// Request whose results are still wanted.
    pub pending: Option<u64>,
}

/// A state transition.
#[derive(Debug, Clone)]
pub enum Action {
    AddIngredients(String),
    RemoveIngredient(String),
    ClearIngredients,
    SwitchTab(Tab),
    SetFilter(DifficultyFilter),
    SetSort(SortOption),
    /// A search was attempted with an empty pantry.
    SearchRejected,
    SearchStarted { request_id: u64 },
    SearchFinished { request_id: u64, outcome: SearchOutcome },
    Save { recipe: Recipe, at: DateTime<Utc> },
    Unsave(RecipeKey),
    OpenDetails(Recipe),
    CloseDetails,
}

impl AppState {
    pub fn new(saved: SavedRecipes, filter: DifficultyFilter, sort: SortOption) -> Self {
        Self {
            saved,
            filter,
            sort,
            ..Self::default()
        }
    }

    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::AddIngredients(input) => {
                self.pantry.add(&input);
            }
            Action::RemoveIngredient(name) => {
                self.pantry.remove(&name);
            }
            Action::ClearIngredients => self.pantry.clear(),
            Action::SwitchTab(tab) => self.tab = tab,
            Action::SetFilter(filter) => self.filter = filter,
            Action::SetSort(sort) => self.sort = sort,
            Action::SearchRejected => {
                self.error = Some(EMPTY_PANTRY_MESSAGE.to_string());
            }
            Action::SearchStarted { request_id } => {
                self.loading = true;
                self.error = None;
                self.recipes.clear();
                self.pending = Some(request_id);
            }
            Action::SearchFinished {
                request_id,
                outcome,
            } => {
                if self.pending != Some(request_id) {
                    tracing::debug!(request_id, "dropping stale search result");
                    return self;
                }
                match outcome {
                    SearchOutcome::Ready(recipes) => {
                        self.recipes = recipes;
                    }
                    SearchOutcome::Failed(message) => {
                        self.error = Some(format!("Failed to generate recipes: {message}"));
                    }
                    // Cancelled while still current: stop loading, show nothing.
                    SearchOutcome::Superseded => {}
                }
                self.loading = false;
                self.pending = None;
            }
            Action::Save { recipe, at } => {
                self.saved.save(&recipe, at);
            }
            Action::Unsave(key) => {
                self.saved.remove(&key);
            }
            Action::OpenDetails(recipe) => self.selected = Some(recipe),
            Action::CloseDetails => self.selected = None,
        }
        self
    }

    /// The list for the active tab, filtered and sorted for display.
    pub fn visible(&self) -> Vec<Recipe> {
        let source = match self.tab {
            Tab::Search => self.recipes.as_slice(),
            Tab::Saved => self.saved.as_slice(),
        };
        filter_and_sort(source, self.filter, self.sort, self.tab.view())
    }

    pub fn is_saved(&self, recipe: &Recipe) -> bool {
        self.saved.is_saved(&recipe.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Difficulty;
    use crate::recipe::tests::sample;
    use chrono::TimeZone;

    fn batch() -> Vec<Recipe> {
        vec![
            sample(1, "Chicken Soup", "30 minutes", Difficulty::Easy),
            sample(2, "Rice Curry", "40 minutes", Difficulty::Medium),
        ]
    }

    fn started(request_id: u64) -> AppState {
        AppState::default()
            .reduce(Action::AddIngredients("chicken, rice".to_string()))
            .reduce(Action::SearchStarted { request_id })
    }

    #[test]
    fn ingredients_flow_through_pantry() {
        let state = AppState::default()
            .reduce(Action::AddIngredients("chicken, rice".to_string()))
            .reduce(Action::AddIngredients("rice, beans".to_string()))
            .reduce(Action::RemoveIngredient("chicken".to_string()));
        assert_eq!(state.pantry.items(), &["rice", "beans"]);

        let state = state.reduce(Action::ClearIngredients);
        assert!(state.pantry.is_empty());
    }

    #[test]
    fn empty_search_sets_validation_message() {
        let state = AppState::default().reduce(Action::SearchRejected);
        assert_eq!(
            state.error.as_deref(),
            Some("Please add at least one ingredient")
        );
        assert!(!state.loading);
    }

    #[test]
    fn search_start_clears_previous_results_and_error() {
        let mut state = AppState::default().reduce(Action::SearchRejected);
        state.recipes = batch();

        let state = state.reduce(Action::SearchStarted { request_id: 1 });
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.recipes.is_empty());
        assert_eq!(state.pending, Some(1));
    }

    #[test]
    fn finished_search_publishes_recipes() {
        let state = started(1).reduce(Action::SearchFinished {
            request_id: 1,
            outcome: SearchOutcome::Ready(batch()),
        });
        assert!(!state.loading);
        assert_eq!(state.recipes.len(), 2);
        assert!(state.pending.is_none());
    }

    #[test]
    fn stale_result_is_ignored() {
        let state = started(1)
            .reduce(Action::SearchStarted { request_id: 2 })
            .reduce(Action::SearchFinished {
                request_id: 1,
                outcome: SearchOutcome::Ready(batch()),
            });
        assert!(state.loading);
        assert!(state.recipes.is_empty());
        assert_eq!(state.pending, Some(2));
    }

    #[test]
    fn cancelled_current_search_stops_loading() {
        let state = started(4).reduce(Action::SearchFinished {
            request_id: 4,
            outcome: SearchOutcome::Superseded,
        });
        assert!(!state.loading);
        assert!(state.pending.is_none());
        assert!(state.error.is_none());
        assert!(state.recipes.is_empty());
    }

    #[test]
    fn failed_search_formats_message() {
        let state = started(3).reduce(Action::SearchFinished {
            request_id: 3,
            outcome: SearchOutcome::Failed("boom".to_string()),
        });
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to generate recipes: boom")
        );
        assert!(!state.loading);
    }

    #[test]
    fn save_and_unsave() {
        let recipe = batch().remove(0);
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        let state = AppState::default().reduce(Action::Save {
            recipe: recipe.clone(),
            at,
        });
        assert!(state.is_saved(&recipe));

        let state = state.reduce(Action::Save {
            recipe: recipe.clone(),
            at,
        });
        assert_eq!(state.saved.len(), 1);

        let state = state.reduce(Action::Unsave(recipe.key()));
        assert!(!state.is_saved(&recipe));
    }

    #[test]
    fn visible_follows_tab_filter_and_sort() {
        let mut state = AppState::default();
        state.recipes = batch();
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let state = state.reduce(Action::Save {
            recipe: sample(9, "Beef Stir-Fry", "20 minutes", Difficulty::Medium),
            at,
        });

        let titles: Vec<String> = state.visible().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Chicken Soup", "Rice Curry"]);

        let state = state
            .reduce(Action::SetFilter(DifficultyFilter::Medium))
            .reduce(Action::SetSort(SortOption::TimeAsc));
        let titles: Vec<String> = state.visible().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Rice Curry"]);

        let state = state.reduce(Action::SwitchTab(Tab::Saved));
        let titles: Vec<String> = state.visible().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Beef Stir-Fry"]);
    }

    #[test]
    fn details_open_and_close() {
        let recipe = batch().remove(1);
        let state = AppState::default().reduce(Action::OpenDetails(recipe.clone()));
        assert_eq!(state.selected.as_ref(), Some(&recipe));
        assert!(state.reduce(Action::CloseDetails).selected.is_none());
    }
}
