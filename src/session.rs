//! One interactive session: state plus the side effects around it.
//!
//! [`AppState`] stays pure. This type owns everything that touches the
//! outside world (the saved-recipe store, settings, background searches
//! and the clipboard) and feeds the results back through the reducer.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::engine::{SearchEngine, SearchOutcome, SearchTicket};
use crate::query::{DifficultyFilter, SortOption};
use crate::recipe::{Recipe, RecipeKey};
use crate::saved::SavedRecipes;
use crate::state::{Action, AppState, Tab};
use crate::store::RecipeStore;

pub struct Session {
    state: AppState,
    store: Arc<dyn RecipeStore>,
    config: Config,
    engine: SearchEngine,
    clipboard: Arc<dyn Clipboard>,
}

impl Session {
    /// Load saved recipes and remembered display options.
    pub async fn open(
        store: Arc<dyn RecipeStore>,
        config: Config,
        engine: SearchEngine,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self> {
        let saved = SavedRecipes::from_list(
            store.load().await.context("failed to load saved recipes")?,
        );
        let prefs = config.preferences()?;
        tracing::info!(saved = saved.len(), "session opened");

        Ok(Self {
            state: AppState::new(saved, prefs.filter, prefs.sort),
            store,
            config,
            engine,
            clipboard,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn generator_name(&self) -> &str {
        self.engine.generator_name()
    }

    /// Run an action through the reducer.
    pub fn apply(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Returns how many new ingredients were added.
    pub fn add_ingredients(&mut self, input: &str) -> usize {
        let before = self.state.pantry.len();
        self.apply(Action::AddIngredients(input.to_string()));
        self.state.pantry.len() - before
    }

    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        let before = self.state.pantry.len();
        self.apply(Action::RemoveIngredient(name.to_string()));
        self.state.pantry.len() != before
    }

    pub fn clear_ingredients(&mut self) {
        self.apply(Action::ClearIngredients);
    }

    /// Kick off a background search. With an empty pantry, records the
    /// validation error instead and returns `None`.
    pub fn start_search(&mut self) -> Option<SearchTicket> {
        if self.state.pantry.is_empty() {
            self.apply(Action::SearchRejected);
            return None;
        }
        let ticket = self.engine.start(self.state.pantry.items().to_vec());
        self.apply(Action::SearchStarted {
            request_id: ticket.request_id,
        });
        Some(ticket)
    }

    pub fn finish_search(&mut self, request_id: u64, outcome: SearchOutcome) {
        self.apply(Action::SearchFinished {
            request_id,
            outcome,
        });
    }

    /// Cancel the pending search, if any.
    pub fn cancel_search(&mut self) {
        self.engine.cancel();
        if let Some(request_id) = self.state.pending {
            self.finish_search(request_id, SearchOutcome::Superseded);
        }
    }

    /// Start a search and wait for it.
    pub async fn search(&mut self) {
        if let Some(ticket) = self.start_search() {
            let request_id = ticket.request_id;
            let outcome = ticket.outcome().await;
            self.finish_search(request_id, outcome);
        }
    }

    /// The `n`th (1-based) recipe currently on screen.
    pub fn recipe_at(&self, n: usize) -> Option<Recipe> {
        n.checked_sub(1)
            .and_then(|i| self.state.visible().into_iter().nth(i))
    }

    /// Save a recipe to favorites and persist the list. Returns `false` if
    /// it was already saved. Nothing changes when persisting fails.
    pub async fn save(&mut self, recipe: &Recipe) -> Result<bool> {
        if self.state.is_saved(recipe) {
            return Ok(false);
        }
        self.commit_saved(Action::Save {
            recipe: recipe.clone(),
            at: Utc::now(),
        })
        .await?;
        tracing::info!(recipe = %recipe.key(), "recipe saved");
        Ok(true)
    }

    /// Remove a recipe from favorites and persist the list. Returns `false`
    /// if it was not saved. Nothing changes when persisting fails.
    pub async fn unsave(&mut self, key: &RecipeKey) -> Result<bool> {
        if !self.state.saved.is_saved(key) {
            return Ok(false);
        }
        self.commit_saved(Action::Unsave(key.clone())).await?;
        tracing::info!(recipe = %key, "recipe removed from saved");
        Ok(true)
    }

    /// Reduce into a copy, write its saved list, and only then adopt it.
    async fn commit_saved(&mut self, action: Action) -> Result<()> {
        let next = self.state.clone().reduce(action);
        self.store
            .persist(next.saved.as_slice())
            .await
            .context("failed to persist saved recipes")?;
        self.state = next;
        Ok(())
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.apply(Action::SwitchTab(tab));
    }

    /// Change the difficulty filter and remember it.
    pub fn set_filter(&mut self, filter: DifficultyFilter) -> Result<()> {
        self.apply(Action::SetFilter(filter));
        self.config.set_filter(filter)
    }

    /// Change the sort order and remember it.
    pub fn set_sort(&mut self, sort: SortOption) -> Result<()> {
        self.apply(Action::SetSort(sort));
        self.config.set_sort(sort)
    }

    pub fn open_details(&mut self, recipe: Recipe) {
        self.apply(Action::OpenDetails(recipe));
    }

    pub fn close_details(&mut self) {
        self.apply(Action::CloseDetails);
    }

    /// Copy a recipe's text to the clipboard. Failures are logged, not
    /// returned; the result only says whether the copy happened.
    pub async fn copy(&self, recipe: &Recipe) -> bool {
        match self.clipboard.copy(&recipe.export_text()).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(recipe = %recipe.key(), error = %e, "failed to copy recipe");
                false
            }
        }
    }
}
