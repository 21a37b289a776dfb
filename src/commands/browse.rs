use async_trait::async_trait;

use super::{Command, CommandResult, target};
use crate::query::{DifficultyFilter, SortOption};
use crate::render;
use crate::session::Session;
use crate::state::Tab;

pub struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "/list"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "list recipes on the current tab"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        let state = session.state();
        print!("{}", render::header(state));
        print!("{}", render::cards(state));
        CommandResult::Handled
    }
}

pub struct TabCommand;

#[async_trait]
impl Command for TabCommand {
    fn name(&self) -> &str {
        "/tab"
    }

    fn usage(&self) -> &str {
        "[search|saved]"
    }

    fn description(&self) -> &str {
        "switch between suggestions and saved recipes"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let tab = match args.to_ascii_lowercase().as_str() {
            "" => match session.state().tab {
                Tab::Search => Tab::Saved,
                Tab::Saved => Tab::Search,
            },
            "search" | "find" => Tab::Search,
            "saved" | "favorites" => Tab::Saved,
            other => {
                eprintln!("  ✗ unknown tab: {other} (expected search or saved)");
                return CommandResult::Handled;
            }
        };
        session.switch_tab(tab);
        let state = session.state();
        print!("{}", render::header(state));
        print!("{}", render::cards(state));
        CommandResult::Handled
    }
}

pub struct FilterCommand;

#[async_trait]
impl Command for FilterCommand {
    fn name(&self) -> &str {
        "/filter"
    }

    fn usage(&self) -> &str {
        "<all|easy|medium|hard>"
    }

    fn description(&self) -> &str {
        "show only one difficulty"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let filter: DifficultyFilter = match args.parse() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        if let Err(e) = session.set_filter(filter) {
            tracing::warn!(error = %e, "failed to remember filter");
        }
        print!("{}", render::cards(session.state()));
        CommandResult::Handled
    }
}

pub struct SortCommand;

#[async_trait]
impl Command for SortCommand {
    fn name(&self) -> &str {
        "/sort"
    }

    fn usage(&self) -> &str {
        "<default|time-asc|time-desc|alphabetical>"
    }

    fn description(&self) -> &str {
        "change the display order"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let sort: SortOption = match args.parse() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        if let Err(e) = session.set_sort(sort) {
            tracing::warn!(error = %e, "failed to remember sort option");
        }
        print!("{}", render::cards(session.state()));
        CommandResult::Handled
    }
}

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn aliases(&self) -> &[&str] {
        &["/open"]
    }

    fn usage(&self) -> &str {
        "<n>"
    }

    fn description(&self) -> &str {
        "open a recipe in detail"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let recipe = match target(args, session) {
            Ok(recipe) => recipe,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        let saved = session.state().is_saved(&recipe);
        print!("{}", render::details(&recipe, saved));
        session.open_details(recipe);
        CommandResult::Handled
    }
}

pub struct CloseCommand;

#[async_trait]
impl Command for CloseCommand {
    fn name(&self) -> &str {
        "/close"
    }

    fn description(&self) -> &str {
        "close the open recipe"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        session.close_details();
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;

    #[tokio::test]
    async fn tab_toggles_and_accepts_names() {
        let mut session = test_session().await;
        TabCommand.execute("", &mut session).await;
        assert_eq!(session.state().tab, Tab::Saved);
        TabCommand.execute("", &mut session).await;
        assert_eq!(session.state().tab, Tab::Search);
        TabCommand.execute("Saved", &mut session).await;
        assert_eq!(session.state().tab, Tab::Saved);
        TabCommand.execute("elsewhere", &mut session).await;
        assert_eq!(session.state().tab, Tab::Saved);
    }

    #[tokio::test]
    async fn filter_and_sort_update_state() {
        let mut session = test_session().await;
        FilterCommand.execute("hard", &mut session).await;
        SortCommand.execute("time-desc", &mut session).await;
        assert_eq!(session.state().filter, DifficultyFilter::Hard);
        assert_eq!(session.state().sort, SortOption::TimeDesc);

        FilterCommand.execute("spicy", &mut session).await;
        assert_eq!(session.state().filter, DifficultyFilter::Hard);
    }

    #[tokio::test]
    async fn show_and_close_details() {
        let mut session = test_session().await;
        session.add_ingredients("chicken");
        session.search().await;

        ShowCommand.execute("2", &mut session).await;
        assert_eq!(
            session.state().selected.as_ref().map(|r| r.title.as_str()),
            Some("Rice Curry")
        );

        CloseCommand.execute("", &mut session).await;
        assert!(session.state().selected.is_none());
    }

    #[tokio::test]
    async fn show_out_of_range_opens_nothing() {
        let mut session = test_session().await;
        ShowCommand.execute("1", &mut session).await;
        assert!(session.state().selected.is_none());
    }
}
