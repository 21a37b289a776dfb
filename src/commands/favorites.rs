use async_trait::async_trait;

use super::{Command, CommandResult, target};
use crate::session::Session;

pub struct SaveCommand;

#[async_trait]
impl Command for SaveCommand {
    fn name(&self) -> &str {
        "/save"
    }

    fn usage(&self) -> &str {
        "[n]"
    }

    fn description(&self) -> &str {
        "save a recipe to favorites"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let recipe = match target(args, session) {
            Ok(recipe) => recipe,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        match session.save(&recipe).await {
            Ok(true) => println!("  ✓ saved {}", recipe.title),
            Ok(false) => println!("  {} is already saved", recipe.title),
            Err(e) => eprintln!("  ✗ {e:#}"),
        }
        CommandResult::Handled
    }
}

pub struct UnsaveCommand;

#[async_trait]
impl Command for UnsaveCommand {
    fn name(&self) -> &str {
        "/unsave"
    }

    fn aliases(&self) -> &[&str] {
        &["/forget"]
    }

    fn usage(&self) -> &str {
        "[n]"
    }

    fn description(&self) -> &str {
        "remove a recipe from favorites"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let recipe = match target(args, session) {
            Ok(recipe) => recipe,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        match session.unsave(&recipe.key()).await {
            Ok(true) => println!("  ✓ removed {} from saved", recipe.title),
            Ok(false) => println!("  {} is not saved", recipe.title),
            Err(e) => eprintln!("  ✗ {e:#}"),
        }
        CommandResult::Handled
    }
}

pub struct CopyCommand;

#[async_trait]
impl Command for CopyCommand {
    fn name(&self) -> &str {
        "/copy"
    }

    fn aliases(&self) -> &[&str] {
        &["/cp"]
    }

    fn usage(&self) -> &str {
        "[n]"
    }

    fn description(&self) -> &str {
        "copy a recipe to the clipboard as text"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let recipe = match target(args, session) {
            Ok(recipe) => recipe,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        // Failures only reach the log.
        if session.copy(&recipe).await {
            println!("  ✓ recipe copied to clipboard!");
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_session;
    use crate::state::Tab;

    #[tokio::test]
    async fn save_twice_then_unsave() {
        let mut session = test_session().await;
        session.add_ingredients("chicken");
        session.search().await;

        SaveCommand.execute("1", &mut session).await;
        SaveCommand.execute("1", &mut session).await;
        assert_eq!(session.state().saved.len(), 1);

        session.switch_tab(Tab::Saved);
        UnsaveCommand.execute("1", &mut session).await;
        assert!(session.state().saved.is_empty());
    }

    #[tokio::test]
    async fn save_uses_open_recipe_without_number() {
        let mut session = test_session().await;
        session.add_ingredients("chicken");
        session.search().await;
        let curry = session.recipe_at(2).unwrap();
        session.open_details(curry.clone());

        SaveCommand.execute("", &mut session).await;
        assert!(session.state().is_saved(&curry));
    }

    #[tokio::test]
    async fn copy_without_target_is_handled() {
        let mut session = test_session().await;
        assert_eq!(
            CopyCommand.execute("", &mut session).await,
            CommandResult::Handled
        );
    }
}
