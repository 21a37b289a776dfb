use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::session::Session;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit", "/q"]
    }

    fn description(&self) -> &str {
        "exit the REPL"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        session.cancel_search();
        CommandResult::Quit
    }
}
