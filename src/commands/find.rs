use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::engine::SearchOutcome;
use crate::render;
use crate::session::Session;
use crate::spinner::Spinner;
use crate::state::Tab;

pub struct FindCommand;

#[async_trait]
impl Command for FindCommand {
    fn name(&self) -> &str {
        "/find"
    }

    fn aliases(&self) -> &[&str] {
        &["/f", "/search"]
    }

    fn description(&self) -> &str {
        "suggest recipes from the pantry"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        let Some(ticket) = session.start_search() else {
            if let Some(error) = &session.state().error {
                eprintln!("  ✗ {error}");
            }
            return CommandResult::Handled;
        };
        let request_id = ticket.request_id;

        // Ctrl+C abandons the search, not the REPL
        let spinner = Spinner::start("cooking up ideas");
        let outcome = tokio::select! {
            outcome = ticket.outcome() => outcome,
            _ = tokio::signal::ctrl_c() => SearchOutcome::Superseded,
        };
        spinner.stop().await;

        if outcome == SearchOutcome::Superseded {
            session.cancel_search();
            println!("  search cancelled");
            return CommandResult::Handled;
        }

        session.finish_search(request_id, outcome);
        session.switch_tab(Tab::Search);

        let state = session.state();
        match &state.error {
            Some(error) => eprintln!("  ✗ {error}"),
            None => print!("{}", render::cards(state)),
        }
        CommandResult::Handled
    }
}
