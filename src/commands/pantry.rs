use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::consts::plural;
use crate::render;
use crate::session::Session;

pub struct AddCommand;

#[async_trait]
impl Command for AddCommand {
    fn name(&self) -> &str {
        "/add"
    }

    fn aliases(&self) -> &[&str] {
        &["/a"]
    }

    fn usage(&self) -> &str {
        "<a, b, ...>"
    }

    fn description(&self) -> &str {
        "add comma-separated ingredients to the pantry"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let added = session.add_ingredients(args);
        if added == 0 {
            println!("  nothing new to add");
        } else {
            println!("  ✓ added {}", plural(added, "ingredient"));
        }
        print!("{}", render::pantry(session.state()));
        CommandResult::Handled
    }
}

pub struct RemoveCommand;

#[async_trait]
impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "/remove"
    }

    fn aliases(&self) -> &[&str] {
        &["/rm"]
    }

    fn usage(&self) -> &str {
        "<ingredient>"
    }

    fn description(&self) -> &str {
        "remove an ingredient from the pantry"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if args.is_empty() {
            eprintln!("  ✗ usage: /remove <ingredient>");
            return CommandResult::Handled;
        }
        if session.remove_ingredient(args) {
            println!("  ✓ removed {args}");
        } else {
            println!("  {args} is not in the pantry");
        }
        print!("{}", render::pantry(session.state()));
        CommandResult::Handled
    }
}

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "empty the pantry"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        session.clear_ingredients();
        println!("  ✓ pantry cleared");
        CommandResult::Handled
    }
}

pub struct PantryCommand;

#[async_trait]
impl Command for PantryCommand {
    fn name(&self) -> &str {
        "/pantry"
    }

    fn aliases(&self) -> &[&str] {
        &["/p"]
    }

    fn description(&self) -> &str {
        "show the ingredients in the pantry"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        print!("{}", render::pantry(session.state()));
        CommandResult::Handled
    }
}
