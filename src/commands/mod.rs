//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and dynamic help generation. Input that is not a command is treated as
//! ingredients by the REPL.

mod browse;
mod favorites;
mod find;
mod pantry;
mod quit;

use async_trait::async_trait;
use std::sync::Arc;

use crate::recipe::Recipe;
use crate::session::Session;

/// What the REPL should do after a command runs.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command; treat the input as ingredients.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/find"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument hint for `/help`, e.g. `"<n>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is everything after the command word.
    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult;
}

struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _session: &mut Session) -> CommandResult {
        // Printed by the registry, which knows every command.
        CommandResult::Handled
    }
}

/// Holds registered commands. Supports runtime registration.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(HelpCommand),
            Arc::new(pantry::AddCommand),
            Arc::new(pantry::RemoveCommand),
            Arc::new(pantry::ClearCommand),
            Arc::new(pantry::PantryCommand),
            Arc::new(find::FindCommand),
            Arc::new(browse::ListCommand),
            Arc::new(browse::TabCommand),
            Arc::new(browse::FilterCommand),
            Arc::new(browse::SortCommand),
            Arc::new(browse::ShowCommand),
            Arc::new(browse::CloseCommand),
            Arc::new(favorites::SaveCommand),
            Arc::new(favorites::UnsaveCommand),
            Arc::new(favorites::CopyCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, session: &mut Session) -> CommandResult {
        let input = input.trim();
        let (cmd, args) = match input.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (input, ""),
        };

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help is special: it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, session).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| {
                (
                    format_label(c.name(), c.usage(), c.aliases()),
                    c.description(),
                )
            })
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out.push_str("\n  anything else is added to the pantry (comma separated)\n");
        out
    }

    /// All registered command names (for testing).
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

/// Resolve a recipe argument: a 1-based number into the visible list, or
/// the open recipe when no number is given.
fn target(args: &str, session: &Session) -> Result<Recipe, String> {
    if args.is_empty() {
        return session
            .state()
            .selected
            .clone()
            .ok_or_else(|| "no recipe open; pass a number from the list".to_string());
    }
    let n: usize = args
        .parse()
        .map_err(|_| format!("not a recipe number: {args}"))?;
    session
        .recipe_at(n)
        .ok_or_else(|| format!("no recipe #{n} in the current list"))
}
