use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use pantrypal::banner::{BannerInfo, print_banner, print_session_summary};
use pantrypal::clipboard::SystemClipboard;
use pantrypal::commands::{CommandRegistry, CommandResult};
use pantrypal::config::Config;
use pantrypal::consts::{self, plural};
use pantrypal::engine::{SearchConfig, SearchEngine};
use pantrypal::generator::template::TemplateGenerator;
use pantrypal::logging;
use pantrypal::query::{DifficultyFilter, SortOption};
use pantrypal::render;
use pantrypal::session::Session;
use pantrypal::state::{Action, Tab};
use pantrypal::store::sqlite::SqliteStore;

#[derive(Parser)]
#[command(
    name = "pantrypal",
    version,
    about = "Turn what's in your pantry into recipe suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database for saved recipes and settings (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Pause before suggestions appear, in milliseconds
    #[arg(long, default_value_t = consts::DEFAULT_SEARCH_DELAY_MS)]
    delay_ms: u64,

    /// Seed for reproducible suggestions
    #[arg(long)]
    seed: Option<u64>,

    /// Difficulty filter for this run (not remembered)
    #[arg(short, long, value_enum)]
    filter: Option<DifficultyFilter>,

    /// Sort order for this run (not remembered)
    #[arg(short, long, value_enum)]
    sort: Option<SortOption>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one batch of suggestions and exit
    Suggest {
        /// Ingredients, separated by spaces or commas
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// List saved recipes
    Saved,
    /// Print the Nth saved recipe as plain text
    Export {
        /// Position in the saved list, starting at 1
        n: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&consts::logs_dir());

    let db = match cli.db {
        Some(db) => db,
        None => {
            let path = consts::default_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };

    let generator = match cli.seed {
        Some(seed) => TemplateGenerator::seeded(seed),
        None => TemplateGenerator::default(),
    };
    let engine = SearchEngine::new(
        Arc::new(generator),
        SearchConfig {
            delay: Duration::from_millis(cli.delay_ms),
        },
    );

    let mut session = Session::open(
        Arc::new(SqliteStore::new(&db)?),
        Config::open(&db)?,
        engine,
        Arc::new(SystemClipboard),
    )
    .await?;

    // Flags override remembered settings without replacing them.
    if let Some(filter) = cli.filter {
        session.apply(Action::SetFilter(filter));
    }
    if let Some(sort) = cli.sort {
        session.apply(Action::SetSort(sort));
    }

    match cli.command {
        Some(Command::Suggest { ingredients }) => return suggest(&mut session, &ingredients).await,
        Some(Command::Saved) => {
            session.switch_tab(Tab::Saved);
            print!("{}", render::cards(session.state()));
            return Ok(());
        }
        Some(Command::Export { n }) => {
            session.switch_tab(Tab::Saved);
            let Some(recipe) = session.recipe_at(n) else {
                bail!(
                    "no saved recipe #{n} ({} saved)",
                    plural(session.state().saved.len(), "recipe")
                );
            };
            print!("{}", recipe.export_text());
            return Ok(());
        }
        None => {}
    }

    let database: &str = if db == ":memory:" { "ephemeral" } else { &db };
    let state = session.state();
    print_banner(&BannerInfo {
        database,
        generator: session.generator_name(),
        saved: state.saved.len(),
        filter: state.filter.as_str(),
        sort: state.sort.as_str(),
    });

    let commands = CommandRegistry::new();

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\npantrypal> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match commands.dispatch(input, &mut session).await {
            CommandResult::Quit => break,
            CommandResult::Handled => {}
            CommandResult::NotACommand => {
                let added = session.add_ingredients(input);
                if added == 0 {
                    println!("  nothing new to add");
                }
                print!("{}", render::pantry(session.state()));
            }
        }
    }

    session.cancel_search();
    print_session_summary(session.state());
    Ok(())
}

async fn suggest(session: &mut Session, ingredients: &[String]) -> anyhow::Result<()> {
    for ingredient in ingredients {
        session.add_ingredients(ingredient);
    }
    session.search().await;

    let state = session.state();
    if let Some(error) = &state.error {
        bail!("{error}");
    }
    print!("{}", render::cards(state));
    Ok(())
}
