//! Text rendering for the terminal front-end.

use crate::consts::plural;
use crate::recipe::Recipe;
use crate::state::{AppState, Tab};

const RULE_WIDTH: usize = 60;

/// Tab bar with the saved count and the active display options.
pub fn header(state: &AppState) -> String {
    let (search, saved) = match state.tab {
        Tab::Search => ("[Find Recipes]", " Saved Recipes "),
        Tab::Saved => (" Find Recipes ", "[Saved Recipes]"),
    };
    let badge = if state.saved.is_empty() {
        String::new()
    } else {
        format!(" ({})", state.saved.len())
    };
    format!(
        "  {search}  {saved}{badge}    difficulty: {}  sort: {}\n",
        state.filter, state.sort
    )
}

/// Ingredient tags.
pub fn pantry(state: &AppState) -> String {
    if state.pantry.is_empty() {
        return "  pantry is empty. Type ingredients, comma separated.\n".to_string();
    }
    let tags: Vec<String> = state
        .pantry
        .items()
        .iter()
        .map(|item| format!("[{item}]"))
        .collect();
    format!("  {}\n", tags.join(" "))
}

/// Numbered cards for whatever the active tab shows.
pub fn cards(state: &AppState) -> String {
    let visible = state.visible();
    if visible.is_empty() {
        return match state.tab {
            Tab::Search if state.recipes.is_empty() => {
                "  no suggestions yet. Add ingredients and run /find.\n".to_string()
            }
            Tab::Saved if state.saved.is_empty() => {
                "  no saved recipes yet. Save one with /save <n>.\n".to_string()
            }
            _ => "  nothing matches the current difficulty filter.\n".to_string(),
        };
    }

    let mut out = String::new();
    for (i, recipe) in visible.iter().enumerate() {
        let star = if state.is_saved(recipe) { " ★" } else { "" };
        out.push_str(&format!(
            "  {:>2}. {}{}\n      {} · {} · {}\n      {}\n",
            i + 1,
            recipe.title,
            star,
            recipe.difficulty,
            recipe.cooking_time,
            plural(recipe.ingredients.len(), "ingredient"),
            recipe.description,
        ));
    }
    out
}

/// Full recipe view.
pub fn details(recipe: &Recipe, saved: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("{}\n", recipe.title));
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
    out.push_str(&format!("{}\n\n", recipe.description));
    out.push_str(&format!(
        "Cooking Time: {}    Difficulty: {}\n\n",
        recipe.cooking_time, recipe.difficulty
    ));
    out.push_str("Ingredients:\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  • {ingredient}\n"));
    }
    out.push_str("\nInstructions:\n");
    for step in recipe.instructions.lines() {
        out.push_str(&format!("  {step}\n"));
    }
    if let Some(at) = recipe.saved_at {
        out.push_str(&format!("\nSaved {}\n", at.format("%Y-%m-%d %H:%M UTC")));
    }
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
    let toggle = if saved { "/unsave" } else { "/save" };
    out.push_str(&format!("{toggle} · /copy · /close\n"));
    out
}
