//! Startup banner and goodbye summary.

use crate::consts::{AUTHOR, HOMEPAGE, REPO, plural};
use crate::state::AppState;

/// What the banner reports about this run.
pub struct BannerInfo<'a> {
    pub database: &'a str,
    pub generator: &'a str,
    pub saved: usize,
    pub filter: &'a str,
    pub sort: &'a str,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║           P A N T R Y P A L           ║
   ║   what's in the cupboard, for dinner  ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   database  {}
   recipes   {}
   saved     {}
   view      difficulty {} · sort {}

   type ingredients to fill the pantry, /find to cook, /help for more
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.database,
        info.generator,
        plural(info.saved, "recipe"),
        info.filter,
        info.sort,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

pub fn session_summary(state: &AppState) -> String {
    let mut out = String::new();
    if !state.pantry.is_empty() {
        out.push_str(&format!(
            "pantry: {}\n",
            plural(state.pantry.len(), "ingredient")
        ));
    }
    if !state.saved.is_empty() {
        out.push_str(&format!(
            "saved:  {}\n",
            plural(state.saved.len(), "recipe")
        ));
    }
    out.push_str("happy cooking.");
    out
}

pub fn print_session_summary(state: &AppState) {
    println!("{}", session_summary(state));
}
