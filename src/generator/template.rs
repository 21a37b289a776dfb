use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::Generator;
use crate::random::{RandomSource, StdRandom, shuffle};
use crate::recipe::{Difficulty, Recipe};

/// Placeholder for a missing first ingredient slot.
pub const MAIN_FALLBACK: &str = "base ingredient";
/// Placeholder for a missing second ingredient slot.
pub const SECONDARY_FALLBACK: &str = "seasonings";

/// Staples every recipe assumes are in the cupboard.
const STAPLES: [&str; 3] = ["salt", "pepper", "olive oil"];

/// Upper bound on recipes per batch.
const MAX_RECIPES: usize = 3;

/// Dish category a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Soup,
    Salad,
    Pasta,
    StirFry,
    Baked,
    Curry,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Soup => "soup",
            Kind::Salad => "salad",
            Kind::Pasta => "pasta",
            Kind::StirFry => "stir-fry",
            Kind::Baked => "baked",
            Kind::Curry => "curry",
        }
    }

    /// The extra staple this kind of dish leans on.
    fn staple(&self) -> &'static str {
        match self {
            Kind::Pasta => "pasta",
            Kind::StirFry => "rice",
            _ => "herbs",
        }
    }
}

/// A static recipe pattern filled in with pantry ingredients.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub kind: Kind,
    pub cooking_time: &'static str,
    pub difficulty: Difficulty,
}

pub const CATALOG: [Template; 6] = [
    Template {
        kind: Kind::Soup,
        cooking_time: "30 minutes",
        difficulty: Difficulty::Easy,
    },
    Template {
        kind: Kind::Salad,
        cooking_time: "15 minutes",
        difficulty: Difficulty::Easy,
    },
    Template {
        kind: Kind::Pasta,
        cooking_time: "25 minutes",
        difficulty: Difficulty::Medium,
    },
    Template {
        kind: Kind::StirFry,
        cooking_time: "20 minutes",
        difficulty: Difficulty::Medium,
    },
    Template {
        kind: Kind::Baked,
        cooking_time: "45 minutes",
        difficulty: Difficulty::Medium,
    },
    Template {
        kind: Kind::Curry,
        cooking_time: "40 minutes",
        difficulty: Difficulty::Medium,
    },
];

impl Template {
    pub fn title(&self, main: &str) -> String {
        let main = capitalize(main);
        match self.kind {
            Kind::Soup => format!("{main} Soup"),
            Kind::Salad => format!("Fresh {main} Salad"),
            Kind::Pasta => format!("{main} Pasta"),
            Kind::StirFry => format!("{main} Stir-Fry"),
            Kind::Baked => format!("Baked {main}"),
            Kind::Curry => format!("{main} Curry"),
        }
    }

    pub fn description(&self, main: &str, secondary: &str) -> String {
        match self.kind {
            Kind::Soup => {
                format!("A hearty and warming {main} soup with a hint of {secondary}.")
            }
            Kind::Salad => format!(
                "A refreshing salad featuring crisp {main} and tangy {secondary}."
            ),
            Kind::Pasta => format!("A delicious pasta dish with {main} and {secondary}."),
            Kind::StirFry => {
                format!("A quick and flavorful stir-fry with {main} and {secondary}.")
            }
            Kind::Baked => format!(
                "A delicious baked dish with tender {main} and aromatic {secondary}."
            ),
            Kind::Curry => {
                format!("A rich and aromatic curry featuring {main} and {secondary}.")
            }
        }
    }

    /// Numbered steps. Only the first two ingredients are referenced;
    /// missing slots get the fallback placeholders.
    pub fn instructions(&self, ingredients: &[String]) -> String {
        let a = ingredients.first().map_or(MAIN_FALLBACK, String::as_str);
        let b = ingredients.get(1).map_or(SECONDARY_FALLBACK, String::as_str);
        let steps: Vec<String> = match self.kind {
            Kind::Soup => vec![
                format!("Chop {a} and {b} into small pieces."),
                "In a large pot, heat olive oil over medium heat.".to_string(),
                format!("Sauté {a} until softened, about 5 minutes."),
                format!("Add {b} and continue cooking for 2 minutes."),
                "Add 4 cups of water or broth and bring to a boil.".to_string(),
                "Reduce heat and simmer for 20 minutes.".to_string(),
                "Season with salt and pepper to taste.".to_string(),
                "Serve hot, garnished with fresh herbs if available.".to_string(),
            ],
            Kind::Salad => vec![
                format!("Wash and chop {a} and {b}."),
                "Combine in a large bowl.".to_string(),
                "Make a simple dressing with olive oil, lemon juice, salt and pepper."
                    .to_string(),
                "Toss the salad with the dressing.".to_string(),
                "For extra flavor, add some fresh herbs or a sprinkle of cheese.".to_string(),
                "Serve immediately or chill in the refrigerator.".to_string(),
            ],
            Kind::Pasta => vec![
                "Cook 8 oz pasta according to package instructions until al dente.".to_string(),
                "In a separate pan, heat olive oil over medium heat.".to_string(),
                format!("Add {a} and sauté until golden, about 4-5 minutes."),
                format!("Add {b} and cook for another 3-5 minutes."),
                "Drain pasta, reserving 1/4 cup of pasta water.".to_string(),
                "Add pasta to the pan with the sautéed ingredients.".to_string(),
                "Add pasta water as needed to create a light sauce.".to_string(),
                "Season with salt, pepper, and herbs.".to_string(),
                "Serve hot with grated cheese on top if desired.".to_string(),
            ],
            Kind::StirFry => vec![
                format!("Prepare {a} and {b} by cutting into bite-sized pieces."),
                "Heat 2 tablespoons oil in a wok or large frying pan over high heat.".to_string(),
                format!("Add {a} and stir-fry for 2-3 minutes."),
                format!("Add {b} and continue stir-frying for another 2 minutes."),
                "Add 2 tablespoons soy sauce and your choice of seasonings.".to_string(),
                "Stir-fry for another minute until everything is well coated.".to_string(),
                "If you'd like, add a teaspoon of honey or brown sugar for sweetness.".to_string(),
                "Serve hot with rice or noodles.".to_string(),
            ],
            Kind::Baked => vec![
                "Preheat oven to 375°F (190°C).".to_string(),
                format!("Prepare {a} and place in a baking dish."),
                format!("Add {b} around the {a}."),
                "Season with salt, pepper, and herbs of your choice.".to_string(),
                "Drizzle with olive oil.".to_string(),
                "Cover with foil and bake for 30 minutes.".to_string(),
                "Remove foil and bake for another 15 minutes until golden.".to_string(),
                "Let rest for 5 minutes before serving.".to_string(),
            ],
            Kind::Curry => vec![
                "Heat 2 tablespoons of oil in a large pot over medium heat.".to_string(),
                "Add 1 diced onion and 2 cloves of garlic, sauté until soft.".to_string(),
                "Add 2 tablespoons of curry powder and stir for 30 seconds.".to_string(),
                format!("Add {a} and cook for 5 minutes, stirring occasionally."),
                format!("Add {b} and 2 cups of vegetable broth or water."),
                "Bring to a simmer, then reduce heat and cook for 20-25 minutes.".to_string(),
                "If desired, add 1/2 cup of coconut milk for creaminess.".to_string(),
                "Season with salt and pepper to taste.".to_string(),
                "Serve with rice or bread.".to_string(),
            ],
        };
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}: {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Uppercase the first character, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Attach a quantity phrase to an ingredient name.
pub fn with_quantity(ingredient: &str) -> String {
    match ingredient {
        "salt" | "pepper" => format!("{ingredient} to taste"),
        "olive oil" => "2 tablespoons olive oil".to_string(),
        "garlic" => "2 cloves of garlic, minced".to_string(),
        "onion" => "1 onion, diced".to_string(),
        "pasta" => "8 oz pasta".to_string(),
        "rice" => "1 cup cooked rice".to_string(),
        "herbs" => "1 tablespoon fresh herbs (basil, parsley, or thyme)".to_string(),
        other => format!("1 cup {other}"),
    }
}

/// Shuffled pantry items plus staples, deduplicated in first-seen order.
pub fn expand_ingredients(shuffled: &[String], kind: Kind, index: usize) -> Vec<String> {
    let aromatic = if index % 2 == 0 { "garlic" } else { "onion" };
    let extras = STAPLES
        .iter()
        .copied()
        .chain([aromatic, kind.staple()])
        .map(str::to_string);

    let mut expanded: Vec<String> = Vec::new();
    for ingredient in shuffled.iter().cloned().chain(extras) {
        if !expanded.contains(&ingredient) {
            expanded.push(ingredient);
        }
    }
    expanded
}

/// Fills the built-in templates with shuffled pantry ingredients.
pub struct TemplateGenerator {
    random: Mutex<Box<dyn RandomSource>>,
}

impl TemplateGenerator {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            random: Mutex::new(random),
        }
    }

    /// Reproducible suggestions for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(StdRandom::seeded(seed)))
    }

    /// Synchronous core of [`Generator::generate`].
    pub fn generate_batch(&self, ingredients: &[String]) -> Result<Vec<Recipe>> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let mut random = self
            .random
            .lock()
            .map_err(|_| anyhow!("random source lock poisoned"))?;

        let count = ingredients.len().clamp(1, MAX_RECIPES);
        let templates = shuffle(&mut **random, CATALOG.to_vec());

        let recipes = templates
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(index, template)| {
                let shuffled = shuffle(&mut **random, ingredients.to_vec());
                build(&template, &shuffled, index)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            ingredients = ingredients.len(),
            recipes = recipes.len(),
            "generated recipe batch"
        );
        Ok(recipes)
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(Box::new(StdRandom::new()))
    }
}

fn build(template: &Template, shuffled: &[String], index: usize) -> Recipe {
    let main = shuffled.first().map_or(MAIN_FALLBACK, String::as_str);
    let secondary = shuffled.get(1).map_or(SECONDARY_FALLBACK, String::as_str);

    let ingredients = expand_ingredients(shuffled, template.kind, index)
        .iter()
        .map(|i| with_quantity(i))
        .collect();

    Recipe {
        id: index as u32 + 1,
        title: template.title(main),
        description: template.description(main, secondary),
        ingredients,
        instructions: template.instructions(shuffled),
        cooking_time: template.cooking_time.to_string(),
        difficulty: template.difficulty,
        saved_at: None,
    }
}

#[async_trait]
impl Generator for TemplateGenerator {
    fn name(&self) -> &str {
        "templates"
    }

    async fn generate(&self, ingredients: &[String]) -> Result<Vec<Recipe>> {
        self.generate_batch(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn template(kind: Kind) -> Template {
        CATALOG.into_iter().find(|t| t.kind == kind).unwrap()
    }

    #[test]
    fn catalog_has_six_distinct_kinds() {
        let kinds: Vec<&str> = CATALOG.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["soup", "salad", "pasta", "stir-fry", "baked", "curry"]
        );
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("chicken breast"), "Chicken breast");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn titles_follow_kind() {
        assert_eq!(template(Kind::Soup).title("leek"), "Leek Soup");
        assert_eq!(template(Kind::Salad).title("kale"), "Fresh Kale Salad");
        assert_eq!(template(Kind::Baked).title("tofu"), "Baked Tofu");
        assert_eq!(template(Kind::StirFry).title("beef"), "Beef Stir-Fry");
    }

    #[test]
    fn quantity_table() {
        assert_eq!(with_quantity("salt"), "salt to taste");
        assert_eq!(with_quantity("pepper"), "pepper to taste");
        assert_eq!(with_quantity("olive oil"), "2 tablespoons olive oil");
        assert_eq!(with_quantity("garlic"), "2 cloves of garlic, minced");
        assert_eq!(with_quantity("onion"), "1 onion, diced");
        assert_eq!(with_quantity("pasta"), "8 oz pasta");
        assert_eq!(with_quantity("rice"), "1 cup cooked rice");
        assert_eq!(
            with_quantity("herbs"),
            "1 tablespoon fresh herbs (basil, parsley, or thyme)"
        );
        assert_eq!(with_quantity("tofu"), "1 cup tofu");
    }

    #[test]
    fn expansion_dedups_pantry_staples() {
        let expanded =
            expand_ingredients(&strings(&["rice", "salt", "beans"]), Kind::StirFry, 1);
        assert_eq!(
            expanded,
            strings(&["rice", "salt", "beans", "pepper", "olive oil", "onion"])
        );
    }

    #[test]
    fn expansion_alternates_garlic_and_onion() {
        let even = expand_ingredients(&strings(&["kale"]), Kind::Soup, 0);
        let odd = expand_ingredients(&strings(&["kale"]), Kind::Soup, 1);
        assert!(even.contains(&"garlic".to_string()));
        assert!(!even.contains(&"onion".to_string()));
        assert!(odd.contains(&"onion".to_string()));
        assert_eq!(even.last().unwrap(), "herbs");
    }

    #[test]
    fn single_ingredient_uses_placeholder_not_undefined() {
        let text = template(Kind::Soup).instructions(&strings(&["leek"]));
        assert!(text.starts_with("1: Chop leek and seasonings into small pieces."));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn instructions_are_numbered() {
        let text = template(Kind::Curry).instructions(&strings(&["lentils", "spinach"]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("1: "));
        assert!(lines[8].starts_with("9: "));
        assert!(text.contains("4: Add lentils and cook"));
        assert!(text.contains("5: Add spinach and 2 cups"));
    }

    #[test]
    fn scripted_draw_is_exact() {
        // Templates: curry, pasta, soup, ... ; ingredients reversed then identity.
        let random = ScriptedRandom::new(vec![vec![5, 2, 0, 1, 3, 4], vec![1, 0]]);
        let generator = TemplateGenerator::new(Box::new(random));
        let recipes = generator
            .generate_batch(&strings(&["chicken", "rice"]))
            .unwrap();

        assert_eq!(recipes.len(), 2);

        assert_eq!(recipes[0].id, 1);
        assert_eq!(recipes[0].title, "Rice Curry");
        assert_eq!(
            recipes[0].description,
            "A rich and aromatic curry featuring rice and chicken."
        );
        assert_eq!(recipes[0].cooking_time, "40 minutes");
        assert_eq!(
            recipes[0].ingredients,
            strings(&[
                "1 cup cooked rice",
                "1 cup chicken",
                "salt to taste",
                "pepper to taste",
                "2 tablespoons olive oil",
                "2 cloves of garlic, minced",
                "1 tablespoon fresh herbs (basil, parsley, or thyme)",
            ])
        );

        assert_eq!(recipes[1].id, 2);
        assert_eq!(recipes[1].title, "Chicken Pasta");
        assert_eq!(recipes[1].difficulty, Difficulty::Medium);
        assert_eq!(
            recipes[1].ingredients,
            strings(&[
                "1 cup chicken",
                "1 cup cooked rice",
                "salt to taste",
                "pepper to taste",
                "2 tablespoons olive oil",
                "1 onion, diced",
                "8 oz pasta",
            ])
        );
    }

    #[test]
    fn count_is_clamped_to_three() {
        let generator = TemplateGenerator::seeded(7);
        let one = generator.generate_batch(&strings(&["egg"])).unwrap();
        let many = generator
            .generate_batch(&strings(&["a", "b", "c", "d", "e"]))
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(many.len(), 3);
    }

    #[test]
    fn empty_pantry_yields_nothing() {
        let generator = TemplateGenerator::seeded(7);
        assert!(generator.generate_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn templates_in_one_batch_are_distinct() {
        let generator = TemplateGenerator::seeded(99);
        for _ in 0..20 {
            let recipes = generator
                .generate_batch(&strings(&["a", "b", "c"]))
                .unwrap();
            let mut titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), 3);
        }
    }
}
