use std::fmt::{self, Display};

use bank::Recipe;

pub const SERVINGS: u8 = 4;

pub const KEY_INGREDIENTS: usize = 4;

/// Result grid entry: header, description, badges and the first few ingredients.
pub struct RecipeCard<'a>(pub &'a Recipe);

impl Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(
            f,
            "{} {} [{}] {}",
            recipe.image, recipe.title, recipe.id, recipe.cooking_time
        )?;
        writeln!(f, "{}", recipe.description)?;

        let mut badges = vec![recipe.meal_type.as_str()];
        badges.extend(recipe.dietary_preference.iter().map(|tag| tag.as_str()));
        writeln!(f, "{}", badges.join(" | "))?;

        let shown: Vec<&str> = recipe
            .ingredients
            .iter()
            .take(KEY_INGREDIENTS)
            .map(String::as_str)
            .collect();
        write!(f, "Key ingredients: {}", shown.join(", "))?;

        let hidden = recipe.ingredients.len().saturating_sub(KEY_INGREDIENTS);
        if hidden > 0 {
            write!(f, " +{hidden} more")?;
        }

        Ok(())
    }
}

/// Everything known about one recipe.
pub struct DetailView<'a>(pub &'a Recipe);

impl DetailView<'_> {
    pub fn recipe(&self) -> &Recipe {
        self.0
    }
}

impl Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(f, "{} {}", recipe.image, recipe.title)?;
        writeln!(f, "{}", recipe.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} | {} | Serves {SERVINGS}",
            recipe.cooking_time.label(),
            recipe.meal_type.label()
        )?;

        if !recipe.dietary_preference.is_empty() {
            let tags: Vec<&str> = recipe
                .dietary_preference
                .iter()
                .map(|tag| tag.label())
                .collect();
            writeln!(f, "{}", tags.join("  "))?;
        }

        writeln!(f)?;
        writeln!(f, "Ingredients")?;
        for (index, ingredient) in recipe.ingredients.iter().enumerate() {
            writeln!(f, "  {}. {ingredient}", index + 1)?;
        }

        Ok(())
    }
}
