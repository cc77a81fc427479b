use std::env;

use cocktail_vision::match_catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Treat each command-line argument as one available ingredient
    let ingredients: Vec<String> = env::args().skip(1).collect();
    if ingredients.is_empty() {
        return Err("Please provide at least one ingredient as an argument".into());
    }

    let matches = match_catalog(&ingredients)?;
    for result in matches {
        let marker = if result.can_make { "*" } else { " " };
        println!(
            "{} {:>3}%  {}",
            marker, result.match_percentage, result.recipe.name
        );
        if !result.missing_ingredients.is_empty() {
            println!("        missing: {}", result.missing_ingredients.join(", "));
        }
    }

    Ok(())
}
