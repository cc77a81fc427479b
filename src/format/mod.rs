//! Field-level normalization for generated recipe records: ingredient
//! rendering, instruction step splitting, and oz→ml unit conversion.

pub mod ingredient;
pub mod instructions;
pub mod units;

pub use ingredient::{format_ingredient, IngredientValue};
pub use instructions::{format_instructions, split_steps, NO_INSTRUCTIONS};
pub use units::convert_oz_to_ml;
