pub mod suggest;
pub mod vision;

pub use suggest::Suggestions;
