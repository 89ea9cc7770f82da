pub mod fuzzy;
pub mod resolver;
pub mod score;
pub mod text;
