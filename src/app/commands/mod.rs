pub mod generate;
pub mod templates;
