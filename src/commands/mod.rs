pub mod generate;
pub mod inspection;
