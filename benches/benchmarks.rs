pub mod prompt;
pub mod theory;
