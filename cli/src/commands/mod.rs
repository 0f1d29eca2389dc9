pub mod profile;
pub mod term;
