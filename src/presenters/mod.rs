pub mod file;
pub mod text;
