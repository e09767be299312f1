pub mod file_presenter;
pub mod text_presenter;
