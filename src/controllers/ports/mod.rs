pub mod file_presenter;
pub mod render_observer;
