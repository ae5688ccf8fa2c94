pub mod editor;

pub use editor::Editor;
