pub mod pixmap;
pub mod scene;
