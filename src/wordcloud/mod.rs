pub mod gate;
pub mod generator;
pub mod watcher;
pub mod words;
