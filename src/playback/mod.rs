pub mod fade;
pub mod player;
pub mod session;
pub mod timer;
pub mod tracker;
