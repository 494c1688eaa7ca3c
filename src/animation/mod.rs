pub mod ease;
pub mod group;
pub mod tween;
