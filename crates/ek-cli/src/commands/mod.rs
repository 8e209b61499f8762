pub mod play;
pub mod questions;
