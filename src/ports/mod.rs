//! Ports (trait boundaries) between the game core and its strategies.

pub mod observer;
pub mod player;

pub use observer::Observer;
pub use player::{Move, Player};
