//! Core dealing logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod rng;
pub mod state;
pub mod view;

pub use cards::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use rng::*;
pub use state::*;
pub use view::*;
