//! Core types: cards, players, actions, RNG, errors.
//!
//! These are the fundamental building blocks shared by the rules engine,
//! the agents and the search.

pub mod action;
pub mod card;
pub mod error;
pub mod player;
pub mod rng;

pub use action::Action;
pub use card::Card;
pub use error::IllegalAction;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
