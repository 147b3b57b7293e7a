//! The Love Letter rules engine: authoritative round state, observable
//! views, and legal-action enumeration.

pub mod legal;
pub mod round;
pub mod view;

pub use legal::{legal_actions, legal_targets, playable_cards};
pub use round::{DiscardPile, RoundState};
pub use view::PlayerView;
