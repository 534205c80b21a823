//! Match rules on top of the core state.
//!
//! - `engine`: turn-checked event dispatch, history and observers
//! - `legal`: enumeration of the events a player may issue

pub mod engine;
pub mod legal;

pub use engine::{EventObserver, GameEngine};
pub use legal::{legal_barriers, legal_events, legal_moves};
