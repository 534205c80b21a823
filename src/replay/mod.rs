//! Match history, reconstruction and seeded playouts.
//!
//! - `history`: the accepted-event log and [`replay`]
//! - `playout`: [`RandomPlayout`], deterministic random matches

pub mod history;
pub mod playout;

pub use history::{replay, History};
pub use playout::{RandomPlayout, DEFAULT_MAX_EVENTS};
