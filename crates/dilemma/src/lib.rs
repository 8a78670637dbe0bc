//! Iterated dilemma toolkit built around correlation inference.
//!
//! This facade crate re-exports all public dlm crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`gameplay`] — Moves, histories, the strategy contract, duels
//! - [`players`] — Baseline strategy roster
//! - [`detective`] — The correlation-inference policy

pub use dlm_core as core;
pub use dlm_detective as detective;
pub use dlm_gameplay as gameplay;
pub use dlm_players as players;
