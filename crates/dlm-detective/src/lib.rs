//! Correlation-inference decision policy for the iterated dilemma.
//!
//! Inspects the joint move history, estimates whether the opponent's moves
//! are causally influenced by our own prior moves, and converts that
//! estimate into a move decision under uncertainty.
//!
//! # Module Structure
//!
//! - `correlation` — Conditional frequency with a minimum-sample floor
//! - `estimate` — Lagged four-way conditional statistics at one offset
//! - `forecast` — Best-per-statistic aggregation into prediction scores
//! - `detective` — The strategy applying threshold rules to the forecast

mod correlation;
mod detective;
mod estimate;
mod forecast;

pub use correlation::*;
pub use detective::*;
pub use estimate::*;
pub use forecast::*;
