//! Core type aliases, traits, and constants for dilemma.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the dilemma workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Conditional frequencies, correlation strengths, and cooperation rates.
pub type Probability = f32;
/// Signed confidence that an action elicits a given opponent response.
/// Sign is the predicted direction, magnitude is the confidence.
pub type Prediction = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Turns played on the opening policy before correlation analysis begins.
pub const TRIAL_PERIOD: usize = 10;
/// Maximum lag offset tested between our move and the opponent's response.
pub const HISTORY_TEST_DEPTH: usize = 3;

// ============================================================================
// CORRELATION INFERENCE
// Conditional frequencies are floored to zero below a minimum sample size,
// so sparse evidence never masquerades as signal.
// ============================================================================
/// Observations required before a conditional frequency counts as evidence.
pub const MIN_SAMPLE_SIZE: usize = 3;
/// Prediction magnitude above which the opponent's response is trusted outright.
pub const CERTAINTY_THRESHOLD: Prediction = 0.8;
/// Prediction magnitude above which the opponent is considered reactive at all.
pub const CORRELATION_THRESHOLD: Prediction = 0.65;
/// Strength above which a direct cooperation signal bypasses differencing.
pub const PRIORITY_THRESHOLD: Probability = 0.3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for binaries. INFO to terminal by default,
/// DEBUG when RUST_LOG=debug.
#[cfg(feature = "cli")]
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match std::env::var("RUST_LOG").as_deref() {
        Ok("debug") => log::LevelFilter::Debug,
        Ok("trace") => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
