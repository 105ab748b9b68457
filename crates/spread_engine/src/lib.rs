//! spread_engine - Hidden training-spread inference
//!
//! A battle server only reveals a creature's *final* stats. This library
//! searches nature and per-stat IV/EV candidates for a legal spread that
//! reproduces those stats exactly, for clients that want to display or
//! reuse an opponent-equivalent build.

/// Stat identifiers and the final-stat formula
pub mod stats;

/// Nature definitions and stat modifiers
pub mod natures;

/// Normalized creature observations (engine input)
pub mod observation;

/// Guessed training spreads (engine output)
pub mod spread;

/// Process-wide search configuration
pub mod config;

/// Search tracing sinks
pub mod trace;

/// The spread inference search itself
pub mod engine;

// Re-export commonly used types
pub use config::GuessConfig;
pub use engine::{guess_server_spread, guess_server_spread_traced, nature_candidates};
pub use natures::{BattleStat, NatureId};
pub use observation::{ObservationError, ServerObservation};
pub use spread::SpreadGuess;
pub use stats::{Gen9, StatId, StatMechanics};
pub use trace::{NoTrace, RecordingTrace, SpreadTrace, StatAttempt};
