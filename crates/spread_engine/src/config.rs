//! Process-wide search configuration.

use tracing::warn;

/// Standard total EV budget: 252 + 252 + 4. The game grants 510 points,
/// but only multiples of 4 change a stat, so one point per invested stat
/// is lost to flooring.
pub const DEFAULT_MAX_LEGAL_EVS: u16 = 508;

/// Environment variable overriding the legal EV cap
pub const MAX_LEGAL_EVS_VAR: &str = "SPREAD_MAX_LEGAL_EVS";

/// Tunables for a spread search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessConfig {
    /// Maximum legal total EV expenditure
    pub max_legal_evs: u16,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            max_legal_evs: DEFAULT_MAX_LEGAL_EVS,
        }
    }
}

impl GuessConfig {
    /// Read the configuration from the process environment, falling back
    /// to defaults for unset or malformed values.
    pub fn from_env() -> Self {
        let max_legal_evs = match std::env::var(MAX_LEGAL_EVS_VAR) {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(
                        var = MAX_LEGAL_EVS_VAR,
                        value = raw.as_str(),
                        "ignoring malformed EV cap"
                    );
                    DEFAULT_MAX_LEGAL_EVS
                }
            },
            Err(_) => DEFAULT_MAX_LEGAL_EVS,
        };

        Self { max_legal_evs }
    }
}
