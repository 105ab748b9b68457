//! Search tracing.
//!
//! The engine reports every formula evaluation to an injected sink. Sinks
//! are pure observers: the search result is identical whatever the sink
//! does with the records.

use crate::natures::NatureId;
use crate::stats::StatId;

/// One formula evaluation during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatAttempt {
    pub nature: NatureId,
    pub stat: StatId,
    pub iv: u8,
    pub ev: u8,
    /// Value the formula produced for this candidate pair
    pub computed: u16,
    /// Observed server value being matched
    pub target: u16,
    pub matched: bool,
}

/// Sink for search diagnostics. All hooks default to no-ops.
pub trait SpreadTrace {
    /// Called for every (IV, EV) candidate evaluated
    fn on_attempt(&mut self, _attempt: &StatAttempt) {}

    /// Called when a nature candidate fails to reproduce the server stats
    fn on_nature_rejected(&mut self, _nature: NatureId) {}

    /// Called once when a nature candidate is accepted
    fn on_nature_accepted(&mut self, _nature: NatureId) {}
}

/// Default sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl SpreadTrace for NoTrace {}

/// Buffers the full search history. Intended for tests and debugging; a
/// worst-case search records a few tens of thousands of attempts.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    pub attempts: Vec<StatAttempt>,
    pub rejected: Vec<NatureId>,
    pub accepted: Option<NatureId>,
}

impl SpreadTrace for RecordingTrace {
    fn on_attempt(&mut self, attempt: &StatAttempt) {
        self.attempts.push(*attempt);
    }

    fn on_nature_rejected(&mut self, nature: NatureId) {
        self.rejected.push(nature);
    }

    fn on_nature_accepted(&mut self, nature: NatureId) {
        self.accepted = Some(nature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_trace_buffers() {
        let mut trace = RecordingTrace::default();
        let attempt = StatAttempt {
            nature: NatureId::Adamant,
            stat: StatId::Atk,
            iv: 31,
            ev: 0,
            computed: 236,
            target: 236,
            matched: true,
        };

        trace.on_attempt(&attempt);
        trace.on_nature_rejected(NatureId::Bashful);
        trace.on_nature_accepted(NatureId::Adamant);

        assert_eq!(trace.attempts, vec![attempt]);
        assert_eq!(trace.rejected, vec![NatureId::Bashful]);
        assert_eq!(trace.accepted, Some(NatureId::Adamant));
    }
}
