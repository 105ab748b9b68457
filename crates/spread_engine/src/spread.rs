//! Guessed training spreads.

use serde::{Deserialize, Serialize};

use crate::natures::NatureId;
use crate::stats::{StatId, STAT_COUNT};

/// A (possibly partial) reconstruction of a creature's hidden spread.
///
/// IV/EV slots are `None` until the search resolves them. A guess with all
/// slots empty is the normal "no resolvable spread found" outcome, not an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadGuess {
    /// Resolved nature, or the caller's hint when nothing matched
    pub nature: Option<NatureId>,

    /// Individual values (0-31), per stat
    pub ivs: [Option<u8>; STAT_COUNT],

    /// Effort values (0-252, multiples of 4), per stat
    pub evs: [Option<u8>; STAT_COUNT],
}

impl SpreadGuess {
    /// Resolved IV for one stat
    #[inline]
    pub fn iv(&self, stat: StatId) -> Option<u8> {
        self.ivs[stat.index()]
    }

    /// Resolved EV for one stat
    #[inline]
    pub fn ev(&self, stat: StatId) -> Option<u8> {
        self.evs[stat.index()]
    }

    /// Record a resolved (IV, EV) pair for one stat
    #[inline]
    pub fn set_stat(&mut self, stat: StatId, iv: u8, ev: u8) {
        self.ivs[stat.index()] = Some(iv);
        self.evs[stat.index()] = Some(ev);
    }

    /// True for this stat once both IV and EV are resolved
    #[inline]
    pub fn is_resolved(&self, stat: StatId) -> bool {
        self.iv(stat).is_some() && self.ev(stat).is_some()
    }

    /// Drop all resolved IVs/EVs, keeping the nature. Used between nature
    /// attempts.
    pub fn clear_stats(&mut self) {
        self.ivs = [None; STAT_COUNT];
        self.evs = [None; STAT_COUNT];
    }

    /// True when no stat has been resolved
    pub fn is_empty(&self) -> bool {
        self.ivs.iter().all(Option::is_none) && self.evs.iter().all(Option::is_none)
    }

    /// Total EV expenditure across resolved stats
    pub fn ev_total(&self) -> u16 {
        self.evs.iter().flatten().map(|&ev| ev as u16).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_guess() {
        let guess = SpreadGuess::default();
        assert!(guess.is_empty());
        assert_eq!(guess.ev_total(), 0);
        assert_eq!(guess.nature, None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut guess = SpreadGuess::default();
        guess.set_stat(StatId::Atk, 31, 252);
        guess.set_stat(StatId::Spe, 0, 4);

        assert!(!guess.is_empty());
        assert!(guess.is_resolved(StatId::Atk));
        assert!(!guess.is_resolved(StatId::Hp));
        assert_eq!(guess.iv(StatId::Atk), Some(31));
        assert_eq!(guess.ev(StatId::Spe), Some(4));
        assert_eq!(guess.ev_total(), 256);

        guess.nature = Some(NatureId::Adamant);
        guess.clear_stats();
        assert!(guess.is_empty());
        // Clearing the stats keeps the nature
        assert_eq!(guess.nature, Some(NatureId::Adamant));
    }

    #[test]
    fn test_json_shape() {
        let mut guess = SpreadGuess::default();
        guess.nature = Some(NatureId::Timid);
        guess.set_stat(StatId::Hp, 31, 0);

        let json = serde_json::to_string(&guess).unwrap();
        let back: SpreadGuess = serde_json::from_str(&json).unwrap();
        assert_eq!(guess, back);
    }
}
