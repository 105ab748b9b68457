//! Spread inference search.
//!
//! The server only ever reveals a creature's *final* stats. This module
//! brute-forces a (nature, IVs, EVs) spread that reproduces them:
//!
//! 1. Nature candidates are tried in order: the caller's hint first, then
//!    the canonical nature list.
//! 2. For each nature, every stat is solved independently over a truncated
//!    IV × EV space (IV 31 then 0; EV ascending in steps of 4).
//! 3. An attempt is accepted once every stat is reproduced and the total
//!    EV expenditure is legal; otherwise the partial work is discarded and
//!    the next nature is tried.
//!
//! More than one spread can produce the same final stats; the fixed search
//! order decides which one is returned. Exhausting every candidate is a
//! normal outcome and yields an empty guess, not an error.

use tracing::{debug, warn};

use crate::config::GuessConfig;
use crate::natures::NatureId;
use crate::observation::ServerObservation;
use crate::spread::SpreadGuess;
use crate::stats::{StatId, StatMechanics};
use crate::trace::{NoTrace, SpreadTrace, StatAttempt};

/// IV candidates, in search order. Intermediate IVs are deliberately not
/// searched: real spreads almost never use them, and the truncation keeps
/// the candidate space small. Widening this list changes which of several
/// valid spreads wins.
pub const IV_CANDIDATES: [u8; 2] = [31, 0];

/// Highest legal per-stat EV
pub const MAX_EV: u8 = 252;

/// EVs only matter in multiples of 4
pub const EV_STEP: u8 = 4;

/// Nature candidates in search order: the hint first (when given), then
/// the remaining natures in canonical order. Always 25 entries, no
/// duplicates.
pub fn nature_candidates(known: Option<NatureId>) -> Vec<NatureId> {
    let mut order = Vec::with_capacity(NatureId::ALL.len());
    if let Some(hint) = known {
        order.push(hint);
    }
    order.extend(NatureId::ALL.iter().copied().filter(|&n| Some(n) != known));
    order
}

/// Search IV × EV space for a pair reproducing `target` for one stat under
/// one nature. First match wins, so IV 31 beats IV 0 and the lowest
/// satisfying EV beats higher ones.
fn solve_stat<M: StatMechanics, T: SpreadTrace>(
    mechanics: M,
    stat: StatId,
    base: u16,
    target: u16,
    level: u8,
    nature: NatureId,
    trace: &mut T,
) -> Option<(u8, u8)> {
    for &iv in &IV_CANDIDATES {
        for ev in (0..=MAX_EV).step_by(EV_STEP as usize) {
            let computed = mechanics.calc_stat(stat, base, iv, ev, level, nature);
            let matched = computed == target;

            trace.on_attempt(&StatAttempt {
                nature,
                stat,
                iv,
                ev,
                computed,
                target,
                matched,
            });

            if matched {
                return Some((iv, ev));
            }
        }
    }

    None
}

/// Total EV expenditure must stay within the legal cap. The per-stat 252
/// ceiling is already enforced by the solver's search range.
pub fn evs_legal(guess: &SpreadGuess, max_legal_evs: u16) -> bool {
    guess.ev_total() <= max_legal_evs
}

/// Guess the hidden spread behind an observation's server stats.
///
/// Convenience entry point: no-op trace sink, configuration read from the
/// process environment.
pub fn guess_server_spread<M: StatMechanics>(
    mechanics: M,
    observation: &ServerObservation,
) -> Option<SpreadGuess> {
    guess_server_spread_traced(mechanics, observation, &GuessConfig::from_env(), &mut NoTrace)
}

/// Guess the hidden spread behind an observation's server stats.
///
/// Returns `None` when the observation fails its preconditions (no ident,
/// no base stats). Otherwise always returns a guess: a full legal spread
/// when some nature candidate reproduces every stat, or an empty one when
/// the search is exhausted. Callers treat the empty guess as "unknown,
/// use defaults".
///
/// The search is deterministic and side-effect-free apart from the trace
/// sink, which never influences the result.
pub fn guess_server_spread_traced<M: StatMechanics, T: SpreadTrace>(
    mechanics: M,
    observation: &ServerObservation,
    config: &GuessConfig,
    trace: &mut T,
) -> Option<SpreadGuess> {
    if let Err(err) = observation.validate() {
        warn!(%err, "refusing spread guess");
        return None;
    }
    let base_stats = observation.base_stats?;
    let ident = observation.ident.as_deref().unwrap_or_default();

    if !observation.server_sourced {
        warn!(ident, "guessing the spread of a non-server observation");
    }

    // 0 HP means the server never reported the true max HP (the creature
    // is down), so HP is forced to 0/0 and exempt from matching.
    let ignore_hp = observation.ignore_hp();

    let mut guess = SpreadGuess {
        nature: observation.known_nature,
        ..SpreadGuess::default()
    };

    for nature in nature_candidates(observation.known_nature) {
        for stat in StatId::ALL {
            if ignore_hp && stat == StatId::Hp {
                guess.set_stat(StatId::Hp, 0, 0);
                continue;
            }

            if let Some((iv, ev)) = solve_stat(
                mechanics,
                stat,
                base_stats[stat.index()],
                observation.server_stat(stat),
                observation.level,
                nature,
                trace,
            ) {
                guess.set_stat(stat, iv, ev);
            }
            // An unsolved stat stays unresolved and sinks the attempt below.
        }

        // A resolved stat reproduces its server value by construction, so
        // completeness is the whole equality check. Forced HP counts as
        // resolved and is exempt from matching anyway.
        let stats_match = StatId::ALL.iter().all(|&stat| guess.is_resolved(stat));

        if stats_match && evs_legal(&guess, config.max_legal_evs) {
            guess.nature = Some(nature);
            trace.on_nature_accepted(nature);
            debug!(
                ident,
                nature = nature.name(),
                ev_total = guess.ev_total(),
                "nature reproduces every server stat"
            );
            return Some(guess);
        }

        trace.on_nature_rejected(nature);
        guess.clear_stats();
    }

    // Every candidate exhausted. The IV/EV slots were cleared on the last
    // rejection; the nature slot still carries the caller's hint, if any.
    debug!(ident, "no legal spread reproduces the server stats");
    Some(guess)
}
