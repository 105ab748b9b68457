//! Nature definitions and stat modifiers.
//!
//! Natures are ordered in a 5x5 grid: `nature_id = plus_stat * 5 + minus_stat`.
//! Diagonal entries (where plus == minus) are the five neutral natures. The
//! grid makes the modifier lookup a pair of divisions instead of a table.

use serde::{Deserialize, Serialize};

/// Stat index for nature-affected stats (HP excluded)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

/// Creature nature (affects stat growth).
///
/// Discriminants follow the 5x5 grid; neutral natures fill the diagonal
/// slots in alphabetical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Bashful = 0,
    Lonely = 1,  // +Atk -Def
    Adamant = 2, // +Atk -SpA
    Naughty = 3, // +Atk -SpD
    Brave = 4,   // +Atk -Spe
    Bold = 5,    // +Def -Atk
    Docile = 6,
    Impish = 7,  // +Def -SpA
    Lax = 8,     // +Def -SpD
    Relaxed = 9, // +Def -Spe
    Modest = 10, // +SpA -Atk
    Mild = 11,   // +SpA -Def
    Hardy = 12,
    Rash = 13,  // +SpA -SpD
    Quiet = 14, // +SpA -Spe
    Calm = 15,  // +SpD -Atk
    Gentle = 16, // +SpD -Def
    Careful = 17, // +SpD -SpA
    Quirky = 18,
    Sassy = 19, // +SpD -Spe
    Timid = 20, // +Spe -Atk
    Hasty = 21, // +Spe -Def
    Jolly = 22, // +Spe -SpA
    Naive = 23, // +Spe -SpD
    Serious = 24,
}

impl NatureId {
    /// Every nature, in grid-id order. This is the canonical candidate
    /// order for searches.
    pub const ALL: [NatureId; 25] = [
        NatureId::Bashful,
        NatureId::Lonely,
        NatureId::Adamant,
        NatureId::Naughty,
        NatureId::Brave,
        NatureId::Bold,
        NatureId::Docile,
        NatureId::Impish,
        NatureId::Lax,
        NatureId::Relaxed,
        NatureId::Modest,
        NatureId::Mild,
        NatureId::Hardy,
        NatureId::Rash,
        NatureId::Quiet,
        NatureId::Calm,
        NatureId::Gentle,
        NatureId::Careful,
        NatureId::Quirky,
        NatureId::Sassy,
        NatureId::Timid,
        NatureId::Hasty,
        NatureId::Jolly,
        NatureId::Naive,
        NatureId::Serious,
    ];

    /// Parse nature from string (case-insensitive)
    #[inline]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bashful" | "Bashful" => Some(NatureId::Bashful),
            "lonely" | "Lonely" => Some(NatureId::Lonely),
            "adamant" | "Adamant" => Some(NatureId::Adamant),
            "naughty" | "Naughty" => Some(NatureId::Naughty),
            "brave" | "Brave" => Some(NatureId::Brave),
            "bold" | "Bold" => Some(NatureId::Bold),
            "docile" | "Docile" => Some(NatureId::Docile),
            "impish" | "Impish" => Some(NatureId::Impish),
            "lax" | "Lax" => Some(NatureId::Lax),
            "relaxed" | "Relaxed" => Some(NatureId::Relaxed),
            "modest" | "Modest" => Some(NatureId::Modest),
            "mild" | "Mild" => Some(NatureId::Mild),
            "hardy" | "Hardy" => Some(NatureId::Hardy),
            "rash" | "Rash" => Some(NatureId::Rash),
            "quiet" | "Quiet" => Some(NatureId::Quiet),
            "calm" | "Calm" => Some(NatureId::Calm),
            "gentle" | "Gentle" => Some(NatureId::Gentle),
            "careful" | "Careful" => Some(NatureId::Careful),
            "quirky" | "Quirky" => Some(NatureId::Quirky),
            "sassy" | "Sassy" => Some(NatureId::Sassy),
            "timid" | "Timid" => Some(NatureId::Timid),
            "hasty" | "Hasty" => Some(NatureId::Hasty),
            "jolly" | "Jolly" => Some(NatureId::Jolly),
            "naive" | "Naive" => Some(NatureId::Naive),
            "serious" | "Serious" => Some(NatureId::Serious),
            _ => None,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            NatureId::Bashful => "Bashful",
            NatureId::Lonely => "Lonely",
            NatureId::Adamant => "Adamant",
            NatureId::Naughty => "Naughty",
            NatureId::Brave => "Brave",
            NatureId::Bold => "Bold",
            NatureId::Docile => "Docile",
            NatureId::Impish => "Impish",
            NatureId::Lax => "Lax",
            NatureId::Relaxed => "Relaxed",
            NatureId::Modest => "Modest",
            NatureId::Mild => "Mild",
            NatureId::Hardy => "Hardy",
            NatureId::Rash => "Rash",
            NatureId::Quiet => "Quiet",
            NatureId::Calm => "Calm",
            NatureId::Gentle => "Gentle",
            NatureId::Careful => "Careful",
            NatureId::Quirky => "Quirky",
            NatureId::Sassy => "Sassy",
            NatureId::Timid => "Timid",
            NatureId::Hasty => "Hasty",
            NatureId::Jolly => "Jolly",
            NatureId::Naive => "Naive",
            NatureId::Serious => "Serious",
        }
    }

    /// Get stat modifier for a given stat
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%)
    /// Multiply by stat/10 to apply
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let stat_idx = stat as u8;

        if plus == minus {
            10 // Neutral nature
        } else if stat_idx == plus {
            11 // +10%
        } else if stat_idx == minus {
            9 // -10%
        } else {
            10 // Unaffected
        }
    }

    /// Check if this is a neutral nature (no stat changes)
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }

    /// The single boosted stat, if any
    #[inline]
    pub const fn boosted(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(battle_stat_from_index(self as u8 / 5))
        }
    }

    /// The single hindered stat, if any
    #[inline]
    pub const fn hindered(self) -> Option<BattleStat> {
        if self.is_neutral() {
            None
        } else {
            Some(battle_stat_from_index(self as u8 % 5))
        }
    }
}

#[inline]
const fn battle_stat_from_index(index: u8) -> BattleStat {
    match index {
        0 => BattleStat::Atk,
        1 => BattleStat::Def,
        2 => BattleStat::SpA,
        3 => BattleStat::SpD,
        _ => BattleStat::Spe,
    }
}
