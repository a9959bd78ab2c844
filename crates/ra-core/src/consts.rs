//! Tuning constants for the artifact generator.

/// Retry budget for the per-artifact power-matching loop, base item
/// selection, and the bounded pickers (slays, high resists, activations).
pub const MAX_TRIES: u32 = 200;

/// Power rating above which an artifact is too strong to randomize.
/// The power model also uses this as an additive sentinel for ability
/// combinations that must never be generated.
pub const INHIBIT_POWER: i32 = 20000;

/// Power rating below which uncursed artifacts cannot aggravate, so that
/// aggravation shows up only on endgame-quality or cursed items.
pub const AGGR_POWER: i32 = 300;

/// Mean starting values and increments for to-hit, to-dam and AC bonuses.
/// Frequency parsing and ability application must agree on these.
pub const MEAN_HIT_STARTVAL: i32 = 10;
pub const MEAN_DAM_STARTVAL: i32 = 10;
pub const MEAN_AC_STARTVAL: i32 = 15;
pub const MEAN_HIT_INCREMENT: i32 = 4;
pub const MEAN_DAM_INCREMENT: i32 = 4;
pub const MEAN_AC_INCREMENT: i32 = 5;

/// Thresholds above which further numeric bonuses are inhibited.
/// "High" values pass only a 1-in-2 override roll, "very high" values only
/// a 1-in-6 roll.
pub const HIGH_TO_HIT: i16 = 16;
pub const VERYHIGH_TO_HIT: i16 = 26;
pub const HIGH_TO_DAM: i16 = 16;
pub const VERYHIGH_TO_DAM: i16 = 26;
pub const HIGH_TO_AC: i16 = 26;
pub const VERYHIGH_TO_AC: i16 = 36;
