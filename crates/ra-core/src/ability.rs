//! The ability catalog: every discrete bonus an artifact can carry.
//!
//! Each entry is tagged with the item-type family it applies to, so the
//! frequency machinery can filter and rescale per item type, and mapped to
//! one of a small set of appliers. Applying an ability an artifact already
//! has is a no-op on the flag paths; numeric paths are gated by inhibition
//! ceilings instead.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::consts::*;
use crate::flags::{MiscFlags, PowerFlags, ProtFlags};
use crate::item::{Activation, Artifact, ItemCategory};
use ra_rng::GameRng;

/// Item-type applicability families. The families partition the item-type
/// space: each catalog entry belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Family {
    Bow,
    AnyWeapon,
    NonWeapon,
    Melee,
    AllArmor,
    Boots,
    Gloves,
    Headgear,
    Shield,
    Cloak,
    BodyArmor,
    General,
}

impl Family {
    /// Whether abilities of this family may appear on the given category
    pub fn applies_to(self, category: ItemCategory) -> bool {
        match self {
            Family::Bow => category == ItemCategory::Bow,
            Family::AnyWeapon => category.is_weapon(),
            Family::NonWeapon => !category.is_weapon(),
            Family::Melee => category.is_melee(),
            Family::AllArmor => category.is_armor(),
            Family::Boots => category == ItemCategory::Boots,
            Family::Gloves => category == ItemCategory::Gloves,
            Family::Headgear => category.is_headgear(),
            Family::Shield => category == ItemCategory::Shield,
            Family::Cloak => category == ItemCategory::Cloak,
            Family::BodyArmor => category.is_body_armor(),
            Family::General => true,
        }
    }
}

/// One slot in the learned-probability tables.
///
/// Several abilities appear once per family (AC, see-invisible, ...) so the
/// empirical skew of, say, ESP toward headgear survives into generation.
/// Supercharged variants carry their own entries; they are tallied and
/// floored but never drawn from the per-item table - only the one-shot
/// supercharge pass rolls against them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    FromRepr,
)]
#[repr(usize)]
pub enum Ability {
    BowShots,
    BowMight,
    BowBrand,
    BowSlay,
    BowShotsSuper,
    BowMightSuper,

    WeaponHit,
    WeaponDam,
    WeaponAggravate,

    NonweaponHit,
    NonweaponDam,
    NonweaponHitDam,
    NonweaponBrand,
    NonweaponSlay,
    NonweaponBlows,
    NonweaponShots,
    NonweaponAggravate,

    MeleeBless,
    MeleeBrand,
    MeleeSlay,
    MeleeSeeInvis,
    MeleeBlows,
    MeleeAc,
    MeleeDice,
    MeleeWeight,
    MeleeTunnel,
    MeleeDiceSuper,
    MeleeBlowsSuper,

    ArmorWeight,

    BootAc,
    BootFeather,
    BootStealth,
    BootSpeed,

    GloveAc,
    GloveFreeAct,
    GloveDex,

    HelmAc,
    HelmResBlind,
    HelmEsp,
    HelmSeeInvis,
    HelmWis,
    HelmInt,

    ShieldAc,
    ShieldLowResist,

    CloakAc,
    CloakStealth,

    BodyAc,
    BodyStealth,
    BodyHoldLife,
    BodyCon,
    BodyLowResist,
    BodyAllResist,
    BodyHighResist,

    GenStat,
    GenSustain,
    GenStealth,
    GenSearch,
    GenInfra,
    GenSpeed,
    GenImmunity,
    GenFreeAct,
    GenHoldLife,
    GenFeather,
    GenLight,
    GenSeeInvis,
    GenEsp,
    GenSlowDigest,
    GenRegen,
    GenLowResist,
    GenResPoison,
    GenResFear,
    GenResLight,
    GenResDark,
    GenResBlind,
    GenResConfusion,
    GenResSound,
    GenResShards,
    GenResNexus,
    GenResNether,
    GenResChaos,
    GenResDisenchant,
    GenAc,
    GenTunnel,
    GenActivation,
    GenSpeedSuper,
    GenAcSuper,
}

/// Number of catalog entries; frequency arrays are indexed by ability
pub const ABILITY_COUNT: usize = 86;

impl Ability {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::from_repr(i)
    }

    /// The applicability family this entry belongs to
    pub fn family(self) -> Family {
        use Ability::*;
        match self {
            BowShots | BowMight | BowBrand | BowSlay | BowShotsSuper | BowMightSuper => Family::Bow,
            WeaponHit | WeaponDam | WeaponAggravate => Family::AnyWeapon,
            NonweaponHit | NonweaponDam | NonweaponHitDam | NonweaponBrand | NonweaponSlay
            | NonweaponBlows | NonweaponShots | NonweaponAggravate => Family::NonWeapon,
            MeleeBless | MeleeBrand | MeleeSlay | MeleeSeeInvis | MeleeBlows | MeleeAc
            | MeleeDice | MeleeWeight | MeleeTunnel | MeleeDiceSuper | MeleeBlowsSuper => {
                Family::Melee
            }
            ArmorWeight => Family::AllArmor,
            BootAc | BootFeather | BootStealth | BootSpeed => Family::Boots,
            GloveAc | GloveFreeAct | GloveDex => Family::Gloves,
            HelmAc | HelmResBlind | HelmEsp | HelmSeeInvis | HelmWis | HelmInt => Family::Headgear,
            ShieldAc | ShieldLowResist => Family::Shield,
            CloakAc | CloakStealth => Family::Cloak,
            BodyAc | BodyStealth | BodyHoldLife | BodyCon | BodyLowResist | BodyAllResist
            | BodyHighResist => Family::BodyArmor,
            _ => Family::General,
        }
    }

    /// Whether this entry is a supercharged variant
    pub fn is_supercharge(self) -> bool {
        use Ability::*;
        matches!(
            self,
            BowShotsSuper | BowMightSuper | MeleeDiceSuper | MeleeBlowsSuper | GenSpeedSuper
                | GenAcSuper
        )
    }
}

/// The twelve high resists, in frequency-slot order
pub const HIGH_RESIST_ABILITIES: [Ability; 12] = [
    Ability::GenResPoison,
    Ability::GenResFear,
    Ability::GenResLight,
    Ability::GenResDark,
    Ability::GenResBlind,
    Ability::GenResConfusion,
    Ability::GenResSound,
    Ability::GenResShards,
    Ability::GenResNexus,
    Ability::GenResNether,
    Ability::GenResChaos,
    Ability::GenResDisenchant,
];

const HIGH_RESIST_FLAGS: [ProtFlags; 12] = [
    ProtFlags::RES_POIS,
    ProtFlags::RES_FEAR,
    ProtFlags::RES_LIGHT,
    ProtFlags::RES_DARK,
    ProtFlags::RES_BLIND,
    ProtFlags::RES_CONFU,
    ProtFlags::RES_SOUND,
    ProtFlags::RES_SHARD,
    ProtFlags::RES_NEXUS,
    ProtFlags::RES_NETHR,
    ProtFlags::RES_CHAOS,
    ProtFlags::RES_DISEN,
];

const BRAND_FLAGS: [PowerFlags; 5] = [
    PowerFlags::BRAND_ACID,
    PowerFlags::BRAND_ELEC,
    PowerFlags::BRAND_FIRE,
    PowerFlags::BRAND_COLD,
    PowerFlags::BRAND_POIS,
];

const SLAY_FLAGS: [PowerFlags; 11] = [
    PowerFlags::SLAY_ANIMAL,
    PowerFlags::SLAY_EVIL,
    PowerFlags::SLAY_UNDEAD,
    PowerFlags::SLAY_DEMON,
    PowerFlags::SLAY_ORC,
    PowerFlags::SLAY_TROLL,
    PowerFlags::SLAY_GIANT,
    PowerFlags::SLAY_DRAGON,
    PowerFlags::KILL_DRAGON,
    PowerFlags::KILL_DEMON,
    PowerFlags::KILL_UNDEAD,
];

const STAT_FLAGS: [PowerFlags; 6] = [
    PowerFlags::STR,
    PowerFlags::INT,
    PowerFlags::WIS,
    PowerFlags::DEX,
    PowerFlags::CON,
    PowerFlags::CHR,
];

const SUSTAIN_FLAGS: [ProtFlags; 6] = [
    ProtFlags::SUST_STR,
    ProtFlags::SUST_INT,
    ProtFlags::SUST_WIS,
    ProtFlags::SUST_DEX,
    ProtFlags::SUST_CON,
    ProtFlags::SUST_CHR,
];

const LOW_RESIST_FLAGS: [ProtFlags; 4] = [
    ProtFlags::RES_ACID,
    ProtFlags::RES_ELEC,
    ProtFlags::RES_FIRE,
    ProtFlags::RES_COLD,
];

const IMMUNITY_FLAGS: [ProtFlags; 4] = [
    ProtFlags::IM_ACID,
    ProtFlags::IM_ELEC,
    ProtFlags::IM_FIRE,
    ProtFlags::IM_COLD,
];

/// Context the appliers need beyond the record itself
#[derive(Debug, Clone, Copy)]
pub struct ApplyCtx<'a> {
    /// Power rating the synthesizer is steering toward
    pub target_power: i32,
    /// Strongest non-inhibited rating in the reference set
    pub max_power: i32,
    /// Weights for the twelve high resists, frequency-slot order
    pub high_resist_weights: &'a [i32; 12],
}

/// Add a boolean flag in the offensive word. Returns false if already set.
pub fn add_power_flag(art: &mut Artifact, flag: PowerFlags) -> bool {
    if art.power_flags.contains(flag) {
        return false;
    }
    art.power_flags.insert(flag);
    true
}

/// Add a boolean flag in the protection word. Returns false if already set.
pub fn add_prot_flag(art: &mut Artifact, flag: ProtFlags) -> bool {
    if art.prot_flags.contains(flag) {
        return false;
    }
    art.prot_flags.insert(flag);
    true
}

/// Add a boolean flag in the misc word. Returns false if already set.
pub fn add_misc_flag(art: &mut Artifact, flag: MiscFlags) -> bool {
    if art.misc_flags.contains(flag) {
        return false;
    }
    art.misc_flags.insert(flag);
    true
}

/// An ability using the pval bonus was just added; make sure pval is not
/// zero. A negative pval stays negative (and may get worse). Growth is
/// rarer the higher pval already is, and rarer again when blows, might or
/// shots ride on the same pval.
pub fn do_pval(art: &mut Artifact, rng: &mut GameRng) {
    let mut factor: i32 = 1;
    if art.power_flags.contains(PowerFlags::BLOWS) {
        factor += 1;
    }
    if art.power_flags.contains(PowerFlags::MIGHT) {
        factor += 1;
    }
    if art.power_flags.contains(PowerFlags::SHOTS) {
        factor += 1;
    }

    if art.pval == 0 {
        if factor > 1 {
            art.pval = rng.randint1(2) as i16;
            if rng.one_in(6) {
                art.pval = 3;
            }
        } else {
            art.pval = rng.randint1(4) as i16;
        }
    } else if art.pval < 0 {
        if rng.one_in(2) {
            art.pval -= 1;
        }
    } else if rng.one_in((art.pval as i32 * factor) as u32) {
        art.pval += 1;
    }
}

/// Add a pval-driven flag, always adjusting the pval
fn add_pval_flag(art: &mut Artifact, flag: PowerFlags, rng: &mut GameRng) {
    art.power_flags.insert(flag);
    do_pval(art, rng);
}

/// Add a pval-driven flag, leaving the pval alone when the flag was
/// already present. Returns true when changes were made.
fn add_fixed_pval_flag(art: &mut Artifact, flag: PowerFlags, rng: &mut GameRng) -> bool {
    if art.power_flags.contains(flag) {
        return false;
    }
    art.power_flags.insert(flag);
    do_pval(art, rng);
    true
}

/// Add a pval-driven flag with a fresh initial pval when none is set yet.
/// Used for speed, where a stacked increment would be far too strong.
fn add_first_pval_flag(art: &mut Artifact, flag: PowerFlags, rng: &mut GameRng) {
    art.power_flags.insert(flag);
    if art.pval == 0 {
        art.pval = rng.randint1(4) as i16;
        return;
    }
    do_pval(art, rng);
}

/// Bump to-hit, unless the current value is already past the inhibition
/// ceilings: a high value needs a 1-in-2 override, a very high value always
/// blocks the addition.
fn add_to_hit(art: &mut Artifact, fixed: i32, random: i32, rng: &mut GameRng) {
    if art.to_h > VERYHIGH_TO_HIT {
        return;
    }
    if art.to_h > HIGH_TO_HIT && !rng.one_in(2) {
        return;
    }
    art.to_h += (fixed + rng.randint0(random as u32) as i32) as i16;
    if art.to_h > 0 {
        art.misc_flags.insert(MiscFlags::SHOW_MODS);
    }
}

fn add_to_dam(art: &mut Artifact, fixed: i32, random: i32, rng: &mut GameRng) {
    if art.to_d > VERYHIGH_TO_DAM {
        return;
    }
    if art.to_d > HIGH_TO_DAM && !rng.one_in(2) {
        return;
    }
    art.to_d += (fixed + rng.randint0(random as u32) as i32) as i16;
    if art.to_d > 0 {
        art.misc_flags.insert(MiscFlags::SHOW_MODS);
    }
}

fn add_to_ac(art: &mut Artifact, fixed: i32, random: i32, rng: &mut GameRng) {
    if art.to_a > VERYHIGH_TO_AC {
        return;
    }
    if art.to_a > HIGH_TO_AC && !rng.one_in(2) {
        return;
    }
    art.to_a += (fixed + rng.randint0(random as u32) as i32) as i16;
}

fn add_damage_dice(art: &mut Artifact, rng: &mut GameRng) {
    art.dd += rng.randint1(2) as u8;
}

fn add_weight_mod(art: &mut Artifact) {
    art.weight = art.weight * 9 / 10;
}

/// Pick a stat bonus the artifact does not have yet
fn add_stat(art: &mut Artifact, rng: &mut GameRng) {
    if art.power_flags.contains(PowerFlags::ALL_STATS) {
        return;
    }
    loop {
        let flag = STAT_FLAGS[rng.randint0(6) as usize];
        if add_fixed_pval_flag(art, flag, rng) {
            return;
        }
    }
}

/// Pick a sustain the artifact does not have yet
fn add_sustain(art: &mut Artifact, rng: &mut GameRng) {
    if art.prot_flags.contains(ProtFlags::ALL_SUSTAINS) {
        return;
    }
    loop {
        let flag = SUSTAIN_FLAGS[rng.randint0(6) as usize];
        if add_prot_flag(art, flag) {
            return;
        }
    }
}

/// Pick a low resist the artifact does not have yet
fn add_low_resist(art: &mut Artifact, rng: &mut GameRng) {
    if art.prot_flags.contains(ProtFlags::ALL_LOW_RESISTS) {
        return;
    }
    loop {
        let flag = LOW_RESIST_FLAGS[rng.randint0(4) as usize];
        if add_prot_flag(art, flag) {
            return;
        }
    }
}

/// Pick a high resist, weighted by the learned distribution. Fails cleanly
/// (no change) when every high resist is present or all weights are zero.
fn add_high_resist(art: &mut Artifact, weights: &[i32; 12], rng: &mut GameRng) {
    let total: i32 = weights.iter().map(|w| (*w).max(0)).sum();
    if total <= 0 {
        return;
    }
    for _ in 0..MAX_TRIES {
        let r = rng.randint1(total as u32) as i32;
        let mut acc = 0;
        let mut pick = 0usize;
        for (i, w) in weights.iter().enumerate() {
            acc += (*w).max(0);
            if r <= acc {
                pick = i;
                break;
            }
        }
        if add_prot_flag(art, HIGH_RESIST_FLAGS[pick]) {
            return;
        }
    }
}

/// Add a random brand or slay not already present
fn add_slay(art: &mut Artifact, brand: bool, rng: &mut GameRng) {
    for _ in 0..MAX_TRIES {
        let flag = if brand {
            BRAND_FLAGS[rng.randint0(BRAND_FLAGS.len() as u32) as usize]
        } else {
            SLAY_FLAGS[rng.randint0(SLAY_FLAGS.len() as u32) as usize]
        };
        if add_power_flag(art, flag) {
            return;
        }
    }
}

/// Add a random elemental immunity. All four are equally likely.
fn add_immunity(art: &mut Artifact, rng: &mut GameRng) {
    let flag = IMMUNITY_FLAGS[rng.randint0(4) as usize];
    art.prot_flags.insert(flag);
}

/// Give the artifact an activation roughly proportionate to its power.
/// Called only when it has none yet.
fn add_activation(art: &mut Artifact, ctx: &ApplyCtx, rng: &mut GameRng) {
    let effects: Vec<Activation> = Activation::iter().collect();
    let max_effect = effects.iter().map(|e| e.power()).max().unwrap_or(0);
    if max_effect == 0 || ctx.max_power <= 0 {
        return;
    }
    for _ in 0..MAX_TRIES {
        let effect = effects[rng.randint0(effects.len() as u32) as usize];
        let p = effect.power();
        let scaled = 100 * p / max_effect;
        if scaled > 50 * ctx.target_power / ctx.max_power
            && scaled < 200 * ctx.target_power / ctx.max_power
        {
            art.activation = Some(effect);
            art.recharge.base = (p * 8) as u16;
            art.recharge.dice = if p > 5 { (p / 5) as u8 } else { 1 };
            art.recharge.sides = p as u8;
            return;
        }
    }
}

/// Strip contradictory or redundant powers after a mutation.
pub fn remove_contradictory(art: &mut Artifact) {
    if art.misc_flags.contains(MiscFlags::AGGRAVATE) {
        art.power_flags.remove(PowerFlags::STEALTH);
    }
    if art.prot_flags.contains(ProtFlags::IM_ACID) {
        art.prot_flags.remove(ProtFlags::RES_ACID);
    }
    if art.prot_flags.contains(ProtFlags::IM_ELEC) {
        art.prot_flags.remove(ProtFlags::RES_ELEC);
    }
    if art.prot_flags.contains(ProtFlags::IM_FIRE) {
        art.prot_flags.remove(ProtFlags::RES_FIRE);
    }
    if art.prot_flags.contains(ProtFlags::IM_COLD) {
        art.prot_flags.remove(ProtFlags::RES_COLD);
    }

    if art.pval < 0 {
        if art.power_flags.contains(PowerFlags::STR) {
            art.prot_flags.remove(ProtFlags::SUST_STR);
        }
        if art.power_flags.contains(PowerFlags::INT) {
            art.prot_flags.remove(ProtFlags::SUST_INT);
        }
        if art.power_flags.contains(PowerFlags::WIS) {
            art.prot_flags.remove(ProtFlags::SUST_WIS);
        }
        if art.power_flags.contains(PowerFlags::DEX) {
            art.prot_flags.remove(ProtFlags::SUST_DEX);
        }
        if art.power_flags.contains(PowerFlags::CON) {
            art.prot_flags.remove(ProtFlags::SUST_CON);
        }
        if art.power_flags.contains(PowerFlags::CHR) {
            art.prot_flags.remove(ProtFlags::SUST_CHR);
        }
        art.power_flags.remove(PowerFlags::BLOWS);
    }

    if art.misc_flags.contains(MiscFlags::LIGHT_CURSE) {
        art.misc_flags.remove(MiscFlags::BLESSED);
    }
    if art.power_flags.contains(PowerFlags::KILL_DRAGON) {
        art.power_flags.remove(PowerFlags::SLAY_DRAGON);
    }
    if art.power_flags.contains(PowerFlags::KILL_DEMON) {
        art.power_flags.remove(PowerFlags::SLAY_DEMON);
    }
    if art.power_flags.contains(PowerFlags::KILL_UNDEAD) {
        art.power_flags.remove(PowerFlags::SLAY_UNDEAD);
    }
    if art.misc_flags.contains(MiscFlags::DRAIN_EXP) {
        art.misc_flags.remove(MiscFlags::HOLD_LIFE);
    }
}

/// Apply one catalog entry to the record.
///
/// Fully general: no applicability checks happen here. Callers draw from a
/// type-filtered table, so an inapplicable ability never arrives. The
/// supercharge entries are handled by the dedicated one-shot pass and are
/// no-ops here.
pub fn apply_ability(art: &mut Artifact, ability: Ability, ctx: &ApplyCtx, rng: &mut GameRng) {
    use Ability::*;
    match ability {
        BowShots | NonweaponShots => add_pval_flag(art, PowerFlags::SHOTS, rng),
        BowMight => add_pval_flag(art, PowerFlags::MIGHT, rng),

        WeaponHit | NonweaponHit => add_to_hit(art, 1, 2 * MEAN_HIT_INCREMENT, rng),
        WeaponDam | NonweaponDam => add_to_dam(art, 1, 2 * MEAN_DAM_INCREMENT, rng),
        NonweaponHitDam => {
            add_to_hit(art, 1, 2 * MEAN_HIT_INCREMENT, rng);
            add_to_dam(art, 1, 2 * MEAN_DAM_INCREMENT, rng);
        }

        WeaponAggravate | NonweaponAggravate => {
            if ctx.target_power > AGGR_POWER {
                add_misc_flag(art, MiscFlags::AGGRAVATE);
            }
        }

        MeleeBless => {
            add_misc_flag(art, MiscFlags::BLESSED);
        }

        BowBrand | MeleeBrand | NonweaponBrand => add_slay(art, true, rng),
        BowSlay | MeleeSlay | NonweaponSlay => add_slay(art, false, rng),

        MeleeSeeInvis | HelmSeeInvis | GenSeeInvis => {
            add_misc_flag(art, MiscFlags::SEE_INVIS);
        }

        MeleeBlows | NonweaponBlows => add_pval_flag(art, PowerFlags::BLOWS, rng),

        MeleeAc | BootAc | GloveAc | HelmAc | ShieldAc | CloakAc | BodyAc | GenAc => {
            add_to_ac(art, 1, 2 * MEAN_AC_INCREMENT, rng)
        }

        MeleeDice => add_damage_dice(art, rng),
        MeleeWeight | ArmorWeight => add_weight_mod(art),
        MeleeTunnel | GenTunnel => add_pval_flag(art, PowerFlags::TUNNEL, rng),

        BootFeather | GenFeather => {
            add_misc_flag(art, MiscFlags::FEATHER);
        }
        BootStealth | CloakStealth | BodyStealth | GenStealth => {
            add_pval_flag(art, PowerFlags::STEALTH, rng)
        }
        BootSpeed | GenSpeed => add_first_pval_flag(art, PowerFlags::SPEED, rng),

        GloveFreeAct | GenFreeAct => {
            add_misc_flag(art, MiscFlags::FREE_ACT);
        }
        GloveDex => {
            add_fixed_pval_flag(art, PowerFlags::DEX, rng);
        }

        HelmResBlind | GenResBlind => {
            add_prot_flag(art, ProtFlags::RES_BLIND);
        }
        HelmEsp | GenEsp => {
            add_misc_flag(art, MiscFlags::TELEPATHY);
        }
        HelmWis => {
            add_fixed_pval_flag(art, PowerFlags::WIS, rng);
        }
        HelmInt => {
            add_fixed_pval_flag(art, PowerFlags::INT, rng);
        }

        ShieldLowResist | BodyLowResist | GenLowResist => add_low_resist(art, rng),

        BodyHoldLife | GenHoldLife => {
            add_misc_flag(art, MiscFlags::HOLD_LIFE);
        }
        BodyCon => {
            add_fixed_pval_flag(art, PowerFlags::CON, rng);
        }
        BodyAllResist => {
            add_prot_flag(art, ProtFlags::RES_ACID);
            add_prot_flag(art, ProtFlags::RES_ELEC);
            add_prot_flag(art, ProtFlags::RES_FIRE);
            add_prot_flag(art, ProtFlags::RES_COLD);
        }
        BodyHighResist => add_high_resist(art, ctx.high_resist_weights, rng),

        GenStat => add_stat(art, rng),
        GenSustain => add_sustain(art, rng),
        GenSearch => add_pval_flag(art, PowerFlags::SEARCH, rng),
        GenInfra => add_pval_flag(art, PowerFlags::INFRA, rng),
        GenImmunity => add_immunity(art, rng),
        GenLight => {
            add_misc_flag(art, MiscFlags::LIGHT);
        }
        GenSlowDigest => {
            add_misc_flag(art, MiscFlags::SLOW_DIGEST);
        }
        GenRegen => {
            add_misc_flag(art, MiscFlags::REGEN);
        }

        GenResPoison => {
            add_prot_flag(art, ProtFlags::RES_POIS);
        }
        GenResFear => {
            add_prot_flag(art, ProtFlags::RES_FEAR);
        }
        GenResLight => {
            add_prot_flag(art, ProtFlags::RES_LIGHT);
        }
        GenResDark => {
            add_prot_flag(art, ProtFlags::RES_DARK);
        }
        GenResConfusion => {
            add_prot_flag(art, ProtFlags::RES_CONFU);
        }
        GenResSound => {
            add_prot_flag(art, ProtFlags::RES_SOUND);
        }
        GenResShards => {
            add_prot_flag(art, ProtFlags::RES_SHARD);
        }
        GenResNexus => {
            add_prot_flag(art, ProtFlags::RES_NEXUS);
        }
        GenResNether => {
            add_prot_flag(art, ProtFlags::RES_NETHR);
        }
        GenResChaos => {
            add_prot_flag(art, ProtFlags::RES_CHAOS);
        }
        GenResDisenchant => {
            add_prot_flag(art, ProtFlags::RES_DISEN);
        }

        GenActivation => {
            if art.activation.is_none() {
                add_activation(art, ctx, rng);
            }
        }

        // Only the one-shot supercharge pass rolls these
        BowShotsSuper | BowMightSuper | MeleeDiceSuper | MeleeBlowsSuper | GenSpeedSuper
        | GenAcSuper => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ArtifactSlot, Recharge};

    fn sword() -> Artifact {
        Artifact {
            name: "test blade".into(),
            slot: ArtifactSlot::Normal,
            category: ItemCategory::Sword,
            subtype: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            ac: 0,
            dd: 2,
            ds: 5,
            pval: 0,
            weight: 130,
            power_flags: PowerFlags::empty(),
            prot_flags: ProtFlags::empty(),
            misc_flags: MiscFlags::empty(),
            activation: None,
            recharge: Recharge::default(),
            alloc_prob: 20,
            alloc_min: 1,
            alloc_max: 127,
            cost: 1000,
        }
    }

    fn ctx(weights: &[i32; 12]) -> ApplyCtx<'_> {
        ApplyCtx {
            target_power: 100,
            max_power: 300,
            high_resist_weights: weights,
        }
    }

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(Ability::iter().count(), ABILITY_COUNT);
        for (i, a) in Ability::iter().enumerate() {
            assert_eq!(a.index(), i);
            assert_eq!(Ability::from_index(i), Some(a));
        }
        assert_eq!(Ability::from_index(ABILITY_COUNT), None);
    }

    #[test]
    fn test_every_entry_has_one_family() {
        // Families partition the catalog: bow-only entries never apply to
        // swords, general ones apply everywhere.
        for a in Ability::iter() {
            let fam = a.family();
            if fam == Family::Bow {
                assert!(!fam.applies_to(ItemCategory::Sword));
                assert!(fam.applies_to(ItemCategory::Bow));
            }
            if fam == Family::General {
                assert!(fam.applies_to(ItemCategory::Cloak));
                assert!(fam.applies_to(ItemCategory::Bow));
            }
        }
    }

    #[test]
    fn test_boolean_flag_idempotent() {
        let mut a = sword();
        assert!(add_misc_flag(&mut a, MiscFlags::FREE_ACT));
        assert!(!add_misc_flag(&mut a, MiscFlags::FREE_ACT));
        assert!(a.misc_flags.contains(MiscFlags::FREE_ACT));
    }

    #[test]
    fn test_do_pval_never_leaves_zero() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let mut a = sword();
            do_pval(&mut a, &mut rng);
            assert_ne!(a.pval, 0);
            assert!((1..=4).contains(&a.pval));
        }
    }

    #[test]
    fn test_do_pval_keeps_negative_negative() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let mut a = sword();
            a.pval = -2;
            do_pval(&mut a, &mut rng);
            assert!(a.pval < 0);
        }
    }

    #[test]
    fn test_to_hit_very_high_always_blocks() {
        let mut rng = GameRng::new(7);
        let mut a = sword();
        a.to_h = VERYHIGH_TO_HIT + 1;
        for _ in 0..50 {
            add_to_hit(&mut a, 1, 8, &mut rng);
        }
        assert_eq!(a.to_h, VERYHIGH_TO_HIT + 1);
    }

    #[test]
    fn test_add_stat_terminates_when_full() {
        let mut rng = GameRng::new(7);
        let mut a = sword();
        a.power_flags = PowerFlags::ALL_STATS;
        let before = a.clone();
        add_stat(&mut a, &mut rng);
        assert_eq!(a, before);
    }

    #[test]
    fn test_add_high_resist_respects_zero_weights() {
        let mut rng = GameRng::new(7);
        let weights = [0i32; 12];
        let mut a = sword();
        add_high_resist(&mut a, &weights, &mut rng);
        assert!(a.prot_flags.is_empty());
    }

    #[test]
    fn test_add_high_resist_follows_weights() {
        let mut rng = GameRng::new(7);
        let mut weights = [0i32; 12];
        weights[0] = 10; // poison only
        let mut a = sword();
        add_high_resist(&mut a, &weights, &mut rng);
        assert!(a.prot_flags.contains(ProtFlags::RES_POIS));
    }

    #[test]
    fn test_remove_contradictory_immunity() {
        let mut a = sword();
        a.prot_flags = ProtFlags::IM_FIRE | ProtFlags::RES_FIRE | ProtFlags::RES_COLD;
        remove_contradictory(&mut a);
        assert!(a.prot_flags.contains(ProtFlags::IM_FIRE));
        assert!(!a.prot_flags.contains(ProtFlags::RES_FIRE));
        assert!(a.prot_flags.contains(ProtFlags::RES_COLD));
    }

    #[test]
    fn test_remove_contradictory_negative_pval() {
        let mut a = sword();
        a.pval = -1;
        a.power_flags = PowerFlags::STR | PowerFlags::BLOWS;
        a.prot_flags = ProtFlags::SUST_STR | ProtFlags::SUST_DEX;
        remove_contradictory(&mut a);
        assert!(!a.prot_flags.contains(ProtFlags::SUST_STR));
        assert!(a.prot_flags.contains(ProtFlags::SUST_DEX));
        assert!(!a.power_flags.contains(PowerFlags::BLOWS));
    }

    #[test]
    fn test_aggravate_needs_power() {
        let mut rng = GameRng::new(7);
        let weights = [0i32; 12];
        let mut a = sword();
        let low = ApplyCtx {
            target_power: 100,
            max_power: 300,
            high_resist_weights: &weights,
        };
        apply_ability(&mut a, Ability::WeaponAggravate, &low, &mut rng);
        assert!(!a.misc_flags.contains(MiscFlags::AGGRAVATE));

        let high = ApplyCtx {
            target_power: AGGR_POWER + 1,
            ..low
        };
        apply_ability(&mut a, Ability::WeaponAggravate, &high, &mut rng);
        assert!(a.misc_flags.contains(MiscFlags::AGGRAVATE));
    }

    #[test]
    fn test_activation_only_added_once() {
        let mut rng = GameRng::new(7);
        let weights = [0i32; 12];
        let c = ctx(&weights);
        let mut a = sword();
        apply_ability(&mut a, Ability::GenActivation, &c, &mut rng);
        let first = a.activation;
        assert!(first.is_some());
        apply_ability(&mut a, Ability::GenActivation, &c, &mut rng);
        assert_eq!(a.activation, first);
    }
}
