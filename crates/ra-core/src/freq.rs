//! Statistics extraction from the reference artifact set.
//!
//! Walks the hand-authored artifacts once, records their power ratings and
//! rarities, and tabulates how often each ability shows up per item-type
//! family. The learned weights are what make generated artifacts feel
//! statistically similar to the canonical set.
//!
//! Everything here is a value object handed onward by reference; nothing is
//! process-global, so the synthesizer can be unit-tested against synthetic
//! tables.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::ability::{Ability, ABILITY_COUNT, HIGH_RESIST_ABILITIES};
use crate::consts::*;
use crate::error::RandartError;
use crate::flags::{MiscFlags, PowerFlags, ProtFlags};
use crate::item::{Artifact, ArtifactSlot, ItemCatalog, ItemCategory, ReferenceCorpus};
use crate::power::PowerModel;
use ra_rng::GameRng;

/// Per-slot baseline data and the family tallies used as rescaling
/// denominators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineStats {
    /// Power rating of each reference artifact, by corpus index
    pub power: Vec<i32>,
    /// Nominal level of each artifact's base item
    pub item_level: Vec<u8>,
    /// Allocation rarity of each artifact's base item
    pub item_prob: Vec<u8>,
    /// Allocation rarity of each artifact itself
    pub art_alloc: Vec<u8>,
    /// Strongest rating among sane (positive, non-inhibited) artifacts
    pub max_power: i32,
    /// Weakest positive rating
    pub min_power: i32,
    /// Mean of the sane ratings
    pub avg_power: i32,
    /// Variance of the sane ratings
    pub var_power: i32,
    pub melee_total: i32,
    pub bow_total: i32,
    pub body_armor_total: i32,
    pub shield_total: i32,
    pub cloak_total: i32,
    pub headgear_total: i32,
    pub glove_total: i32,
    pub boot_total: i32,
    pub other_total: i32,
    pub total: i32,
}

impl BaselineStats {
    /// Evaluate every reference artifact and tally the family counts.
    pub fn extract(
        corpus: &ReferenceCorpus,
        catalog: &ItemCatalog,
        model: &dyn PowerModel,
    ) -> Result<Self, RandartError> {
        let n = corpus.len();
        let mut power = Vec::with_capacity(n);
        let mut item_level = Vec::with_capacity(n);
        let mut item_prob = Vec::with_capacity(n);
        let mut art_alloc = Vec::with_capacity(n);

        let mut max_power = 0;
        let mut min_power = i32::MAX;
        let mut sane: Vec<i32> = Vec::new();

        let mut stats = Self {
            power: Vec::new(),
            item_level: Vec::new(),
            item_prob: Vec::new(),
            art_alloc: Vec::new(),
            max_power: 0,
            min_power: 0,
            avg_power: 0,
            var_power: 0,
            melee_total: 0,
            bow_total: 0,
            body_armor_total: 0,
            shield_total: 0,
            cloak_total: 0,
            headgear_total: 0,
            glove_total: 0,
            boot_total: 0,
            other_total: 0,
            total: 0,
        };

        for art in corpus.artifacts() {
            let kind = catalog
                .lookup(art.category, art.subtype)
                .ok_or(RandartError::UnknownKind {
                    category: art.category,
                    subtype: art.subtype,
                })?;
            let p = model.power(art, kind);

            if p > max_power && p < INHIBIT_POWER {
                max_power = p;
            }
            if p < min_power && p > 0 {
                min_power = p;
            }
            if p > 0 && p < INHIBIT_POWER {
                sane.push(p);
            }

            power.push(p);
            item_level.push(kind.level);
            item_prob.push(kind.alloc_prob);
            art_alloc.push(art.alloc_prob);

            match art.category {
                c if c.is_melee() => stats.melee_total += 1,
                ItemCategory::Bow => stats.bow_total += 1,
                c if c.is_body_armor() => stats.body_armor_total += 1,
                ItemCategory::Shield => stats.shield_total += 1,
                ItemCategory::Cloak => stats.cloak_total += 1,
                c if c.is_headgear() => stats.headgear_total += 1,
                ItemCategory::Gloves => stats.glove_total += 1,
                ItemCategory::Boots => stats.boot_total += 1,
                _ => stats.other_total += 1,
            }
        }

        stats.total = stats.melee_total
            + stats.bow_total
            + stats.body_armor_total
            + stats.shield_total
            + stats.cloak_total
            + stats.headgear_total
            + stats.glove_total
            + stats.boot_total
            + stats.other_total;

        let mean = if sane.is_empty() {
            0
        } else {
            sane.iter().sum::<i32>() / sane.len() as i32
        };
        let var = if sane.is_empty() {
            0
        } else {
            sane.iter().map(|p| (p - mean) * (p - mean)).sum::<i32>() / sane.len() as i32
        };

        stats.power = power;
        stats.item_level = item_level;
        stats.item_prob = item_prob;
        stats.art_alloc = art_alloc;
        stats.max_power = max_power;
        stats.min_power = if min_power == i32::MAX { 0 } else { min_power };
        stats.avg_power = mean;
        stats.var_power = var;

        debug!(
            max = stats.max_power,
            min = stats.min_power,
            mean = stats.avg_power,
            variance = stats.var_power,
            "extracted baseline power statistics"
        );

        Ok(stats)
    }

    /// Denominator for rescaling a restricted family's raw counts
    fn family_denominator(&self, family: crate::ability::Family) -> (&'static str, i32) {
        use crate::ability::Family::*;
        match family {
            Bow => ("bow", self.bow_total),
            AnyWeapon => ("weapon", self.bow_total + self.melee_total),
            NonWeapon => ("non-weapon", self.total - self.bow_total - self.melee_total),
            Melee => ("melee weapon", self.melee_total),
            AllArmor => (
                "armor",
                self.body_armor_total
                    + self.boot_total
                    + self.shield_total
                    + self.headgear_total
                    + self.cloak_total
                    + self.glove_total,
            ),
            Boots => ("boots", self.boot_total),
            Gloves => ("gloves", self.glove_total),
            Headgear => ("headgear", self.headgear_total),
            Shield => ("shield", self.shield_total),
            Cloak => ("cloak", self.cloak_total),
            BodyArmor => ("body armor", self.body_armor_total),
            General => ("general", self.total),
        }
    }
}

/// Learned ability weights, indexed by catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    probs: Vec<i32>,
}

/// Cumulative, type-filtered sampling table built per artifact
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    cum: Vec<i32>,
}

impl FrequencyTable {
    /// Direct access to a single weight
    pub fn prob(&self, ability: Ability) -> i32 {
        self.probs[ability.index()]
    }

    #[cfg(test)]
    pub(crate) fn from_raw(probs: Vec<i32>) -> Self {
        assert_eq!(probs.len(), ABILITY_COUNT);
        Self { probs }
    }

    /// Weights for the twelve high resists, in frequency-slot order
    pub fn high_resist_weights(&self) -> [i32; 12] {
        let mut w = [0i32; 12];
        for (i, a) in HIGH_RESIST_ABILITIES.iter().enumerate() {
            w[i] = self.prob(*a);
        }
        w
    }

    /// Roll a one-shot supercharge chance: a uniform draw over the corpus
    /// size against the learned weight.
    pub fn supercharge_roll(&self, ability: Ability, corpus_len: usize, rng: &mut GameRng) -> bool {
        rng.randint0(corpus_len as u32) < self.prob(ability).max(0) as u32
    }

    /// Tabulate ability frequencies over the reference set.
    ///
    /// Named entries are exempt from randomization and excluded; so are
    /// cursed-looking artifacts (negative rating), which are intentionally
    /// bad items rather than desirable exemplars.
    pub fn parse(
        corpus: &ReferenceCorpus,
        catalog: &ItemCatalog,
        baseline: &BaselineStats,
    ) -> Result<Self, RandartError> {
        let mut probs = vec![0i32; ABILITY_COUNT];

        for (idx, art) in corpus.artifacts().iter().enumerate() {
            if art.slot == ArtifactSlot::Named {
                continue;
            }
            if baseline.power[idx] < 0 {
                continue;
            }
            let kind = catalog
                .lookup(art.category, art.subtype)
                .ok_or(RandartError::UnknownKind {
                    category: art.category,
                    subtype: art.subtype,
                })?;

            tally_artifact(&mut probs, art, kind);
        }

        let mut table = Self { probs };
        table.rescale(baseline)?;
        table.adjust();

        for ability in Ability::iter() {
            debug!(
                ability = %ability,
                weight = table.prob(ability),
                "rescaled ability frequency"
            );
        }

        Ok(table)
    }

    /// Rescale family-restricted counts as though the entire reference set
    /// were made up of that family, so restricted and universal abilities
    /// become comparable. Supercharged entries keep their raw counts; only
    /// the floor adjustment below touches them.
    fn rescale(&mut self, baseline: &BaselineStats) -> Result<(), RandartError> {
        use crate::ability::Family;
        for ability in Ability::iter() {
            if ability.is_supercharge() {
                continue;
            }
            let family = ability.family();
            if family == Family::General {
                continue;
            }
            let i = ability.index();
            if self.probs[i] == 0 {
                // Nothing tallied; an absent family is fine here
                continue;
            }
            let (name, denom) = baseline.family_denominator(family);
            if denom <= 0 {
                // A nonzero tally with no artifacts of the family means
                // the tallies and the totals disagree about the corpus
                return Err(RandartError::EmptyFamily { category: name });
            }
            self.probs[i] = self.probs[i] * baseline.total / denom;
        }
        Ok(())
    }

    /// Enforce minimum weights for rare-but-wanted abilities so they never
    /// vanish from the generator's vocabulary, then halve the aggravation
    /// slots (they are tallied from two directions).
    fn adjust(&mut self) {
        fn floor(probs: &mut [i32], a: Ability, min: i32) {
            let i = a.index();
            if probs[i] < min {
                probs[i] = min;
            }
        }

        floor(&mut self.probs, Ability::GenResFear, 5);
        floor(&mut self.probs, Ability::MeleeDiceSuper, 5);
        floor(&mut self.probs, Ability::BowShotsSuper, 5);
        floor(&mut self.probs, Ability::BowMightSuper, 5);
        floor(&mut self.probs, Ability::MeleeBlowsSuper, 5);
        floor(&mut self.probs, Ability::GenSpeedSuper, 5);
        floor(&mut self.probs, Ability::GenAc, 5);
        floor(&mut self.probs, Ability::GenTunnel, 5);
        floor(&mut self.probs, Ability::GenAcSuper, 5);
        floor(&mut self.probs, Ability::MeleeAc, 5);
        floor(&mut self.probs, Ability::NonweaponBrand, 2);
        floor(&mut self.probs, Ability::NonweaponSlay, 2);
        floor(&mut self.probs, Ability::BowBrand, 2);
        floor(&mut self.probs, Ability::BowSlay, 2);
        floor(&mut self.probs, Ability::NonweaponBlows, 2);
        floor(&mut self.probs, Ability::NonweaponShots, 2);

        self.probs[Ability::NonweaponAggravate.index()] /= 2;
        self.probs[Ability::WeaponAggravate.index()] /= 2;

        for p in self.probs.iter_mut() {
            if *p < 0 {
                *p = 0;
            }
        }
    }

    /// Build the cumulative sampling table for one item type. Abilities
    /// whose family does not cover the type get weight zero, as do the
    /// supercharged entries (the one-shot pass owns those).
    pub fn build_item_table(&self, category: ItemCategory) -> CumulativeTable {
        let mut cum = vec![0i32; ABILITY_COUNT];
        let mut running = 0i32;
        for ability in Ability::iter() {
            let i = ability.index();
            if !ability.is_supercharge() && ability.family().applies_to(category) {
                running += self.probs[i].max(0);
            }
            cum[i] = running;
        }
        CumulativeTable { cum }
    }
}

impl CumulativeTable {
    /// Total weight in the table
    pub fn total(&self) -> i32 {
        *self.cum.last().unwrap_or(&0)
    }

    /// Draw one ability: uniform in [1, total], first index whose
    /// cumulative value covers the draw. None if the table is empty.
    pub fn sample(&self, rng: &mut GameRng) -> Option<Ability> {
        let total = self.total();
        if total <= 0 {
            return None;
        }
        let r = rng.randint1(total as u32) as i32;
        let idx = self.cum.iter().position(|c| *c >= r)?;
        Ability::from_index(idx)
    }
}

/// Count one artifact's abilities into the frequency slots.
fn tally_artifact(probs: &mut [i32], art: &Artifact, kind: &crate::item::ItemKind) {
    let cat = art.category;
    let pf = art.power_flags;
    let rf = art.prot_flags;
    let mf = art.misc_flags;

    fn bump(probs: &mut [i32], a: Ability, n: i32) {
        probs[a.index()] += n;
    }

    let slays = pf
        .intersection(PowerFlags::ALL_SLAYS)
        .bits()
        .count_ones() as i32;
    let brands = pf
        .intersection(PowerFlags::ALL_BRANDS)
        .bits()
        .count_ones() as i32;

    if cat == ItemCategory::Bow {
        if pf.contains(PowerFlags::SHOTS) {
            if art.pval > 2 {
                bump(probs, Ability::BowShotsSuper, 1);
            } else {
                bump(probs, Ability::BowShots, 1);
            }
        }
        if pf.contains(PowerFlags::MIGHT) {
            if art.pval > 2 {
                bump(probs, Ability::BowMightSuper, 1);
            } else {
                bump(probs, Ability::BowMight, 1);
            }
        }
        bump(probs, Ability::BowSlay, slays);
        bump(probs, Ability::BowBrand, brands);
    }

    if cat.is_weapon() {
        // Hit/dam above the expected start value counts in increments;
        // below it the count goes down, keeping the mean honest.
        let hit =
            (art.to_h as i32 - kind.to_h as i32 - MEAN_HIT_STARTVAL) / MEAN_HIT_INCREMENT;
        bump(probs, Ability::WeaponHit, hit);
        let dam =
            (art.to_d as i32 - kind.to_d as i32 - MEAN_DAM_STARTVAL) / MEAN_DAM_INCREMENT;
        bump(probs, Ability::WeaponDam, dam);

        if mf.contains(MiscFlags::AGGRAVATE) {
            bump(probs, Ability::WeaponAggravate, 1);
        }
    } else {
        let hit_delta = art.to_h as i32 - kind.to_h as i32;
        let dam_delta = art.to_d as i32 - kind.to_d as i32;
        if hit_delta > 0 && hit_delta == dam_delta {
            // Matched hit and dam bonuses are one combined ability
            let n = dam_delta / MEAN_DAM_INCREMENT;
            if n > 0 {
                bump(probs, Ability::NonweaponHitDam, n);
            }
        } else {
            if hit_delta > 0 {
                let n = hit_delta / MEAN_HIT_INCREMENT;
                if n > 0 {
                    bump(probs, Ability::NonweaponHit, n);
                }
            }
            if dam_delta > 0 {
                let n = dam_delta / MEAN_DAM_INCREMENT;
                if n > 0 {
                    bump(probs, Ability::NonweaponDam, n);
                }
            }
        }

        if mf.contains(MiscFlags::AGGRAVATE) {
            bump(probs, Ability::NonweaponAggravate, 1);
        }
        bump(probs, Ability::NonweaponSlay, slays);
        bump(probs, Ability::NonweaponBrand, brands);
        if pf.contains(PowerFlags::BLOWS) {
            bump(probs, Ability::NonweaponBlows, 1);
        }
        if pf.contains(PowerFlags::SHOTS) {
            bump(probs, Ability::NonweaponShots, 1);
        }
    }

    if cat.is_melee() {
        if mf.contains(MiscFlags::BLESSED) {
            bump(probs, Ability::MeleeBless, 1);
        }
        if mf.contains(MiscFlags::SEE_INVIS) {
            bump(probs, Ability::MeleeSeeInvis, 1);
        }
        if pf.contains(PowerFlags::BLOWS) {
            if art.pval > 2 {
                bump(probs, Ability::MeleeBlowsSuper, 1);
            } else {
                bump(probs, Ability::MeleeBlows, 1);
            }
        }
        let ac_delta = art.to_a as i32 - kind.to_a as i32;
        if ac_delta > 0 {
            let n = ac_delta / MEAN_AC_INCREMENT;
            if n > 0 {
                bump(probs, Ability::MeleeAc, n);
            }
        }
        if art.dd > kind.dd {
            if art.dd - kind.dd > 2 {
                bump(probs, Ability::MeleeDiceSuper, 1);
            } else {
                bump(probs, Ability::MeleeDice, 1);
            }
        }
        if art.weight != kind.weight {
            bump(probs, Ability::MeleeWeight, 1);
        }
        if pf.contains(PowerFlags::TUNNEL) {
            bump(probs, Ability::MeleeTunnel, 1);
        }
        bump(probs, Ability::MeleeSlay, slays);
        bump(probs, Ability::MeleeBrand, brands);
    } else if pf.contains(PowerFlags::TUNNEL) {
        bump(probs, Ability::GenTunnel, 1);
    }

    // AC bonuses above the expected start value, routed by item type
    let ac_extra = art.to_a as i32 - kind.to_a as i32 - MEAN_AC_STARTVAL;
    if ac_extra > 0 {
        let n = ac_extra / MEAN_AC_INCREMENT;
        if n > 0 {
            if art.to_a > 20 {
                bump(probs, Ability::GenAcSuper, 1);
            } else if cat == ItemCategory::Boots {
                bump(probs, Ability::BootAc, n);
            } else if cat == ItemCategory::Gloves {
                bump(probs, Ability::GloveAc, n);
            } else if cat.is_headgear() {
                bump(probs, Ability::HelmAc, n);
            } else if cat == ItemCategory::Shield {
                bump(probs, Ability::ShieldAc, n);
            } else if cat == ItemCategory::Cloak {
                bump(probs, Ability::CloakAc, n);
            } else if cat.is_body_armor() {
                bump(probs, Ability::BodyAc, n);
            } else {
                bump(probs, Ability::GenAc, n);
            }
        }
    }

    if cat.is_armor() && art.weight != kind.weight {
        bump(probs, Ability::ArmorWeight, 1);
    }

    // Stat bonuses, with the item-type special cases pulled out first so
    // the empirical skew (wisdom on headgear, dex on gloves...) survives
    if pf.intersects(PowerFlags::ALL_STATS) {
        let mut n = pf.intersection(PowerFlags::ALL_STATS).bits().count_ones() as i32;
        if cat.is_headgear()
            && pf.intersects(PowerFlags::WIS | PowerFlags::INT)
        {
            if pf.contains(PowerFlags::WIS) {
                bump(probs, Ability::HelmWis, 1);
                n -= 1;
            }
            if pf.contains(PowerFlags::INT) {
                bump(probs, Ability::HelmInt, 1);
                n -= 1;
            }
        } else if cat.is_body_armor() && pf.contains(PowerFlags::CON) {
            bump(probs, Ability::BodyCon, 1);
            n -= 1;
        } else if cat == ItemCategory::Gloves && pf.contains(PowerFlags::DEX) {
            bump(probs, Ability::GloveDex, 1);
            n -= 1;
        }
        if n > 0 {
            bump(probs, Ability::GenStat, n);
        }
    }

    let sustains = rf
        .intersection(ProtFlags::ALL_SUSTAINS)
        .bits()
        .count_ones() as i32;
    bump(probs, Ability::GenSustain, sustains);

    if pf.contains(PowerFlags::STEALTH) {
        if cat == ItemCategory::Boots {
            bump(probs, Ability::BootStealth, 1);
        } else if cat == ItemCategory::Cloak {
            bump(probs, Ability::CloakStealth, 1);
        } else if cat.is_body_armor() {
            bump(probs, Ability::BodyStealth, 1);
        } else {
            bump(probs, Ability::GenStealth, 1);
        }
    }
    if pf.contains(PowerFlags::SEARCH) {
        bump(probs, Ability::GenSearch, 1);
    }
    if pf.contains(PowerFlags::INFRA) {
        bump(probs, Ability::GenInfra, 1);
    }

    if pf.contains(PowerFlags::SPEED) {
        if art.pval > 7 {
            bump(probs, Ability::GenSpeedSuper, 1);
        } else if cat == ItemCategory::Boots {
            bump(probs, Ability::BootSpeed, 1);
        } else {
            bump(probs, Ability::GenSpeed, 1);
        }
    }

    let immunities = rf
        .intersection(
            ProtFlags::IM_ACID | ProtFlags::IM_ELEC | ProtFlags::IM_FIRE | ProtFlags::IM_COLD,
        )
        .bits()
        .count_ones() as i32;
    bump(probs, Ability::GenImmunity, immunities);

    if mf.contains(MiscFlags::FREE_ACT) {
        if cat == ItemCategory::Gloves {
            bump(probs, Ability::GloveFreeAct, 1);
        } else {
            bump(probs, Ability::GenFreeAct, 1);
        }
    }
    if mf.contains(MiscFlags::HOLD_LIFE) {
        if cat.is_body_armor() {
            bump(probs, Ability::BodyHoldLife, 1);
        } else {
            bump(probs, Ability::GenHoldLife, 1);
        }
    }
    if mf.contains(MiscFlags::FEATHER) {
        if cat == ItemCategory::Boots {
            bump(probs, Ability::BootFeather, 1);
        } else {
            bump(probs, Ability::GenFeather, 1);
        }
    }
    if mf.contains(MiscFlags::LIGHT) {
        bump(probs, Ability::GenLight, 1);
    }
    if mf.contains(MiscFlags::SEE_INVIS) && !cat.is_melee() {
        if cat.is_headgear() {
            bump(probs, Ability::HelmSeeInvis, 1);
        } else {
            bump(probs, Ability::GenSeeInvis, 1);
        }
    }
    if mf.contains(MiscFlags::TELEPATHY) {
        if cat.is_headgear() {
            bump(probs, Ability::HelmEsp, 1);
        } else {
            bump(probs, Ability::GenEsp, 1);
        }
    }
    if mf.contains(MiscFlags::SLOW_DIGEST) {
        bump(probs, Ability::GenSlowDigest, 1);
    }
    if mf.contains(MiscFlags::REGEN) {
        bump(probs, Ability::GenRegen, 1);
    }

    let low_resists = rf
        .intersection(ProtFlags::ALL_LOW_RESISTS)
        .bits()
        .count_ones() as i32;
    if low_resists > 0 {
        if cat == ItemCategory::Shield {
            bump(probs, Ability::ShieldLowResist, low_resists);
        } else if cat.is_body_armor() {
            if low_resists == 4 {
                bump(probs, Ability::BodyAllResist, 1);
            } else {
                bump(probs, Ability::BodyLowResist, low_resists);
            }
        } else {
            bump(probs, Ability::GenLowResist, low_resists);
        }
    }

    // Body armor tracks a high-resist aggregate of its own; the individual
    // slots below set the proportions, this sets the total.
    let high_resists = [
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
    if cat.is_body_armor() {
        let n = high_resists
            .iter()
            .filter(|f| rf.contains(**f))
            .count() as i32;
        bump(probs, Ability::BodyHighResist, n);
    }

    if rf.contains(ProtFlags::RES_POIS) {
        bump(probs, Ability::GenResPoison, 1);
    }
    if rf.contains(ProtFlags::RES_FEAR) {
        bump(probs, Ability::GenResFear, 1);
    }
    if rf.contains(ProtFlags::RES_LIGHT) {
        bump(probs, Ability::GenResLight, 1);
    }
    if rf.contains(ProtFlags::RES_DARK) {
        bump(probs, Ability::GenResDark, 1);
    }
    if rf.contains(ProtFlags::RES_BLIND) {
        if cat.is_headgear() {
            bump(probs, Ability::HelmResBlind, 1);
        } else {
            bump(probs, Ability::GenResBlind, 1);
        }
    }
    if rf.contains(ProtFlags::RES_CONFU) {
        bump(probs, Ability::GenResConfusion, 1);
    }
    if rf.contains(ProtFlags::RES_SOUND) {
        bump(probs, Ability::GenResSound, 1);
    }
    if rf.contains(ProtFlags::RES_SHARD) {
        bump(probs, Ability::GenResShards, 1);
    }
    if rf.contains(ProtFlags::RES_NEXUS) {
        bump(probs, Ability::GenResNexus, 1);
    }
    if rf.contains(ProtFlags::RES_NETHR) {
        bump(probs, Ability::GenResNether, 1);
    }
    if rf.contains(ProtFlags::RES_CHAOS) {
        bump(probs, Ability::GenResChaos, 1);
    }
    if rf.contains(ProtFlags::RES_DISEN) {
        bump(probs, Ability::GenResDisenchant, 1);
    }

    if art.activation.is_some() {
        bump(probs, Ability::GenActivation, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{standard_catalog, standard_corpus};
    use crate::power::StandardPowerModel;

    fn table() -> (FrequencyTable, BaselineStats) {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let baseline = BaselineStats::extract(&corpus, &catalog, &StandardPowerModel).unwrap();
        let table = FrequencyTable::parse(&corpus, &catalog, &baseline).unwrap();
        (table, baseline)
    }

    #[test]
    fn test_baseline_family_totals_sum() {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let b = BaselineStats::extract(&corpus, &catalog, &StandardPowerModel).unwrap();
        assert_eq!(b.total as usize, corpus.len());
        assert!(b.bow_total > 0);
        assert!(b.melee_total > 0);
        assert!(b.max_power > 0);
        assert!(b.avg_power > 0);
        assert!(b.min_power > 0);
        assert!(b.max_power >= b.avg_power);
    }

    #[test]
    fn test_floors_apply() {
        let (t, _) = table();
        assert!(t.prob(Ability::GenResFear) >= 5);
        assert!(t.prob(Ability::BowShotsSuper) >= 5);
        assert!(t.prob(Ability::MeleeBlowsSuper) >= 5);
        assert!(t.prob(Ability::GenAcSuper) >= 5);
        assert!(t.prob(Ability::NonweaponBrand) >= 2);
    }

    #[test]
    fn test_no_negative_weights_survive() {
        let (t, _) = table();
        for a in Ability::iter() {
            assert!(t.prob(a) >= 0, "{} went negative", a);
        }
    }

    #[test]
    fn test_cumulative_table_monotonic() {
        let (t, _) = table();
        for cat in [
            ItemCategory::Sword,
            ItemCategory::Bow,
            ItemCategory::Cloak,
            ItemCategory::Boots,
        ] {
            let cum = t.build_item_table(cat);
            let mut prev = 0;
            for c in cum.cum.iter() {
                assert!(*c >= prev);
                prev = *c;
            }
            assert!(cum.total() > 0);
        }
    }

    #[test]
    fn test_item_table_excludes_foreign_families() {
        let (t, _) = table();
        let cum = t.build_item_table(ItemCategory::Cloak);
        // A cloak can never draw a bow or melee ability
        let mut rng = GameRng::new(123);
        for _ in 0..500 {
            let a = cum.sample(&mut rng).unwrap();
            let fam = a.family();
            assert!(fam.applies_to(ItemCategory::Cloak), "sampled {} for cloak", a);
            assert!(!a.is_supercharge());
        }
    }

    #[test]
    fn test_sample_empty_table_is_none() {
        let t = FrequencyTable::from_raw(vec![0i32; ABILITY_COUNT]);
        let cum = t.build_item_table(ItemCategory::Sword);
        let mut rng = GameRng::new(1);
        assert_eq!(cum.sample(&mut rng), None);
    }

    #[test]
    fn test_rescale_tolerates_absent_family() {
        // A corpus with no bows parses fine; the learned bow weights stay
        // zero (only the floors touch those slots afterward).
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let artifacts: Vec<_> = corpus
            .artifacts()
            .iter()
            .filter(|a| a.category != ItemCategory::Bow)
            .cloned()
            .collect();
        // the three named entries survive the filter (none are bows)
        let corpus = ReferenceCorpus::new(artifacts).unwrap();
        let baseline = BaselineStats::extract(&corpus, &catalog, &StandardPowerModel).unwrap();
        let t = FrequencyTable::parse(&corpus, &catalog, &baseline).unwrap();
        assert_eq!(t.prob(Ability::BowShots), 0);
        assert_eq!(t.prob(Ability::BowMight), 0);
        // floored slots keep their minimums even for the absent family
        assert!(t.prob(Ability::BowBrand) >= 2);
    }

    #[test]
    fn test_supercharge_roll_zero_weight_never_fires() {
        let t = FrequencyTable::from_raw(vec![0i32; ABILITY_COUNT]);
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            assert!(!t.supercharge_roll(Ability::GenSpeedSuper, 100, &mut rng));
        }
    }
}
