//! Per-artifact synthesis: base item choice, supercharging, cursing, and
//! the power-matching loop.
//!
//! Every trial mutates the record in place between explicit snapshots; a
//! trial that overshoots the power budget restores the snapshot and rolls
//! again. Running out of budget is not fatal - the closest trial seen is
//! kept and a warning emitted.

use tracing::{debug, warn};

use crate::ability::{apply_ability, remove_contradictory, Ability, ApplyCtx};
use crate::consts::*;
use crate::error::RandartError;
use crate::flags::{MiscFlags, PowerFlags, ProtFlags};
use crate::freq::{BaselineStats, CumulativeTable, FrequencyTable};
use crate::item::{Artifact, ArtifactSlot, ItemCatalog, ItemCategory};
use crate::power::PowerModel;
use ra_rng::GameRng;
use crate::data::sv;

/// Percentile thresholds for the broad category roll
const CAT_BOW: u32 = 5;
const CAT_DIGGER: u32 = 9;
const CAT_HAFTED: u32 = 19;
const CAT_SWORD: u32 = 33;
const CAT_POLEARM: u32 = 42;
const CAT_BODY: u32 = 64;
const CAT_BOOTS: u32 = 71;
const CAT_GLOVES: u32 = 78;
const CAT_HEADGEAR: u32 = 87;
const CAT_SHIELD: u32 = 94;

/// Ordered sub-type thresholds within a category: the first row whose bound
/// exceeds the level roll wins. Higher-level artifacts skew toward the
/// heavier end of each list.
type SubTable = &'static [(i32, ItemCategory, u8)];

const BOW_TABLE: SubTable = &[
    (3, ItemCategory::Bow, sv::SLING),
    (10, ItemCategory::Bow, sv::SHORT_BOW),
    (30, ItemCategory::Bow, sv::LONG_BOW),
    (45, ItemCategory::Bow, sv::LIGHT_XBOW),
    (i32::MAX, ItemCategory::Bow, sv::HEAVY_XBOW),
];

const DIGGER_TABLE: SubTable = &[
    (15, ItemCategory::Digger, sv::SHOVEL),
    (30, ItemCategory::Digger, sv::PICK),
    (60, ItemCategory::Digger, sv::GNOMISH_SHOVEL),
    (90, ItemCategory::Digger, sv::ORCISH_PICK),
    (120, ItemCategory::Digger, sv::DWARVEN_SHOVEL),
    (i32::MAX, ItemCategory::Digger, sv::DWARVEN_PICK),
];

const HAFTED_TABLE: SubTable = &[
    (6, ItemCategory::Hafted, sv::WHIP),
    (12, ItemCategory::Hafted, sv::MACE),
    (20, ItemCategory::Hafted, sv::WAR_HAMMER),
    (30, ItemCategory::Hafted, sv::QUARTERSTAFF),
    (34, ItemCategory::Hafted, sv::LUCERN_HAMMER),
    (38, ItemCategory::Hafted, sv::MORNING_STAR),
    (45, ItemCategory::Hafted, sv::FLAIL),
    (55, ItemCategory::Hafted, sv::LEAD_FILLED_MACE),
    (80, ItemCategory::Hafted, sv::BALL_AND_CHAIN),
    (120, ItemCategory::Hafted, sv::TWO_HANDED_FLAIL),
    (i32::MAX, ItemCategory::Hafted, sv::MACE_OF_DISRUPTION),
];

const SWORD_TABLE: SubTable = &[
    (0, ItemCategory::Sword, sv::BROKEN_DAGGER),
    (1, ItemCategory::Sword, sv::BROKEN_SWORD),
    (5, ItemCategory::Sword, sv::DAGGER),
    (9, ItemCategory::Sword, sv::MAIN_GAUCHE),
    (10, ItemCategory::Sword, sv::RAPIER),
    (12, ItemCategory::Sword, sv::SMALL_SWORD),
    (14, ItemCategory::Sword, sv::SHORT_SWORD),
    (16, ItemCategory::Sword, sv::SABRE),
    (18, ItemCategory::Sword, sv::CUTLASS),
    (20, ItemCategory::Sword, sv::TULWAR),
    (23, ItemCategory::Sword, sv::BROAD_SWORD),
    (26, ItemCategory::Sword, sv::LONG_SWORD),
    (30, ItemCategory::Sword, sv::SCIMITAR),
    (45, ItemCategory::Sword, sv::BASTARD_SWORD),
    (60, ItemCategory::Sword, sv::KATANA),
    (90, ItemCategory::Sword, sv::TWO_HANDED_SWORD),
    (120, ItemCategory::Sword, sv::EXECUTIONERS_SWORD),
    (i32::MAX, ItemCategory::Sword, sv::BLADE_OF_CHAOS),
];

const POLEARM_TABLE: SubTable = &[
    (12, ItemCategory::Polearm, sv::SPEAR),
    (20, ItemCategory::Polearm, sv::TRIDENT),
    (27, ItemCategory::Polearm, sv::LANCE),
    (35, ItemCategory::Polearm, sv::AWL_PIKE),
    (45, ItemCategory::Polearm, sv::PIKE),
    (50, ItemCategory::Polearm, sv::BEAKED_AXE),
    (55, ItemCategory::Polearm, sv::BROAD_AXE),
    (60, ItemCategory::Polearm, sv::BATTLE_AXE),
    (65, ItemCategory::Polearm, sv::GLAIVE),
    (80, ItemCategory::Polearm, sv::HALBERD),
    (120, ItemCategory::Polearm, sv::GREAT_AXE),
    (128, ItemCategory::Polearm, sv::SCYTHE),
    (135, ItemCategory::Polearm, sv::LOCHABER_AXE),
    (i32::MAX, ItemCategory::Polearm, sv::SCYTHE_OF_SLICING),
];

/// Body armor re-maps one roll across the soft, hard and dragon-scale
/// sub-hierarchies.
const BODY_TABLE: SubTable = &[
    (0, ItemCategory::SoftArmor, sv::FILTHY_RAG),
    (5, ItemCategory::SoftArmor, sv::ROBE),
    (10, ItemCategory::SoftArmor, sv::SOFT_LEATHER),
    (15, ItemCategory::SoftArmor, sv::SOFT_STUDDED),
    (20, ItemCategory::SoftArmor, sv::HARD_LEATHER),
    (30, ItemCategory::SoftArmor, sv::HARD_STUDDED),
    (45, ItemCategory::SoftArmor, sv::LEATHER_SCALE),
    (55, ItemCategory::HardArmor, sv::RUSTY_CHAIN),
    (65, ItemCategory::HardArmor, sv::METAL_SCALE),
    (75, ItemCategory::HardArmor, sv::CHAIN_MAIL),
    (85, ItemCategory::HardArmor, sv::AUGMENTED_CHAIN),
    (90, ItemCategory::HardArmor, sv::DOUBLE_CHAIN),
    (97, ItemCategory::HardArmor, sv::BAR_CHAIN),
    (105, ItemCategory::HardArmor, sv::METAL_BRIGANDINE),
    (115, ItemCategory::HardArmor, sv::PARTIAL_PLATE),
    (125, ItemCategory::HardArmor, sv::METAL_LAMELLAR),
    (135, ItemCategory::HardArmor, sv::FULL_PLATE),
    (140, ItemCategory::HardArmor, sv::RIBBED_PLATE),
    (150, ItemCategory::HardArmor, sv::MITHRIL_CHAIN),
    (165, ItemCategory::HardArmor, sv::MITHRIL_PLATE),
    (180, ItemCategory::HardArmor, sv::ADAMANTITE_PLATE),
    (185, ItemCategory::DragonArmor, sv::BLUE_DRAGON_SCALE),
    (190, ItemCategory::DragonArmor, sv::WHITE_DRAGON_SCALE),
    (195, ItemCategory::DragonArmor, sv::RED_DRAGON_SCALE),
    (i32::MAX, ItemCategory::DragonArmor, sv::MULTIHUED_DRAGON_SCALE),
];

const BOOTS_TABLE: SubTable = &[
    (9, ItemCategory::Boots, sv::SOFT_LEATHER_BOOTS),
    (15, ItemCategory::Boots, sv::HARD_LEATHER_BOOTS),
    (i32::MAX, ItemCategory::Boots, sv::METAL_SHOD_BOOTS),
];

const GLOVES_TABLE: SubTable = &[
    (10, ItemCategory::Gloves, sv::LEATHER_GLOVES),
    (30, ItemCategory::Gloves, sv::GAUNTLETS),
    (i32::MAX, ItemCategory::Gloves, sv::CESTI),
];

/// Headgear splits helm/crown on the same roll
const HEADGEAR_TABLE: SubTable = &[
    (9, ItemCategory::Helm, sv::HARD_LEATHER_CAP),
    (20, ItemCategory::Helm, sv::METAL_CAP),
    (40, ItemCategory::Helm, sv::IRON_HELM),
    (50, ItemCategory::Helm, sv::STEEL_HELM),
    (60, ItemCategory::Crown, sv::IRON_CROWN),
    (90, ItemCategory::Crown, sv::GOLDEN_CROWN),
    (i32::MAX, ItemCategory::Crown, sv::JEWELED_CROWN),
];

const SHIELD_TABLE: SubTable = &[
    (9, ItemCategory::Shield, sv::SMALL_LEATHER_SHIELD),
    (20, ItemCategory::Shield, sv::SMALL_METAL_SHIELD),
    (40, ItemCategory::Shield, sv::LARGE_LEATHER_SHIELD),
    (60, ItemCategory::Shield, sv::LARGE_METAL_SHIELD),
    (i32::MAX, ItemCategory::Shield, sv::SHIELD_OF_DEFLECTION),
];

const CLOAK_TABLE: SubTable = &[
    (90, ItemCategory::Cloak, sv::CLOAK),
    (i32::MAX, ItemCategory::Cloak, sv::SHADOW_CLOAK),
];

/// Everything the synthesizer needs besides the record and the RNG
pub(crate) struct Scrambler<'a> {
    pub catalog: &'a ItemCatalog,
    pub baseline: &'a BaselineStats,
    pub freqs: &'a FrequencyTable,
    pub model: &'a dyn PowerModel,
    pub corpus_len: usize,
}

impl Scrambler<'_> {
    fn power_of(&self, art: &Artifact) -> Result<i32, RandartError> {
        let kind =
            self.catalog
                .lookup(art.category, art.subtype)
                .ok_or(RandartError::UnknownKind {
                    category: art.category,
                    subtype: art.subtype,
                })?;
        Ok(self.model.power(art, kind))
    }

    /// Randomly select a base item type and seed the record from it.
    ///
    /// Rolls a percentile for the broad category, then an approximately
    /// normal variate centered on twice the target level for the sub-type,
    /// so higher-level artifacts lean toward heavier base items.
    fn choose_base_item(
        &self,
        art: &mut Artifact,
        idx: usize,
        rng: &mut GameRng,
    ) -> Result<(), RandartError> {
        let target_level = self.baseline.item_level[idx] as i32;
        let r = rng.randint0(100);
        let table: SubTable = if r < CAT_BOW {
            BOW_TABLE
        } else if r < CAT_DIGGER {
            DIGGER_TABLE
        } else if r < CAT_HAFTED {
            HAFTED_TABLE
        } else if r < CAT_SWORD {
            SWORD_TABLE
        } else if r < CAT_POLEARM {
            POLEARM_TABLE
        } else if r < CAT_BODY {
            BODY_TABLE
        } else if r < CAT_BOOTS {
            BOOTS_TABLE
        } else if r < CAT_GLOVES {
            GLOVES_TABLE
        } else if r < CAT_HEADGEAR {
            HEADGEAR_TABLE
        } else if r < CAT_SHIELD {
            SHIELD_TABLE
        } else {
            CLOAK_TABLE
        };

        let r2 = rng.rand_normal(target_level * 2, target_level);
        let (_, category, subtype) = *table
            .iter()
            .find(|(bound, _, _)| r2 < *bound)
            .unwrap_or(table.last().expect("sub-type tables are never empty"));

        let kind = self
            .catalog
            .lookup(category, subtype)
            .ok_or(RandartError::UnknownKind { category, subtype })?;

        debug!(kind = kind.name, "chose base item");

        art.category = kind.category;
        art.subtype = kind.subtype;
        art.pval = kind.pval;
        art.to_h = kind.to_h;
        art.to_d = kind.to_d;
        art.to_a = kind.to_a;
        art.ac = kind.ac;
        art.dd = kind.dd;
        art.ds = kind.ds;
        art.weight = kind.weight;
        art.power_flags = kind.power_flags;
        art.prot_flags = kind.prot_flags;
        art.misc_flags = kind.misc_flags | MiscFlags::IGNORE_MASK;
        art.activation = None;

        // Random starting bonuses averaging the mean start values, with
        // 50%-150% variation; frequency parsing assumes these means.
        match art.category {
            c if c.is_weapon() => {
                art.to_h +=
                    (MEAN_HIT_STARTVAL / 2 + rng.randint0(MEAN_HIT_STARTVAL as u32) as i32) as i16;
                art.to_d +=
                    (MEAN_DAM_STARTVAL / 2 + rng.randint0(MEAN_DAM_STARTVAL as u32) as i32) as i16;
            }
            c if c.is_armor() => {
                art.to_a +=
                    (MEAN_AC_STARTVAL / 2 + rng.randint0(MEAN_AC_STARTVAL as u32) as i32) as i16;
            }
            _ => {}
        }

        // Preserve the effective drop rate: artifact rarity scaled by the
        // ratio of old to new base item rarity.
        let alloc_old = self.baseline.art_alloc[idx] as i32;
        let base_alloc_old = self.baseline.item_prob[idx] as i32;
        let alloc_new = (alloc_old * base_alloc_old / kind.alloc_prob.max(1) as i32).clamp(1, 255);
        art.alloc_prob = alloc_new as u8;

        Ok(())
    }

    /// One-shot supercharge attempt per category; the caller rolls the
    /// whole thing back if the result overshoots the power budget.
    fn try_supercharge(&self, art: &mut Artifact, target_power: i32, rng: &mut GameRng) {
        // Huge damage dice or +3 blows - melee weapons only
        if art.category.is_melee() {
            if self
                .freqs
                .supercharge_roll(Ability::MeleeDiceSuper, self.corpus_len, rng)
            {
                art.dd += (3 + rng.randint0(4)) as u8;
                debug!(dice = art.dd, "supercharged damage dice");
            } else if self
                .freqs
                .supercharge_roll(Ability::MeleeBlowsSuper, self.corpus_len, rng)
            {
                art.power_flags.insert(PowerFlags::BLOWS);
                art.pval = 3;
                debug!("supercharged melee blows");
            }
        }

        // Bows get +3 shots or +3 might
        if art.category == ItemCategory::Bow {
            if self
                .freqs
                .supercharge_roll(Ability::BowShotsSuper, self.corpus_len, rng)
            {
                art.power_flags.insert(PowerFlags::SHOTS);
                art.pval = 3;
                debug!("supercharged bow shots");
            } else if self
                .freqs
                .supercharge_roll(Ability::BowMightSuper, self.corpus_len, rng)
            {
                art.power_flags.insert(PowerFlags::MIGHT);
                art.pval = 3;
                debug!("supercharged bow might");
            }
        }

        // Big speed bonus - any item, but boots get a second chance
        if self
            .freqs
            .supercharge_roll(Ability::GenSpeedSuper, self.corpus_len, rng)
            || (art.category == ItemCategory::Boots
                && self
                    .freqs
                    .supercharge_roll(Ability::BootSpeed, self.corpus_len, rng))
        {
            art.power_flags.insert(PowerFlags::SPEED);
            art.pval = (5 + rng.randint0(6)) as i16;
            if rng.one_in(2) {
                art.pval += rng.randint1(3) as i16;
            }
            if rng.one_in(6) {
                art.pval += (1 + rng.randint1(6)) as i16;
            }
            debug!(pval = art.pval, "supercharged speed");
        }

        // Big AC bonus
        if self
            .freqs
            .supercharge_roll(Ability::GenAcSuper, self.corpus_len, rng)
        {
            art.to_a += (19 + rng.randint1(11)) as i16;
            if rng.one_in(2) {
                art.to_a += rng.randint1(10) as i16;
            }
            if rng.one_in(6) {
                art.to_a += rng.randint1(20) as i16;
            }
            debug!(to_a = art.to_a, "supercharged AC");
        }

        // Aggravation, only on endgame-power items
        let aggr_slot = if art.category.is_weapon() {
            Ability::WeaponAggravate
        } else {
            Ability::NonweaponAggravate
        };
        if self.freqs.supercharge_roll(aggr_slot, self.corpus_len, rng)
            && target_power > AGGR_POWER
        {
            art.misc_flags.insert(MiscFlags::AGGRAVATE);
            debug!("added aggravation");
        }
    }

    /// Draw one ability from the type-filtered table and apply it, then
    /// clean up contradictions. Wisdom on a sharp weapon blesses it.
    fn add_random_ability(
        &self,
        art: &mut Artifact,
        table: &CumulativeTable,
        target_power: i32,
        rng: &mut GameRng,
    ) {
        let Some(ability) = table.sample(rng) else {
            return;
        };
        let weights = self.freqs.high_resist_weights();
        let ctx = ApplyCtx {
            target_power,
            max_power: self.baseline.max_power,
            high_resist_weights: &weights,
        };
        apply_ability(art, ability, &ctx, rng);
        remove_contradictory(art);

        if art.power_flags.contains(PowerFlags::WIS)
            && matches!(art.category, ItemCategory::Sword | ItemCategory::Polearm)
        {
            art.misc_flags.insert(MiscFlags::BLESSED);
        }
    }

    /// Synthesize one artifact slot in place.
    pub fn scramble_artifact(
        &self,
        idx: usize,
        art: &mut Artifact,
        rng: &mut GameRng,
    ) -> Result<(), RandartError> {
        // The three named artifacts are never touched
        if art.slot == ArtifactSlot::Named {
            return Ok(());
        }

        let mut target = self.baseline.power[idx];

        // Too powerful to randomize safely
        if target > INHIBIT_POWER {
            debug!(name = %art.name, power = target, "skipping: too powerful to randomize");
            return Ok(());
        }

        let curse_me = target < 0;
        if curse_me {
            // The sign only matters for the curse path; base item choice
            // works from the magnitude
            target = -target;
        }

        debug!(name = %art.name, power = target, cursed = curse_me, "scrambling artifact");

        let original_activation = art.activation;
        let original_recharge = art.recharge;

        match art.slot {
            ArtifactSlot::Normal => {
                // Pick a base item that is neither too strong (nothing left
                // to add) nor hopelessly weak for the target.
                let mut count = 0u32;
                loop {
                    self.choose_base_item(art, idx, rng)?;

                    // Borderline low targets may never fit a fresh base
                    // item; curse once to open up room.
                    if target > 0 && target < 10 && count > MAX_TRIES / 2 {
                        debug!("cursing base item to help get a match");
                        do_curse(art, rng);
                    }
                    let ap2 = self.power_of(art)?;
                    count += 1;

                    let keep_rolling = count < MAX_TRIES
                        && ((ap2 > target * 6 / 10 + 1 && target - ap2 < 20)
                            || ap2 < target / 10);
                    if !keep_rolling {
                        break;
                    }
                }
                if count >= MAX_TRIES {
                    warn!(name = %art.name, "couldn't get appropriate power level on base item");
                }
            }
            ArtifactSlot::Special => {
                // Keep the base item; clear bonuses and powers, rebuild
                // from scratch. Lights keep their activation.
                art.to_h = 0;
                art.to_d = 0;
                art.to_a = 0;
                art.pval = 0;
                art.power_flags = PowerFlags::empty();
                art.prot_flags = ProtFlags::empty();
                art.misc_flags = MiscFlags::IGNORE_MASK;
                if art.category != ItemCategory::Light {
                    art.activation = None;
                }
            }
            ArtifactSlot::Named => unreachable!(),
        }

        let table = self.freqs.build_item_table(art.category);

        // One shot at supercharging, rolled back in full on overshoot
        let snapshot = art.clone();
        self.try_supercharge(art, target, rng);
        let mut ap = self.power_of(art)?;
        if ap > target * 23 / 20 + 1 {
            *art = snapshot;
            debug!("supercharge too powerful, rolling back");
        }

        if curse_me {
            // Two abilities, then three rounds of curses. The curse steps
            // only subtract power, so this converges by construction; the
            // only retry is against accidentally inhibited combinations.
            let snapshot = art.clone();
            loop {
                self.add_random_ability(art, &table, target, rng);
                self.add_random_ability(art, &table, target, rng);
                do_curse(art, rng);
                do_curse(art, rng);
                do_curse(art, rng);
                remove_contradictory(art);
                ap = self.power_of(art)?;
                if ap < INHIBIT_POWER {
                    break;
                }
                debug!("inhibited ability added, rolling back");
                *art = snapshot.clone();
            }
            // Cursed items never have any resale value
            art.cost = 0;
        } else {
            // Add abilities until the rating lands inside the acceptance
            // band. Overshoots roll back one ability and try again; the
            // closest under-target trial is kept in case the budget runs
            // out.
            let mut best: Option<(i32, Artifact)> = None;
            let mut converged = false;

            for _ in 0..MAX_TRIES {
                let snapshot = art.clone();
                self.add_random_ability(art, &table, target, rng);
                ap = self.power_of(art)?;

                if ap > target * 23 / 20 + 1 {
                    // Too powerful: discard this one ability, not the run
                    *art = snapshot;
                    continue;
                }
                if ap >= target * 19 / 20 {
                    // Within the band. A weapon that converged with weak
                    // to-damage still feels bad to swing; nudge it up.
                    if art.category.is_weapon() && art.to_d < 10 {
                        art.to_d += rng.randint0(10) as i16;
                        debug!(to_d = art.to_d, "redeeming weak weapon damage");
                    }
                    converged = true;
                    break;
                }

                let dist = (target - ap).abs();
                if best.as_ref().is_none_or(|(d, _)| dist < *d) {
                    best = Some((dist, art.clone()));
                }
            }

            if !converged {
                if let Some((_, closest)) = best {
                    *art = closest;
                }
                ap = self.power_of(art)?;
                warn!(
                    name = %art.name,
                    power = ap,
                    target_power = target,
                    "couldn't get appropriate power level on artifact"
                );
            }
        }

        self.finalize(idx, art, ap, original_activation, original_recharge);
        debug!(name = %art.name, power = ap, "artifact completed");
        Ok(())
    }

    /// Allocation depth/rarity from the final rating, plus marker flags.
    fn finalize(
        &self,
        _idx: usize,
        art: &mut Artifact,
        power: i32,
        original_activation: Option<crate::item::Activation>,
        original_recharge: crate::item::Recharge,
    ) {
        // Cursed ratings are flipped so the depth math stays sane
        let ap = power.abs();
        let max_power = self.baseline.max_power.max(1);

        if art.slot == ArtifactSlot::Special {
            art.alloc_max = 127;
            if ap > self.baseline.avg_power {
                art.alloc_prob = 1;
                art.alloc_min = (((ap + 150) * 100 / max_power).max(50)).min(127) as u8;
            } else if ap > 30 {
                art.alloc_prob = (((self.baseline.avg_power - ap) / 20).max(2)).min(255) as u8;
                art.alloc_min = (((ap + 200) * 100 / max_power).max(25)).min(127) as u8;
            } else {
                art.alloc_prob = (50 - ap).clamp(1, 255) as u8;
                art.alloc_min = 5;
            }
        } else {
            art.alloc_max = (ap * 4 / 5).clamp(1, 127) as u8;
            art.alloc_min = ((ap + 100) * 100 / max_power).clamp(1, 100) as u8;
        }

        if art.alloc_prob > 99 {
            art.alloc_prob = 99;
        }
        if art.alloc_prob < 1 {
            art.alloc_prob = 1;
        }

        // Restore the activation marker if the canonical artifact had one
        // and synthesis didn't produce its own
        if art.activation.is_none() {
            if let Some(effect) = original_activation {
                art.activation = Some(effect);
                art.recharge = original_recharge;
            }
        }

        if art.category == ItemCategory::Light {
            art.misc_flags.insert(MiscFlags::NO_FUEL);
        }
        if art.slot == ArtifactSlot::Special {
            art.misc_flags.insert(MiscFlags::INSTA_ART);
        }
        // Nonzero pval means the description layer has extra numbers to
        // show
        if art.pval != 0 {
            art.misc_flags.insert(MiscFlags::HIDE_TYPE);
        }
    }
}

/// Make it bad, or if it's already bad, make it worse.
pub(crate) fn do_curse(art: &mut Artifact, rng: &mut GameRng) {
    if rng.one_in(7) {
        art.misc_flags.insert(MiscFlags::AGGRAVATE);
    }
    if rng.one_in(4) {
        art.misc_flags.insert(MiscFlags::DRAIN_EXP);
    }
    if rng.one_in(7) {
        art.misc_flags.insert(MiscFlags::TELEPORT);
    }

    if art.pval > 0 && rng.one_in(2) {
        art.pval = -art.pval;
    }
    if art.to_a > 0 && rng.one_in(2) {
        art.to_a = -art.to_a;
    }
    if art.to_h > 0 && rng.one_in(2) {
        art.to_h = -art.to_h;
    }
    if art.to_d > 0 && rng.one_in(4) {
        art.to_d = -art.to_d;
    }

    if art.misc_flags.contains(MiscFlags::LIGHT_CURSE) {
        if rng.one_in(2) {
            art.misc_flags.insert(MiscFlags::HEAVY_CURSE);
        }
        return;
    }

    art.misc_flags.insert(MiscFlags::LIGHT_CURSE);
    if rng.one_in(4) {
        art.misc_flags.insert(MiscFlags::HEAVY_CURSE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{standard_catalog, standard_corpus};
    use crate::power::StandardPowerModel;

    struct Fixture {
        catalog: ItemCatalog,
        corpus: crate::item::ReferenceCorpus,
        baseline: BaselineStats,
        freqs: FrequencyTable,
    }

    fn fixture() -> Fixture {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let baseline = BaselineStats::extract(&corpus, &catalog, &StandardPowerModel).unwrap();
        let freqs = FrequencyTable::parse(&corpus, &catalog, &baseline).unwrap();
        Fixture {
            catalog,
            corpus,
            baseline,
            freqs,
        }
    }

    impl Fixture {
        fn scrambler(&self) -> Scrambler<'_> {
            Scrambler {
                catalog: &self.catalog,
                baseline: &self.baseline,
                freqs: &self.freqs,
                model: &StandardPowerModel,
                corpus_len: self.corpus.len(),
            }
        }
    }

    #[test]
    fn test_named_artifacts_untouched() {
        let f = fixture();
        let s = f.scrambler();
        let mut rng = GameRng::new(42);
        for (idx, reference) in f.corpus.artifacts().iter().enumerate() {
            if reference.slot != ArtifactSlot::Named {
                continue;
            }
            let mut art = reference.clone();
            s.scramble_artifact(idx, &mut art, &mut rng).unwrap();
            assert_eq!(&art, reference);
        }
    }

    #[test]
    fn test_choose_base_item_rarity_clamped() {
        let f = fixture();
        let s = f.scrambler();
        let mut rng = GameRng::new(9);
        let idx = f
            .corpus
            .artifacts()
            .iter()
            .position(|a| a.slot == ArtifactSlot::Normal)
            .unwrap();
        for _ in 0..200 {
            let mut art = f.corpus.artifacts()[idx].clone();
            s.choose_base_item(&mut art, idx, &mut rng).unwrap();
            assert!(art.alloc_prob >= 1);
            assert!(f.catalog.lookup(art.category, art.subtype).is_some());
            assert!(!art.category.is_jewelry());
        }
    }

    #[test]
    fn test_normal_scramble_lands_in_band_or_warns() {
        let f = fixture();
        let s = f.scrambler();
        let mut rng = GameRng::new(42);
        let model = StandardPowerModel;
        for (idx, reference) in f.corpus.artifacts().iter().enumerate() {
            if reference.slot != ArtifactSlot::Normal {
                continue;
            }
            let target = f.baseline.power[idx];
            if target <= 0 || target > INHIBIT_POWER {
                continue;
            }
            let mut art = reference.clone();
            s.scramble_artifact(idx, &mut art, &mut rng).unwrap();
            let kind = f.catalog.lookup(art.category, art.subtype).unwrap();
            let ap = model.power(&art, kind);
            // Soft failure keeps the best effort; the common case lands in
            // the band. Either way nothing contradictory survives. The
            // weak-weapon damage rescue may legally push past the band
            // after acceptance, heavily so on bows where the nudge lands
            // under the launcher multipliers.
            assert!(!art.has_contradiction(), "{} contradicts", art.name);
            let margin = if art.category.is_weapon() { 250 } else { 25 };
            assert!(
                ap <= target * 23 / 20 + 1 + margin,
                "{} overshot: {ap} vs {target}",
                art.name
            );
        }
    }

    #[test]
    fn test_cursed_exemplars_stay_cursed() {
        let f = fixture();
        let s = f.scrambler();
        let mut rng = GameRng::new(7);
        for (idx, reference) in f.corpus.artifacts().iter().enumerate() {
            if f.baseline.power[idx] >= 0 || reference.slot != ArtifactSlot::Normal {
                continue;
            }
            let mut art = reference.clone();
            s.scramble_artifact(idx, &mut art, &mut rng).unwrap();
            assert!(art.is_cursed(), "{} lost its curse", art.name);
            assert_eq!(art.cost, 0);
        }
    }

    #[test]
    fn test_special_keeps_base_item() {
        let f = fixture();
        let s = f.scrambler();
        let mut rng = GameRng::new(3);
        for (idx, reference) in f.corpus.artifacts().iter().enumerate() {
            if reference.slot != ArtifactSlot::Special {
                continue;
            }
            let mut art = reference.clone();
            s.scramble_artifact(idx, &mut art, &mut rng).unwrap();
            assert_eq!(art.category, reference.category);
            assert_eq!(art.subtype, reference.subtype);
            assert!(art.misc_flags.contains(MiscFlags::INSTA_ART));
        }
    }

    #[test]
    fn test_do_curse_always_sets_a_curse() {
        let mut rng = GameRng::new(11);
        let f = fixture();
        for _ in 0..100 {
            let mut art = f.corpus.artifacts()[10].clone();
            art.misc_flags
                .remove(MiscFlags::LIGHT_CURSE | MiscFlags::HEAVY_CURSE);
            do_curse(&mut art, &mut rng);
            assert!(art.is_cursed());
        }
    }

    #[test]
    fn test_do_curse_escalates() {
        // A second curse on a light-cursed item can only escalate
        let mut rng = GameRng::new(13);
        let f = fixture();
        let mut art = f.corpus.artifacts()[10].clone();
        art.misc_flags.insert(MiscFlags::LIGHT_CURSE);
        for _ in 0..50 {
            do_curse(&mut art, &mut rng);
            assert!(art.misc_flags.contains(MiscFlags::LIGHT_CURSE));
        }
        assert!(art.misc_flags.contains(MiscFlags::HEAVY_CURSE));
    }
}
