//! Artifact power evaluation.
//!
//! The synthesizer treats the rating as an opaque oracle: deterministic for
//! a fixed record, higher meaning more powerful, comparable between two
//! records of the same base type. This is the hot path - it runs once per
//! ability trial, thousands of times per full set.

use crate::consts::INHIBIT_POWER;
use crate::flags::{MiscFlags, PowerFlags, ProtFlags};
use crate::item::{Artifact, ArtifactSlot, ItemCategory, ItemKind};

/// Scoring oracle for artifact records
pub trait PowerModel {
    /// Rate the artifact as if it were a live game object. `kind` is the
    /// base item the record is built on.
    fn power(&self, art: &Artifact, kind: &ItemKind) -> i32;
}

/// The built-in rating function.
///
/// Slot-dependent base term plus per-ability contributions, with a large
/// additive sentinel for combinations that must never be generated (too
/// many immunities, pval-driven multipliers past +3, AC bonuses past +40).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPowerModel;

fn sign(x: i32) -> i32 {
    x.signum()
}

/// Damage multiplier of a bow kind, keyed by the standard bow subtypes
/// (sling and short bow shoot x2, long bow and light crossbow x3, heavy
/// crossbow x4).
fn bow_multiplier(subtype: u8) -> i32 {
    match subtype {
        0 | 1 => 2,
        2 | 3 => 3,
        _ => 4,
    }
}

impl PowerModel for StandardPowerModel {
    fn power(&self, art: &Artifact, kind: &ItemKind) -> i32 {
        let mut p: i32 = 0;
        let to_h = art.to_h as i32;
        let to_d = art.to_d as i32;
        let to_a = art.to_a as i32;
        let pval = art.pval as i32;
        let pf = art.power_flags;
        let rf = art.prot_flags;
        let mf = art.misc_flags;

        if art.slot == ArtifactSlot::Normal {
            // Base rating derived from the item kind's native depth
            p = (kind.level as i32 + 7) / 8;
        }

        match art.category {
            ItemCategory::Bow => {
                p += (to_d + sign(to_d)) / 2;
                let mut mult = bow_multiplier(art.subtype);
                if pf.contains(PowerFlags::MIGHT) {
                    if pval > 3 {
                        p += INHIBIT_POWER;
                        mult = 1; // don't overflow
                    } else {
                        mult += pval;
                    }
                }
                p *= mult;
                if pf.contains(PowerFlags::SHOTS) {
                    if pval > 3 {
                        p += INHIBIT_POWER;
                    } else if pval > 0 {
                        p *= 2 * pval;
                    }
                }
                p += (to_h + 3 * sign(to_h)) / 4;
                if art.weight < kind.weight {
                    p += 1;
                }
            }
            ItemCategory::Digger
            | ItemCategory::Hafted
            | ItemCategory::Polearm
            | ItemCategory::Sword => {
                p += (art.dd as i32 * art.ds as i32 + 1) / 2;

                if pf.contains(PowerFlags::SLAY_EVIL) {
                    p = p * 3 / 2;
                }
                if pf.contains(PowerFlags::KILL_DRAGON) {
                    p = p * 3 / 2;
                }
                if pf.contains(PowerFlags::KILL_DEMON) {
                    p = p * 3 / 2;
                }
                if pf.contains(PowerFlags::KILL_UNDEAD) {
                    p = p * 3 / 2;
                }
                if pf.contains(PowerFlags::SLAY_ANIMAL) {
                    p = p * 4 / 3;
                }
                if pf.contains(PowerFlags::SLAY_UNDEAD) {
                    p = p * 4 / 3;
                }
                if pf.contains(PowerFlags::SLAY_DRAGON) {
                    p = p * 4 / 3;
                }
                if pf.contains(PowerFlags::SLAY_DEMON) {
                    p = p * 5 / 4;
                }
                if pf.contains(PowerFlags::SLAY_TROLL) {
                    p = p * 5 / 4;
                }
                if pf.contains(PowerFlags::SLAY_ORC) {
                    p = p * 5 / 4;
                }
                if pf.contains(PowerFlags::SLAY_GIANT) {
                    p = p * 6 / 5;
                }

                if pf.contains(PowerFlags::BRAND_ACID) {
                    p *= 2;
                }
                if pf.contains(PowerFlags::BRAND_ELEC) {
                    p = p * 3 / 2;
                }
                if pf.contains(PowerFlags::BRAND_FIRE) {
                    p = p * 4 / 3;
                }
                if pf.contains(PowerFlags::BRAND_COLD) {
                    p = p * 4 / 3;
                }
                if pf.contains(PowerFlags::BRAND_POIS) {
                    p = p * 4 / 3;
                }

                p += (to_d + 2 * sign(to_d)) / 3;
                if to_d > 15 {
                    p += (to_d - 14) / 2;
                }

                if pf.contains(PowerFlags::BLOWS) {
                    if pval > 3 {
                        p += INHIBIT_POWER;
                    } else if pval > 0 {
                        p = p * 6 / (4 - pval);
                    }
                }

                if pf.contains(PowerFlags::TUNNEL) && art.category != ItemCategory::Digger {
                    p += pval * 3;
                }

                p += (to_h + 3 * sign(to_h)) / 4;

                // Weight is in tenths of a pound
                if art.weight != kind.weight {
                    p += (kind.weight as i32 - art.weight as i32) / 20;
                }
            }
            ItemCategory::Boots
            | ItemCategory::Gloves
            | ItemCategory::Helm
            | ItemCategory::Crown
            | ItemCategory::Shield
            | ItemCategory::Cloak
            | ItemCategory::SoftArmor
            | ItemCategory::HardArmor
            | ItemCategory::DragonArmor => {
                p += (art.ac as i32 + 4 * sign(art.ac as i32)) / 5;
                p += (to_h + sign(to_h)) / 2;
                p += (to_d + sign(to_d)) / 2;
                if art.weight != kind.weight {
                    p += (kind.weight as i32 - art.weight as i32) / 30;
                }
            }
            ItemCategory::Light => {
                p += 10;
            }
            ItemCategory::Ring | ItemCategory::Amulet => {
                p += 20;
            }
        }

        // Abilities evaluated independent of the object type
        p += (to_a + 3 * sign(to_a)) / 4;
        if to_a > 20 {
            p += (to_a - 19) / 2;
        }
        if to_a > 30 {
            p += (to_a - 29) / 2;
        }
        if to_a > 40 {
            p += INHIBIT_POWER;
        }

        if pval > 0 {
            if pf.contains(PowerFlags::STR) {
                p += pval * pval;
            }
            if pf.contains(PowerFlags::INT) {
                p += pval * pval;
            }
            if pf.contains(PowerFlags::WIS) {
                p += pval * pval;
            }
            if pf.contains(PowerFlags::DEX) {
                p += pval * pval;
            }
            if pf.contains(PowerFlags::CON) {
                p += pval * pval;
            }
            if pf.contains(PowerFlags::STEALTH) {
                p += pval * pval;
            }
        } else if pval < 0 {
            // Don't hand out large negatives for bad stats
            if pf.contains(PowerFlags::STR) {
                p += pval;
            }
            if pf.contains(PowerFlags::INT) {
                p += pval;
            }
            if pf.contains(PowerFlags::WIS) {
                p += pval;
            }
            if pf.contains(PowerFlags::DEX) {
                p += pval;
            }
            if pf.contains(PowerFlags::CON) {
                p += pval;
            }
            if pf.contains(PowerFlags::STEALTH) {
                p += pval;
            }
        }
        if pf.contains(PowerFlags::CHR) {
            p += pval;
        }
        if pf.contains(PowerFlags::INFRA) {
            p += (pval + sign(pval)) / 2;
        }
        if pf.contains(PowerFlags::SEARCH) {
            p += (pval + sign(pval)) / 2;
        }
        if pf.contains(PowerFlags::SPEED) {
            p += pval * 3 / 2;
        }

        if rf.contains(ProtFlags::SUST_STR) {
            p += 6;
        }
        if rf.contains(ProtFlags::SUST_INT) {
            p += 4;
        }
        if rf.contains(ProtFlags::SUST_WIS) {
            p += 4;
        }
        if rf.contains(ProtFlags::SUST_DEX) {
            p += 4;
        }
        if rf.contains(ProtFlags::SUST_CON) {
            p += 4;
        }
        if rf.contains(ProtFlags::SUST_CHR) {
            p += 1;
        }

        let mut immunities = 0;
        if rf.contains(ProtFlags::IM_ACID) {
            p += 20;
            immunities += 1;
        }
        if rf.contains(ProtFlags::IM_ELEC) {
            p += 24;
            immunities += 1;
        }
        if rf.contains(ProtFlags::IM_FIRE) {
            p += 36;
            immunities += 1;
        }
        if rf.contains(ProtFlags::IM_COLD) {
            p += 24;
            immunities += 1;
        }
        if immunities > 1 {
            p += 16;
        }
        if immunities > 2 {
            p += 16;
        }
        if immunities > 3 {
            p += INHIBIT_POWER;
        }

        if mf.contains(MiscFlags::FREE_ACT) {
            p += 8;
        }
        if mf.contains(MiscFlags::HOLD_LIFE) {
            p += 10;
        }

        if rf.contains(ProtFlags::RES_ACID) {
            p += 6;
        }
        if rf.contains(ProtFlags::RES_ELEC) {
            p += 6;
        }
        if rf.contains(ProtFlags::RES_FIRE) {
            p += 6;
        }
        if rf.contains(ProtFlags::RES_COLD) {
            p += 6;
        }
        if rf.contains(ProtFlags::RES_POIS) {
            p += 12;
        }
        if rf.contains(ProtFlags::RES_FEAR) {
            p += 4;
        }
        if rf.contains(ProtFlags::RES_LIGHT) {
            p += 8;
        }
        if rf.contains(ProtFlags::RES_DARK) {
            p += 10;
        }
        if rf.contains(ProtFlags::RES_BLIND) {
            p += 10;
        }
        if rf.contains(ProtFlags::RES_CONFU) {
            p += 8;
        }
        if rf.contains(ProtFlags::RES_SOUND) {
            p += 10;
        }
        if rf.contains(ProtFlags::RES_SHARD) {
            p += 8;
        }
        if rf.contains(ProtFlags::RES_NEXUS) {
            p += 10;
        }
        if rf.contains(ProtFlags::RES_NETHR) {
            p += 12;
        }
        if rf.contains(ProtFlags::RES_CHAOS) {
            p += 12;
        }
        if rf.contains(ProtFlags::RES_DISEN) {
            p += 12;
        }

        if mf.contains(MiscFlags::FEATHER) {
            p += 2;
        }
        if mf.contains(MiscFlags::LIGHT) {
            p += 2;
        }
        if mf.contains(MiscFlags::SEE_INVIS) {
            p += 8;
        }
        if mf.contains(MiscFlags::TELEPATHY) {
            p += 20;
        }
        if mf.contains(MiscFlags::SLOW_DIGEST) {
            p += 4;
        }
        if mf.contains(MiscFlags::REGEN) {
            p += 8;
        }
        if mf.contains(MiscFlags::TELEPORT) {
            p -= 20;
        }
        if mf.contains(MiscFlags::DRAIN_EXP) {
            p -= 16;
        }
        if mf.contains(MiscFlags::AGGRAVATE) {
            p -= 8;
        }
        if mf.contains(MiscFlags::BLESSED) {
            p += 4;
        }
        if mf.contains(MiscFlags::LIGHT_CURSE) {
            p -= 4;
        }
        if mf.contains(MiscFlags::HEAVY_CURSE) {
            p -= 20;
        }

        if let Some(effect) = art.activation {
            p += effect.power();
        }

        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Recharge;

    fn kind() -> ItemKind {
        ItemKind {
            name: "long sword",
            category: ItemCategory::Sword,
            subtype: 10,
            level: 10,
            alloc_prob: 40,
            weight: 130,
            ac: 0,
            dd: 2,
            ds: 5,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            pval: 0,
            cost: 300,
            power_flags: PowerFlags::empty(),
            prot_flags: ProtFlags::empty(),
            misc_flags: MiscFlags::empty(),
        }
    }

    fn art() -> Artifact {
        let k = kind();
        Artifact {
            name: "test".into(),
            slot: ArtifactSlot::Normal,
            category: k.category,
            subtype: k.subtype,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            ac: k.ac,
            dd: k.dd,
            ds: k.ds,
            pval: 0,
            weight: k.weight,
            power_flags: PowerFlags::empty(),
            prot_flags: ProtFlags::empty(),
            misc_flags: MiscFlags::empty(),
            activation: None,
            recharge: Recharge::default(),
            alloc_prob: 20,
            alloc_min: 1,
            alloc_max: 127,
            cost: 0,
        }
    }

    #[test]
    fn test_deterministic() {
        let m = StandardPowerModel;
        let a = art();
        let k = kind();
        assert_eq!(m.power(&a, &k), m.power(&a, &k));
    }

    #[test]
    fn test_adding_resist_raises_power() {
        let m = StandardPowerModel;
        let k = kind();
        let mut a = art();
        let before = m.power(&a, &k);
        a.prot_flags.insert(ProtFlags::RES_FIRE);
        assert!(m.power(&a, &k) > before);
    }

    #[test]
    fn test_curse_flags_lower_power() {
        let m = StandardPowerModel;
        let k = kind();
        let mut a = art();
        let before = m.power(&a, &k);
        a.misc_flags.insert(MiscFlags::HEAVY_CURSE | MiscFlags::DRAIN_EXP);
        assert!(m.power(&a, &k) < before);
    }

    #[test]
    fn test_four_immunities_inhibited() {
        let m = StandardPowerModel;
        let k = kind();
        let mut a = art();
        a.prot_flags = ProtFlags::IM_ACID | ProtFlags::IM_ELEC | ProtFlags::IM_FIRE | ProtFlags::IM_COLD;
        assert!(m.power(&a, &k) > INHIBIT_POWER);
    }

    #[test]
    fn test_excess_blows_inhibited() {
        let m = StandardPowerModel;
        let k = kind();
        let mut a = art();
        a.power_flags.insert(PowerFlags::BLOWS);
        a.pval = 4;
        assert!(m.power(&a, &k) > INHIBIT_POWER);
    }

    #[test]
    fn test_bow_multiplier_applies() {
        let m = StandardPowerModel;
        let mut k = kind();
        k.category = ItemCategory::Bow;
        k.subtype = 4; // heavy crossbow
        let mut a = art();
        a.category = ItemCategory::Bow;
        a.subtype = 4;
        a.to_d = 9;
        let heavy = m.power(&a, &k);
        a.subtype = 0; // sling
        k.subtype = 0;
        let sling = m.power(&a, &k);
        assert!(heavy > sling);
    }
}
