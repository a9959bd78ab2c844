//! Item kinds and artifact records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::flags::{MiscFlags, PowerFlags, ProtFlags};

/// Broad equipment category of an item kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemCategory {
    Digger,
    Bow,
    Hafted,
    Sword,
    Polearm,
    SoftArmor,
    HardArmor,
    DragonArmor,
    Shield,
    Cloak,
    Helm,
    Crown,
    Gloves,
    Boots,
    Light,
    Ring,
    Amulet,
}

impl ItemCategory {
    /// Melee weapons, diggers included
    pub fn is_melee(self) -> bool {
        matches!(
            self,
            ItemCategory::Digger | ItemCategory::Hafted | ItemCategory::Sword | ItemCategory::Polearm
        )
    }

    /// Anything wielded for combat, bows included
    pub fn is_weapon(self) -> bool {
        self.is_melee() || self == ItemCategory::Bow
    }

    /// Body armor in any of its three sub-hierarchies
    pub fn is_body_armor(self) -> bool {
        matches!(
            self,
            ItemCategory::SoftArmor | ItemCategory::HardArmor | ItemCategory::DragonArmor
        )
    }

    /// Helms and crowns
    pub fn is_headgear(self) -> bool {
        matches!(self, ItemCategory::Helm | ItemCategory::Crown)
    }

    /// Any wearable armor slot
    pub fn is_armor(self) -> bool {
        self.is_body_armor()
            || self.is_headgear()
            || matches!(
                self,
                ItemCategory::Shield | ItemCategory::Cloak | ItemCategory::Gloves | ItemCategory::Boots
            )
    }

    /// Wearables that are neither weapons nor armor (the "other" bucket)
    pub fn is_jewelry(self) -> bool {
        matches!(self, ItemCategory::Light | ItemCategory::Ring | ItemCategory::Amulet)
    }
}

/// One base item kind: the template an artifact is built on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemKind {
    pub name: &'static str,
    pub category: ItemCategory,
    pub subtype: u8,
    /// Nominal dungeon level the kind appears at
    pub level: u8,
    /// Allocation rarity (higher = more common)
    pub alloc_prob: u8,
    /// Weight in tenths of a pound
    pub weight: u16,
    pub ac: i16,
    pub dd: u8,
    pub ds: u8,
    pub to_h: i16,
    pub to_d: i16,
    pub to_a: i16,
    pub pval: i16,
    pub cost: u32,
    pub power_flags: PowerFlags,
    pub prot_flags: ProtFlags,
    pub misc_flags: MiscFlags,
}

/// Ordered collection of item kinds with (category, subtype) lookup
#[derive(Debug, Clone, Serialize)]
pub struct ItemCatalog {
    kinds: Vec<ItemKind>,
}

impl ItemCatalog {
    pub fn new(kinds: Vec<ItemKind>) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &[ItemKind] {
        &self.kinds
    }

    /// Look up a kind by category and subtype
    pub fn lookup(&self, category: ItemCategory, subtype: u8) -> Option<&ItemKind> {
        self.kinds
            .iter()
            .find(|k| k.category == category && k.subtype == subtype)
    }
}

/// How a reference slot participates in randomization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactSlot {
    /// Permanently non-randomizable; passed through untouched
    Named,
    /// Keeps its fixed base item (light, ring, amulet); powers are rebuilt
    Special,
    /// Gets a freshly chosen base item and a new set of powers
    Normal,
}

/// Activation effect an artifact can carry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Activation {
    Illumination,
    MagicMapping,
    CurePoison,
    CureWounds,
    FrostBolt,
    FireBolt,
    LightningBolt,
    StinkingCloud,
    Haste,
    DetectEvil,
    RemoveFear,
    FrostBall,
    FireBall,
    Drain,
    RestoreLife,
    Teleport,
    Clairvoyance,
    HealingFull,
    Recharge,
    ProtectionFromEvil,
}

impl Activation {
    /// Usefulness rating fed into the power model
    pub fn power(self) -> i32 {
        match self {
            Activation::Illumination => 4,
            Activation::MagicMapping => 10,
            Activation::CurePoison => 5,
            Activation::CureWounds => 8,
            Activation::FrostBolt => 7,
            Activation::FireBolt => 9,
            Activation::LightningBolt => 8,
            Activation::StinkingCloud => 6,
            Activation::Haste => 20,
            Activation::DetectEvil => 4,
            Activation::RemoveFear => 3,
            Activation::FrostBall => 14,
            Activation::FireBall => 16,
            Activation::Drain => 12,
            Activation::RestoreLife => 11,
            Activation::Teleport => 10,
            Activation::Clairvoyance => 22,
            Activation::HealingFull => 28,
            Activation::Recharge => 10,
            Activation::ProtectionFromEvil => 18,
        }
    }
}

/// Activation recharge time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recharge {
    pub base: u16,
    pub dice: u8,
    pub sides: u8,
}

/// One artifact: a reference definition, and the record the synthesizer
/// mutates in place through its trial-and-rollback cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub slot: ArtifactSlot,
    pub category: ItemCategory,
    pub subtype: u8,
    pub to_h: i16,
    pub to_d: i16,
    pub to_a: i16,
    pub ac: i16,
    pub dd: u8,
    pub ds: u8,
    /// Generic bonus magnitude shared by every pval-driven ability
    pub pval: i16,
    pub weight: u16,
    pub power_flags: PowerFlags,
    pub prot_flags: ProtFlags,
    pub misc_flags: MiscFlags,
    pub activation: Option<Activation>,
    pub recharge: Recharge,
    /// Allocation rarity, always in [1, 255]
    pub alloc_prob: u8,
    pub alloc_min: u8,
    pub alloc_max: u8,
    pub cost: u32,
}

impl Artifact {
    /// Whether any of the documented contradictory ability pairs co-occur
    pub fn has_contradiction(&self) -> bool {
        let p = self.power_flags;
        let r = self.prot_flags;
        let m = self.misc_flags;

        if m.contains(MiscFlags::AGGRAVATE) && p.contains(PowerFlags::STEALTH) {
            return true;
        }
        if r.contains(ProtFlags::IM_ACID) && r.contains(ProtFlags::RES_ACID) {
            return true;
        }
        if r.contains(ProtFlags::IM_ELEC) && r.contains(ProtFlags::RES_ELEC) {
            return true;
        }
        if r.contains(ProtFlags::IM_FIRE) && r.contains(ProtFlags::RES_FIRE) {
            return true;
        }
        if r.contains(ProtFlags::IM_COLD) && r.contains(ProtFlags::RES_COLD) {
            return true;
        }
        if self.pval < 0 {
            if p.contains(PowerFlags::STR) && r.contains(ProtFlags::SUST_STR) {
                return true;
            }
            if p.contains(PowerFlags::INT) && r.contains(ProtFlags::SUST_INT) {
                return true;
            }
            if p.contains(PowerFlags::WIS) && r.contains(ProtFlags::SUST_WIS) {
                return true;
            }
            if p.contains(PowerFlags::DEX) && r.contains(ProtFlags::SUST_DEX) {
                return true;
            }
            if p.contains(PowerFlags::CON) && r.contains(ProtFlags::SUST_CON) {
                return true;
            }
            if p.contains(PowerFlags::CHR) && r.contains(ProtFlags::SUST_CHR) {
                return true;
            }
            if p.contains(PowerFlags::BLOWS) {
                return true;
            }
        }
        if m.contains(MiscFlags::LIGHT_CURSE) && m.contains(MiscFlags::BLESSED) {
            return true;
        }
        if p.contains(PowerFlags::KILL_DRAGON) && p.contains(PowerFlags::SLAY_DRAGON) {
            return true;
        }
        if p.contains(PowerFlags::KILL_DEMON) && p.contains(PowerFlags::SLAY_DEMON) {
            return true;
        }
        if p.contains(PowerFlags::KILL_UNDEAD) && p.contains(PowerFlags::SLAY_UNDEAD) {
            return true;
        }
        if m.contains(MiscFlags::DRAIN_EXP) && m.contains(MiscFlags::HOLD_LIFE) {
            return true;
        }
        false
    }

    /// Whether the artifact carries either curse flag
    pub fn is_cursed(&self) -> bool {
        self.misc_flags
            .intersects(MiscFlags::LIGHT_CURSE | MiscFlags::HEAVY_CURSE)
    }
}

/// The canonical, hand-authored artifact set the generator learns from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceCorpus {
    artifacts: Vec<Artifact>,
}

impl ReferenceCorpus {
    /// Validate and wrap a reference artifact list.
    ///
    /// The corpus must carry exactly three `Named` entries; anything else
    /// means the dataset is corrupted or incompatible.
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self, crate::error::RandartError> {
        if artifacts.is_empty() {
            return Err(crate::error::RandartError::EmptyCorpus);
        }
        let named = artifacts
            .iter()
            .filter(|a| a.slot == ArtifactSlot::Named)
            .count();
        if named != 3 {
            return Err(crate::error::RandartError::BadNamedCount { found: named });
        }
        Ok(Self { artifacts })
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(slot: ArtifactSlot) -> Artifact {
        Artifact {
            name: String::new(),
            slot,
            category: ItemCategory::Sword,
            subtype: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            ac: 0,
            dd: 1,
            ds: 1,
            pval: 0,
            weight: 100,
            power_flags: PowerFlags::empty(),
            prot_flags: ProtFlags::empty(),
            misc_flags: MiscFlags::empty(),
            activation: None,
            recharge: Recharge::default(),
            alloc_prob: 10,
            alloc_min: 1,
            alloc_max: 127,
            cost: 1000,
        }
    }

    #[test]
    fn test_corpus_requires_three_named() {
        let arts = vec![blank(ArtifactSlot::Named), blank(ArtifactSlot::Normal)];
        assert_eq!(
            ReferenceCorpus::new(arts).unwrap_err(),
            crate::error::RandartError::BadNamedCount { found: 1 }
        );
    }

    #[test]
    fn test_corpus_rejects_empty() {
        assert_eq!(
            ReferenceCorpus::new(Vec::new()).unwrap_err(),
            crate::error::RandartError::EmptyCorpus
        );
    }

    #[test]
    fn test_contradiction_immunity_vs_resist() {
        let mut a = blank(ArtifactSlot::Normal);
        a.prot_flags = ProtFlags::IM_FIRE | ProtFlags::RES_FIRE;
        assert!(a.has_contradiction());
        a.prot_flags = ProtFlags::IM_FIRE | ProtFlags::RES_COLD;
        assert!(!a.has_contradiction());
    }

    #[test]
    fn test_contradiction_negative_pval_blows() {
        let mut a = blank(ArtifactSlot::Normal);
        a.power_flags = PowerFlags::BLOWS;
        a.pval = 2;
        assert!(!a.has_contradiction());
        a.pval = -2;
        assert!(a.has_contradiction());
    }

    #[test]
    fn test_category_predicates() {
        assert!(ItemCategory::Digger.is_melee());
        assert!(ItemCategory::Bow.is_weapon());
        assert!(!ItemCategory::Bow.is_melee());
        assert!(ItemCategory::DragonArmor.is_body_armor());
        assert!(ItemCategory::Crown.is_headgear());
        assert!(ItemCategory::Boots.is_armor());
        assert!(!ItemCategory::Ring.is_armor());
        assert!(ItemCategory::Ring.is_jewelry());
    }
}
