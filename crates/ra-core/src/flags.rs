//! Ability flag words carried by artifacts.
//!
//! Three separate words, split the way the rest of the engine consumes
//! them: offensive / pval-driven abilities, protections, and miscellaneous
//! properties. Serde round-trips the raw bits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Offensive and pval-driven abilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PowerFlags: u32 {
        const STR         = 0x0000_0001;
        const INT         = 0x0000_0002;
        const WIS         = 0x0000_0004;
        const DEX         = 0x0000_0008;
        const CON         = 0x0000_0010;
        const CHR         = 0x0000_0020;
        const STEALTH     = 0x0000_0040;
        const SEARCH      = 0x0000_0080;
        const INFRA       = 0x0000_0100;
        const TUNNEL      = 0x0000_0200;
        const SPEED       = 0x0000_0400;
        const BLOWS       = 0x0000_0800;
        const SHOTS       = 0x0000_1000;
        const MIGHT       = 0x0000_2000;
        const SLAY_ANIMAL = 0x0000_4000;
        const SLAY_EVIL   = 0x0000_8000;
        const SLAY_UNDEAD = 0x0001_0000;
        const SLAY_DEMON  = 0x0002_0000;
        const SLAY_ORC    = 0x0004_0000;
        const SLAY_TROLL  = 0x0008_0000;
        const SLAY_GIANT  = 0x0010_0000;
        const SLAY_DRAGON = 0x0020_0000;
        const KILL_DRAGON = 0x0040_0000;
        const KILL_DEMON  = 0x0080_0000;
        const KILL_UNDEAD = 0x0100_0000;
        const BRAND_ACID  = 0x0200_0000;
        const BRAND_ELEC  = 0x0400_0000;
        const BRAND_FIRE  = 0x0800_0000;
        const BRAND_COLD  = 0x1000_0000;
        const BRAND_POIS  = 0x2000_0000;
    }
}

bitflags! {
    /// Sustains, immunities and resistances
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProtFlags: u32 {
        const SUST_STR  = 0x0000_0001;
        const SUST_INT  = 0x0000_0002;
        const SUST_WIS  = 0x0000_0004;
        const SUST_DEX  = 0x0000_0008;
        const SUST_CON  = 0x0000_0010;
        const SUST_CHR  = 0x0000_0020;
        const IM_ACID   = 0x0000_0040;
        const IM_ELEC   = 0x0000_0080;
        const IM_FIRE   = 0x0000_0100;
        const IM_COLD   = 0x0000_0200;
        const RES_ACID  = 0x0000_0400;
        const RES_ELEC  = 0x0000_0800;
        const RES_FIRE  = 0x0000_1000;
        const RES_COLD  = 0x0000_2000;
        const RES_POIS  = 0x0000_4000;
        const RES_FEAR  = 0x0000_8000;
        const RES_LIGHT = 0x0001_0000;
        const RES_DARK  = 0x0002_0000;
        const RES_BLIND = 0x0004_0000;
        const RES_CONFU = 0x0008_0000;
        const RES_SOUND = 0x0010_0000;
        const RES_SHARD = 0x0020_0000;
        const RES_NEXUS = 0x0040_0000;
        const RES_NETHR = 0x0080_0000;
        const RES_CHAOS = 0x0100_0000;
        const RES_DISEN = 0x0200_0000;
    }
}

bitflags! {
    /// Miscellaneous properties, curses and bookkeeping markers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MiscFlags: u32 {
        const SLOW_DIGEST = 0x0000_0001;
        const FEATHER     = 0x0000_0002;
        const LIGHT       = 0x0000_0004;
        const SEE_INVIS   = 0x0000_0008;
        const TELEPATHY   = 0x0000_0010;
        const FREE_ACT    = 0x0000_0020;
        const HOLD_LIFE   = 0x0000_0040;
        const REGEN       = 0x0000_0080;
        const BLESSED     = 0x0000_0100;
        const AGGRAVATE   = 0x0000_0200;
        const DRAIN_EXP   = 0x0000_0400;
        const TELEPORT    = 0x0000_0800;
        const LIGHT_CURSE = 0x0000_1000;
        const HEAVY_CURSE = 0x0000_2000;
        const SHOW_MODS   = 0x0000_4000;
        const HIDE_TYPE   = 0x0000_8000;
        const NO_FUEL     = 0x0001_0000;
        const INSTA_ART   = 0x0002_0000;
        const IGNORE_ACID = 0x0004_0000;
        const IGNORE_ELEC = 0x0008_0000;
        const IGNORE_FIRE = 0x0010_0000;
        const IGNORE_COLD = 0x0020_0000;

        /// Artifacts ignore all elemental damage to themselves
        const IGNORE_MASK = Self::IGNORE_ACID.bits()
            | Self::IGNORE_ELEC.bits()
            | Self::IGNORE_FIRE.bits()
            | Self::IGNORE_COLD.bits();
    }
}

impl PowerFlags {
    /// All six stat-bonus flags
    pub const ALL_STATS: PowerFlags = PowerFlags::STR
        .union(PowerFlags::INT)
        .union(PowerFlags::WIS)
        .union(PowerFlags::DEX)
        .union(PowerFlags::CON)
        .union(PowerFlags::CHR);

    /// All slay flags, including the kill variants
    pub const ALL_SLAYS: PowerFlags = PowerFlags::SLAY_ANIMAL
        .union(PowerFlags::SLAY_EVIL)
        .union(PowerFlags::SLAY_UNDEAD)
        .union(PowerFlags::SLAY_DEMON)
        .union(PowerFlags::SLAY_ORC)
        .union(PowerFlags::SLAY_TROLL)
        .union(PowerFlags::SLAY_GIANT)
        .union(PowerFlags::SLAY_DRAGON)
        .union(PowerFlags::KILL_DRAGON)
        .union(PowerFlags::KILL_DEMON)
        .union(PowerFlags::KILL_UNDEAD);

    /// All brand flags
    pub const ALL_BRANDS: PowerFlags = PowerFlags::BRAND_ACID
        .union(PowerFlags::BRAND_ELEC)
        .union(PowerFlags::BRAND_FIRE)
        .union(PowerFlags::BRAND_COLD)
        .union(PowerFlags::BRAND_POIS);
}

impl ProtFlags {
    /// All six sustain flags
    pub const ALL_SUSTAINS: ProtFlags = ProtFlags::SUST_STR
        .union(ProtFlags::SUST_INT)
        .union(ProtFlags::SUST_WIS)
        .union(ProtFlags::SUST_DEX)
        .union(ProtFlags::SUST_CON)
        .union(ProtFlags::SUST_CHR);

    /// The four low (elemental) resists
    pub const ALL_LOW_RESISTS: ProtFlags = ProtFlags::RES_ACID
        .union(ProtFlags::RES_ELEC)
        .union(ProtFlags::RES_FIRE)
        .union(ProtFlags::RES_COLD);
}

macro_rules! bits_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.bits().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bits = u32::deserialize(deserializer)?;
                Ok($ty::from_bits_truncate(bits))
            }
        }
    };
}

bits_serde!(PowerFlags);
bits_serde!(ProtFlags);
bits_serde!(MiscFlags);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_groups_disjoint_from_masks() {
        assert!(PowerFlags::ALL_SLAYS.intersection(PowerFlags::ALL_BRANDS).is_empty());
        assert!(PowerFlags::ALL_STATS.intersection(PowerFlags::ALL_SLAYS).is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let f = PowerFlags::STR | PowerFlags::BLOWS | PowerFlags::BRAND_FIRE;
        let json = serde_json::to_string(&f).unwrap();
        let back: PowerFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn test_ignore_mask() {
        let m = MiscFlags::IGNORE_MASK;
        assert!(m.contains(MiscFlags::IGNORE_ACID));
        assert!(m.contains(MiscFlags::IGNORE_COLD));
        assert!(!m.contains(MiscFlags::NO_FUEL));
    }
}
