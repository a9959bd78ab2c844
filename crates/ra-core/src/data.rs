//! Built-in item catalog and reference artifact set.
//!
//! Callers with their own content pass their own catalog and corpus; this
//! module exists so the crate (and the CLI) run end-to-end out of the box.
//! The sub-type ids here are the ones the base-item threshold tables in the
//! synthesizer refer to, so custom catalogs should keep the same ordering
//! within each category.

use crate::flags::{MiscFlags, PowerFlags, ProtFlags};
use crate::item::{
    Activation, Artifact, ArtifactSlot, ItemCatalog, ItemCategory, ItemKind, Recharge,
    ReferenceCorpus,
};

/// Sub-type ids for the standard catalog, grouped by category
pub mod sv {
    // Bows
    pub const SLING: u8 = 0;
    pub const SHORT_BOW: u8 = 1;
    pub const LONG_BOW: u8 = 2;
    pub const LIGHT_XBOW: u8 = 3;
    pub const HEAVY_XBOW: u8 = 4;

    // Diggers
    pub const SHOVEL: u8 = 0;
    pub const PICK: u8 = 1;
    pub const GNOMISH_SHOVEL: u8 = 2;
    pub const ORCISH_PICK: u8 = 3;
    pub const DWARVEN_SHOVEL: u8 = 4;
    pub const DWARVEN_PICK: u8 = 5;

    // Hafted weapons
    pub const WHIP: u8 = 0;
    pub const MACE: u8 = 1;
    pub const WAR_HAMMER: u8 = 2;
    pub const QUARTERSTAFF: u8 = 3;
    pub const LUCERN_HAMMER: u8 = 4;
    pub const MORNING_STAR: u8 = 5;
    pub const FLAIL: u8 = 6;
    pub const LEAD_FILLED_MACE: u8 = 7;
    pub const BALL_AND_CHAIN: u8 = 8;
    pub const TWO_HANDED_FLAIL: u8 = 9;
    pub const MACE_OF_DISRUPTION: u8 = 10;

    // Swords
    pub const BROKEN_DAGGER: u8 = 0;
    pub const BROKEN_SWORD: u8 = 1;
    pub const DAGGER: u8 = 2;
    pub const MAIN_GAUCHE: u8 = 3;
    pub const RAPIER: u8 = 4;
    pub const SMALL_SWORD: u8 = 5;
    pub const SHORT_SWORD: u8 = 6;
    pub const SABRE: u8 = 7;
    pub const CUTLASS: u8 = 8;
    pub const TULWAR: u8 = 9;
    pub const BROAD_SWORD: u8 = 10;
    pub const LONG_SWORD: u8 = 11;
    pub const SCIMITAR: u8 = 12;
    pub const BASTARD_SWORD: u8 = 13;
    pub const KATANA: u8 = 14;
    pub const TWO_HANDED_SWORD: u8 = 15;
    pub const EXECUTIONERS_SWORD: u8 = 16;
    pub const BLADE_OF_CHAOS: u8 = 17;

    // Polearms
    pub const SPEAR: u8 = 0;
    pub const TRIDENT: u8 = 1;
    pub const LANCE: u8 = 2;
    pub const AWL_PIKE: u8 = 3;
    pub const PIKE: u8 = 4;
    pub const BEAKED_AXE: u8 = 5;
    pub const BROAD_AXE: u8 = 6;
    pub const BATTLE_AXE: u8 = 7;
    pub const GLAIVE: u8 = 8;
    pub const HALBERD: u8 = 9;
    pub const GREAT_AXE: u8 = 10;
    pub const SCYTHE: u8 = 11;
    pub const LOCHABER_AXE: u8 = 12;
    pub const SCYTHE_OF_SLICING: u8 = 13;

    // Soft body armor
    pub const FILTHY_RAG: u8 = 0;
    pub const ROBE: u8 = 1;
    pub const SOFT_LEATHER: u8 = 2;
    pub const SOFT_STUDDED: u8 = 3;
    pub const HARD_LEATHER: u8 = 4;
    pub const HARD_STUDDED: u8 = 5;
    pub const LEATHER_SCALE: u8 = 6;

    // Hard body armor
    pub const RUSTY_CHAIN: u8 = 0;
    pub const METAL_SCALE: u8 = 1;
    pub const CHAIN_MAIL: u8 = 2;
    pub const AUGMENTED_CHAIN: u8 = 3;
    pub const DOUBLE_CHAIN: u8 = 4;
    pub const BAR_CHAIN: u8 = 5;
    pub const METAL_BRIGANDINE: u8 = 6;
    pub const PARTIAL_PLATE: u8 = 7;
    pub const METAL_LAMELLAR: u8 = 8;
    pub const FULL_PLATE: u8 = 9;
    pub const RIBBED_PLATE: u8 = 10;
    pub const MITHRIL_CHAIN: u8 = 11;
    pub const MITHRIL_PLATE: u8 = 12;
    pub const ADAMANTITE_PLATE: u8 = 13;

    // Dragon scale armor
    pub const BLUE_DRAGON_SCALE: u8 = 0;
    pub const WHITE_DRAGON_SCALE: u8 = 1;
    pub const RED_DRAGON_SCALE: u8 = 2;
    pub const MULTIHUED_DRAGON_SCALE: u8 = 3;

    // Boots
    pub const SOFT_LEATHER_BOOTS: u8 = 0;
    pub const HARD_LEATHER_BOOTS: u8 = 1;
    pub const METAL_SHOD_BOOTS: u8 = 2;

    // Gloves
    pub const LEATHER_GLOVES: u8 = 0;
    pub const GAUNTLETS: u8 = 1;
    pub const CESTI: u8 = 2;

    // Helms
    pub const HARD_LEATHER_CAP: u8 = 0;
    pub const METAL_CAP: u8 = 1;
    pub const IRON_HELM: u8 = 2;
    pub const STEEL_HELM: u8 = 3;

    // Crowns
    pub const IRON_CROWN: u8 = 0;
    pub const GOLDEN_CROWN: u8 = 1;
    pub const JEWELED_CROWN: u8 = 2;

    // Shields
    pub const SMALL_LEATHER_SHIELD: u8 = 0;
    pub const SMALL_METAL_SHIELD: u8 = 1;
    pub const LARGE_LEATHER_SHIELD: u8 = 2;
    pub const LARGE_METAL_SHIELD: u8 = 3;
    pub const SHIELD_OF_DEFLECTION: u8 = 4;

    // Cloaks
    pub const CLOAK: u8 = 0;
    pub const SHADOW_CLOAK: u8 = 1;

    // Light sources
    pub const PHIAL: u8 = 0;
    pub const STAR: u8 = 1;
    pub const ARKENSTONE: u8 = 2;

    // Jewelry
    pub const RING: u8 = 0;
    pub const AMULET: u8 = 0;
}

#[allow(clippy::too_many_arguments)]
const fn kind(
    name: &'static str,
    category: ItemCategory,
    subtype: u8,
    level: u8,
    alloc_prob: u8,
    weight: u16,
    ac: i16,
    dd: u8,
    ds: u8,
    to_a: i16,
    cost: u32,
) -> ItemKind {
    ItemKind {
        name,
        category,
        subtype,
        level,
        alloc_prob,
        weight,
        ac,
        dd,
        ds,
        to_h: 0,
        to_d: 0,
        to_a,
        pval: 0,
        cost,
        power_flags: PowerFlags::empty(),
        prot_flags: ProtFlags::empty(),
        misc_flags: MiscFlags::empty(),
    }
}

const fn kind_prot(mut base: ItemKind, prot: ProtFlags) -> ItemKind {
    base.prot_flags = prot;
    base
}

/// The standard equipment catalog
pub fn standard_catalog() -> ItemCatalog {
    use ItemCategory::*;
    let kinds = vec![
        // Bows
        kind("sling", Bow, sv::SLING, 1, 50, 5, 0, 0, 0, 0, 5),
        kind("short bow", Bow, sv::SHORT_BOW, 3, 50, 30, 0, 0, 0, 0, 50),
        kind("long bow", Bow, sv::LONG_BOW, 10, 40, 40, 0, 0, 0, 0, 120),
        kind("light crossbow", Bow, sv::LIGHT_XBOW, 15, 30, 110, 0, 0, 0, 0, 140),
        kind("heavy crossbow", Bow, sv::HEAVY_XBOW, 30, 15, 200, 0, 0, 0, 0, 300),
        // Diggers
        kind("shovel", Digger, sv::SHOVEL, 1, 50, 60, 0, 1, 2, 0, 10),
        kind("pick", Digger, sv::PICK, 5, 40, 150, 0, 1, 3, 0, 50),
        kind("gnomish shovel", Digger, sv::GNOMISH_SHOVEL, 20, 20, 60, 0, 1, 2, 0, 500),
        kind("orcish pick", Digger, sv::ORCISH_PICK, 30, 15, 150, 0, 1, 3, 0, 1500),
        kind("dwarven shovel", Digger, sv::DWARVEN_SHOVEL, 40, 10, 120, 0, 1, 3, 0, 5000),
        kind("dwarven pick", Digger, sv::DWARVEN_PICK, 50, 5, 200, 0, 1, 4, 0, 12000),
        // Hafted weapons
        kind("whip", Hafted, sv::WHIP, 3, 50, 30, 0, 1, 6, 0, 30),
        kind("mace", Hafted, sv::MACE, 5, 45, 120, 0, 2, 4, 0, 130),
        kind("war hammer", Hafted, sv::WAR_HAMMER, 5, 45, 120, 0, 3, 3, 0, 225),
        kind("quarterstaff", Hafted, sv::QUARTERSTAFF, 10, 40, 150, 0, 1, 9, 0, 200),
        kind("lucern hammer", Hafted, sv::LUCERN_HAMMER, 20, 25, 250, 0, 2, 5, 0, 376),
        kind("morning star", Hafted, sv::MORNING_STAR, 10, 40, 150, 0, 2, 6, 0, 396),
        kind("flail", Hafted, sv::FLAIL, 10, 40, 150, 0, 2, 6, 0, 353),
        kind("lead-filled mace", Hafted, sv::LEAD_FILLED_MACE, 15, 30, 180, 0, 3, 4, 0, 502),
        kind("ball-and-chain", Hafted, sv::BALL_AND_CHAIN, 20, 25, 150, 0, 2, 4, 0, 200),
        kind("two-handed flail", Hafted, sv::TWO_HANDED_FLAIL, 45, 10, 280, 0, 3, 6, 0, 2000),
        kind("mace of disruption", Hafted, sv::MACE_OF_DISRUPTION, 80, 2, 400, 0, 5, 8, 0, 4300),
        // Swords
        kind("broken dagger", Sword, sv::BROKEN_DAGGER, 0, 60, 5, 0, 1, 1, 0, 1),
        kind("broken sword", Sword, sv::BROKEN_SWORD, 0, 60, 30, 0, 1, 2, 0, 2),
        kind("dagger", Sword, sv::DAGGER, 0, 60, 12, 0, 1, 4, 0, 10),
        kind("main gauche", Sword, sv::MAIN_GAUCHE, 3, 50, 30, 0, 1, 5, 0, 25),
        kind("rapier", Sword, sv::RAPIER, 5, 45, 40, 0, 1, 6, 0, 42),
        kind("small sword", Sword, sv::SMALL_SWORD, 5, 45, 75, 0, 1, 6, 0, 48),
        kind("short sword", Sword, sv::SHORT_SWORD, 5, 45, 80, 0, 1, 7, 0, 90),
        kind("sabre", Sword, sv::SABRE, 5, 45, 50, 0, 1, 7, 0, 50),
        kind("cutlass", Sword, sv::CUTLASS, 7, 45, 110, 0, 1, 7, 0, 85),
        kind("tulwar", Sword, sv::TULWAR, 10, 40, 100, 0, 2, 4, 0, 200),
        kind("broad sword", Sword, sv::BROAD_SWORD, 15, 35, 150, 0, 2, 5, 0, 255),
        kind("long sword", Sword, sv::LONG_SWORD, 10, 40, 130, 0, 2, 5, 0, 300),
        kind("scimitar", Sword, sv::SCIMITAR, 15, 35, 130, 0, 2, 5, 0, 250),
        kind("bastard sword", Sword, sv::BASTARD_SWORD, 20, 30, 140, 0, 3, 4, 0, 350),
        kind("katana", Sword, sv::KATANA, 20, 30, 120, 0, 3, 4, 0, 400),
        kind("two-handed sword", Sword, sv::TWO_HANDED_SWORD, 30, 20, 200, 0, 3, 6, 0, 775),
        kind("executioner's sword", Sword, sv::EXECUTIONERS_SWORD, 40, 10, 260, 0, 4, 5, 0, 850),
        kind_prot(
            kind("blade of chaos", Sword, sv::BLADE_OF_CHAOS, 70, 3, 180, 0, 6, 5, 0, 4000),
            ProtFlags::RES_CHAOS,
        ),
        // Polearms
        kind("spear", Polearm, sv::SPEAR, 3, 50, 50, 0, 1, 6, 0, 36),
        kind("trident", Polearm, sv::TRIDENT, 5, 45, 70, 0, 1, 9, 0, 120),
        kind("lance", Polearm, sv::LANCE, 10, 40, 300, 0, 2, 8, 0, 230),
        kind("awl-pike", Polearm, sv::AWL_PIKE, 10, 40, 160, 0, 1, 8, 0, 340),
        kind("pike", Polearm, sv::PIKE, 15, 35, 160, 0, 2, 5, 0, 358),
        kind("beaked axe", Polearm, sv::BEAKED_AXE, 15, 35, 180, 0, 2, 6, 0, 408),
        kind("broad axe", Polearm, sv::BROAD_AXE, 15, 35, 160, 0, 2, 6, 0, 304),
        kind("battle axe", Polearm, sv::BATTLE_AXE, 15, 35, 170, 0, 2, 8, 0, 334),
        kind("glaive", Polearm, sv::GLAIVE, 20, 30, 190, 0, 2, 6, 0, 363),
        kind("halberd", Polearm, sv::HALBERD, 25, 25, 190, 0, 3, 5, 0, 430),
        kind("great axe", Polearm, sv::GREAT_AXE, 40, 10, 230, 0, 4, 4, 0, 500),
        kind("scythe", Polearm, sv::SCYTHE, 45, 10, 250, 0, 5, 3, 0, 800),
        kind("lochaber axe", Polearm, sv::LOCHABER_AXE, 45, 10, 250, 0, 3, 8, 0, 750),
        kind("scythe of slicing", Polearm, sv::SCYTHE_OF_SLICING, 60, 4, 250, 0, 8, 4, 0, 3500),
        // Soft body armor
        kind("filthy rag", SoftArmor, sv::FILTHY_RAG, 0, 60, 20, 1, 0, 0, 0, 1),
        kind("robe", SoftArmor, sv::ROBE, 1, 60, 20, 2, 0, 0, 0, 4),
        kind("soft leather armor", SoftArmor, sv::SOFT_LEATHER, 3, 50, 80, 8, 0, 0, 0, 18),
        kind("soft studded leather", SoftArmor, sv::SOFT_STUDDED, 3, 50, 90, 11, 0, 0, 0, 35),
        kind("hard leather armor", SoftArmor, sv::HARD_LEATHER, 5, 45, 100, 16, 0, 0, 0, 150),
        kind("hard studded leather", SoftArmor, sv::HARD_STUDDED, 7, 45, 110, 19, 0, 0, 0, 200),
        kind("leather scale mail", SoftArmor, sv::LEATHER_SCALE, 10, 40, 110, 22, 0, 0, 0, 450),
        // Hard body armor
        kind("rusty chain mail", HardArmor, sv::RUSTY_CHAIN, 25, 45, 200, 34, 0, 0, 0, 550),
        kind("metal scale mail", HardArmor, sv::METAL_SCALE, 25, 45, 250, 38, 0, 0, 0, 550),
        kind("chain mail", HardArmor, sv::CHAIN_MAIL, 25, 45, 220, 44, 0, 0, 0, 750),
        kind("augmented chain mail", HardArmor, sv::AUGMENTED_CHAIN, 30, 20, 270, 46, 0, 0, 0, 900),
        kind("double chain mail", HardArmor, sv::DOUBLE_CHAIN, 30, 20, 250, 48, 0, 0, 0, 850),
        kind("bar chain mail", HardArmor, sv::BAR_CHAIN, 35, 20, 280, 50, 0, 0, 0, 950),
        kind("metal brigandine armor", HardArmor, sv::METAL_BRIGANDINE, 35, 20, 290, 54, 0, 0, 0, 1100),
        kind("partial plate armor", HardArmor, sv::PARTIAL_PLATE, 40, 20, 260, 56, 0, 0, 0, 1200),
        kind("metal lamellar armor", HardArmor, sv::METAL_LAMELLAR, 40, 20, 340, 58, 0, 0, 0, 1250),
        kind("full plate armor", HardArmor, sv::FULL_PLATE, 45, 10, 380, 60, 0, 0, 0, 1350),
        kind("ribbed plate armor", HardArmor, sv::RIBBED_PLATE, 50, 10, 380, 62, 0, 0, 0, 1500),
        kind("mithril chain mail", HardArmor, sv::MITHRIL_CHAIN, 55, 5, 150, 58, 0, 0, 0, 7000),
        kind("mithril plate mail", HardArmor, sv::MITHRIL_PLATE, 60, 5, 300, 65, 0, 0, 0, 15000),
        kind("adamantite plate mail", HardArmor, sv::ADAMANTITE_PLATE, 75, 2, 420, 70, 0, 0, 0, 20000),
        // Dragon scale armor
        kind_prot(
            kind("blue dragon scale mail", DragonArmor, sv::BLUE_DRAGON_SCALE, 40, 5, 200, 30, 2, 4, 10, 3500),
            ProtFlags::RES_ELEC,
        ),
        kind_prot(
            kind("white dragon scale mail", DragonArmor, sv::WHITE_DRAGON_SCALE, 40, 5, 200, 30, 2, 4, 10, 3500),
            ProtFlags::RES_COLD,
        ),
        kind_prot(
            kind("red dragon scale mail", DragonArmor, sv::RED_DRAGON_SCALE, 45, 4, 200, 30, 2, 4, 10, 4500),
            ProtFlags::RES_FIRE,
        ),
        kind_prot(
            kind("multi-hued dragon scale mail", DragonArmor, sv::MULTIHUED_DRAGON_SCALE, 60, 2, 200, 30, 2, 4, 10, 15000),
            ProtFlags::ALL_LOW_RESISTS,
        ),
        // Boots
        kind("soft leather boots", Boots, sv::SOFT_LEATHER_BOOTS, 2, 50, 20, 2, 0, 0, 0, 4),
        kind("hard leather boots", Boots, sv::HARD_LEATHER_BOOTS, 5, 45, 40, 3, 0, 0, 0, 12),
        kind("metal shod boots", Boots, sv::METAL_SHOD_BOOTS, 20, 25, 80, 6, 0, 0, 0, 50),
        // Gloves
        kind("leather gloves", Gloves, sv::LEATHER_GLOVES, 1, 50, 5, 1, 0, 0, 0, 3),
        kind("gauntlets", Gloves, sv::GAUNTLETS, 10, 40, 25, 2, 0, 0, 0, 35),
        kind("cesti", Gloves, sv::CESTI, 50, 10, 40, 5, 0, 0, 0, 100),
        // Helms
        kind("hard leather cap", Helm, sv::HARD_LEATHER_CAP, 2, 50, 15, 2, 0, 0, 0, 12),
        kind("metal cap", Helm, sv::METAL_CAP, 10, 40, 20, 3, 0, 0, 0, 30),
        kind("iron helm", Helm, sv::IRON_HELM, 20, 25, 75, 5, 0, 0, 0, 75),
        kind("steel helm", Helm, sv::STEEL_HELM, 40, 10, 60, 6, 0, 0, 0, 200),
        // Crowns
        kind("iron crown", Crown, sv::IRON_CROWN, 45, 10, 20, 0, 1, 1, 0, 500),
        kind("golden crown", Crown, sv::GOLDEN_CROWN, 45, 10, 30, 0, 1, 1, 0, 1000),
        kind("jeweled crown", Crown, sv::JEWELED_CROWN, 50, 5, 40, 0, 1, 1, 0, 2000),
        // Shields
        kind("small leather shield", Shield, sv::SMALL_LEATHER_SHIELD, 3, 50, 50, 3, 0, 0, 0, 30),
        kind("small metal shield", Shield, sv::SMALL_METAL_SHIELD, 10, 40, 65, 5, 0, 0, 0, 50),
        kind("large leather shield", Shield, sv::LARGE_LEATHER_SHIELD, 15, 35, 100, 6, 0, 0, 0, 120),
        kind("large metal shield", Shield, sv::LARGE_METAL_SHIELD, 30, 20, 120, 8, 0, 0, 0, 200),
        kind("shield of deflection", Shield, sv::SHIELD_OF_DEFLECTION, 70, 3, 100, 10, 0, 0, 10, 10000),
        // Cloaks
        kind("cloak", Cloak, sv::CLOAK, 1, 60, 10, 1, 0, 0, 0, 3),
        kind("shadow cloak", Cloak, sv::SHADOW_CLOAK, 60, 4, 5, 6, 0, 0, 4, 4000),
        // Light sources
        kind("phial", Light, sv::PHIAL, 1, 40, 10, 0, 0, 0, 0, 100),
        kind("star", Light, sv::STAR, 30, 10, 50, 0, 0, 0, 0, 500),
        kind("arkenstone", Light, sv::ARKENSTONE, 60, 3, 50, 0, 0, 0, 0, 2000),
        // Jewelry
        kind("ring", Ring, sv::RING, 50, 10, 2, 0, 0, 0, 0, 1000),
        kind("amulet", Amulet, sv::AMULET, 40, 10, 3, 0, 0, 0, 0, 1000),
    ];
    ItemCatalog::new(kinds)
}

struct ArtSpec {
    name: &'static str,
    slot: ArtifactSlot,
    category: ItemCategory,
    subtype: u8,
    pval: i16,
    to_h: i16,
    to_d: i16,
    to_a: i16,
    pf: PowerFlags,
    rf: ProtFlags,
    mf: MiscFlags,
    activation: Option<Activation>,
    alloc_prob: u8,
    cost: u32,
}

fn act(mut s: ArtSpec, effect: Activation) -> ArtSpec {
    s.activation = Some(effect);
    s
}

#[allow(clippy::too_many_arguments)]
fn spec(
    name: &'static str,
    slot: ArtifactSlot,
    category: ItemCategory,
    subtype: u8,
    pval: i16,
    to_h: i16,
    to_d: i16,
    to_a: i16,
    pf: PowerFlags,
    rf: ProtFlags,
    mf: MiscFlags,
    alloc_prob: u8,
    cost: u32,
) -> ArtSpec {
    ArtSpec {
        name,
        slot,
        category,
        subtype,
        pval,
        to_h,
        to_d,
        to_a,
        pf,
        rf,
        mf,
        activation: None,
        alloc_prob,
        cost,
    }
}

fn realize(catalog: &ItemCatalog, s: ArtSpec) -> Artifact {
    let k = catalog
        .lookup(s.category, s.subtype)
        .expect("reference artifact built on a kind missing from the standard catalog");
    Artifact {
        name: s.name.to_owned(),
        slot: s.slot,
        category: s.category,
        subtype: s.subtype,
        to_h: s.to_h,
        to_d: s.to_d,
        to_a: s.to_a,
        ac: k.ac,
        dd: k.dd,
        ds: k.ds,
        pval: s.pval,
        weight: k.weight,
        power_flags: s.pf.union(k.power_flags),
        prot_flags: s.rf.union(k.prot_flags),
        misc_flags: s.mf.union(k.misc_flags).union(MiscFlags::IGNORE_MASK),
        activation: s.activation,
        recharge: Recharge::default(),
        alloc_min: 1,
        alloc_max: 127,
        alloc_prob: s.alloc_prob,
        cost: s.cost,
    }
}

/// The standard hand-authored reference artifact set.
///
/// Three named entries (the ring of power, the great hammer, the dark
/// crown) are permanently exempt from randomization; the lights and
/// jewelry are special slots that keep their base item.
pub fn standard_corpus(catalog: &ItemCatalog) -> ReferenceCorpus {
    use ArtifactSlot::{Named, Normal, Special};
    use ItemCategory::*;

    const P: PowerFlags = PowerFlags::empty();
    const R: ProtFlags = ProtFlags::empty();
    const M: MiscFlags = MiscFlags::empty();

    let mut specs: Vec<ArtSpec> = Vec::new();

    // The three named artifacts, never randomized
    specs.push(spec("of Power (The One Ring)", Named, Ring, sv::RING, 5, 15, 15, 0, PowerFlags::ALL_STATS.union(PowerFlags::SPEED), ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_POIS), MiscFlags::SEE_INVIS.union(MiscFlags::AGGRAVATE).union(MiscFlags::DRAIN_EXP).union(MiscFlags::HEAVY_CURSE), 1, 0));
    specs.push(spec("'Grond'", Named, Hafted, sv::MACE_OF_DISRUPTION, 0, 5, 25, 10, PowerFlags::KILL_DRAGON.union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD), ProtFlags::IM_FIRE.union(ProtFlags::IM_COLD), MiscFlags::SEE_INVIS.union(MiscFlags::TELEPATHY).union(MiscFlags::AGGRAVATE), 1, 500_000));
    specs.push(spec("of Morgoth", Named, Crown, sv::IRON_CROWN, 125, 0, 0, 0, PowerFlags::STR.union(PowerFlags::INT).union(PowerFlags::WIS).union(PowerFlags::DEX).union(PowerFlags::CON).union(PowerFlags::CHR).union(PowerFlags::INFRA), ProtFlags::ALL_LOW_RESISTS, MiscFlags::SEE_INVIS.union(MiscFlags::TELEPATHY).union(MiscFlags::LIGHT).union(MiscFlags::HEAVY_CURSE), 1, 10_000_000));

    // Special slots: lights and jewelry keep their base item
    specs.push(act(spec("of Galadriel", Special, Light, sv::PHIAL, 0, 0, 0, 0, P, R, MiscFlags::LIGHT, 30, 10_000), Activation::Illumination));
    specs.push(act(spec("of Elendil", Special, Light, sv::STAR, 0, 0, 0, 0, P, R, MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS), 15, 30_000), Activation::MagicMapping));
    specs.push(act(spec("of Thrain", Special, Light, sv::ARKENSTONE, 0, 0, 0, 0, P, ProtFlags::RES_DARK, MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::HOLD_LIFE), 5, 60_000), Activation::Clairvoyance));
    specs.push(spec("of Barahir", Special, Ring, sv::RING, 1, 0, 0, 0, PowerFlags::ALL_STATS, ProtFlags::RES_POIS.union(ProtFlags::RES_DARK), M, 20, 65_000));
    specs.push(spec("of Carlammas", Special, Amulet, sv::AMULET, 2, 0, 0, 0, PowerFlags::CON, ProtFlags::RES_FIRE, M, 20, 60_000));
    specs.push(spec("of Ingwe", Special, Amulet, sv::AMULET, 3, 0, 0, 0, PowerFlags::WIS.union(PowerFlags::CHR).union(PowerFlags::INFRA), ProtFlags::RES_ACID.union(ProtFlags::RES_ELEC), MiscFlags::SEE_INVIS.union(MiscFlags::FREE_ACT), 30, 90_000));

    // Swords
    specs.push(act(spec("'Narthanc'", Normal, Sword, sv::DAGGER, 0, 4, 6, 0, PowerFlags::BRAND_FIRE, ProtFlags::RES_FIRE, M, 40, 12_000), Activation::FireBolt));
    specs.push(act(spec("'Nimthanc'", Normal, Sword, sv::DAGGER, 0, 4, 6, 0, PowerFlags::BRAND_COLD, ProtFlags::RES_COLD, M, 40, 11_000), Activation::FrostBolt));
    specs.push(act(spec("'Dethanc'", Normal, Sword, sv::DAGGER, 0, 4, 6, 0, PowerFlags::BRAND_ELEC, ProtFlags::RES_ELEC, M, 60, 13_000), Activation::LightningBolt));
    specs.push(spec("'Rilia'", Normal, Sword, sv::MAIN_GAUCHE, 2, 4, 3, 0, PowerFlags::SLAY_ORC, ProtFlags::RES_POIS, M, 60, 15_000));
    specs.push(spec("'Belangil'", Normal, Sword, sv::DAGGER, 2, 6, 9, 0, PowerFlags::BRAND_COLD.union(PowerFlags::DEX), ProtFlags::RES_COLD.union(ProtFlags::SUST_DEX), MiscFlags::REGEN.union(MiscFlags::SLOW_DIGEST), 20, 40_000));
    specs.push(spec("'Calris'", Normal, Sword, sv::BROKEN_SWORD, -5, -10, -12, 0, PowerFlags::KILL_DRAGON.union(PowerFlags::SLAY_EVIL), ProtFlags::RES_DISEN, MiscFlags::AGGRAVATE.union(MiscFlags::LIGHT_CURSE).union(MiscFlags::DRAIN_EXP), 15, 0));
    specs.push(spec("'Arunruth'", Normal, Sword, sv::BROAD_SWORD, 4, 20, 12, 0, PowerFlags::DEX.union(PowerFlags::SLAY_ORC), ProtFlags::SUST_DEX, MiscFlags::FREE_ACT.union(MiscFlags::FEATHER), 25, 50_000));
    specs.push(spec("'Glamdring'", Normal, Sword, sv::BROAD_SWORD, 1, 10, 15, 0, PowerFlags::SLAY_EVIL.union(PowerFlags::SLAY_ORC).union(PowerFlags::SEARCH), ProtFlags::RES_FIRE, MiscFlags::LIGHT.union(MiscFlags::BLESSED), 20, 40_000));
    specs.push(spec("'Orcrist'", Normal, Sword, sv::BROAD_SWORD, 3, 10, 15, 0, PowerFlags::SLAY_EVIL.union(PowerFlags::SLAY_ORC).union(PowerFlags::STEALTH), ProtFlags::RES_COLD, MiscFlags::LIGHT.union(MiscFlags::BLESSED), 20, 40_000));
    specs.push(spec("'Angrist'", Normal, Sword, sv::DAGGER, 4, 10, 15, 5, PowerFlags::DEX.union(PowerFlags::SLAY_ORC).union(PowerFlags::SLAY_TROLL), ProtFlags::RES_DARK.union(ProtFlags::SUST_DEX), MiscFlags::FREE_ACT, 12, 100_000));
    specs.push(spec("'Gurthang'", Normal, Sword, sv::TWO_HANDED_SWORD, 2, 13, 17, 0, PowerFlags::STR.union(PowerFlags::SLAY_TROLL).union(PowerFlags::SLAY_DRAGON), ProtFlags::SUST_STR, MiscFlags::REGEN.union(MiscFlags::FREE_ACT).union(MiscFlags::SLOW_DIGEST), 15, 100_000));
    specs.push(spec("'Zarcuthra'", Normal, Sword, sv::TWO_HANDED_SWORD, 4, 19, 21, 0, PowerFlags::STR.union(PowerFlags::CHR).union(PowerFlags::SLAY_ANIMAL).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_DEMON).union(PowerFlags::SLAY_TROLL).union(PowerFlags::SLAY_GIANT).union(PowerFlags::KILL_DRAGON).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::RES_CHAOS), MiscFlags::SEE_INVIS.union(MiscFlags::FREE_ACT).union(MiscFlags::AGGRAVATE), 4, 200_000));
    specs.push(spec("'Mormegil'", Normal, Sword, sv::TWO_HANDED_SWORD, -2, -15, -15, -10, PowerFlags::SPEED, R, MiscFlags::HEAVY_CURSE.union(MiscFlags::LIGHT_CURSE).union(MiscFlags::AGGRAVATE).union(MiscFlags::TELEPORT).union(MiscFlags::DRAIN_EXP), 15, 0));
    specs.push(spec("'Crisdurian'", Normal, Sword, sv::EXECUTIONERS_SWORD, 0, 18, 19, 0, PowerFlags::SLAY_EVIL.union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_ORC).union(PowerFlags::SLAY_TROLL).union(PowerFlags::SLAY_GIANT).union(PowerFlags::SLAY_DRAGON), R, MiscFlags::SEE_INVIS, 13, 100_000));
    specs.push(spec("'Agarang'", Normal, Sword, sv::KATANA, 3, 12, 16, 0, PowerFlags::DEX.union(PowerFlags::SLAY_UNDEAD), ProtFlags::SUST_DEX, MiscFlags::FREE_ACT, 18, 80_000));
    specs.push(spec("'Forasgil'", Normal, Sword, sv::RAPIER, 1, 12, 19, 0, PowerFlags::SLAY_ANIMAL.union(PowerFlags::BRAND_COLD), ProtFlags::RES_COLD, MiscFlags::LIGHT, 25, 15_000));
    specs.push(spec("'Caine'", Normal, Sword, sv::SABRE, 3, 6, 8, 0, PowerFlags::DEX.union(PowerFlags::SEARCH).union(PowerFlags::SLAY_ANIMAL), R, MiscFlags::SEE_INVIS, 25, 25_000));
    specs.push(spec("'Sting'", Normal, Sword, sv::SMALL_SWORD, 2, 7, 8, 0, PowerFlags::STR.union(PowerFlags::DEX).union(PowerFlags::CON).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_ORC), R, MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::FREE_ACT), 20, 100_000));
    specs.push(spec("'Anduril'", Normal, Sword, sv::LONG_SWORD, 4, 10, 15, 5, PowerFlags::STR.union(PowerFlags::DEX).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_ORC).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::SUST_STR).union(ProtFlags::SUST_DEX), MiscFlags::FREE_ACT.union(MiscFlags::SEE_INVIS).union(MiscFlags::BLESSED), 20, 80_000));
    specs.push(spec("'Ringil'", Normal, Sword, sv::LONG_SWORD, 10, 22, 25, 0, PowerFlags::SPEED.union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_TROLL).union(PowerFlags::BRAND_COLD), ProtFlags::RES_COLD, MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::FREE_ACT).union(MiscFlags::REGEN).union(MiscFlags::SLOW_DIGEST), 2, 300_000));

    // Polearms
    specs.push(spec("'Theoden'", Normal, Polearm, sv::BATTLE_AXE, 3, 8, 10, 0, PowerFlags::WIS.union(PowerFlags::SLAY_DRAGON).union(PowerFlags::SEARCH), ProtFlags::SUST_WIS, MiscFlags::TELEPATHY.union(MiscFlags::SLOW_DIGEST), 20, 40_000));
    specs.push(spec("'Pain'", Normal, Polearm, sv::GLAIVE, 0, 0, 30, 0, P, R, M, 25, 50_000));
    specs.push(spec("'Osondir'", Normal, Polearm, sv::HALBERD, 3, 6, 9, 0, PowerFlags::CHR.union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::RES_SOUND), MiscFlags::SEE_INVIS.union(MiscFlags::FEATHER), 20, 22_000));
    specs.push(spec("'Til-i-arc'", Normal, Polearm, sv::PIKE, 2, 10, 12, 10, PowerFlags::INT.union(PowerFlags::SLAY_GIANT).union(PowerFlags::SLAY_TROLL).union(PowerFlags::BRAND_COLD).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::RES_COLD).union(ProtFlags::SUST_INT), MiscFlags::SLOW_DIGEST, 20, 32_000));
    specs.push(spec("'Aeglos'", Normal, Polearm, sv::SPEAR, 4, 15, 25, 5, PowerFlags::WIS.union(PowerFlags::SLAY_ORC).union(PowerFlags::BRAND_COLD), ProtFlags::RES_COLD.union(ProtFlags::SUST_WIS), MiscFlags::FREE_ACT.union(MiscFlags::SLOW_DIGEST).union(MiscFlags::BLESSED), 12, 140_000));
    specs.push(spec("'Orome'", Normal, Polearm, sv::SPEAR, 4, 15, 15, 0, PowerFlags::INT.union(PowerFlags::INFRA).union(PowerFlags::SLAY_GIANT).union(PowerFlags::BRAND_FIRE).union(PowerFlags::SEARCH), ProtFlags::RES_FIRE.union(ProtFlags::SUST_INT), MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::FEATHER).union(MiscFlags::BLESSED), 12, 60_000));
    specs.push(spec("'Nimloth'", Normal, Polearm, sv::BROAD_AXE, 3, 12, 16, 0, PowerFlags::STEALTH.union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::BRAND_COLD), ProtFlags::RES_COLD, MiscFlags::SEE_INVIS, 18, 30_000));
    specs.push(spec("'Eorlingas'", Normal, Polearm, sv::TRIDENT, 2, 12, 19, 0, PowerFlags::DEX.union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_ORC), ProtFlags::SUST_DEX, MiscFlags::SEE_INVIS.union(MiscFlags::BLESSED), 14, 120_000));
    specs.push(spec("'Durin'", Normal, Polearm, sv::GREAT_AXE, 3, 10, 20, 15, PowerFlags::CON.union(PowerFlags::SLAY_DEMON).union(PowerFlags::SLAY_TROLL).union(PowerFlags::SLAY_ORC), ProtFlags::RES_ACID.union(ProtFlags::RES_FIRE.union(ProtFlags::RES_DARK)).union(ProtFlags::SUST_CON), MiscFlags::FREE_ACT, 9, 150_000));
    specs.push(spec("'Olorin'", Normal, Polearm, sv::GLAIVE, 4, 9, 13, 0, PowerFlags::WIS.union(PowerFlags::INT).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_ORC).union(PowerFlags::BRAND_FIRE).union(PowerFlags::SEARCH), ProtFlags::RES_FIRE.union(ProtFlags::RES_NETHR).union(ProtFlags::SUST_WIS), MiscFlags::SEE_INVIS.union(MiscFlags::HOLD_LIFE), 10, 130_000));
    specs.push(spec("'Barukkheled'", Normal, Polearm, sv::LOCHABER_AXE, 3, 13, 18, 0, PowerFlags::CON.union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_ORC).union(PowerFlags::SLAY_TROLL).union(PowerFlags::SLAY_GIANT), ProtFlags::SUST_CON, MiscFlags::SEE_INVIS, 14, 50_000));
    specs.push(spec("'Mundwine'", Normal, Polearm, sv::BATTLE_AXE, 0, 12, 17, 0, PowerFlags::SLAY_EVIL, ProtFlags::RES_FIRE.union(ProtFlags::RES_COLD).union(ProtFlags::RES_ELEC).union(ProtFlags::RES_ACID), M, 18, 30_000));
    specs.push(spec("'Avavir'", Normal, Polearm, sv::SCYTHE, 3, 8, 8, 10, PowerFlags::DEX.union(PowerFlags::CHR).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::SUST_DEX), MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::FREE_ACT), 12, 80_000));

    // Hafted weapons
    specs.push(spec("'Aule'", Normal, Hafted, sv::WAR_HAMMER, 4, 19, 21, 5, PowerFlags::WIS.union(PowerFlags::KILL_DEMON).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::BRAND_ELEC), ProtFlags::RES_ELEC.union(ProtFlags::RES_NEXUS).union(ProtFlags::SUST_WIS), MiscFlags::FREE_ACT.union(MiscFlags::SEE_INVIS), 8, 250_000));
    specs.push(spec("'Meneltarma'", Normal, Hafted, sv::QUARTERSTAFF, 4, 10, 13, 0, PowerFlags::INT.union(PowerFlags::WIS).union(PowerFlags::CHR).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SEARCH), R, MiscFlags::SEE_INVIS.union(MiscFlags::HOLD_LIFE).union(MiscFlags::FEATHER), 20, 50_000));
    specs.push(spec("'Thunderfist'", Normal, Hafted, sv::MACE, 4, 5, 18, 0, PowerFlags::STR.union(PowerFlags::SLAY_ANIMAL).union(PowerFlags::SLAY_ORC).union(PowerFlags::SLAY_TROLL).union(PowerFlags::BRAND_FIRE).union(PowerFlags::BRAND_ELEC), ProtFlags::RES_FIRE.union(ProtFlags::RES_ELEC).union(ProtFlags::RES_DARK), M, 10, 160_000));
    specs.push(spec("'Bloodspike'", Normal, Hafted, sv::MORNING_STAR, 4, 8, 22, 0, PowerFlags::STR.union(PowerFlags::SLAY_ANIMAL).union(PowerFlags::SLAY_UNDEAD).union(PowerFlags::SLAY_ORC), ProtFlags::RES_NEXUS.union(ProtFlags::SUST_STR), MiscFlags::SEE_INVIS, 10, 55_000));
    specs.push(act(spec("'Firestar'", Normal, Hafted, sv::MORNING_STAR, 0, 5, 7, 2, PowerFlags::BRAND_FIRE, ProtFlags::RES_FIRE, M, 20, 35_000), Activation::FireBall));
    specs.push(act(spec("'Taratol'", Normal, Hafted, sv::MACE, 0, 12, 12, 0, PowerFlags::KILL_DRAGON.union(PowerFlags::BRAND_ELEC), ProtFlags::IM_ELEC, M, 15, 50_000), Activation::Teleport));
    specs.push(spec("'Erikil'", Normal, Hafted, sv::QUARTERSTAFF, 2, 3, 5, 0, PowerFlags::BLOWS.union(PowerFlags::SLAY_ANIMAL).union(PowerFlags::SEARCH).union(PowerFlags::INFRA), R, MiscFlags::REGEN.union(MiscFlags::SLOW_DIGEST), 30, 20_000));
    specs.push(spec("'Gorlim'", Normal, Hafted, sv::WAR_HAMMER, -2, -10, -10, 0, PowerFlags::WIS.union(PowerFlags::INT), R, MiscFlags::AGGRAVATE.union(MiscFlags::LIGHT_CURSE).union(MiscFlags::TELEPORT), 20, 0));
    specs.push(spec("'Deathwreaker'", Normal, Hafted, sv::TWO_HANDED_FLAIL, 6, 18, 18, 0, PowerFlags::STR.union(PowerFlags::SLAY_ANIMAL).union(PowerFlags::SLAY_EVIL).union(PowerFlags::SLAY_DRAGON).union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::RES_CHAOS.union(ProtFlags::RES_DISEN)).union(ProtFlags::SUST_STR), MiscFlags::AGGRAVATE, 7, 400_000));
    specs.push(spec("'Turmil'", Normal, Hafted, sv::LEAD_FILLED_MACE, 4, 10, 6, 8, PowerFlags::WIS.union(PowerFlags::INFRA).union(PowerFlags::SLAY_ORC).union(PowerFlags::BRAND_COLD), ProtFlags::RES_COLD.union(ProtFlags::SUST_WIS), MiscFlags::LIGHT.union(MiscFlags::REGEN), 13, 120_000));
    specs.push(spec("'Hurin'", Normal, Hafted, sv::BALL_AND_CHAIN, 3, 12, 18, 0, PowerFlags::STEALTH.union(PowerFlags::SLAY_DEMON).union(PowerFlags::SLAY_TROLL), R, MiscFlags::FREE_ACT, 18, 90_000));
    specs.push(spec("'Mardacar'", Normal, Hafted, sv::WHIP, 1, 6, 6, 0, PowerFlags::STEALTH.union(PowerFlags::BRAND_FIRE), ProtFlags::RES_FIRE.union(ProtFlags::RES_DARK), MiscFlags::SEE_INVIS, 28, 18_000));

    // Bows
    specs.push(spec("'Belthronding'", Normal, Bow, sv::LONG_BOW, 3, 20, 22, 0, PowerFlags::DEX.union(PowerFlags::STEALTH).union(PowerFlags::MIGHT), ProtFlags::RES_DISEN.union(ProtFlags::SUST_DEX), M, 10, 35_000));
    specs.push(spec("'Bard'", Normal, Bow, sv::LONG_BOW, 2, 17, 19, 0, PowerFlags::DEX.union(PowerFlags::MIGHT), ProtFlags::SUST_DEX, MiscFlags::FREE_ACT, 20, 20_000));
    specs.push(act(spec("'Cubragol'", Normal, Bow, sv::LIGHT_XBOW, 10, 10, 14, 0, PowerFlags::SPEED, ProtFlags::RES_FIRE, M, 11, 50_000), Activation::Haste));
    specs.push(spec("'Amras'", Normal, Bow, sv::SHORT_BOW, 1, 12, 15, 0, PowerFlags::SHOTS.union(PowerFlags::MIGHT), R, MiscFlags::SLOW_DIGEST, 20, 30_000));
    specs.push(spec("'Amrod'", Normal, Bow, sv::HEAVY_XBOW, 2, 12, 15, 0, PowerFlags::SHOTS, ProtFlags::RES_COLD, M, 20, 28_000));
    specs.push(spec("'Windfleet'", Normal, Bow, sv::SLING, 2, 8, 10, 0, PowerFlags::SHOTS.union(PowerFlags::STEALTH), R, M, 25, 15_000));

    // Diggers (counted with melee for family purposes, never quota'd)
    specs.push(spec("'Nar'", Normal, Digger, sv::DWARVEN_PICK, 3, 9, 12, 0, PowerFlags::STR.union(PowerFlags::TUNNEL).union(PowerFlags::BRAND_ACID), ProtFlags::SUST_STR, M, 15, 25_000));
    specs.push(spec("'Erebor'", Normal, Digger, sv::ORCISH_PICK, 5, 10, 10, 0, PowerFlags::STR.union(PowerFlags::TUNNEL).union(PowerFlags::BRAND_ACID), R, MiscFlags::SLOW_DIGEST, 18, 20_000));

    // Body armor
    specs.push(spec("'Soulkeeper'", Normal, HardArmor, sv::DOUBLE_CHAIN, 2, 0, 0, 20, PowerFlags::CON, ProtFlags::RES_ACID.union(ProtFlags::RES_COLD).union(ProtFlags::RES_DARK).union(ProtFlags::RES_NEXUS).union(ProtFlags::RES_NETHR).union(ProtFlags::RES_CHAOS).union(ProtFlags::SUST_CON), MiscFlags::HOLD_LIFE, 9, 300_000));
    specs.push(spec("of Isildur", Normal, HardArmor, sv::FULL_PLATE, 1, 0, 0, 25, PowerFlags::CON, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_SOUND).union(ProtFlags::RES_NEXUS), M, 13, 50_000));
    specs.push(spec("of Rohirrim", Normal, HardArmor, sv::METAL_SCALE, 2, 0, 0, 15, PowerFlags::STR.union(PowerFlags::DEX), ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_SOUND).union(ProtFlags::RES_CONFU), M, 13, 30_000));
    specs.push(spec("'Belegennon'", Normal, HardArmor, sv::MITHRIL_CHAIN, 4, 0, 0, 20, PowerFlags::STEALTH, ProtFlags::ALL_LOW_RESISTS, M, 11, 105_000));
    specs.push(spec("'Celeborn'", Normal, HardArmor, sv::AUGMENTED_CHAIN, 4, 0, 0, 20, PowerFlags::STR.union(PowerFlags::CHR), ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_DARK.union(ProtFlags::RES_DISEN)), M, 10, 150_000));
    specs.push(spec("'Caspanion'", Normal, HardArmor, sv::METAL_BRIGANDINE, 3, 0, 0, 20, PowerFlags::INT.union(PowerFlags::WIS).union(PowerFlags::CON), ProtFlags::RES_ACID.union(ProtFlags::RES_POIS).union(ProtFlags::RES_CONFU), MiscFlags::FREE_ACT, 11, 150_000));
    specs.push(spec("of Arvedui", Normal, SoftArmor, sv::LEATHER_SCALE, 2, 0, 0, 15, PowerFlags::STR.union(PowerFlags::CHR), ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_SHARD).union(ProtFlags::RES_NEXUS), M, 20, 40_000));
    specs.push(spec("'Thalkettoth'", Normal, SoftArmor, sv::HARD_LEATHER, 3, 0, 0, 25, PowerFlags::DEX, ProtFlags::RES_ACID.union(ProtFlags::RES_SHARD), M, 25, 25_000));
    specs.push(spec("'Himring'", Normal, SoftArmor, sv::HARD_STUDDED, 0, 0, 0, 15, P, ProtFlags::RES_POIS.union(ProtFlags::RES_NETHR).union(ProtFlags::RES_CHAOS), M, 20, 35_000));
    specs.push(spec("'Vanyar'", Normal, SoftArmor, sv::ROBE, 2, 0, 0, 20, PowerFlags::INT.union(PowerFlags::WIS), ProtFlags::RES_POIS.union(ProtFlags::SUST_INT).union(ProtFlags::SUST_WIS), MiscFlags::HOLD_LIFE, 15, 50_000));
    specs.push(spec("of Dom", Normal, HardArmor, sv::ADAMANTITE_PLATE, 0, 0, 0, 45, P, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_POIS).union(ProtFlags::RES_LIGHT).union(ProtFlags::RES_DARK).union(ProtFlags::RES_BLIND).union(ProtFlags::RES_CONFU).union(ProtFlags::RES_SOUND).union(ProtFlags::RES_SHARD).union(ProtFlags::RES_NEXUS).union(ProtFlags::RES_NETHR).union(ProtFlags::RES_CHAOS).union(ProtFlags::RES_DISEN), MiscFlags::HOLD_LIFE, 2, 500_000));
    specs.push(spec("of Smaug", Normal, DragonArmor, sv::RED_DRAGON_SCALE, 0, 0, 0, 20, P, ProtFlags::RES_FIRE, M, 10, 60_000));
    specs.push(spec("of Itangast", Normal, DragonArmor, sv::BLUE_DRAGON_SCALE, 0, 0, 0, 18, P, ProtFlags::RES_ELEC.union(ProtFlags::RES_COLD), M, 10, 50_000));
    specs.push(spec("'Razorback'", Normal, DragonArmor, sv::MULTIHUED_DRAGON_SCALE, -1, 0, 0, 25, P, ProtFlags::RES_POIS.union(ProtFlags::RES_LIGHT), MiscFlags::AGGRAVATE.union(MiscFlags::LIGHT), 5, 100_000));
    specs.push(spec("'Morthond'", Normal, SoftArmor, sv::SOFT_LEATHER, 1, 0, 0, 10, PowerFlags::STEALTH, ProtFlags::RES_DARK, M, 30, 12_000));
    specs.push(spec("'Grimhold'", Normal, HardArmor, sv::CHAIN_MAIL, 0, 0, 0, 12, P, ProtFlags::RES_FIRE.union(ProtFlags::RES_SHARD), M, 25, 18_000));

    // Shields
    specs.push(spec("'Thorin'", Normal, Shield, sv::SMALL_METAL_SHIELD, 4, 0, 0, 25, PowerFlags::STR.union(PowerFlags::CON).union(PowerFlags::SEARCH), ProtFlags::IM_ACID.union(ProtFlags::RES_SOUND).union(ProtFlags::RES_CHAOS).union(ProtFlags::SUST_STR).union(ProtFlags::SUST_CON), MiscFlags::FREE_ACT, 9, 200_000));
    specs.push(spec("'Celegorm'", Normal, Shield, sv::LARGE_LEATHER_SHIELD, 0, 0, 0, 20, P, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_LIGHT).union(ProtFlags::RES_DARK), M, 15, 12_000));
    specs.push(spec("'Anarion'", Normal, Shield, sv::LARGE_METAL_SHIELD, 0, 0, 0, 20, P, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::ALL_SUSTAINS), M, 9, 160_000));
    specs.push(spec("'Gil-galad'", Normal, Shield, sv::SHIELD_OF_DEFLECTION, 5, 0, 0, 20, PowerFlags::CHR, ProtFlags::RES_ACID.union(ProtFlags::RES_ELEC), MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS), 6, 150_000));
    specs.push(spec("'Haleth'", Normal, Shield, sv::SMALL_LEATHER_SHIELD, 2, 0, 0, 15, PowerFlags::STEALTH, ProtFlags::RES_POIS.union(ProtFlags::RES_FEAR), M, 25, 20_000));
    specs.push(spec("'Barad'", Normal, Shield, sv::LARGE_METAL_SHIELD, 0, 0, 0, 10, P, ProtFlags::RES_FIRE.union(ProtFlags::RES_BLIND), M, 25, 10_000));

    // Cloaks
    specs.push(act(spec("'Colluin'", Normal, Cloak, sv::CLOAK, 0, 0, 0, 15, P, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_POIS), M, 20, 10_000), Activation::CurePoison));
    specs.push(act(spec("'Holcolleth'", Normal, Cloak, sv::CLOAK, 2, 0, 0, 4, PowerFlags::INT.union(PowerFlags::WIS).union(PowerFlags::STEALTH), ProtFlags::RES_ACID, MiscFlags::SEE_INVIS, 20, 13_000), Activation::DetectEvil));
    specs.push(spec("'Thingol'", Normal, Cloak, sv::SHADOW_CLOAK, 3, 0, 0, 18, PowerFlags::DEX.union(PowerFlags::CHR), ProtFlags::RES_ACID.union(ProtFlags::SUST_DEX), MiscFlags::FREE_ACT, 14, 35_000));
    specs.push(spec("'Thorongil'", Normal, Cloak, sv::CLOAK, 0, 0, 0, 10, P, ProtFlags::RES_ACID, MiscFlags::SEE_INVIS.union(MiscFlags::FREE_ACT), 25, 8_000));
    specs.push(spec("'Maglor'", Normal, Cloak, sv::CLOAK, 2, 0, 0, 8, PowerFlags::STEALTH, ProtFlags::RES_DARK, MiscFlags::FEATHER, 25, 9_000));

    // Headgear
    specs.push(spec("of Celebrimbor", Normal, Helm, sv::STEEL_HELM, 3, 0, 0, 18, PowerFlags::INT.union(PowerFlags::DEX), ProtFlags::RES_ACID.union(ProtFlags::RES_SHARD).union(ProtFlags::SUST_INT), MiscFlags::SEE_INVIS, 10, 80_000));
    specs.push(spec("of Dor-Lomin", Normal, Helm, sv::IRON_HELM, 4, 0, 0, 20, PowerFlags::CON, ProtFlags::ALL_LOW_RESISTS.union(ProtFlags::RES_BLIND).union(ProtFlags::SUST_CON), MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::TELEPATHY), 9, 300_000));
    specs.push(spec("'Holhenneth'", Normal, Helm, sv::METAL_CAP, 2, 0, 0, 10, PowerFlags::INT.union(PowerFlags::WIS).union(PowerFlags::SEARCH), ProtFlags::RES_BLIND, MiscFlags::SEE_INVIS, 15, 100_000));
    specs.push(spec("'Gorlath'", Normal, Helm, sv::HARD_LEATHER_CAP, 2, 0, 0, 8, PowerFlags::WIS, ProtFlags::RES_BLIND.union(ProtFlags::SUST_WIS), M, 25, 15_000));
    specs.push(spec("of Gondor", Normal, Crown, sv::GOLDEN_CROWN, 3, 0, 0, 15, PowerFlags::STR.union(PowerFlags::WIS).union(PowerFlags::CON), ProtFlags::RES_FIRE.union(ProtFlags::RES_LIGHT.union(ProtFlags::RES_BLIND)).union(ProtFlags::SUST_STR), MiscFlags::LIGHT.union(MiscFlags::SEE_INVIS).union(MiscFlags::REGEN), 9, 200_000));
    specs.push(spec("of Numenor", Normal, Crown, sv::JEWELED_CROWN, 3, 0, 0, 15, PowerFlags::INT.union(PowerFlags::CHR), ProtFlags::RES_POIS.union(ProtFlags::RES_CONFU).union(ProtFlags::SUST_INT).union(ProtFlags::SUST_CHR), MiscFlags::TELEPATHY.union(MiscFlags::LIGHT), 8, 250_000));

    // Gloves
    specs.push(spec("of Cambeleg", Normal, Gloves, sv::LEATHER_GLOVES, 2, 8, 8, 15, PowerFlags::CON, R, MiscFlags::FREE_ACT, 20, 36_000));
    specs.push(spec("of Cammithrim", Normal, Gloves, sv::LEATHER_GLOVES, 0, 0, 0, 10, P, ProtFlags::RES_LIGHT.union(ProtFlags::SUST_CON), MiscFlags::FREE_ACT.union(MiscFlags::LIGHT), 30, 30_000));
    specs.push(spec("'Paurhach'", Normal, Gloves, sv::GAUNTLETS, 0, 0, 0, 15, P, ProtFlags::RES_FIRE, M, 25, 15_000));
    specs.push(spec("'Fingolfin'", Normal, Gloves, sv::CESTI, 4, 10, 10, 20, PowerFlags::DEX, ProtFlags::RES_ACID.union(ProtFlags::SUST_DEX), MiscFlags::FREE_ACT, 9, 110_000));

    // Boots
    specs.push(spec("of Feanor", Normal, Boots, sv::HARD_LEATHER_BOOTS, 15, 0, 0, 10, PowerFlags::SPEED.union(PowerFlags::STEALTH), ProtFlags::RES_NEXUS, M, 5, 300_000));
    specs.push(spec("'Dal-i-thalion'", Normal, Boots, sv::SOFT_LEATHER_BOOTS, 5, 0, 0, 10, PowerFlags::DEX, ProtFlags::RES_NETHR.union(ProtFlags::RES_CHAOS).union(ProtFlags::SUST_CON), MiscFlags::FREE_ACT, 20, 40_000));
    specs.push(spec("'Thror'", Normal, Boots, sv::METAL_SHOD_BOOTS, 3, 0, 0, 20, PowerFlags::STR.union(PowerFlags::CON), ProtFlags::RES_DARK, M, 20, 12_000));
    specs.push(spec("'Wanderer'", Normal, Boots, sv::SOFT_LEATHER_BOOTS, 2, 0, 0, 8, PowerFlags::STEALTH, ProtFlags::RES_SOUND, MiscFlags::FEATHER, 25, 10_000));
    specs.push(spec("'Firefoot'", Normal, Boots, sv::HARD_LEATHER_BOOTS, 4, 0, 0, 12, PowerFlags::SPEED, ProtFlags::RES_FIRE, MiscFlags::FEATHER, 12, 50_000));

    let artifacts = specs.into_iter().map(|s| realize(catalog, s)).collect();
    ReferenceCorpus::new(artifacts).expect("standard corpus carries exactly three named artifacts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::{PowerModel, StandardPowerModel};

    #[test]
    fn test_catalog_lookup_covers_threshold_tables() {
        let catalog = standard_catalog();
        // Every (category, subtype) the corpus uses must resolve
        let corpus = standard_corpus(&catalog);
        for art in corpus.artifacts() {
            assert!(
                catalog.lookup(art.category, art.subtype).is_some(),
                "missing kind for {}",
                art.name
            );
        }
    }

    #[test]
    fn test_corpus_has_three_named() {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let named = corpus
            .artifacts()
            .iter()
            .filter(|a| a.slot == ArtifactSlot::Named)
            .count();
        assert_eq!(named, 3);
    }

    #[test]
    fn test_corpus_has_cursed_exemplars() {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let model = StandardPowerModel;
        let cursed = corpus
            .artifacts()
            .iter()
            .filter(|a| {
                let k = catalog.lookup(a.category, a.subtype).unwrap();
                a.slot == ArtifactSlot::Normal && model.power(a, k) < 0
            })
            .count();
        assert!(cursed >= 2, "expected at least two cursed exemplars, got {cursed}");
    }

    #[test]
    fn test_every_family_represented() {
        let catalog = standard_catalog();
        let corpus = standard_corpus(&catalog);
        let has = |f: fn(ItemCategory) -> bool| {
            corpus.artifacts().iter().any(|a| f(a.category))
        };
        assert!(has(|c| c == ItemCategory::Bow));
        assert!(has(|c| c.is_melee()));
        assert!(has(|c| c.is_body_armor()));
        assert!(has(|c| c == ItemCategory::Shield));
        assert!(has(|c| c == ItemCategory::Cloak));
        assert!(has(|c| c.is_headgear()));
        assert!(has(|c| c == ItemCategory::Gloves));
        assert!(has(|c| c == ItemCategory::Boots));
    }
}
