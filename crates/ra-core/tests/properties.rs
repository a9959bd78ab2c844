//! Property-style invariants over arbitrary flag combinations.

use proptest::prelude::*;

use ra_core::ability::{self, Ability, ApplyCtx};
use ra_core::flags::{MiscFlags, PowerFlags, ProtFlags};
use ra_core::item::{Artifact, ArtifactSlot, ItemCategory, Recharge};
use ra_core::{GameRng, PowerModel, StandardPowerModel};

fn artifact(pf_bits: u32, rf_bits: u32, mf_bits: u32, pval: i16) -> Artifact {
    Artifact {
        name: "prop".to_owned(),
        slot: ArtifactSlot::Normal,
        category: ItemCategory::Sword,
        subtype: ra_core::data::sv::LONG_SWORD,
        to_h: 0,
        to_d: 0,
        to_a: 0,
        ac: 0,
        dd: 2,
        ds: 5,
        pval,
        weight: 130,
        power_flags: PowerFlags::from_bits_truncate(pf_bits),
        prot_flags: ProtFlags::from_bits_truncate(rf_bits),
        misc_flags: MiscFlags::from_bits_truncate(mf_bits),
        activation: None,
        recharge: Recharge::default(),
        alloc_prob: 10,
        alloc_min: 1,
        alloc_max: 127,
        cost: 100,
    }
}

proptest! {
    /// Whatever flags go in, the cleanup pass leaves no documented
    /// contradictory pair standing.
    #[test]
    fn prop_remove_contradictory_resolves_everything(
        pf in any::<u32>(),
        rf in any::<u32>(),
        mf in any::<u32>(),
        pval in -9i16..=9,
    ) {
        let mut art = artifact(pf, rf, mf, pval);
        ability::remove_contradictory(&mut art);
        prop_assert!(!art.has_contradiction());
    }

    /// The cleanup pass is idempotent.
    #[test]
    fn prop_remove_contradictory_idempotent(
        pf in any::<u32>(),
        rf in any::<u32>(),
        mf in any::<u32>(),
        pval in -9i16..=9,
    ) {
        let mut art = artifact(pf, rf, mf, pval);
        ability::remove_contradictory(&mut art);
        let once = art.clone();
        ability::remove_contradictory(&mut art);
        prop_assert_eq!(art, once);
    }

    /// The power oracle is a pure function of the record.
    #[test]
    fn prop_power_model_deterministic(
        pf in any::<u32>(),
        rf in any::<u32>(),
        mf in any::<u32>(),
        pval in -9i16..=9,
        to_h in -20i16..=30,
        to_d in -20i16..=30,
        to_a in -20i16..=39,
    ) {
        let catalog = ra_core::data::standard_catalog();
        let kind = catalog
            .lookup(ItemCategory::Sword, ra_core::data::sv::LONG_SWORD)
            .unwrap();
        let mut art = artifact(pf, rf, mf, pval);
        art.to_h = to_h;
        art.to_d = to_d;
        art.to_a = to_a;
        prop_assert_eq!(
            StandardPowerModel.power(&art, kind),
            StandardPowerModel.power(&art, kind)
        );
    }

    /// Boolean-flag abilities are no-ops on the second application.
    #[test]
    fn prop_boolean_ability_application_idempotent(seed in any::<u64>()) {
        let weights = [1i32; 12];
        let ctx = ApplyCtx {
            target_power: 100,
            max_power: 300,
            high_resist_weights: &weights,
        };
        for a in [
            Ability::GenFreeAct,
            Ability::GenLight,
            Ability::GenEsp,
            Ability::GenSeeInvis,
            Ability::GenHoldLife,
            Ability::GenRegen,
            Ability::GenSlowDigest,
            Ability::GenFeather,
            Ability::GenResPoison,
            Ability::GenResChaos,
            Ability::MeleeBless,
        ] {
            let mut rng = GameRng::new(seed);
            let mut art = artifact(0, 0, 0, 0);
            ability::apply_ability(&mut art, a, &ctx, &mut rng);
            let once = art.clone();
            ability::apply_ability(&mut art, a, &ctx, &mut rng);
            prop_assert_eq!(&art, &once, "{} double-stacked", a);
        }
    }
}
