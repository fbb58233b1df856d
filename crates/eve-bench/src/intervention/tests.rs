use super::*;
use crate::device::{InvalidGeometryError, JWireParams};

#[test]
fn defaults_match_benchmark() {
    let env = ArchVarietyImageV2::new(1, true, false).unwrap();
    assert_eq!(env.episodes_between_arch_change(), 1);
    assert_eq!(env.vessel_tree.scale_diameter_array, vec![0.85]);
    assert_eq!(env.vessel_tree.arch_types_filter, vec![ArchType::I]);
    assert_eq!(env.simulation.friction, 0.1);
    assert_eq!(env.fluoroscopy.image_frequency, 7.5);
    assert_eq!(env.fluoroscopy.image_rot_zx, [0.0, 0.0]);
    assert_eq!(env.target.threshold, 5.0);
    assert_eq!(env.target.branches.len(), 6);
    assert!(env.stop_instrument_at_tree_end);
    assert!(!env.normalize_action);

    assert_eq!(env.instruments.len(), 1);
    let Instrument::Angled(angled) = &env.instruments[0] else {
        panic!("expected angled instrument");
    };
    assert!((angled.tip_angle_deg - 72.0).abs() < 1e-12);
    assert_eq!(angled.flex_length, 30.0);
    assert_eq!(env.instruments[0].velocity_limit(), (50.0, 3.14));
}

#[test]
fn angled_tip_arc_matches_jwire_tip() {
    // 12.1 mm radius over 72° gives the 15.2 mm tip of the reference J-wire.
    let arc = AngledParams::default().tip_arc_length();
    assert!((arc - JWireParams::default().tip_length).abs() < 0.01, "arc {arc}");
}

#[test]
fn episodes_between_change_is_forwarded() {
    let env = ArchVarietyImageV2::new(4, false, true).unwrap();
    assert_eq!(env.episodes_between_arch_change(), 4);
    assert!(!env.stop_instrument_at_tree_end);
    assert!(env.normalize_action);
    assert!(matches!(
        ArchVarietyImageV2::new(0, true, false),
        Err(InterventionError::InvalidParam {
            field: "vessel_tree.episodes_between_change",
            ..
        })
    ));
}

#[test]
fn jwire_instrument_carries_descriptor() {
    let wire = JWireParams::default().build().unwrap();
    let env = ArchVarietyImageV2::default().with_instrument(wire).unwrap();
    match &env.instruments[0] {
        Instrument::JWire(w) => assert_eq!(w.density_of_beams(), [40, 22]),
        other => panic!("unexpected instrument {other:?}"),
    }
    assert_eq!(env.instruments[0].name(), "guidewire");
    assert_eq!(env.instruments[0].length(), 450.0);
    env.validate().unwrap();
}

#[test]
fn invalid_angled_instrument_is_rejected() {
    let bad = AngledParams {
        flex_length: 500.0,
        ..AngledParams::default()
    };
    let err = ArchVarietyImageV2::default().with_instrument(bad).unwrap_err();
    assert!(matches!(
        err,
        InterventionError::Device(InvalidGeometryError::TipLongerThanDevice { .. })
    ));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn collaborator_ranges_are_checked() {
    let mut env = ArchVarietyImageV2::default();
    env.simulation.friction = -0.1;
    assert!(env.validate().is_err());

    let mut env = ArchVarietyImageV2::default();
    env.fluoroscopy.image_frequency = 0.0;
    assert!(env.validate().is_err());

    let mut env = ArchVarietyImageV2::default();
    env.target.branches.clear();
    assert!(env.validate().is_err());

    let mut env = ArchVarietyImageV2::default();
    env.vessel_tree.scale_diameter_array = vec![0.85, f64::NAN];
    assert!(env.validate().is_err());

    let mut env = ArchVarietyImageV2::default();
    env.instruments.clear();
    assert!(env.validate().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let wire = JWireParams::default().build().unwrap();
    let env = ArchVarietyImageV2::new(2, true, false)
        .unwrap()
        .with_instrument(wire)
        .unwrap();
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["instruments"][0]["type"], "JWire");
    assert_eq!(json["instruments"][0]["num_edges"], 225);
    assert_eq!(json["target"]["branches"][0], "lcca");
    assert_eq!(json["vessel_tree"]["arch_types_filter"][0], "I");

    let back: ArchVarietyImageV2 = serde_json::from_value(json).unwrap();
    assert_eq!(back.episodes_between_arch_change(), 2);
    assert_eq!(back.target, env.target);
    match &back.instruments[0] {
        Instrument::JWire(w) => assert_eq!(w.num_edges_collis(), [44, 31]),
        other => panic!("unexpected instrument {other:?}"),
    }
}
