use super::*;
use proptest::prelude::*;
use std::f64::consts::PI;

fn reference() -> JWire {
    JWireParams::default().build().unwrap()
}

#[test]
fn reference_wire_derivation() {
    let wire = reference();
    assert!((wire.straight_length() - 434.8).abs() < 1e-9);
    assert_eq!(wire.num_edges(), 225);
    assert_eq!(wire.num_edges_collis(), [44, 31]);
    assert_eq!(wire.density_of_beams(), [40, 22]);
    let [k0, k1, k2] = wire.key_points();
    assert_eq!(k0, 0.0);
    assert!((k1 - 434.8).abs() < 1e-9);
    assert_eq!(k2, 450.0);
    assert!((wire.spire_diameter() - 2.0 * 15.2 / (0.4 * PI)).abs() < 1e-12);
    assert_eq!(wire.spire_height(), 0.0);
    assert!(wire.is_a_procedural_shape());
    assert_eq!(wire.mesh_path(), "");
}

#[test]
fn segment_aliases_follow_inputs() {
    let wire = reference();
    assert_eq!(wire.young_modulus(), 80e3);
    assert_eq!(wire.young_modulus_extremity(), 17e3);
    assert!((wire.radius() - 0.445).abs() < 1e-12);
    assert!((wire.radius_extremity() - 0.35).abs() < 1e-12);
    assert_eq!(wire.inner_radius(), 0.0);
    assert_eq!(wire.inner_radius_extremity(), 0.0);
    assert_eq!(wire.mass_density(), 0.000021);
    assert_eq!(wire.mass_density_extremity(), 0.000021);

    let tip = wire.segment(Segment::Tip);
    assert_eq!(tip.young_modulus, wire.young_modulus_extremity());
    assert_eq!(tip.beams, 22);
    assert_eq!(tip.collis_edges, 31);
    assert!((tip.length() - 15.2).abs() < 1e-9);
    let straight = wire.segment(Segment::Straight);
    assert_eq!(straight.radius, wire.radius());
    assert_eq!(straight.beams, 40);
    assert!((straight.cross_section_area() - PI * 0.445 * 0.445).abs() < 1e-12);
}

#[test]
fn segment_lookup_agrees_with_key_points() {
    let wire = reference();
    let [_, boundary, end] = wire.key_points();
    assert_eq!(wire.segment_at(0.0), Some(Segment::Straight));
    assert_eq!(wire.segment_at(boundary), Some(Segment::Straight));
    assert_eq!(wire.segment_at(boundary + 0.1), Some(Segment::Tip));
    assert_eq!(wire.segment_at(end), Some(Segment::Tip));
    assert_eq!(wire.segment_at(end + 1e-6), None);
    assert_eq!(wire.segment_at(-1e-6), None);
    assert_eq!(wire.segment_at(f64::NAN), None);
}

#[test]
fn tip_spanning_whole_device_has_empty_straight_segment() {
    let params = JWireParams {
        tip_length: 450.0,
        ..JWireParams::default()
    };
    let wire = params.build().unwrap();
    assert_eq!(wire.straight_length(), 0.0);
    let [collis_straight, collis_tip] = wire.num_edges_collis();
    let [beams_straight, beams_tip] = wire.density_of_beams();
    assert_eq!(collis_straight, 0);
    assert_eq!(beams_straight, 0);
    assert_eq!(collis_tip, (2.0f64 * 450.0).ceil() as u32);
    assert_eq!(beams_tip, (1.4f64 * 450.0).ceil() as u32);
    assert!(beams_tip > 0);
    assert_eq!(wire.key_points(), [0.0, 0.0, 450.0]);
    assert_eq!(wire.segment_at(0.0), Some(Segment::Tip));
}

#[test]
fn zero_tip_angle_is_rejected() {
    let params = JWireParams {
        tip_angle: 0.0,
        ..JWireParams::default()
    };
    assert_eq!(
        JWire::new(params),
        Err(InvalidGeometryError::TipAngle { value: 0.0 })
    );
}

#[test]
fn subnormal_tip_angle_is_rejected() {
    // 2 * 15.2 / 1e-310 overflows to +inf.
    let params = JWireParams {
        tip_angle: 1e-310,
        ..JWireParams::default()
    };
    assert_eq!(
        params.build(),
        Err(InvalidGeometryError::TipAngle { value: 1e-310 })
    );
}

#[test]
fn tip_longer_than_device_is_rejected() {
    let params = JWireParams {
        tip_length: 500.0,
        length: 450.0,
        ..JWireParams::default()
    };
    assert!(matches!(
        params.build(),
        Err(InvalidGeometryError::TipLongerThanDevice { .. })
    ));
}

#[test]
fn degenerate_inputs_are_rejected() {
    let base = JWireParams::default();
    let cases: Vec<(JWireParams, &str)> = vec![
        (
            JWireParams {
                beams_per_mm_tip: 0.0,
                ..base.clone()
            },
            "density",
        ),
        (
            JWireParams {
                collis_edges_per_mm_straight: -0.1,
                ..base.clone()
            },
            "density",
        ),
        (
            JWireParams {
                length: f64::NAN,
                ..base.clone()
            },
            "finite",
        ),
        (
            JWireParams {
                tip_inner_diameter: 0.8,
                ..base.clone()
            },
            "inner",
        ),
        (
            JWireParams {
                poisson_ratio: 0.5,
                ..base.clone()
            },
            "poisson",
        ),
        (
            JWireParams {
                color: [0.0, 1.5, 0.0],
                ..base.clone()
            },
            "color",
        ),
        (
            JWireParams {
                name: String::new(),
                ..base.clone()
            },
            "name",
        ),
        (
            JWireParams {
                young_modulus_tip: 0.0,
                ..base.clone()
            },
            "positive",
        ),
    ];
    for (params, kind) in cases {
        let err = params.build().unwrap_err();
        let ok = match kind {
            "density" => matches!(err, InvalidGeometryError::NonPositiveDensity { .. }),
            "finite" => matches!(err, InvalidGeometryError::NonFinite { field: "length" }),
            "inner" => matches!(
                err,
                InvalidGeometryError::InnerExceedsOuter {
                    segment: Segment::Tip,
                    ..
                }
            ),
            "poisson" => matches!(err, InvalidGeometryError::PoissonRatio { .. }),
            "color" => matches!(err, InvalidGeometryError::Color { channel: 1, .. }),
            "name" => matches!(err, InvalidGeometryError::EmptyName),
            "positive" => matches!(
                err,
                InvalidGeometryError::NonPositive {
                    field: "young_modulus_tip",
                    ..
                }
            ),
            _ => false,
        };
        assert!(ok, "{kind}: unexpected {err:?}");
        assert!(err.to_string().starts_with("invalid geometry"));
    }
}

#[test]
fn huge_density_overflows_counter() {
    let params = JWireParams {
        visu_edges_per_mm: 1e10,
        ..JWireParams::default()
    };
    assert!(matches!(
        params.build(),
        Err(InvalidGeometryError::TooManyElements {
            field: "num_edges",
            ..
        })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn json_exposes_derived_fields_and_revalidates() {
    let wire = reference();
    let value = serde_json::to_value(&wire).unwrap();
    assert_eq!(value["name"], "guidewire");
    assert_eq!(value["num_edges"], 225);
    assert_eq!(value["density_of_beams"], serde_json::json!([40, 22]));
    assert_eq!(value["is_a_procedural_shape"], true);

    let back: JWire = serde_json::from_value(value).unwrap();
    assert_eq!(back.num_edges_collis(), wire.num_edges_collis());
    assert!((back.straight_length() - wire.straight_length()).abs() < 1e-9);

    let bad = serde_json::json!({"tip_angle": 0.0});
    assert!(serde_json::from_value::<JWire>(bad).is_err());
}

prop_compose! {
    fn valid_params()(
        length in 1.0f64..2000.0,
        tip_frac in 0.001f64..=1.0,
        tip_angle in 0.01f64..(2.0 * PI),
        visu in 0.01f64..5.0,
        collis_tip in 0.01f64..5.0,
        collis_straight in 0.01f64..5.0,
        beams_tip in 0.01f64..5.0,
        beams_straight in 0.01f64..5.0,
    ) -> JWireParams {
        JWireParams {
            length,
            tip_length: length * tip_frac,
            tip_angle,
            visu_edges_per_mm: visu,
            collis_edges_per_mm_tip: collis_tip,
            collis_edges_per_mm_straight: collis_straight,
            beams_per_mm_tip: beams_tip,
            beams_per_mm_straight: beams_straight,
            ..JWireParams::default()
        }
    }
}

fn is_ceiling(count: u32, product: f64) -> bool {
    let c = count as f64;
    c == product.ceil() && c >= product && c - product < 1.0
}

proptest! {
    #[test]
    fn lengths_add_up(params in valid_params()) {
        let wire = params.build().unwrap();
        prop_assert!(wire.straight_length() >= 0.0);
        prop_assert!(
            (wire.straight_length() + wire.tip_length() - wire.length()).abs()
                <= 1e-9 * wire.length()
        );
    }

    #[test]
    fn key_points_are_ordered(params in valid_params()) {
        let wire = params.build().unwrap();
        let k = wire.key_points();
        prop_assert_eq!(k, [0.0, wire.straight_length(), wire.length()]);
        prop_assert!(k[0] <= k[1] && k[1] <= k[2]);
    }

    #[test]
    fn counts_are_ceilings(params in valid_params()) {
        let p = params.clone();
        let wire = params.build().unwrap();
        let ls = wire.straight_length();
        prop_assert!(is_ceiling(wire.num_edges(), p.visu_edges_per_mm * p.length));
        prop_assert!(is_ceiling(wire.num_edges_collis()[0], p.collis_edges_per_mm_straight * ls));
        prop_assert!(is_ceiling(wire.num_edges_collis()[1], p.collis_edges_per_mm_tip * p.tip_length));
        prop_assert!(is_ceiling(wire.density_of_beams()[0], ls * p.beams_per_mm_straight));
        prop_assert!(is_ceiling(wire.density_of_beams()[1], p.tip_length * p.beams_per_mm_tip));
    }

    #[test]
    fn construction_is_deterministic(params in valid_params()) {
        let a = params.clone().build().unwrap();
        let b = params.build().unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn denser_never_means_fewer(params in valid_params(), factor in 1.0f64..10.0) {
        let base = params.clone().build().unwrap();
        let denser = JWireParams {
            visu_edges_per_mm: params.visu_edges_per_mm * factor,
            collis_edges_per_mm_tip: params.collis_edges_per_mm_tip * factor,
            collis_edges_per_mm_straight: params.collis_edges_per_mm_straight * factor,
            beams_per_mm_tip: params.beams_per_mm_tip * factor,
            beams_per_mm_straight: params.beams_per_mm_straight * factor,
            ..params
        }
        .build()
        .unwrap();
        prop_assert!(denser.num_edges() >= base.num_edges());
        for i in 0..2 {
            prop_assert!(denser.num_edges_collis()[i] >= base.num_edges_collis()[i]);
            prop_assert!(denser.density_of_beams()[i] >= base.density_of_beams()[i]);
        }
    }

    #[test]
    fn segment_lookup_is_total_on_device(params in valid_params(), t in 0.0f64..=1.0) {
        let wire = params.build().unwrap();
        let s = t * wire.length();
        let seg = wire.segment_at(s).unwrap();
        let props = wire.segment(seg);
        prop_assert!(props.start <= s && s <= props.end);
    }
}
