//! Print the reference J-wire descriptor and a few rest-shape points.
//!
//! Run with `cargo run -p eve-bench --example describe_jwire --features serde`.

use eve_bench::prelude::*;

fn main() {
    let wire = JWireParams::default()
        .build()
        .expect("reference J-wire is valid");
    println!(
        "{}",
        serde_json::to_string_pretty(&wire).expect("descriptor serializes")
    );

    for seg in Segment::ALL {
        let props = wire.segment(seg);
        println!(
            "segment={seg} span=[{:.3}, {:.3}] beams={} collis_edges={} area={:.4}",
            props.start,
            props.end,
            props.beams,
            props.collis_edges,
            props.cross_section_area()
        );
    }

    let [_, boundary, end] = wire.key_points();
    for s in [0.0, boundary, end] {
        let p = wire.rest_point(s).expect("key point lies on the device");
        println!("s={s:.3} p=({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    }
}
