//! Heading trace over one lap of the default trajectory.
//!
//! Prints one line per `step` frames with the heading in degrees, the number of inside
//! points per lane, and whether the heading was borrowed from an earlier sample.
//! Usage: `cargo run -p trajectory --example heading_trace -- [step]`

use trajectory::frame::frames;
use trajectory::path::PathSet;
use trajectory::TrajectoryCfg;

fn main() {
    let step: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(50)
        .max(1);
    let cfg = TrajectoryCfg::default();
    let path = PathSet::from_cfg(&cfg).expect("default cfg is valid");

    println!(
        "samples={} radius={} amplitude={} frequency={} mode={:?}",
        cfg.samples, cfg.radius, cfg.amplitude, cfg.frequency, cfg.tangent_mode
    );
    for st in frames(&path, &cfg).filter(|st| st.index % step == 0 || st.heading_fallback) {
        println!(
            "frame={:>3} x={:>8.4} y={:>8.4} heading_deg={:>9.3} hits=({},{},{}) fallback={}",
            st.index,
            st.center.x,
            st.center.y,
            st.body.heading_degrees(),
            st.hits.center.len(),
            st.hits.left.len(),
            st.hits.right.len(),
            st.heading_fallback
        );
    }
}
