//! Closed-form lane sampling.
//!
//! Model
//! - `t_i = 2π·i/(N−1)` for `i = 0..N−1`, so the first and last samples coincide.
//! - `p(t) = R·(cos t + a·sin(f t), sin t + a·cos(f t))` for the center lane, with the
//!   left and right lanes at radii `R + d` and `R − d` on the same `t` grid.
//!
//! The resulting `PathSet` is built once and only ever borrowed afterwards.
//!
//! Code cross-refs: `cfg::TrajectoryCfg`, `kinematics::tangent`

use nalgebra::Vector2;

use crate::cfg::{ConfigError, TrajectoryCfg};

/// Radial distance between the center lane and each side lane.
pub const LANE_OFFSET: f64 = 1.0;

/// One of the three concentric path variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    Center,
    /// Radius `R + d` (table columns `XL`, `YL`). Travel is counterclockwise, so this
    /// outer lane sits on the right of the heading despite the name.
    Left,
    /// Radius `R − d` (table columns `XR`, `YR`).
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Center, Lane::Left, Lane::Right];

    /// Column names used when the path is exported as a table.
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            Lane::Center => ("X", "Y"),
            Lane::Left => ("XL", "YL"),
            Lane::Right => ("XR", "YR"),
        }
    }
}

/// A single point on one lane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[inline]
    pub fn point(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Sampled lanes plus the 1-based frame-number column.
///
/// Invariants:
/// - all lanes have the same length `N >= 2`;
/// - `frame_numbers()[i] == i + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    frames: Vec<u32>,
    center: Vec<Vector2<f64>>,
    left: Vec<Vector2<f64>>,
    right: Vec<Vector2<f64>>,
}

impl PathSet {
    /// Validate `cfg` and sample the three lanes it describes.
    pub fn from_cfg(cfg: &TrajectoryCfg) -> Result<Self, ConfigError> {
        cfg.validate()?;
        generate_with_offset(
            cfg.samples,
            cfg.radius,
            cfg.amplitude,
            cfg.frequency,
            cfg.lane_offset,
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.center.len()
    }

    /// Always false for a constructed `PathSet`; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.center.is_empty()
    }

    #[inline]
    pub fn lane(&self, lane: Lane) -> &[Vector2<f64>] {
        match lane {
            Lane::Center => &self.center,
            Lane::Left => &self.left,
            Lane::Right => &self.right,
        }
    }

    #[inline]
    pub fn frame_numbers(&self) -> &[u32] {
        &self.frames
    }

    pub fn sample(&self, lane: Lane, index: usize) -> Option<Sample> {
        self.lane(lane).get(index).map(|p| Sample {
            index,
            x: p.x,
            y: p.y,
        })
    }

    pub fn samples(&self, lane: Lane) -> impl Iterator<Item = Sample> + '_ {
        self.lane(lane)
            .iter()
            .enumerate()
            .map(|(index, p)| Sample {
                index,
                x: p.x,
                y: p.y,
            })
    }
}

/// Sample the center lane and the two side lanes at the default `LANE_OFFSET`.
pub fn generate(
    n: usize,
    radius: f64,
    amplitude: f64,
    frequency: f64,
) -> Result<PathSet, ConfigError> {
    generate_with_offset(n, radius, amplitude, frequency, LANE_OFFSET)
}

/// Sample all lanes with an explicit lane offset `d`.
pub fn generate_with_offset(
    n: usize,
    radius: f64,
    amplitude: f64,
    frequency: f64,
    lane_offset: f64,
) -> Result<PathSet, ConfigError> {
    if n < 2 {
        return Err(ConfigError::TooFewSamples { samples: n });
    }
    for (field, value) in [
        ("radius", radius),
        ("amplitude", amplitude),
        ("frequency", frequency),
        ("lane_offset", lane_offset),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { field });
        }
    }
    let step = std::f64::consts::TAU / (n - 1) as f64;
    // Unit-radius shape shared by all lanes; each lane only rescales it.
    let shape: Vec<Vector2<f64>> = (0..n)
        .map(|i| {
            let t = step * i as f64;
            Vector2::new(
                t.cos() + amplitude * (frequency * t).sin(),
                t.sin() + amplitude * (frequency * t).cos(),
            )
        })
        .collect();
    let scaled = |r: f64| shape.iter().map(|p| p * r).collect::<Vec<_>>();
    Ok(PathSet {
        frames: (1..=n as u32).collect(),
        center: scaled(radius),
        left: scaled(radius + lane_offset),
        right: scaled(radius - lane_offset),
    })
}
