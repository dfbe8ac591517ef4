//! Trajectory configuration (sampling, body size, tangent policy).
//!
//! - `TrajectoryCfg`: every tunable in one record; defaults reproduce the reference
//!   animation (500 samples, radius 10, amplitude 0.1, frequency 5, body 3 × 4).
//! - `validate` runs before any sampling so malformed input aborts at startup and
//!   never mid-animation.
//!
//! Code cross-refs: `path::PathSet::from_cfg`, `frame::compute_frame`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kinematics::TangentMode;

/// Which body the containment test is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentAnchor {
    /// Classify against the body of the frame being computed.
    #[default]
    PerFrame,
    /// Classify every frame against the body of one fixed frame.
    Fixed(usize),
}

/// Trajectory configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryCfg {
    /// Number of samples `N` per lane (>= 2).
    pub samples: usize,
    /// Center lane radius `R`.
    pub radius: f64,
    /// Relative oscillation amplitude `a`.
    pub amplitude: f64,
    /// Oscillation frequency `f` (cycles per revolution).
    pub frequency: f64,
    /// Radial distance of the left (`R + d`) and right (`R − d`) lanes.
    pub lane_offset: f64,
    /// Body extent along the direction of travel.
    pub width: f64,
    /// Body extent across the direction of travel.
    pub height: f64,
    pub tangent_mode: TangentMode,
    pub anchor: ContainmentAnchor,
    /// Steps no longer than this are treated as degenerate when deriving a heading.
    pub min_step: f64,
}

impl Default for TrajectoryCfg {
    fn default() -> Self {
        Self {
            samples: 500,
            radius: 10.0,
            amplitude: 0.1,
            frequency: 5.0,
            lane_offset: crate::path::LANE_OFFSET,
            width: 3.0,
            height: 4.0,
            tangent_mode: TangentMode::Wrap,
            anchor: ContainmentAnchor::PerFrame,
            min_step: 1e-12,
        }
    }
}

impl TrajectoryCfg {
    /// Number of frames with a defined state: `N − 1` under `Clamp`, `N` under `Wrap`.
    pub fn defined_frames(&self) -> usize {
        match self.tangent_mode {
            TangentMode::Clamp => self.samples.saturating_sub(1),
            TangentMode::Wrap => self.samples,
        }
    }

    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples < 2 {
            return Err(ConfigError::TooFewSamples {
                samples: self.samples,
            });
        }
        let finite = [
            ("radius", self.radius),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("lane_offset", self.lane_offset),
            ("width", self.width),
            ("height", self.height),
            ("min_step", self.min_step),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        for (field, value) in [
            ("radius", self.radius),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.lane_offset < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "lane_offset",
                value: self.lane_offset,
            });
        }
        if self.min_step < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "min_step",
                value: self.min_step,
            });
        }
        if self.lane_offset >= self.radius {
            return Err(ConfigError::RadiusBelowLaneOffset {
                radius: self.radius,
                lane_offset: self.lane_offset,
            });
        }
        if let ContainmentAnchor::Fixed(frame) = self.anchor {
            let defined = self.defined_frames();
            if frame >= defined {
                return Err(ConfigError::AnchorOutOfRange { frame, defined });
            }
        }
        Ok(())
    }
}

/// Errors surfaced while validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The parameterization `t_i = 2π·i/(N−1)` needs at least two samples.
    TooFewSamples { samples: usize },
    /// A float field is NaN or infinite.
    NonFinite { field: &'static str },
    /// A size or tolerance is out of its allowed range.
    OutOfRange { field: &'static str, value: f64 },
    /// The right lane (`R − d`) would collapse through the origin.
    RadiusBelowLaneOffset { radius: f64, lane_offset: f64 },
    /// `ContainmentAnchor::Fixed` names a frame without a defined state.
    AnchorOutOfRange { frame: usize, defined: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewSamples { samples } => {
                write!(f, "need at least 2 samples, got {samples}")
            }
            ConfigError::NonFinite { field } => write!(f, "`{field}` must be finite"),
            ConfigError::OutOfRange { field, value } => {
                write!(f, "`{field}` out of range (got {value})")
            }
            ConfigError::RadiusBelowLaneOffset { radius, lane_offset } => {
                write!(f, "lane offset {lane_offset} must be smaller than the radius {radius}")
            }
            ConfigError::AnchorOutOfRange { frame, defined } => {
                write!(f, "anchor frame {frame} is outside the defined frames 0..{defined}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = TrajectoryCfg::default();
        assert_eq!(cfg.samples, 500);
        assert_eq!(cfg.width, 3.0);
        assert_eq!(cfg.height, 4.0);
        assert_eq!(cfg.tangent_mode, TangentMode::default());
        assert_eq!(TangentMode::default(), TangentMode::Wrap);
        assert_eq!(ContainmentAnchor::default(), ContainmentAnchor::PerFrame);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn single_sample_rejected() {
        let cfg = TrajectoryCfg {
            samples: 1,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooFewSamples { samples: 1 })
        );
    }

    #[test]
    fn negative_body_rejected() {
        let cfg = TrajectoryCfg {
            width: -3.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "width", .. })
        ));
        let cfg = TrajectoryCfg {
            height: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonFinite { field: "height" })
        );
    }

    #[test]
    fn lane_offset_and_anchor_bounds() {
        let cfg = TrajectoryCfg {
            radius: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::RadiusBelowLaneOffset { .. })
        ));
        let cfg = TrajectoryCfg {
            anchor: ContainmentAnchor::Fixed(500),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::AnchorOutOfRange { frame: 500, .. })
        ));
        // The last sample has no state under clamp, so it cannot anchor either.
        let clamp = TrajectoryCfg {
            tangent_mode: TangentMode::Clamp,
            anchor: ContainmentAnchor::Fixed(499),
            ..Default::default()
        };
        assert_eq!(
            clamp.validate(),
            Err(ConfigError::AnchorOutOfRange {
                frame: 499,
                defined: 499
            })
        );
        let clamp = TrajectoryCfg {
            anchor: ContainmentAnchor::Fixed(498),
            ..clamp
        };
        assert!(clamp.validate().is_ok());
        let wrap = TrajectoryCfg {
            anchor: ContainmentAnchor::Fixed(499),
            ..Default::default()
        };
        assert!(wrap.validate().is_ok());
    }

    #[test]
    fn json_defaults_fill_missing_fields() {
        let cfg: TrajectoryCfg =
            serde_json::from_str(r#"{"samples": 64, "tangent_mode": "clamp"}"#).unwrap();
        assert_eq!(cfg.samples, 64);
        assert_eq!(cfg.tangent_mode, TangentMode::Clamp);
        assert_eq!(cfg.radius, 10.0);
        let anchored: TrajectoryCfg = serde_json::from_str(r#"{"anchor": {"fixed": 3}}"#).unwrap();
        assert_eq!(anchored.anchor, ContainmentAnchor::Fixed(3));
        assert!(serde_json::from_str::<TrajectoryCfg>(r#"{"bogus": 1}"#).is_err());
    }
}
