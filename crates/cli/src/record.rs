//! JSON layout of one frame as handed to renderers.

use serde::Serialize;
use trajectory::frame::FrameState;
use trajectory::view::HeadingUpView;
use trajectory::Vec2;

fn xy(p: &Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

fn xys(ps: &[Vec2<f64>]) -> Vec<[f64; 2]> {
    ps.iter().map(xy).collect()
}

#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub center: [f64; 2],
    /// `[0, 0]` when the step was degenerate.
    pub tangent: [f64; 2],
    pub heading_deg: f64,
    pub heading_fallback: bool,
    pub corners: Vec<[f64; 2]>,
    pub inside: InsideRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_up: Option<ViewRecord>,
}

#[derive(Debug, Serialize)]
pub struct InsideRecord {
    pub center: Vec<usize>,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct ViewRecord {
    pub rotation_deg: f64,
    pub outline: Vec<[f64; 2]>,
    pub center_hits: Vec<[f64; 2]>,
    pub left_hits: Vec<[f64; 2]>,
    pub right_hits: Vec<[f64; 2]>,
    /// `[x_min, x_max, y_min, y_max]`
    pub window: [f64; 4],
}

impl FrameRecord {
    pub fn new(st: &FrameState, view: Option<&HeadingUpView>) -> Self {
        Self {
            frame: st.index,
            center: xy(&st.center),
            tangent: xy(&st.tangent),
            heading_deg: st.body.heading_degrees(),
            heading_fallback: st.heading_fallback,
            corners: xys(&st.body.corners),
            inside: InsideRecord {
                center: st.hits.center.clone(),
                left: st.hits.left.clone(),
                right: st.hits.right.clone(),
            },
            heading_up: view.map(|v| ViewRecord {
                rotation_deg: v.rotation_deg,
                outline: xys(&v.outline),
                center_hits: xys(&v.center_hits),
                left_hits: xys(&v.left_hits),
                right_hits: xys(&v.right_hits),
                window: [v.window.x_min, v.window.x_max, v.window.y_min, v.window.y_max],
            }),
        }
    }
}
