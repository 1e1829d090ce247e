//! The concave hull capability
//!
//! The hull algorithm itself lives in the `geo` crate; this module is the
//! boundary around it: sizing-parameter validation, translation of the two
//! user-facing sizing modes onto `geo`'s single concavity knob, and the
//! background task that keeps the UI responsive while a hull is computed.
//!
//! No cancellation: a spawned computation runs to completion and either
//! replaces the current boundary or reports its error and is discarded.

use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use geo::{ConcaveHull, Coord, MultiPoint, Point};

use crate::core::errors::{anyhow, bail, AppResult};
use crate::core::state::{AppState, StatusEvent};
use crate::editing::highlight::{HighlightChanged, HighlightState};
use crate::geometry::HullRing;

/// Concavity handed to `geo` when the ratio is 0 (tightest wrap).
const MIN_CONCAVITY: f64 = 1.0;
/// Concavity at ratio 1; large enough to approximate the convex hull.
const MAX_CONCAVITY: f64 = 20.0;

/// The two user-facing sizing modes.
///
/// `geo`'s `ConcaveHull` exposes one relative concavity scalar, so both
/// modes are mapped onto it: the ratio sweeps `[MIN_CONCAVITY,
/// MAX_CONCAVITY]` linearly, an absolute edge length is first normalized
/// by the point cloud's bounding diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HullSizing {
    /// Relative measure in `[0, 1]`; 1 approximates the convex hull.
    LengthRatio(f64),
    /// Absolute maximum edge length in data units; non-negative, finite.
    MaxEdgeLength(f64),
}

impl Default for HullSizing {
    fn default() -> Self {
        HullSizing::LengthRatio(0.3)
    }
}

impl HullSizing {
    /// Range check, performed before any computation is started.
    pub fn validate(&self) -> AppResult<()> {
        match *self {
            HullSizing::LengthRatio(ratio) => {
                if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                    bail!(
                        "Maximum edge length ratio must be between 0 and 1 \
                         (got {ratio})"
                    );
                }
            }
            HullSizing::MaxEdgeLength(length) => {
                if !length.is_finite() || length < 0.0 {
                    bail!(
                        "Maximum edge length must be a non-negative finite \
                         number (got {length})"
                    );
                }
            }
        }
        Ok(())
    }

    fn concavity(&self, coords: &[Coord<f64>]) -> f64 {
        match *self {
            HullSizing::LengthRatio(ratio) => {
                MIN_CONCAVITY + ratio * (MAX_CONCAVITY - MIN_CONCAVITY)
            }
            HullSizing::MaxEdgeLength(length) => {
                let diagonal = bounding_diagonal(coords);
                if diagonal <= 0.0 {
                    return MAX_CONCAVITY;
                }
                ((length / diagonal) * MAX_CONCAVITY)
                    .clamp(f64::EPSILON, MAX_CONCAVITY)
            }
        }
    }
}

fn bounding_diagonal(coords: &[Coord<f64>]) -> f64 {
    let mut iter = coords.iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);
    for c in iter {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }
    ((max_x - min_x).powi(2) + (max_y - min_y).powi(2)).sqrt()
}

/// Compute the concave hull of a point multiset.
///
/// Holes are never requested; the polygon's exterior ring is the result.
pub fn compute_hull(
    coords: Vec<Coord<f64>>,
    sizing: HullSizing,
) -> AppResult<HullRing> {
    sizing.validate()?;
    if coords.len() < 3 {
        bail!(
            "At least 3 points are required to compute a hull (got {})",
            coords.len()
        );
    }

    let concavity = sizing.concavity(&coords);
    let multipoint =
        MultiPoint::new(coords.into_iter().map(Point::from).collect());
    let polygon = multipoint.concave_hull(concavity);

    HullRing::from_polygon(&polygon).map_err(|e| {
        anyhow!("Hull computation produced an invalid boundary: {e}")
    })
}

/// The in-flight hull computation, if any. The triggering controls stay
/// disabled while this holds a task.
#[derive(Resource, Default)]
pub struct ActiveHullTask(pub Option<Task<AppResult<HullRing>>>);

impl ActiveHullTask {
    pub fn is_running(&self) -> bool {
        self.0.is_some()
    }

    /// Offload a computation onto the async compute pool.
    pub fn spawn(&mut self, coords: Vec<Coord<f64>>, sizing: HullSizing) {
        let pool = AsyncComputeTaskPool::get();
        self.0 = Some(pool.spawn(async move { compute_hull(coords, sizing) }));
    }
}

/// Poll the background computation and fold its result into the app state.
pub fn poll_hull_task(
    mut active: ResMut<ActiveHullTask>,
    mut state: ResMut<AppState>,
    mut highlight: ResMut<HighlightState>,
    mut highlight_events: EventWriter<HighlightChanged>,
    mut status: EventWriter<StatusEvent>,
) {
    let Some(task) = active.0.as_mut() else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(task)) else {
        return;
    };
    active.0 = None;

    match result {
        Ok(ring) => {
            status.write(StatusEvent(format!(
                "Concave hull computed: {} unique vertices",
                ring.unique_len()
            )));
            state.workspace.set_ring(ring);
            if highlight.index().is_some() {
                highlight.clear();
                highlight_events.write(HighlightChanged(None));
            }
        }
        Err(err) => {
            error!("Hull computation failed: {err:#}");
            status.write(StatusEvent(format!(
                "Hull computation failed: {err:#}"
            )));
        }
    }
}

pub struct HullPlugin;

impl Plugin for HullPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveHullTask>()
            .add_systems(Update, poll_hull_task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_outside_unit_interval_rejected() {
        assert!(HullSizing::LengthRatio(-0.1).validate().is_err());
        assert!(HullSizing::LengthRatio(1.1).validate().is_err());
        assert!(HullSizing::LengthRatio(f64::NAN).validate().is_err());
        assert!(HullSizing::LengthRatio(0.0).validate().is_ok());
        assert!(HullSizing::LengthRatio(1.0).validate().is_ok());
    }

    #[test]
    fn edge_length_must_be_finite_and_non_negative() {
        assert!(HullSizing::MaxEdgeLength(-1.0).validate().is_err());
        assert!(HullSizing::MaxEdgeLength(f64::INFINITY).validate().is_err());
        assert!(HullSizing::MaxEdgeLength(0.0).validate().is_ok());
        assert!(HullSizing::MaxEdgeLength(125.0).validate().is_ok());
    }

    #[test]
    fn ratio_sweeps_the_concavity_range() {
        let coords: Vec<Coord<f64>> = Vec::new();
        assert_eq!(
            HullSizing::LengthRatio(0.0).concavity(&coords),
            MIN_CONCAVITY
        );
        assert_eq!(
            HullSizing::LengthRatio(1.0).concavity(&coords),
            MAX_CONCAVITY
        );
    }

    #[test]
    fn too_few_points_is_an_error() {
        let coords = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
        assert!(compute_hull(coords, HullSizing::default()).is_err());
    }

    #[test]
    fn hull_of_a_square_cloud_is_a_closed_ring() {
        let mut coords = Vec::new();
        for x in 0..5 {
            for y in 0..5 {
                coords.push(Coord {
                    x: f64::from(x),
                    y: f64::from(y),
                });
            }
        }
        let ring = compute_hull(coords, HullSizing::LengthRatio(1.0)).unwrap();
        assert!(ring.len() >= 4);
        assert_eq!(ring.coords().first(), ring.coords().last());
    }
}
