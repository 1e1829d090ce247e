//! The mapped scene
//!
//! Pure recompute-on-demand: whenever the loaded data changes, the display
//! bounds, the mapper, and the display-space positions of every point and
//! ring vertex are derived fresh from the app state. Nothing here is
//! authoritative; it is a memoized projection of `AppState`.

use bevy::prelude::*;

use crate::core::settings::CANVAS_SIZE;
use crate::core::state::AppState;
use crate::geometry::{data_bounds, CanvasMapper};

/// Display-space projection of the current points and ring.
#[derive(Resource, Default)]
pub struct MappedScene {
    pub mapper: Option<CanvasMapper>,
    /// Point cloud in display coordinates.
    pub points: Vec<Vec2>,
    /// Boundary ring in display coordinates, closing duplicate included.
    pub ring: Vec<Vec2>,
}

/// Rebuild the projection when the app state changed.
pub fn rebuild_mapped_scene(
    state: Res<AppState>,
    mut scene: ResMut<MappedScene>,
) {
    if !state.is_changed() {
        return;
    }

    let workspace = &state.workspace;
    let ring_coords = workspace
        .ring
        .as_ref()
        .map(|ring| ring.coords())
        .unwrap_or(&[]);

    match data_bounds(workspace.points.iter().chain(ring_coords.iter())) {
        Some(bounds) => {
            let mapper = CanvasMapper::new(bounds, CANVAS_SIZE);
            scene.points =
                workspace.points.iter().map(|c| mapper.map(*c)).collect();
            scene.ring =
                ring_coords.iter().map(|c| mapper.map(*c)).collect();
            scene.mapper = Some(mapper);
        }
        None => {
            *scene = MappedScene::default();
        }
    }
}
