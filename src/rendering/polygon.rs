//! Hull outline rendering
//!
//! The boundary ring is drawn edge by edge with gizmos so the highlight
//! can restyle individual edges every frame. An edge is emphasized when
//! either of its endpoints is the highlighted vertex; the highlighted
//! vertex itself gets a marker circle.

use bevy::prelude::*;

use crate::editing::highlight::HighlightState;
use crate::rendering::scene::MappedScene;
use crate::ui::theme::{
    HIGHLIGHT_COLOR, HIGHLIGHT_VERTEX_RADIUS, RING_COLOR,
};

pub fn render_hull_outline(
    mut gizmos: Gizmos,
    scene: Res<MappedScene>,
    highlight: Res<HighlightState>,
) {
    let Some(mapper) = scene.mapper else {
        return;
    };
    let ring = &scene.ring;
    if ring.len() < 3 {
        return;
    }

    let num_points = ring.len();
    // The closing duplicate means one fewer real vertex than points
    let num_real = num_points - 1;

    for i in 0..num_points {
        let start = mapper.display_to_world(ring[i]);
        let end = mapper.display_to_world(ring[(i + 1) % num_points]);

        let emphasized = highlight
            .index()
            .is_some_and(|h| i == h || (i + 1) % num_real == h);
        let color = if emphasized { HIGHLIGHT_COLOR } else { RING_COLOR };
        gizmos.line_2d(start, end, color);
    }

    if let Some(h) = highlight.index() {
        if let Some(display) = ring.get(h) {
            gizmos.circle_2d(
                mapper.display_to_world(*display),
                HIGHLIGHT_VERTEX_RADIUS,
                HIGHLIGHT_COLOR,
            );
        }
    }
}
