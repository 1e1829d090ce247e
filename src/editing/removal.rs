//! Right-click vertex removal
//!
//! A right click on (or near) the boundary removes the addressed vertex.
//! The edit is all-or-nothing: the new ring replaces the old one only when
//! every invariant holds, and any rejection is reported to the status bar
//! with the old ring untouched.

use bevy::prelude::*;

use crate::core::pointer::PointerInfo;
use crate::core::settings::HIT_TEST_RADIUS;
use crate::core::state::{AppState, StatusEvent};
use crate::editing::highlight::{HighlightChanged, HighlightState};
use crate::geometry::hit_test_ring;
use crate::rendering::scene::MappedScene;

pub fn handle_right_click_removal(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerInfo>,
    scene: Res<MappedScene>,
    mut state: ResMut<AppState>,
    mut highlight: ResMut<HighlightState>,
    mut highlight_events: EventWriter<HighlightChanged>,
    mut status: EventWriter<StatusEvent>,
    buttons: Query<&Interaction, With<Button>>,
) {
    if !mouse.just_pressed(MouseButton::Right) || !pointer.in_window {
        return;
    }
    if buttons.iter().any(|i| !matches!(i, Interaction::None)) {
        return;
    }
    let Some(mapper) = scene.mapper else {
        return;
    };

    let display = mapper.world_to_display(pointer.world);
    let Some(index) = hit_test_ring(&scene.ring, display, HIT_TEST_RADIUS)
    else {
        return;
    };

    let removal = match &state.workspace.ring {
        Some(ring) => ring.remove_vertex(index),
        None => return,
    };

    match removal {
        Ok(ring) => {
            info!("Removed boundary vertex {index}");
            status.write(StatusEvent(format!(
                "Removed vertex {index}; boundary now has {} unique vertices",
                ring.unique_len()
            )));
            state.workspace.set_ring(ring);
            if highlight.index().is_some() {
                highlight.clear();
                highlight_events.write(HighlightChanged(None));
            }
        }
        Err(err) => {
            warn!("Vertex removal rejected: {err}");
            status.write(StatusEvent(format!("Cannot remove vertex: {err}")));
        }
    }
}
