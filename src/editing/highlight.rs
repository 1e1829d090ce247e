//! Hover highlighting of the hull boundary
//!
//! Each frame the pointer is hit-tested against the mapped ring; the
//! nearest vertex (or edge start) becomes the highlighted vertex.
//! Transitions are announced as events so other systems can react without
//! polling. The highlight is transient state and is cleared whenever the
//! ring is replaced.

use bevy::prelude::*;

use crate::core::pointer::PointerInfo;
use crate::core::settings::HIT_TEST_RADIUS;
use crate::geometry::hit_test_ring;
use crate::rendering::scene::MappedScene;

/// Fired on every change of the highlighted vertex, `None` on clear.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightChanged(pub Option<usize>);

/// The currently highlighted ring vertex, if any.
#[derive(Resource, Default)]
pub struct HighlightState(Option<usize>);

impl HighlightState {
    pub fn index(&self) -> Option<usize> {
        self.0
    }

    /// Idempotent; no event and no change when already cleared.
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Track the pointer and update the highlight.
pub fn hover_highlight(
    pointer: Res<PointerInfo>,
    scene: Res<MappedScene>,
    mut highlight: ResMut<HighlightState>,
    mut events: EventWriter<HighlightChanged>,
    buttons: Query<&Interaction, With<Button>>,
) {
    // The canvas does not own the pointer while it is over a UI control
    let over_ui =
        buttons.iter().any(|i| !matches!(i, Interaction::None));

    let hit = if over_ui || !pointer.in_window || scene.ring.is_empty() {
        None
    } else {
        let Some(mapper) = scene.mapper else {
            return;
        };
        let display = mapper.world_to_display(pointer.world);
        hit_test_ring(&scene.ring, display, HIT_TEST_RADIUS)
    };

    if highlight.0 != hit {
        highlight.0 = hit;
        events.write(HighlightChanged(hit));
    }
}
