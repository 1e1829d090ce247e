//! Interactive editing of the hull boundary.

pub mod highlight;
pub mod removal;

use bevy::prelude::*;

use crate::rendering::scene::rebuild_mapped_scene;

pub struct EditingPlugin;

impl Plugin for EditingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<highlight::HighlightState>()
            .add_event::<highlight::HighlightChanged>()
            .add_systems(
                Update,
                (
                    highlight::hover_highlight,
                    removal::handle_right_click_removal,
                )
                    .after(rebuild_mapped_scene),
            );
    }
}
