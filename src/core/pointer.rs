//! Mouse and trackpad management

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::rendering::cameras::CanvasCamera;

/// Single source of truth for the pointer (mouse/trackpad) position.
#[derive(Resource, Default)]
pub struct PointerInfo {
    /// Screen space coordinates (pixels)
    pub screen: Vec2,
    /// World space coordinates (canvas units, Y up)
    pub world: Vec2,
    /// Whether the pointer is currently inside the window
    pub in_window: bool,
}

/// Plugin that centrally manages pointer position conversions
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInfo>()
            .add_systems(Update, update_pointer_position);
    }
}

/// Updates pointer position once per frame; this is the only place the
/// screen-to-world conversion happens.
fn update_pointer_position(
    mut pointer_info: ResMut<PointerInfo>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<CanvasCamera>>,
) {
    let (Ok(window), Ok((camera, camera_transform))) =
        (windows.single(), camera_query.single())
    else {
        return;
    };

    match window.cursor_position() {
        Some(screen_pos) => {
            pointer_info.screen = screen_pos;
            pointer_info.in_window = true;
            if let Ok(world_pos) =
                camera.viewport_to_world_2d(camera_transform, screen_pos)
            {
                pointer_info.world = world_pos;
            }
        }
        None => {
            pointer_info.in_window = false;
        }
    }
}
