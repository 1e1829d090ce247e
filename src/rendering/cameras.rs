//! Camera setup for the canvas
//!
//! One 2D camera looks at the fixed world-space canvas; bevy_pancam gives
//! it panning (left/middle drag) and scroll zoom within sane scale limits.
//! Window resizes are absorbed here, not by remapping the data.

use bevy::prelude::*;
use bevy_pancam::PanCam;

use crate::core::settings::{
    MAX_ALLOWED_ZOOM_SCALE, MIN_ALLOWED_ZOOM_SCALE,
};

/// Marks the camera that renders the canvas and drives pointer conversion.
#[derive(Component)]
pub struct CanvasCamera;

/// Spawns the canvas camera with pan/zoom controls.
pub fn spawn_canvas_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        CanvasCamera,
        PanCam {
            grab_buttons: vec![MouseButton::Left, MouseButton::Middle],
            min_scale: MIN_ALLOWED_ZOOM_SCALE,
            max_scale: MAX_ALLOWED_ZOOM_SCALE,
            ..default()
        },
    ));
}
