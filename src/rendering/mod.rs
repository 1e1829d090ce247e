//! Drawing the canvas: point cloud, hull outline, cameras.

pub mod cameras;
pub mod points;
pub mod polygon;
pub mod scene;

use bevy::prelude::*;

use crate::core::settings::CANVAS_SIZE;
use crate::ui::theme::CANVAS_COLOR;

/// Marks the canvas backdrop sprite.
#[derive(Component)]
pub struct CanvasBackdrop;

/// One flat sprite behind everything so the mapped area reads as a canvas.
pub fn spawn_canvas_backdrop(commands: &mut Commands) {
    commands.spawn((
        CanvasBackdrop,
        Sprite {
            color: CANVAS_COLOR,
            custom_size: Some(CANVAS_SIZE),
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
}

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<scene::MappedScene>().add_systems(
            Update,
            (
                scene::rebuild_mapped_scene,
                points::render_points,
                polygon::render_hull_outline,
            )
                .chain(),
        );
    }
}
