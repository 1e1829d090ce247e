//! Point cloud rendering
//!
//! Every loaded coordinate becomes one small square sprite. Sprites share
//! the process-wide style constants; they are despawned and respawned
//! wholesale when the mapped scene changes rather than diffed.

use bevy::prelude::*;

use crate::rendering::scene::MappedScene;
use crate::ui::theme::{POINT_COLOR, POINT_SIZE};

/// Marks sprites belonging to the point cloud.
#[derive(Component)]
pub struct PointMarker;

/// Z-order: above the canvas backdrop, below the hull outline.
const POINT_Z: f32 = 1.0;

pub fn render_points(
    mut commands: Commands,
    scene: Res<MappedScene>,
    existing: Query<Entity, With<PointMarker>>,
) {
    if !scene.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let Some(mapper) = scene.mapper else {
        return;
    };

    for display in &scene.points {
        let world = mapper.display_to_world(*display);
        commands.spawn((
            PointMarker,
            Sprite {
                color: POINT_COLOR,
                custom_size: Some(Vec2::splat(POINT_SIZE)),
                ..default()
            },
            Transform::from_translation(world.extend(POINT_Z)),
        ));
    }
}
