//! Data-space to display-space mapping
//!
//! Display space is the canvas: origin at the top-left, Y growing
//! downward, sized in pixels. Data space is whatever the loaded file uses,
//! with Y growing upward. The mapper is a pure function of the current
//! bounds and canvas size; it is rebuilt on demand rather than cached as
//! authoritative state. Hit-testing runs in display space, so the mapper
//! also converts between display space and Bevy's Y-up world space.

use bevy::math::Vec2;
use geo::{Coord, Rect};

/// Affine map from data coordinates onto a fixed-size canvas.
#[derive(Clone, Copy, Debug)]
pub struct CanvasMapper {
    bounds: Rect<f64>,
    size: Vec2,
}

impl CanvasMapper {
    pub fn new(bounds: Rect<f64>, size: Vec2) -> Self {
        CanvasMapper { bounds, size }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.size
    }

    /// Map a data-space coordinate to display space (Y down).
    ///
    /// Zero-extent bounds would divide by zero; every point collapses to
    /// the canvas centre instead.
    pub fn map(&self, c: Coord<f64>) -> Vec2 {
        let width = self.bounds.width();
        let height = self.bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return self.size * 0.5;
        }

        let xr = (c.x - self.bounds.min().x) / width;
        let yr = (c.y - self.bounds.min().y) / height;
        Vec2::new(
            (xr * self.size.x as f64) as f32,
            (self.size.y as f64 - yr * self.size.y as f64) as f32,
        )
    }

    /// Place a display-space point into world space, canvas centred on the
    /// origin. One Y flip: display grows down, world grows up.
    pub fn display_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.size.x * 0.5, self.size.y * 0.5 - p.y)
    }

    /// Inverse of [`Self::display_to_world`], used to carry the pointer
    /// position into display space for hit-testing.
    pub fn world_to_display(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.size.x * 0.5, self.size.y * 0.5 - p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(min: (f64, f64), max: (f64, f64)) -> CanvasMapper {
        CanvasMapper::new(
            Rect::new(
                Coord { x: min.0, y: min.1 },
                Coord { x: max.0, y: max.1 },
            ),
            Vec2::new(200.0, 100.0),
        )
    }

    #[test]
    fn corners_map_with_y_inverted() {
        let m = mapper((0.0, 0.0), (10.0, 10.0));
        // Data-space bottom-left lands at the display bottom-left
        assert_eq!(m.map(Coord { x: 0.0, y: 0.0 }), Vec2::new(0.0, 100.0));
        // Data-space top-right lands at the display top-right
        assert_eq!(m.map(Coord { x: 10.0, y: 10.0 }), Vec2::new(200.0, 0.0));
        assert_eq!(m.map(Coord { x: 5.0, y: 5.0 }), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn zero_extent_bounds_map_to_canvas_centre() {
        let m = mapper((5.0, 0.0), (5.0, 10.0));
        assert_eq!(m.map(Coord { x: 1.0, y: 2.0 }), Vec2::new(100.0, 50.0));
        assert_eq!(m.map(Coord { x: 9.0, y: 9.0 }), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn world_and_display_are_inverses() {
        let m = mapper((0.0, 0.0), (10.0, 10.0));
        let display = Vec2::new(30.0, 80.0);
        let world = m.display_to_world(display);
        assert_eq!(m.world_to_display(world), display);
        // Display top-left sits up-left of the origin in world space
        assert_eq!(
            m.display_to_world(Vec2::ZERO),
            Vec2::new(-100.0, 50.0)
        );
    }
}
