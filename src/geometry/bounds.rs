//! Data-space bounds for the visualization
//!
//! The displayed rectangle covers every point and ring vertex, padded by a
//! 10% margin per axis. Degenerate extents (all points on one line) are
//! widened to 1.0 before the margin so the mapper never divides by zero.

use geo::{Coord, Rect};

/// Fraction of the raw extent added on each side.
pub const BOUNDS_MARGIN: f64 = 0.1;

/// Compute the padded bounds of a coordinate collection.
///
/// Returns `None` when the iterator is empty. Callers chain the point
/// cloud and the ring vertices together so both stay in view.
pub fn data_bounds<'a, I>(coords: I) -> Option<Rect<f64>>
where
    I: IntoIterator<Item = &'a Coord<f64>>,
{
    let mut iter = coords.into_iter();
    let first = iter.next()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);

    for c in iter {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }

    if min_x == max_x {
        max_x = min_x + 1.0;
    }
    if min_y == max_y {
        max_y = min_y + 1.0;
    }

    let margin_x = (max_x - min_x) * BOUNDS_MARGIN;
    let margin_y = (max_y - min_y) * BOUNDS_MARGIN;

    Some(Rect::new(
        Coord {
            x: min_x - margin_x,
            y: min_y - margin_y,
        },
        Coord {
            x: max_x + margin_x,
            y: max_y + margin_y,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(data_bounds(std::iter::empty::<&Coord<f64>>()), None);
    }

    #[test]
    fn margin_is_ten_percent_per_side() {
        let coords = [Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 20.0 }];
        let rect = data_bounds(coords.iter()).unwrap();
        assert_eq!(rect.min(), Coord { x: -1.0, y: -2.0 });
        assert_eq!(rect.max(), Coord { x: 11.0, y: 22.0 });
    }

    #[test]
    fn degenerate_axis_widened_before_margin() {
        // All points share an x: extent becomes 1.0, then 10% margin
        let coords = [Coord { x: 5.0, y: 0.0 }, Coord { x: 5.0, y: 4.0 }];
        let rect = data_bounds(coords.iter()).unwrap();
        assert_eq!(rect.min().x, 4.9);
        assert_eq!(rect.max().x, 6.1);
        assert_eq!(rect.height(), 4.8);
    }

    #[test]
    fn single_point_gets_unit_extent() {
        let coords = [Coord { x: 3.0, y: 3.0 }];
        let rect = data_bounds(coords.iter()).unwrap();
        assert_eq!(rect.width(), 1.2);
        assert_eq!(rect.height(), 1.2);
    }
}
