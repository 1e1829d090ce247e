//! The hull boundary ring
//!
//! A closed polyline: the first and last coordinates are the same point.
//! Edits never mutate in place; `remove_vertex` returns a fresh ring so a
//! failed edit leaves the caller's ring untouched.

use std::fmt;

use geo::{Coord, LineString, Polygon};

/// Shortest legal ring: 3 unique vertices plus the closing duplicate.
pub const MIN_RING_LEN: usize = 4;

/// Why a ring operation was rejected. Messages are user-facing.
#[derive(Clone, Debug, PartialEq)]
pub enum RingError {
    NotClosed,
    TooFewVertices { len: usize },
    IndexOutOfRange { index: usize, len: usize },
    WouldCollapse { remaining: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::NotClosed => {
                write!(f, "Boundary is not closed (first vertex != last)")
            }
            RingError::TooFewVertices { len } => write!(
                f,
                "Boundary has too few vertices ({len} incl. closing point) \
                 to remove one"
            ),
            RingError::IndexOutOfRange { index, len } => {
                write!(f, "Vertex index {index} is out of range [0, {len})")
            }
            RingError::WouldCollapse { remaining } => write!(
                f,
                "Removal would leave only {remaining} vertices; a boundary \
                 needs at least 3 unique vertices"
            ),
        }
    }
}

impl std::error::Error for RingError {}

/// Closed boundary ring of a hull polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct HullRing(Vec<Coord<f64>>);

impl HullRing {
    /// Wrap a coordinate sequence, enforcing closure and minimum size.
    pub fn new(coords: Vec<Coord<f64>>) -> Result<Self, RingError> {
        if coords.len() < MIN_RING_LEN {
            return Err(RingError::TooFewVertices { len: coords.len() });
        }
        if coords.first() != coords.last() {
            return Err(RingError::NotClosed);
        }
        Ok(HullRing(coords))
    }

    /// Take a polygon's exterior ring as the boundary. Interior rings are
    /// ignored; this application never requests holes.
    pub fn from_polygon(polygon: &Polygon<f64>) -> Result<Self, RingError> {
        Self::new(polygon.exterior().0.clone())
    }

    pub fn coords(&self) -> &[Coord<f64>] {
        &self.0
    }

    /// Total length including the closing duplicate.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of distinct vertices (the closing duplicate not counted).
    pub fn unique_len(&self) -> usize {
        self.0.len() - 1
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::from(self.0.clone())
    }

    /// Remove the vertex at `index`, keeping the ring closed.
    ///
    /// Removing the shared first/last vertex rotates the ring start onto
    /// the former second vertex; an interior vertex is simply excised.
    /// All-or-nothing: any violated invariant returns an error and the
    /// ring is unchanged.
    pub fn remove_vertex(&self, index: usize) -> Result<HullRing, RingError> {
        let len = self.0.len();
        if len <= MIN_RING_LEN {
            return Err(RingError::TooFewVertices { len });
        }
        if index >= len {
            return Err(RingError::IndexOutOfRange { index, len });
        }

        let coords = &self.0;
        let new_coords: Vec<Coord<f64>> = if index == 0 || index == len - 1 {
            // The first and last entries are the same point; drop it and
            // re-close on what used to be the second vertex
            coords[1..len - 1]
                .iter()
                .copied()
                .chain(std::iter::once(coords[1]))
                .collect()
        } else {
            coords
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, c)| *c)
                .collect()
        };

        if new_coords.len() < MIN_RING_LEN {
            return Err(RingError::WouldCollapse {
                remaining: new_coords.len().saturating_sub(1),
            });
        }
        Ok(HullRing(new_coords))
    }
}
