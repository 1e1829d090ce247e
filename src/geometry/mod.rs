//! Geometry for the hull boundary and its on-screen mapping.

pub mod bounds;
pub mod mapper;
pub mod ring;

pub use bounds::data_bounds;
pub use hit_test::hit_test_ring;
pub use mapper::CanvasMapper;
pub use ring::{HullRing, RingError};
