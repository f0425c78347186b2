pub mod polygon_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Vertex coordinate storage: one column (x, y, z) per vertex.
pub type Coordinates = nalgebra::Matrix3xX<f64>;

/// Edge connectivity storage: one column (origin, end) per edge.
pub type Extrema = nalgebra::Matrix2xX<u32>;

/// Absolute tolerance below which lengths and areas count as zero.
pub const TOLERANCE: f64 = 1e-10;
