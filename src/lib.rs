pub mod check;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod mesh;
pub mod operations;

pub use config::Config;
pub use error::{MeshError, Result};
pub use mesh::PolygonalMesh;
