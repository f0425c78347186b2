//! Geometric sanity checks over an imported mesh.

mod edge_length;
mod polygon_area;

pub use edge_length::ZeroLengthEdges;
pub use polygon_area::ZeroAreaPolygons;

use crate::mesh::PolygonalMesh;

/// Returns `true` if no edge is shorter than [`crate::math::TOLERANCE`].
#[must_use]
pub fn has_no_zero_length_edges(mesh: &PolygonalMesh) -> bool {
    ZeroLengthEdges::new().execute(mesh)
}

/// Returns `true` if no polygon has an area below [`crate::math::TOLERANCE`].
#[must_use]
pub fn has_no_zero_area_polygons(mesh: &PolygonalMesh) -> bool {
    ZeroAreaPolygons::new().execute(mesh)
}

/// Index of the first zero-length edge, without logging.
#[must_use]
pub fn first_zero_length_edge(mesh: &PolygonalMesh) -> Option<usize> {
    ZeroLengthEdges::new().first_offender(mesh)
}

/// Index of the first zero-area polygon, without logging.
#[must_use]
pub fn first_zero_area_polygon(mesh: &PolygonalMesh) -> Option<usize> {
    ZeroAreaPolygons::new().first_offender(mesh)
}
