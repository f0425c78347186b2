use tracing::error;

use crate::math::polygon_2d::segment_length;
use crate::math::TOLERANCE;
use crate::mesh::PolygonalMesh;

/// Detects edges whose endpoints coincide.
pub struct ZeroLengthEdges {
    tolerance: f64,
}

impl Default for ZeroLengthEdges {
    fn default() -> Self {
        Self::new()
    }
}

impl ZeroLengthEdges {
    /// Creates a new `ZeroLengthEdges` query using [`TOLERANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }

    /// Uses an absolute length threshold other than [`TOLERANCE`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the index of the first edge shorter than the tolerance.
    ///
    /// An edge whose extrema name a missing vertex is reported as well.
    #[must_use]
    pub fn first_offender(&self, mesh: &PolygonalMesh) -> Option<usize> {
        let vertices = &mesh.cell0ds;
        (0..mesh.cell1ds.count).find(|&i| {
            let Some((origin, end)) = mesh.cell1ds.extremum(i) else {
                return true;
            };
            match (vertices.point(origin), vertices.point(end)) {
                (Some(a), Some(b)) => segment_length(&a, &b) < self.tolerance,
                _ => true,
            }
        })
    }

    /// Executes the check, returning `true` if every edge has non-zero length.
    ///
    /// Stops at the first degenerate edge and logs its index.
    #[must_use]
    pub fn execute(&self, mesh: &PolygonalMesh) -> bool {
        match self.first_offender(mesh) {
            Some(index) => {
                error!(edge = index, "segment {index} has zero length");
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::{Cell0Ds, Cell1Ds};

    fn mesh(points: &[Point3], edges: &[(u32, u32)]) -> PolygonalMesh {
        PolygonalMesh {
            cell0ds: Cell0Ds::from_points(points),
            cell1ds: Cell1Ds::from_extrema(edges),
            ..PolygonalMesh::default()
        }
    }

    fn triangle() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn all_edges_have_length() {
        let m = mesh(&triangle(), &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(ZeroLengthEdges::new().first_offender(&m), None);
        assert!(ZeroLengthEdges::new().execute(&m));
    }

    #[test]
    fn coincident_endpoints_fail() {
        let mut points = triangle();
        points.push(Point3::new(1.0, 0.0, 0.0));
        let m = mesh(&points, &[(0, 1), (1, 3), (2, 0)]);
        assert_eq!(ZeroLengthEdges::new().first_offender(&m), Some(1));
        assert!(!ZeroLengthEdges::new().execute(&m));
    }

    #[test]
    fn reports_first_of_several() {
        let m = mesh(&triangle(), &[(0, 1), (2, 2), (1, 1)]);
        assert_eq!(ZeroLengthEdges::new().first_offender(&m), Some(1));
    }

    #[test]
    fn z_component_counts_for_length() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
        assert!(ZeroLengthEdges::new().execute(&mesh(&points, &[(0, 1)])));
    }

    #[test]
    fn tolerance_is_absolute() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(1e-11, 0.0, 0.0)];
        let m = mesh(&points, &[(0, 1)]);
        assert!(!ZeroLengthEdges::new().execute(&m));
        assert!(ZeroLengthEdges::new().with_tolerance(1e-12).execute(&m));
    }

    #[test]
    fn dangling_vertex_is_reported() {
        let m = mesh(&triangle(), &[(0, 1), (1, 7)]);
        assert_eq!(ZeroLengthEdges::new().first_offender(&m), Some(1));
    }

    #[test]
    fn empty_mesh_passes() {
        assert!(ZeroLengthEdges::new().execute(&PolygonalMesh::new()));
    }
}
