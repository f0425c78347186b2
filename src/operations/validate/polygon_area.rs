use tracing::error;

use crate::math::polygon_2d::area_2d;
use crate::math::{Point3, TOLERANCE};
use crate::mesh::PolygonalMesh;

/// Detects polygons whose area in the XY plane vanishes.
pub struct ZeroAreaPolygons {
    tolerance: f64,
}

impl Default for ZeroAreaPolygons {
    fn default() -> Self {
        Self::new()
    }
}

impl ZeroAreaPolygons {
    /// Creates a new `ZeroAreaPolygons` query using [`TOLERANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }

    /// Uses an absolute area threshold other than [`TOLERANCE`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the index of the first face whose area is below the tolerance.
    ///
    /// Faces with fewer than three vertices have no area and are skipped.
    /// A face naming a missing vertex is reported.
    #[must_use]
    pub fn first_offender(&self, mesh: &PolygonalMesh) -> Option<usize> {
        let faces = &mesh.cell2ds;
        (0..faces.count).find(|&i| {
            let Some(loop_ids) = faces.vertices.get(i) else {
                return false;
            };
            if loop_ids.len() < 3 {
                return false;
            }
            let points: Option<Vec<Point3>> =
                loop_ids.iter().map(|&id| mesh.cell0ds.point(id)).collect();
            points.is_none_or(|points| area_2d(&points) < self.tolerance)
        })
    }

    /// Executes the check, returning `true` if every polygon has non-zero area.
    ///
    /// Stops at the first degenerate polygon and logs its index.
    #[must_use]
    pub fn execute(&self, mesh: &PolygonalMesh) -> bool {
        match self.first_offender(mesh) {
            Some(index) => {
                error!(face = index, "polygon {index} has zero area");
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mesh::{Cell0Ds, Cell2Ds};

    fn mesh(points: &[Point3], loops: Vec<Vec<u32>>) -> PolygonalMesh {
        let edges: Vec<Vec<u32>> = loops.iter().map(|l| (0..).take(l.len()).collect()).collect();
        PolygonalMesh {
            cell0ds: Cell0Ds::from_points(points),
            cell2ds: Cell2Ds::from_loops(loops, edges).unwrap(),
            ..PolygonalMesh::default()
        }
    }

    fn points() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn unit_square_passes() {
        let m = mesh(&points(), vec![vec![0, 1, 2, 3]]);
        assert!(ZeroAreaPolygons::new().execute(&m));
    }

    #[test]
    fn clockwise_square_passes() {
        let m = mesh(&points(), vec![vec![3, 2, 1, 0]]);
        assert!(ZeroAreaPolygons::new().execute(&m));
    }

    #[test]
    fn collinear_triangle_fails() {
        let m = mesh(&points(), vec![vec![0, 1, 2, 3], vec![0, 1, 4]]);
        assert_eq!(ZeroAreaPolygons::new().first_offender(&m), Some(1));
        assert!(!ZeroAreaPolygons::new().execute(&m));
    }

    #[test]
    fn two_vertex_face_is_skipped() {
        let m = mesh(&points(), vec![vec![0, 1], vec![0, 1, 2]]);
        assert_eq!(ZeroAreaPolygons::new().first_offender(&m), None);
    }

    #[test]
    fn vertical_polygon_projects_to_zero() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
        ];
        assert!(!ZeroAreaPolygons::new().execute(&mesh(&pts, vec![vec![0, 1, 2]])));
    }

    #[test]
    fn tolerance_is_absolute() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e-6, 0.0, 0.0),
            Point3::new(0.0, 1e-6, 0.0),
        ];
        let m = mesh(&pts, vec![vec![0, 1, 2]]);
        assert!(!ZeroAreaPolygons::new().execute(&m));
        assert!(ZeroAreaPolygons::new().with_tolerance(1e-13).execute(&m));
    }

    #[test]
    fn dangling_vertex_is_reported() {
        let m = mesh(&points(), vec![vec![0, 1, 9]]);
        assert_eq!(ZeroAreaPolygons::new().first_offender(&m), Some(0));
    }
}
