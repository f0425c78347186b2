//! Mesh file I/O.
//!
//! | Format | Files | Load | Save |
//! |--------|-------|------|------|
//! | Semicolon-separated cells | `Cell0Ds.csv`, `Cell1Ds.csv`, `Cell2Ds.csv` | ✓ | ✗ |
//! | AVS UCD | `.inp` | ✗ | ✓ |

pub mod import;
pub mod ucd;

use std::path::Path;

pub use import::import_mesh;

use crate::error::Result;
use crate::mesh::PolygonalMesh;
use ucd::{marker_values, UcdProperty};

/// Label of the marker property in exported files.
pub const MARKER_LABEL: &str = "Marker";

/// Exports the vertices with their marker as a point property.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_cell0ds<P: AsRef<Path>>(mesh: &PolygonalMesh, path: P) -> Result<()> {
    let cells = &mesh.cell0ds;
    let markers = marker_values(cells.coordinates.ncols(), &cells.markers);
    ucd::export_points(
        path,
        &cells.coordinates,
        &[UcdProperty::scalar(MARKER_LABEL, &markers)],
    )
}

/// Exports the edges as segments with their marker as a cell property.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_cell1ds<P: AsRef<Path>>(mesh: &PolygonalMesh, path: P) -> Result<()> {
    let cells = &mesh.cell1ds;
    let markers = marker_values(cells.extrema.ncols(), &cells.markers);
    ucd::export_segments(
        path,
        &mesh.cell0ds.coordinates,
        &cells.extrema,
        &[],
        &[UcdProperty::scalar(MARKER_LABEL, &markers)],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::{insert_marker, Cell0Ds, Cell1Ds};

    #[test]
    fn exported_files_carry_markers() {
        let mut mesh = PolygonalMesh {
            cell0ds: Cell0Ds::from_points(&[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
            ]),
            cell1ds: Cell1Ds::from_extrema(&[(0, 1)]),
            ..PolygonalMesh::default()
        };
        insert_marker(&mut mesh.cell0ds.markers, 2, 1);
        insert_marker(&mut mesh.cell1ds.markers, 5, 0);

        let dir = tempfile::tempdir().unwrap();
        let points = dir.path().join("Cell0Ds.inp");
        let segments = dir.path().join("Cell1Ds.inp");
        export_cell0ds(&mesh, &points).unwrap();
        export_cell1ds(&mesh, &segments).unwrap();

        let points = std::fs::read_to_string(points).unwrap();
        assert!(points.starts_with("2 2 1 0 0\n"));
        assert!(points.ends_with("1 0.0000000000000000e0\n2 2.0000000000000000e0\n"));

        let segments = std::fs::read_to_string(segments).unwrap();
        assert!(segments.starts_with("2 1 0 1 0\n"));
        assert!(segments.contains("1 0 line 1 2\n"));
        assert!(segments.ends_with("Marker, -\n1 5.0000000000000000e0\n"));
    }
}
