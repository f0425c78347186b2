//! Comparison of imported marker tables against expected ones.

mod reference;

pub use reference::{table, ReferenceMarkers};

use std::fmt;

use tracing::debug;

use crate::mesh::{MarkerMap, PolygonalMesh};

/// Returns `true` if both tables have the same markers and, per marker,
/// the same ids in the same order.
#[must_use]
pub fn markers_match(actual: &MarkerMap, expected: &MarkerMap) -> bool {
    actual == expected
}

/// Outcome of comparing one marker table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCheck {
    /// Cell dimension of the table (0, 1 or 2).
    pub dimension: u8,
    /// Whether the table equals its reference.
    pub matches: bool,
}

impl fmt::Display for TableCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.matches { "corretti" } else { "errati" };
        write!(f, "Marker celle {}D {verdict}", self.dimension)
    }
}

/// Compares the vertex, edge and face marker tables of a mesh.
pub struct MarkerCheck<'a> {
    reference: &'a ReferenceMarkers,
}

impl<'a> MarkerCheck<'a> {
    /// Creates a new `MarkerCheck` against the given reference tables.
    #[must_use]
    pub fn new(reference: &'a ReferenceMarkers) -> Self {
        Self { reference }
    }

    /// Executes the comparison, one result per dimension in order 0D, 1D, 2D.
    #[must_use]
    pub fn execute(&self, mesh: &PolygonalMesh) -> [TableCheck; 3] {
        let pairs = [
            (&mesh.cell0ds.markers, &self.reference.cell0ds),
            (&mesh.cell1ds.markers, &self.reference.cell1ds),
            (&mesh.cell2ds.markers, &self.reference.cell2ds),
        ];
        let mut dimension = 0;
        pairs.map(|(actual, expected)| {
            let check = TableCheck {
                dimension,
                matches: markers_match(actual, expected),
            };
            debug!(
                dimension,
                markers = actual.len(),
                expected = expected.len(),
                matches = check.matches,
                "compared marker table"
            );
            dimension += 1;
            check
        })
    }
}
