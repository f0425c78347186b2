use crate::mesh::MarkerMap;

/// Expected marker tables for the three cell dimensions of a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMarkers {
    pub cell0ds: MarkerMap,
    pub cell1ds: MarkerMap,
    pub cell2ds: MarkerMap,
}

impl ReferenceMarkers {
    /// Marker tables of the bundled `PolygonalMesh` test mesh.
    ///
    /// Markers 1-4 tag the corners of the unit square and 5-8 its sides.
    /// No face carries a marker.
    #[must_use]
    pub fn polygonal_mesh() -> Self {
        Self {
            cell0ds: table(&[
                (1, &[0]),
                (2, &[1]),
                (3, &[2]),
                (4, &[3]),
                (5, &[6, 16, 24]),
                (6, &[7, 17, 22, 78]),
                (7, &[8, 20, 23, 52, 59]),
                (8, &[5, 15, 21, 26, 92]),
            ]),
            cell1ds: table(&[
                (5, &[8, 19, 22, 28]),
                (6, &[6, 23, 26, 126, 127]),
                (7, &[14, 17, 24, 79, 92, 93]),
                (8, &[11, 25, 29, 30, 159, 160]),
            ]),
            cell2ds: MarkerMap::new(),
        }
    }
}

/// Builds a marker table from literal `(marker, ids)` rows.
#[must_use]
pub fn table(rows: &[(u32, &[u32])]) -> MarkerMap {
    rows.iter().map(|&(marker, ids)| (marker, ids.to_vec())).collect()
}
