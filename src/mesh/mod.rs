pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::Cell1Ds;
pub use face::Cell2Ds;
pub use vertex::Cell0Ds;

use std::collections::BTreeMap;

/// Marker id to the ids of the cells carrying it, in insertion order.
///
/// Marker `0` denotes unmarked (interior) cells and is never stored.
pub type MarkerMap = BTreeMap<u32, Vec<u32>>;

/// Records `id` under `marker`, ignoring the unmarked value `0`.
pub fn insert_marker(markers: &mut MarkerMap, marker: u32, id: u32) {
    if marker != 0 {
        markers.entry(marker).or_default().push(id);
    }
}

/// A 2D polygonal mesh stored with 3D coordinates.
///
/// Plain aggregate with no invariant enforcement: referential integrity is
/// established by whoever fills it (normally [`crate::io::import`]) and the
/// mesh is only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonalMesh {
    pub cell0ds: Cell0Ds,
    pub cell1ds: Cell1Ds,
    pub cell2ds: Cell2Ds,
}

impl PolygonalMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
