use super::MarkerMap;
use crate::math::Extrema;

/// The edges (1D cells) of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell1Ds {
    /// Number of edges.
    pub count: usize,
    /// Edge ids, in file order.
    pub ids: Vec<u32>,
    /// Origin (row 0) and end (row 1) vertex id of each edge.
    pub extrema: Extrema,
    /// Boundary markers.
    pub markers: MarkerMap,
}

impl Default for Cell1Ds {
    fn default() -> Self {
        Self {
            count: 0,
            ids: Vec::new(),
            extrema: Extrema::zeros(0),
            markers: MarkerMap::new(),
        }
    }
}

impl Cell1Ds {
    /// Creates unmarked edges with ids `0..pairs.len()`.
    #[must_use]
    pub fn from_extrema(pairs: &[(u32, u32)]) -> Self {
        let count = pairs.len();
        Self {
            count,
            ids: (0..).take(count).collect(),
            extrema: Extrema::from_iterator(count, pairs.iter().flat_map(|&(a, b)| [a, b])),
            markers: MarkerMap::new(),
        }
    }

    /// Returns the `(origin, end)` vertex ids of the edge at column `index`.
    #[must_use]
    pub fn extremum(&self, index: usize) -> Option<(u32, u32)> {
        (index < self.extrema.ncols()).then(|| (self.extrema[(0, index)], self.extrema[(1, index)]))
    }
}
