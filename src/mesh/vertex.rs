use super::MarkerMap;
use crate::math::{Coordinates, Point3};

/// The vertices (0D cells) of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell0Ds {
    /// Number of vertices.
    pub count: usize,
    /// Vertex ids, in file order.
    pub ids: Vec<u32>,
    /// Coordinates, one column per vertex.
    pub coordinates: Coordinates,
    /// Boundary markers.
    pub markers: MarkerMap,
}

impl Default for Cell0Ds {
    fn default() -> Self {
        Self {
            count: 0,
            ids: Vec::new(),
            coordinates: Coordinates::zeros(0),
            markers: MarkerMap::new(),
        }
    }
}

impl Cell0Ds {
    /// Creates unmarked vertices with ids `0..points.len()`.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let count = points.len();
        Self {
            count,
            ids: (0..).take(count).collect(),
            coordinates: Coordinates::from_iterator(
                count,
                points.iter().flat_map(|p| [p.x, p.y, p.z]),
            ),
            markers: MarkerMap::new(),
        }
    }

    /// Returns the position of vertex `id`, or `None` if out of range.
    #[must_use]
    pub fn point(&self, id: u32) -> Option<Point3> {
        let col = usize::try_from(id).ok()?;
        if col >= self.coordinates.ncols() {
            return None;
        }
        let c = self.coordinates.column(col);
        Some(Point3::new(c[0], c[1], c[2]))
    }
}
