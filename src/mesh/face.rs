use super::MarkerMap;

/// The polygonal faces (2D cells) of a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell2Ds {
    /// Number of faces.
    pub count: usize,
    /// Face ids, in file order.
    pub ids: Vec<u32>,
    /// Boundary vertex ids of each face, in winding order.
    pub vertices: Vec<Vec<u32>>,
    /// Boundary edge ids of each face, parallel to `vertices`.
    pub edges: Vec<Vec<u32>>,
    /// Boundary markers.
    pub markers: MarkerMap,
}

impl Cell2Ds {
    /// Creates unmarked faces with ids `0..vertices.len()`.
    ///
    /// Returns `None` unless `edges` holds one list per face, each as long as
    /// the face's vertex list.
    #[must_use]
    pub fn from_loops(vertices: Vec<Vec<u32>>, edges: Vec<Vec<u32>>) -> Option<Self> {
        let parallel = vertices.len() == edges.len()
            && vertices.iter().zip(&edges).all(|(v, e)| v.len() == e.len());
        if !parallel {
            return None;
        }
        let count = vertices.len();
        Some(Self {
            count,
            ids: (0..).take(count).collect(),
            vertices,
            edges,
            markers: MarkerMap::new(),
        })
    }

    /// Returns the vertex and edge loops of the face at `index`.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<(&[u32], &[u32])> {
        Some((self.vertices.get(index)?, self.edges.get(index)?))
    }
}
