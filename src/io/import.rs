//! Reader for the semicolon-separated `Cell0Ds.csv`, `Cell1Ds.csv` and
//! `Cell2Ds.csv` mesh files.
//!
//! Every file starts with a header line, which is skipped. Blank lines are
//! ignored. A non-zero marker in the second column files the row's id
//! under that marker.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{MeshError, Result};
use crate::math::{Coordinates, Extrema};
use crate::mesh::{insert_marker, Cell0Ds, Cell1Ds, Cell2Ds, MarkerMap, PolygonalMesh};

/// Vertex file name inside a mesh directory.
pub const CELL0DS_FILE: &str = "Cell0Ds.csv";
/// Edge file name inside a mesh directory.
pub const CELL1DS_FILE: &str = "Cell1Ds.csv";
/// Face file name inside a mesh directory.
pub const CELL2DS_FILE: &str = "Cell2Ds.csv";

/// Loads a complete mesh from the three cell files in `dir`.
///
/// # Errors
///
/// Returns [`MeshError::FileNotFound`] if any of the files is missing, and a
/// parse or reference error naming the offending line otherwise.
pub fn import_mesh<P: AsRef<Path>>(dir: P) -> Result<PolygonalMesh> {
    let dir = dir.as_ref();

    let path = dir.join(CELL0DS_FILE);
    let cell0ds = read_cell0ds(open(&path)?, &path)?;

    let path = dir.join(CELL1DS_FILE);
    let cell1ds = read_cell1ds(open(&path)?, &path, cell0ds.count)?;

    let path = dir.join(CELL2DS_FILE);
    let cell2ds = read_cell2ds(open(&path)?, &path, cell0ds.count, cell1ds.count)?;

    info!(
        dir = %dir.display(),
        vertices = cell0ds.count,
        edges = cell1ds.count,
        faces = cell2ds.count,
        "imported mesh"
    );

    Ok(PolygonalMesh {
        cell0ds,
        cell1ds,
        cell2ds,
    })
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshError::Io(e)
        }
    })?;
    Ok(BufReader::new(file))
}

/// Parses vertex rows `Id;Marker;X;Y`. The z coordinate is set to zero.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error on I/O failure, a malformed row, or a file without rows.
pub fn read_cell0ds<R: BufRead>(reader: R, path: &Path) -> Result<Cell0Ds> {
    let rows = data_rows(reader, path)?;

    let mut ids = Vec::with_capacity(rows.len());
    let mut xyz = Vec::with_capacity(rows.len() * 3);
    let mut markers = MarkerMap::new();

    for (line, text) in &rows {
        let mut fields = Fields::new(text, path, *line);
        let id = fields.field::<u32>("id")?;
        let marker = fields.field::<u32>("marker")?;
        let x = fields.field::<f64>("x")?;
        let y = fields.field::<f64>("y")?;
        fields.finish()?;

        ids.push(id);
        xyz.extend([x, y, 0.0]);
        insert_marker(&mut markers, marker, id);
    }

    debug!(path = %path.display(), count = ids.len(), markers = markers.len(), "read vertices");

    Ok(Cell0Ds {
        count: ids.len(),
        coordinates: Coordinates::from_vec(xyz),
        ids,
        markers,
    })
}

/// Parses edge rows `Id;Marker;Origin;End`.
///
/// Both extrema must be below `vertex_count`.
///
/// # Errors
///
/// Returns an error on I/O failure, a malformed row, a reference to an
/// unknown vertex, or a file without rows.
pub fn read_cell1ds<R: BufRead>(reader: R, path: &Path, vertex_count: usize) -> Result<Cell1Ds> {
    let rows = data_rows(reader, path)?;

    let mut ids = Vec::with_capacity(rows.len());
    let mut extrema = Vec::with_capacity(rows.len() * 2);
    let mut markers = MarkerMap::new();

    for (line, text) in &rows {
        let mut fields = Fields::new(text, path, *line);
        let id = fields.field::<u32>("id")?;
        let marker = fields.field::<u32>("marker")?;
        let origin = fields.field::<u32>("origin")?;
        let end = fields.field::<u32>("end")?;
        fields.finish()?;

        for vertex in [origin, end] {
            check_reference(path, *line, "edge", id, vertex, vertex_count)?;
        }

        ids.push(id);
        extrema.extend([origin, end]);
        insert_marker(&mut markers, marker, id);
    }

    debug!(path = %path.display(), count = ids.len(), markers = markers.len(), "read edges");

    Ok(Cell1Ds {
        count: ids.len(),
        extrema: Extrema::from_vec(extrema),
        ids,
        markers,
    })
}

/// Parses face rows `Id;Marker;NumVertices;V1;..;Vn;NumEdges;E1;..;Em`.
///
/// Vertex ids must be below `vertex_count` and edge ids below `edge_count`.
///
/// # Errors
///
/// Returns an error on I/O failure, a malformed row, a list shorter or
/// longer than its declared size, edge and vertex lists of different
/// lengths, a dangling reference, or a file without rows.
pub fn read_cell2ds<R: BufRead>(
    reader: R,
    path: &Path,
    vertex_count: usize,
    edge_count: usize,
) -> Result<Cell2Ds> {
    let rows = data_rows(reader, path)?;

    let mut cells = Cell2Ds {
        count: rows.len(),
        ids: Vec::with_capacity(rows.len()),
        vertices: Vec::with_capacity(rows.len()),
        edges: Vec::with_capacity(rows.len()),
        markers: MarkerMap::new(),
    };

    for (line, text) in &rows {
        let mut fields = Fields::new(text, path, *line);
        let id = fields.field::<u32>("id")?;
        let marker = fields.field::<u32>("marker")?;
        let vertices = fields.list("vertex")?;
        let edges = fields.list("edge")?;
        fields.finish()?;

        if edges.len() != vertices.len() {
            return Err(MeshError::parse(
                path,
                *line,
                format!(
                    "face {id} has {} vertices but {} edges",
                    vertices.len(),
                    edges.len()
                ),
            ));
        }
        for &vertex in &vertices {
            check_reference(path, *line, "face", id, vertex, vertex_count)?;
        }
        if let Some(&edge) = edges.iter().find(|&&e| !in_range(e, edge_count)) {
            return Err(MeshError::parse(
                path,
                *line,
                format!("face {id} references unknown edge {edge}"),
            ));
        }

        cells.ids.push(id);
        cells.vertices.push(vertices);
        cells.edges.push(edges);
        insert_marker(&mut cells.markers, marker, id);
    }

    debug!(path = %path.display(), count = cells.count, markers = cells.markers.len(), "read faces");

    Ok(cells)
}

/// Collects the non-blank lines after the header with their 1-based numbers.
fn data_rows<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(usize, String)>> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                MeshError::parse(path, index + 1, "line is not valid UTF-8")
            } else {
                MeshError::Io(e)
            }
        })?;
        if !line.trim().is_empty() {
            rows.push((index + 1, line));
        }
    }
    if rows.is_empty() {
        return Err(MeshError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}

fn in_range(id: u32, count: usize) -> bool {
    usize::try_from(id).is_ok_and(|id| id < count)
}

fn check_reference(
    path: &Path,
    line: usize,
    cell: &'static str,
    id: u32,
    vertex: u32,
    vertex_count: usize,
) -> Result<()> {
    if in_range(vertex, vertex_count) {
        Ok(())
    } else {
        Err(MeshError::InvalidReference {
            path: path.to_path_buf(),
            line,
            cell,
            id,
            vertex,
        })
    }
}

/// Cursor over the `;`-separated fields of one row.
struct Fields<'a> {
    parts: std::str::Split<'a, char>,
    path: &'a Path,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str, path: &'a Path, line: usize) -> Self {
        Self {
            parts: text.split(';'),
            path,
            line,
        }
    }

    fn field<T: FromStr>(&mut self, name: &str) -> Result<T> {
        let raw = self
            .parts
            .next()
            .ok_or_else(|| MeshError::parse(self.path, self.line, format!("missing {name}")))?
            .trim();
        raw.parse().map_err(|_| {
            MeshError::parse(self.path, self.line, format!("invalid {name} `{raw}`"))
        })
    }

    /// Reads a count followed by that many ids.
    fn list(&mut self, name: &str) -> Result<Vec<u32>> {
        let len = self.field::<usize>(&format!("{name} count"))?;
        (0..len).map(|_| self.field::<u32>(name)).collect()
    }

    fn finish(mut self) -> Result<()> {
        match self.parts.find(|p| !p.trim().is_empty()) {
            Some(extra) => Err(MeshError::parse(
                self.path,
                self.line,
                format!("unexpected trailing field `{}`", extra.trim()),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const CELL0DS: &str = "Id;Marker;X;Y
0;1;0.0;0.0
1;2;1.0;0.0
2;0;1.0;1.0
3;5;0.0;1.0
4;5;0.5;0.5
";

    const CELL1DS: &str = "Id;Marker;Origin;End
0;0;0;1
1;7;1;2
2;0;2;3
3;7;3;0
";

    const CELL2DS: &str = "Id;Marker;NumVertices;Vertices;NumEdges;Edges
0;0;4;0;1;2;3;4;0;1;2;3
1;0;3;0;1;4;3;0;1;2
";

    fn path(name: &str) -> &Path {
        Path::new(name)
    }

    #[test]
    fn reads_vertices() {
        let cells = read_cell0ds(Cursor::new(CELL0DS), path(CELL0DS_FILE)).unwrap();
        assert_eq!(cells.count, 5);
        assert_eq!(cells.ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(cells.coordinates.ncols(), 5);
        let p = cells.point(4).unwrap();
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, 0.5);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn unmarked_rows_are_not_stored() {
        let cells = read_cell0ds(Cursor::new(CELL0DS), path(CELL0DS_FILE)).unwrap();
        assert_eq!(cells.markers.keys().copied().collect::<Vec<_>>(), vec![1, 2, 5]);
        assert_eq!(cells.markers[&5], vec![3, 4]);
    }

    #[test]
    fn reads_edges() {
        let cells = read_cell1ds(Cursor::new(CELL1DS), path(CELL1DS_FILE), 5).unwrap();
        assert_eq!(cells.count, 4);
        assert_eq!(cells.extremum(3), Some((3, 0)));
        assert_eq!(cells.markers[&7], vec![1, 3]);
    }

    #[test]
    fn reads_variable_length_faces() {
        let cells = read_cell2ds(Cursor::new(CELL2DS), path(CELL2DS_FILE), 5, 4).unwrap();
        assert_eq!(cells.count, 2);
        assert_eq!(cells.vertices[0], vec![0, 1, 2, 3]);
        assert_eq!(cells.edges[0], vec![0, 1, 2, 3]);
        assert_eq!(cells.vertices[1], vec![0, 1, 4]);
        assert_eq!(cells.edges[1], vec![0, 1, 2]);
        assert!(cells.markers.is_empty());
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let text = "Id;Marker;X;Y\n\n 0 ; 0 ; 1.5 ; -2e-1 \n\n";
        let cells = read_cell0ds(Cursor::new(text), path(CELL0DS_FILE)).unwrap();
        assert_eq!(cells.count, 1);
        assert_relative_eq!(cells.coordinates[(1, 0)], -0.2);
    }

    #[test]
    fn malformed_number_reports_line() {
        let text = "Id;Marker;X;Y\n0;0;0.0;0.0\n1;0;abc;0.0\n";
        let err = read_cell0ds(Cursor::new(text), path(CELL0DS_FILE)).unwrap_err();
        match err {
            MeshError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("x"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_field_is_an_error() {
        let text = "Id;Marker;Origin;End\n0;0;1\n";
        let err = read_cell1ds(Cursor::new(text), path(CELL1DS_FILE), 5).unwrap_err();
        assert!(matches!(err, MeshError::Parse { line: 2, .. }));
    }

    #[test]
    fn trailing_field_is_an_error() {
        let text = "Id;Marker;Origin;End\n0;0;1;2;3\n";
        let err = read_cell1ds(Cursor::new(text), path(CELL1DS_FILE), 5).unwrap_err();
        assert!(matches!(err, MeshError::Parse { line: 2, .. }));
    }

    #[test]
    fn short_face_list_is_an_error() {
        let text = "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n0;0;4;0;1;2\n";
        assert!(read_cell2ds(Cursor::new(text), path(CELL2DS_FILE), 5, 4).is_err());
    }

    #[test]
    fn face_edge_count_must_match_vertex_count() {
        let text = "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n0;0;3;0;1;4;3;0;1;2\n1;0;4;0;1;2;3;1;0\n";
        let err = read_cell2ds(Cursor::new(text), path(CELL2DS_FILE), 5, 4).unwrap_err();
        match err {
            MeshError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert_eq!(message, "face 1 has 4 vertices but 1 edges");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let bytes: &[u8] = b"Id;Marker;X;Y\n0;0;0.0;0.0\n1;0;\xff;0.0\n";
        let err = read_cell0ds(Cursor::new(bytes), path(CELL0DS_FILE)).unwrap_err();
        assert!(matches!(err, MeshError::Parse { line: 3, .. }));
    }

    #[test]
    fn edge_to_unknown_vertex_is_rejected() {
        let err = read_cell1ds(Cursor::new(CELL1DS), path(CELL1DS_FILE), 3).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidReference {
                line: 4,
                id: 2,
                vertex: 3,
                ..
            }
        ));
    }

    #[test]
    fn face_to_unknown_edge_is_rejected() {
        assert!(read_cell2ds(Cursor::new(CELL2DS), path(CELL2DS_FILE), 5, 3).is_err());
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = read_cell0ds(Cursor::new("Id;Marker;X;Y\n"), path(CELL0DS_FILE)).unwrap_err();
        assert!(matches!(err, MeshError::EmptyFile { .. }));
    }

    #[test]
    fn import_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CELL0DS_FILE), CELL0DS).unwrap();
        std::fs::write(dir.path().join(CELL1DS_FILE), CELL1DS).unwrap();
        std::fs::write(dir.path().join(CELL2DS_FILE), CELL2DS).unwrap();

        let mesh = import_mesh(dir.path()).unwrap();
        assert_eq!(mesh.cell0ds.count, 5);
        assert_eq!(mesh.cell1ds.count, 4);
        assert_eq!(mesh.cell2ds.count, 2);
    }

    #[test]
    fn missing_directory_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_mesh(dir.path().join("nowhere")).unwrap_err();
        match err {
            MeshError::FileNotFound { path } => assert!(path.ends_with(CELL0DS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
