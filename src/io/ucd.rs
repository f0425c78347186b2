//! AVS UCD (`.inp`) ASCII writer.
//!
//! Layout:
//!
//! ```text
//! <nodes> <cells> <node data components> <cell data components> 0
//! <node id> <x> <y> <z>                      one per node, 1-based
//! <cell id> <material> <type> <node ids..>   one per cell, 1-based
//! <nprops> <ncomp_1> .. <ncomp_n>            node data, if any
//! <label>, <unit>                            one per property
//! <node id> <values..>                       one per node
//! (same block again for cell data)
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MeshError, Result};
use crate::math::{Coordinates, Extrema};
use crate::mesh::MarkerMap;

/// A named per-node or per-cell data array.
#[derive(Debug, Clone, Copy)]
pub struct UcdProperty<'a> {
    pub label: &'a str,
    pub unit: &'a str,
    pub num_components: usize,
    /// Values, `num_components` consecutive entries per node or cell.
    pub data: &'a [f64],
}

impl<'a> UcdProperty<'a> {
    /// A one-component property with no unit (`-`).
    #[must_use]
    pub fn scalar(label: &'a str, data: &'a [f64]) -> Self {
        Self {
            label,
            unit: "-",
            num_components: 1,
            data,
        }
    }
}

/// UCD cell shapes written by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellType {
    Point,
    Line,
}

impl CellType {
    fn label(self) -> &'static str {
        match self {
            Self::Point => "pt",
            Self::Line => "line",
        }
    }
}

/// Writes every column of `coordinates` as a node and as a `pt` cell.
///
/// # Errors
///
/// Returns an error if the file cannot be written or a property does not
/// hold one value set per point.
pub fn export_points<P: AsRef<Path>>(
    path: P,
    coordinates: &Coordinates,
    point_properties: &[UcdProperty<'_>],
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_points(&mut writer, coordinates, point_properties)?;
    writer.flush()?;
    debug!(path = %path.display(), points = coordinates.ncols(), "exported points");
    Ok(())
}

/// Writes the points and one `line` cell per column of `extrema`.
///
/// # Errors
///
/// Returns an error if the file cannot be written, a property does not
/// hold one value set per point or per segment, or a segment endpoint is
/// not a column of `coordinates`.
pub fn export_segments<P: AsRef<Path>>(
    path: P,
    coordinates: &Coordinates,
    extrema: &Extrema,
    point_properties: &[UcdProperty<'_>],
    segment_properties: &[UcdProperty<'_>],
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_segments(
        &mut writer,
        coordinates,
        extrema,
        point_properties,
        segment_properties,
    )?;
    writer.flush()?;
    debug!(path = %path.display(), segments = extrema.ncols(), "exported segments");
    Ok(())
}

/// [`export_points`] into any writer.
///
/// # Errors
///
/// Returns an error on write failure or a mis-sized property.
pub fn write_points<W: Write>(
    writer: &mut W,
    coordinates: &Coordinates,
    point_properties: &[UcdProperty<'_>],
) -> Result<()> {
    let cells: Vec<Vec<usize>> = (0..coordinates.ncols()).map(|i| vec![i]).collect();
    write_ucd(
        writer,
        coordinates,
        CellType::Point,
        &cells,
        point_properties,
        &[],
    )
}

/// [`export_segments`] into any writer.
///
/// # Errors
///
/// Returns an error on write failure, a mis-sized property, or a segment
/// whose endpoint is not a column of `coordinates`. Nothing is written in
/// the latter two cases.
pub fn write_segments<W: Write>(
    writer: &mut W,
    coordinates: &Coordinates,
    extrema: &Extrema,
    point_properties: &[UcdProperty<'_>],
    segment_properties: &[UcdProperty<'_>],
) -> Result<()> {
    let nodes = coordinates.ncols();
    let cells = extrema
        .column_iter()
        .enumerate()
        .map(|(segment, c)| {
            c.iter()
                .map(|&node| {
                    usize::try_from(node)
                        .ok()
                        .filter(|&n| n < nodes)
                        .ok_or(MeshError::DanglingNode {
                            segment,
                            node,
                            nodes,
                        })
                })
                .collect::<Result<Vec<usize>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    write_ucd(
        writer,
        coordinates,
        CellType::Line,
        &cells,
        point_properties,
        segment_properties,
    )
}

fn write_ucd<W: Write>(
    writer: &mut W,
    coordinates: &Coordinates,
    cell_type: CellType,
    cells: &[Vec<usize>],
    point_properties: &[UcdProperty<'_>],
    cell_properties: &[UcdProperty<'_>],
) -> Result<()> {
    let num_points = coordinates.ncols();
    check_sizes(point_properties, num_points)?;
    check_sizes(cell_properties, cells.len())?;

    writeln!(
        writer,
        "{} {} {} {} 0",
        num_points,
        cells.len(),
        total_components(point_properties),
        total_components(cell_properties)
    )?;

    for (i, p) in coordinates.column_iter().enumerate() {
        writeln!(writer, "{} {:.16e} {:.16e} {:.16e}", i + 1, p[0], p[1], p[2])?;
    }

    for (i, nodes) in cells.iter().enumerate() {
        write!(writer, "{} 0 {}", i + 1, cell_type.label())?;
        for node in nodes {
            write!(writer, " {}", node + 1)?;
        }
        writeln!(writer)?;
    }

    write_data(writer, point_properties, num_points)?;
    write_data(writer, cell_properties, cells.len())?;
    Ok(())
}

fn total_components(properties: &[UcdProperty<'_>]) -> usize {
    properties.iter().map(|p| p.num_components).sum()
}

fn check_sizes(properties: &[UcdProperty<'_>], count: usize) -> Result<()> {
    for p in properties {
        let expected = count * p.num_components;
        if p.data.len() != expected {
            return Err(MeshError::PropertySize {
                label: p.label.to_string(),
                expected,
                got: p.data.len(),
            });
        }
    }
    Ok(())
}

fn write_data<W: Write>(
    writer: &mut W,
    properties: &[UcdProperty<'_>],
    count: usize,
) -> Result<()> {
    if properties.is_empty() {
        return Ok(());
    }

    write!(writer, "{}", properties.len())?;
    for p in properties {
        write!(writer, " {}", p.num_components)?;
    }
    writeln!(writer)?;

    for p in properties {
        writeln!(writer, "{}, {}", p.label, p.unit)?;
    }

    for i in 0..count {
        write!(writer, "{}", i + 1)?;
        for p in properties {
            let n = p.num_components;
            for value in &p.data[i * n..(i + 1) * n] {
                write!(writer, " {value:.16e}")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Per-cell marker values: `0.0` unless the cell id appears in `markers`.
///
/// Ids outside `0..count` are skipped with a warning. When an id is listed
/// under several markers, the largest marker wins.
#[must_use]
pub fn marker_values(count: usize, markers: &MarkerMap) -> Vec<f64> {
    let mut values = vec![0.0; count];
    for (&marker, ids) in markers {
        for &id in ids {
            match usize::try_from(id).ok().and_then(|i| values.get_mut(i)) {
                Some(value) => *value = f64::from(marker),
                None => warn!(marker, id, count, "marker id out of range, skipped"),
            }
        }
    }
    values
}
