//! The import, export, marker and geometry pipeline run by the binary.

use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::io::{export_cell0ds, export_cell1ds, import_mesh};
use crate::operations::markers::{MarkerCheck, ReferenceMarkers, TableCheck};
use crate::operations::validate::{ZeroAreaPolygons, ZeroLengthEdges};

/// Outcome of a full check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Marker table comparisons for 0D, 1D and 2D cells.
    pub markers: [TableCheck; 3],
    /// No edge is shorter than the tolerance.
    pub edges_ok: bool,
    /// No polygon has an area below the tolerance.
    pub polygons_ok: bool,
}

impl Report {
    /// Whether every marker table and both geometric checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.markers.iter().all(|c| c.matches) && self.edges_ok && self.polygons_ok
    }
}

/// Imports the mesh, writes both exports, then checks markers and geometry.
///
/// Verdicts are written to `out`, one line each; degeneracies are logged.
/// Failed checks do not make this return an error.
///
/// # Errors
///
/// Returns an error if the mesh cannot be imported, an export cannot be
/// written, or writing to `out` fails.
pub fn run<W: Write>(config: &Config, reference: &ReferenceMarkers, out: &mut W) -> Result<Report> {
    let mesh = import_mesh(&config.mesh_dir)?;

    export_cell0ds(&mesh, &config.cell0ds_output)?;
    export_cell1ds(&mesh, &config.cell1ds_output)?;
    info!(
        cell0ds = %config.cell0ds_output.display(),
        cell1ds = %config.cell1ds_output.display(),
        "exported mesh"
    );

    let markers = MarkerCheck::new(reference).execute(&mesh);
    for check in &markers {
        writeln!(out, "{check}")?;
    }

    let edges_ok = ZeroLengthEdges::new()
        .with_tolerance(config.tolerance)
        .execute(&mesh);
    if edges_ok {
        writeln!(out, "Tutti i segmenti hanno lunghezza non nulla")?;
    }

    let polygons_ok = ZeroAreaPolygons::new()
        .with_tolerance(config.tolerance)
        .execute(&mesh);
    if polygons_ok {
        writeln!(out, "Tutti i poligoni hanno area non nulla")?;
    }

    Ok(Report {
        markers,
        edges_ok,
        polygons_ok,
    })
}
