use std::path::PathBuf;

use crate::math::TOLERANCE;

/// Input and output locations and the degeneracy threshold of a check run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `Cell0Ds.csv`, `Cell1Ds.csv` and `Cell2Ds.csv`.
    pub mesh_dir: PathBuf,
    /// Vertex export, overwritten on every run.
    pub cell0ds_output: PathBuf,
    /// Edge export, overwritten on every run.
    pub cell1ds_output: PathBuf,
    /// Absolute length and area threshold.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mesh_dir: PathBuf::from("./PolygonalMesh"),
            cell0ds_output: PathBuf::from("./Cell0Ds.inp"),
            cell1ds_output: PathBuf::from("./Cell1Ds.inp"),
            tolerance: TOLERANCE,
        }
    }
}

impl Config {
    /// Same file names, resolved against `root` instead of the working directory.
    #[must_use]
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            mesh_dir: root.join("PolygonalMesh"),
            cell0ds_output: root.join("Cell0Ds.inp"),
            cell1ds_output: root.join("Cell1Ds.inp"),
            tolerance: TOLERANCE,
        }
    }
}
