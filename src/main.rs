//! Checks the mesh in `./PolygonalMesh` and exports `Cell0Ds.inp` and
//! `Cell1Ds.inp` to the working directory.
//!
//! Verdicts go to stdout, diagnostics to stderr. Set `RUST_LOG` (e.g.
//! `RUST_LOG=polymesh_check=debug`) for more detail.

use std::process::ExitCode;

use polymesh_check::check;
use polymesh_check::operations::markers::ReferenceMarkers;
use polymesh_check::Config;
use tracing::error;

fn main() -> ExitCode {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let reference = ReferenceMarkers::polygonal_mesh();

    match check::run(&config, &reference, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
