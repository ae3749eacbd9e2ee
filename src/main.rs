mod capability;
mod cli;
mod config;
mod controller;
mod driver;
mod error;
mod fallback;
mod globe;
mod graphics;
mod input;
mod math;
mod state;
mod vertex;
mod widget;

use crate::capability::Capability;
use crate::cli::Cli;
use crate::controller::RotationController;
use crate::driver::Driver;
use crate::error::Error;
use crate::globe::Globe;
use crate::input::PointerAdapter;
use crate::widget::GlobeWidget;
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Logs go to the log file when given; otherwise to stderr for the static
/// fallback and nowhere while the interactive view owns the terminal.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if !interactive => builder.with_writer(std::io::stderr).init(),
        None => {}
    }
    Ok(())
}

/// Main function
pub fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let capability = capability::probe(cli.force_static, capability::MIN_SURFACE);
    init_tracing(
        cli.log_file.as_deref(),
        matches!(capability, Capability::Available(_)),
    )?;

    let globe = Globe::wireframe(
        usize::from(cli.meridians),
        usize::from(cli.parallels),
        usize::from(cli.segments),
    );

    match capability {
        Capability::Available(surface) => {
            let cell_size = cli.cell_size();
            let globe_rows = surface.rows.saturating_sub(1);
            let controller = RotationController::new(cli.controller_config(), cli.reduced_motion);
            let widget = GlobeWidget::new(
                globe,
                usize::from(surface.cols),
                usize::from(globe_rows),
                cell_size,
            );
            let adapter = PointerAdapter::new(surface.cols, globe_rows, cell_size);
            info!(reduced_motion = cli.reduced_motion, fps = cli.fps, "starting");
            Driver::new(
                controller,
                widget,
                adapter,
                cli.reduced_motion,
                cli.frame_interval(),
            )
            .run(surface)
        }
        Capability::Unavailable(reason) => {
            warn!(%reason, "interactive globe unavailable, printing static frame");
            let size = termsize::get().map(|size| (size.cols, size.rows));
            fallback::render_static(
                &mut std::io::stdout().lock(),
                globe,
                size,
                cli.cell_size(),
                reason,
            )?;
            Ok(())
        }
    }
}
