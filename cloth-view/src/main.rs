//! Application entry point for the cloth viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`].

mod camera;
mod viewer;

use clap::Parser;
use cloth_core::{Cloth, Config};
use viewer::Viewer;

/// Interactive mass-spring cloth hanging from its two top corners.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Nodes per row.
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    height: usize,

    #[arg(long, default_value_t = 0.9)]
    gravity: f32,

    /// Spring constant shared by all springs.
    #[arg(long, default_value_t = 5.0)]
    stiffness: f32,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
///
/// Invalid cloth parameters are logged and end the process with exit
/// code 2 before any window is opened.
fn main() -> eframe::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    let cfg = Config::with_size(args.width, args.height)
        .with_gravity(args.gravity)
        .with_stiffness(args.stiffness);

    let cloth = match Cloth::new(cfg) {
        Ok(cloth) => cloth,
        Err(e) => {
            log::error!("invalid cloth configuration: {e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "starting viewer: {}x{} cloth, gravity {}, stiffness {}",
        cloth.width(),
        cloth.height(),
        cloth.gravity(),
        cloth.stiffness()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cloth Simulation",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cloth)))),
    )
}
