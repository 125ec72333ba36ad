//! imageanchor main entry point.
//!
//! Replays a recorded tracking session through the presenter and reports
//! which object was visible after every frame.
//!
//! # Main Loop
//!
//! 1. Load `imageanchor.ini` (or `--config`), falling back to defaults
//! 2. Load the template list and build the presenter
//! 3. Enable the presenter on a tracked-image feed
//! 4. For each recorded frame: set touch, publish the batch, run one update
//! 5. Disable the presenter and print a JSON summary
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- session.json --templates templates.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use imageanchor::error::PresenterError;
use imageanchor::presenter::{ImagePresenter, PresentableView};
use imageanchor::resources::presenterconfig::{
    PresenterConfig, ScaleGesture, UnknownImagePolicy,
};
use imageanchor::resources::templates::load_templates;
use imageanchor::resources::tracking::TrackedImageFeed;
use imageanchor::session::{FrameReport, Session, replay};

/// Tracked-image presenter session replayer
#[derive(Parser)]
#[command(version, about = "Replays a recorded tracked-image session through the presenter.")]
struct Cli {
    /// Recorded session (JSON).
    session: PathBuf,

    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./imageanchor.ini")]
    config: PathBuf,

    /// Template list (JSON). Overrides the `[tracking] templates` entry.
    #[arg(long, value_name = "PATH")]
    templates: Option<PathBuf>,

    /// Let a double-tap drag scale instead of rotate.
    #[arg(long)]
    double_tap_scale: bool,

    /// Report added/updated images that have no template.
    #[arg(long)]
    report_unknown: bool,

    /// Write the config actually used back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

#[derive(Serialize)]
struct Summary {
    frames: Vec<FrameReport>,
    objects: Vec<PresentableView>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PresenterError> {
    let mut config = PresenterConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.templates {
        config.templates_path = path;
    }
    if cli.double_tap_scale {
        config.scale_gesture = ScaleGesture::DoubleTapFirst;
    }
    if cli.report_unknown {
        config.unknown_image = UnknownImagePolicy::Report;
    }

    if cli.save_config {
        return config.save_to_file();
    }

    let templates = load_templates(&config.templates_path)?;
    let session = Session::load_from_file(&cli.session)?;

    let mut presenter = ImagePresenter::new(&templates, config)?;
    let mut feed = TrackedImageFeed::new();
    presenter.enable(&mut feed);

    let frames = replay(&mut presenter, &mut feed, &session);
    for report in &frames {
        log::info!(
            "frame {}: visible={:?} active={:?}",
            report.frame,
            report.visible,
            report.active
        );
        for fault in &report.faults {
            log::warn!("frame {}: {}", report.frame, fault);
        }
    }

    presenter.disable();

    let summary = Summary {
        frames,
        objects: presenter.objects(),
    };
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| PresenterError::Session(format!("failed to encode summary: {}", e)))?;
    println!("{}", json);
    Ok(())
}
