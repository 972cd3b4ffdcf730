//! Command dispatch: wires settings, builder and explorer together

use tracing::{debug, instrument};

use crate::application::messages;
use crate::application::services::{BuildMode, Exploration, Explorer, MansionBuilder, Outcome};
use crate::application::IoResultExt;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::to_tree_string;
use crate::infrastructure::traits::{Console, TextConsole};

/// Run the program for parsed command line arguments on stdin/stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = resolve_settings(cli)?;

    if cli.print_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let mut console = TextConsole::stdio();
    let exploration = run(&settings, cli.mode.map(BuildMode::from), &mut console)?;
    if exploration.outcome == Outcome::InputClosed {
        output::warning("input closed before the exploration ended");
    }
    Ok(())
}

/// Load layered settings and apply the flags of this run on top.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.map {
        settings.show_map = true;
    }
    if cli.trail {
        settings.show_trail = true;
    }
    debug!("effective settings: {:?}", settings);
    Ok(settings)
}

/// Build the mansion, explore it, and release it.
#[instrument(level = "debug", skip(settings, console))]
pub fn run(
    settings: &Settings,
    mode: Option<BuildMode>,
    console: &mut dyn Console,
) -> CliResult<Exploration> {
    let root = MansionBuilder::with_max_depth(settings.max_depth).build(mode, console)?;

    if settings.show_map {
        let map = to_tree_string(root.as_ref(), &settings.unnamed_label);
        console
            .write(&format!("{}{}", messages::MAP_HEADER, map))
            .with_context("write map")?;
    }

    let exploration = Explorer::new(settings.unnamed_label.as_str()).explore(root.as_ref(), console)?;

    if settings.show_trail && !exploration.trail.is_empty() {
        console
            .write(&messages::trail(&exploration.trail))
            .with_context("write trail")?;
    }

    Ok(exploration)
}
