use anyhow::{Context, Result};
use clap::{arg, command};
use edgebar::utils::log::{parse_log_level, DEFAULT_LOG_LEVEL};
use edgebar::{TomlSettings, DEFAULT_PANEL_GROUP};
use edgebar_core::plugins::PluginRegistry;
use edgebar_core::Panel;
use std::path::PathBuf;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> Result<()> {
    let matches = command!("Edgebar")
        .about("A panel docked to a screen edge")
        .help_template(edgebar::utils::get_help_template())
        .after_help("\nSettings default to $XDG_CONFIG_HOME/edgebar/panel.toml.")
        .args(&[
            arg!(-c --config <FILE> "Settings file to use instead of the default."),
            arg!(-p --panel <GROUP> "Settings group of the panel to run.")
                .default_value(DEFAULT_PANEL_GROUP),
            arg!(-l --log <FILTER> "Log filter, overrides RUST_LOG."),
        ])
        .get_matches();

    let directives = matches
        .get_one::<String>("log")
        .cloned()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
    let (subscriber, parse_err) = parse_log_level(&directives);
    tracing::subscriber::set_global_default(subscriber)
        .context("Couldn't set up the global logger")?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log filter {:?}: {}", directives, err);
    }

    tracing::info!(
        "edgebar {} ({}) booting...",
        env!("CARGO_PKG_VERSION"),
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let path = match matches.get_one::<String>("config") {
        Some(path) => PathBuf::from(path),
        None => TomlSettings::default_path()?,
    };
    let settings = TomlSettings::load(&path)
        .with_context(|| format!("Couldn't load settings from {}", path.display()))?;
    let group = matches
        .get_one::<String>("panel")
        .map_or(DEFAULT_PANEL_GROUP, String::as_str);

    // The X connection is polled from a blocking task, so the runtime has to
    // exist before the panel does. The panel itself never leaves this thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Couldn't start the tokio runtime")?;
    let _rt_guard = rt.enter();

    let panel = Panel::<XlibWindowHandle, TomlSettings, XlibDisplayServer>::new(
        settings,
        group,
        PluginRegistry::with_builtins(),
    )?;
    tracing::info!("Running panel {}", group);

    match rt.block_on(panel.start_event_loop()) {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => tracing::error!("Completed with event loop error: {}", err),
    }
    Ok(())
}
