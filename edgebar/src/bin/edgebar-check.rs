use anyhow::{Context, Result};
use clap::{arg, command};
use edgebar::checks::check_settings;
use edgebar::TomlSettings;
use edgebar_core::plugins::PluginRegistry;
use edgebar_core::Settings;
use std::path::PathBuf;
use xlib_display_server::XlibWindowHandle;

fn main() -> Result<()> {
    let matches = command!("Edgebar Check")
        .about("Checks the panel settings file")
        .help_template(edgebar::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs the parsed settings."),
            arg!([CONFIG] "Settings file to check. Uses the default location otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m Edgebar version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m Edgebar git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let path = match matches.get_one::<String>("CONFIG") {
        Some(path) => PathBuf::from(path),
        None => TomlSettings::default_path()?,
    };
    if verbose {
        dbg!(&path);
    }

    println!("\x1b[0;94m::\x1b[0m Loading settings . . .");
    if !path.exists() {
        println!(
            "\x1b[1;93mWARN: {} does not exist, edgebar will create it with defaults.\x1b[0m",
            path.display()
        );
        return Ok(());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Couldn't read {}", path.display()))?;
    let settings = match TomlSettings::parse(&path, &contents) {
        Ok(settings) => settings,
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
            return Ok(());
        }
    };
    println!("\x1b[0;92m    -> Settings parsed OK \x1b[0m");

    println!("\x1b[0;94m::\x1b[0m Checking panels and plugins . . .");
    let registry = PluginRegistry::<XlibWindowHandle>::with_builtins();
    let known: Vec<&str> = registry.types().collect();
    let findings = check_settings(settings.table(), &known);
    if verbose {
        for group in settings.panel_groups() {
            println!("Panel {group}: {:?}", settings.load_panel(&group));
        }
    }
    if findings.is_empty() {
        println!("\x1b[0;92m    -> Panels and plugins OK \x1b[0m");
    }
    for finding in findings {
        println!("\x1b[1;93mWARN:\x1b[0m {finding}");
    }

    Ok(())
}
