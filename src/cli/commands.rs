//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::ToTermTree;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};
use crate::util::path::resolve_layout_path;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { layout, compact }) => cmd_build(layout, *compact),
        Some(Commands::Check { layout }) => cmd_check(layout),
        Some(Commands::Show { layout }) => cmd_show(layout),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Init { force } => cmd_config_init(*force),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `msgcomp --help`".to_string(),
        )),
    }
}

/// Settings for a layout: global layers first, then the layout directory's local config.
fn settings_for(layout: &Path) -> CliResult<Settings> {
    let base = Settings::load(None)?;
    let located = if layout.is_file() {
        layout.to_path_buf()
    } else {
        resolve_layout_path(&base.layout_dir, layout)
    };
    match located.parent() {
        Some(dir) if located.is_file() => {
            debug!("settings_for: local config dir {}", dir.display());
            Ok(Settings::load(Some(dir))?)
        }
        _ => Ok(base),
    }
}

#[instrument(level = "debug")]
fn cmd_build(layout: &Path, compact: bool) -> CliResult<()> {
    let mut settings = settings_for(layout)?;
    if compact {
        settings.pretty = false;
    }
    let container = ServiceContainer::new(settings);
    container.message_service.send(layout)?;
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_check(layout: &Path) -> CliResult<()> {
    let container = ServiceContainer::new(settings_for(layout)?);
    let message = container.message_service.compose(layout)?;
    output::checked(layout, message.components());
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_show(layout: &Path) -> CliResult<()> {
    let container = ServiceContainer::new(settings_for(layout)?);
    let message = container.message_service.compose(layout)?;
    if let Some(content) = message.content() {
        output::labeled("content", content);
    }
    output::plain(&message.components().to_term_tree());
    Ok(())
}

fn cmd_config_show() -> CliResult<()> {
    let settings = Settings::load(None)?;
    output::plain(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_init(force: bool) -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
    let fs = RealFileSystem;
    if fs.exists(&path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    write_template(&fs, &path)?;
    output::labeled("created", &path.display());
    Ok(())
}

fn write_template(fs: &dyn FileSystem, path: &Path) -> InfraResult<()> {
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)
            .map_err(|e| InfraError::io("create", parent, e))?;
    }
    fs.write(path, &Settings::template())
        .map_err(|e| InfraError::io("write", path, e))
}

fn cmd_config_path() -> CliResult<()> {
    let describe = |path: PathBuf| {
        let marker = if path.exists() { "" } else { " (not found)" };
        format!("{}{}", path.display(), marker)
    };
    match global_config_path() {
        Some(path) => output::labeled("global", &describe(path)),
        None => output::warning("global config directory unavailable"),
    }
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("resolve", ".", e))?;
    output::labeled("local", &describe(local_config_path(&cwd)));
    let settings = Settings::load(None)?;
    output::labeled("layouts", &settings.layout_dir.display());
    Ok(())
}
