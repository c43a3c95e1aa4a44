//! Command dispatch and handler modules.

mod resolve;
mod show;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use miette::Result;

use cups_core::config::CupsConfig;
use cups_core::source::AssociationSource;
use cups_resolver::Resolver;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let resolver = load_resolver(cli.config.as_deref(), &cli.sources)?;
    match cli.command {
        Command::Resolve { artifact } => resolve::exec(&resolver, &artifact),
        Command::Show { identity } => show::exec(&resolver, &identity),
    }
}

/// Build a resolver from the configured sources followed by `extra`.
fn load_resolver(config_path: Option<&Path>, extra: &[PathBuf]) -> Result<Resolver> {
    let config = match config_path {
        Some(path) => CupsConfig::load_from(path)?,
        None => CupsConfig::load()?,
    };
    let mut sources = config.sources();
    sources.extend(extra.iter().map(AssociationSource::file));
    if sources.is_empty() {
        tracing::warn!("no association sources configured");
    }
    let env_overrides = config.env_overrides()?;
    Resolver::load(&sources, &env_overrides)
}
