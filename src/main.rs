mod clean;
mod cli;
mod config;
mod domain;
mod engine;
mod pandoc;

use crate::config::Config;
use crate::engine::{BuildOptions, Engine};
use anyhow::Result;
use async_std::task;
use std::path::Path;

fn main() -> Result<()> {
    let arg_matches = cli::get_app().get_matches();

    let verbosity = arg_matches.occurrences_of(cli::arg::VERBOSITY) as usize;
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 2)
        .init()?;

    let config_file = Path::new(arg_matches.value_of(cli::arg::CONFIG).unwrap());
    let stylesheet = Path::new(arg_matches.value_of(cli::arg::CSS).unwrap());
    log::info!("Starting watcher");
    log::info!("Config file: {}", config_file.display());

    let requested_targets = arg_matches.values_of_lossy(cli::arg::TARGETS);
    let targets = Config::load(config_file)?.into_targets(requested_targets)?;

    if arg_matches.is_present(cli::arg::CLEAN) {
        clean::clean_target_outputs(&targets)?;
    }

    let engine = Engine::new(
        targets,
        BuildOptions {
            stylesheet: stylesheet.to_path_buf(),
        },
    );

    if arg_matches.is_present(cli::arg::ONCE) {
        task::block_on(engine.build())
    } else {
        task::block_on(engine.watch())
    }
}
