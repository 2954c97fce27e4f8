use crate::domain::Target;
use anyhow::{Context, Error, Result};
use async_std::channel::{self, Receiver};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;

/// Recursive watch over the distinct input directories of all targets.
/// Only modification events are forwarded; the pre-existing filesystem
/// state produces no events.
pub struct InputsWatcher {
    changed_paths: Receiver<PathBuf>,
    _watcher: RecommendedWatcher,
}

impl InputsWatcher {
    pub fn new(targets: &[Target]) -> Result<Self> {
        let (sender, changed_paths) = channel::unbounded();
        let mut watcher = RecommendedWatcher::new(
            move |result: notify::Result<Event>| match result {
                Ok(event) if event.kind.is_modify() => {
                    for path in event.paths {
                        let _ = sender.try_send(path);
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("File watch error: {}", e),
            },
            Config::default(),
        )
        .with_context(|| "Error creating watcher")?;

        for dir in watch_dirs(targets) {
            match watcher.watch(&dir, RecursiveMode::Recursive) {
                Ok(_) => log::info!("Watching directory {}", dir.display()),
                Err(notify::Error {
                    kind: notify::ErrorKind::PathNotFound,
                    ..
                }) => {
                    log::warn!("Skipping watch on non-existing directory: {}", dir.display());
                }
                Err(e) => {
                    return Err(Error::new(e)
                        .context(format!("Error watching directory {}", dir.display())));
                }
            }
        }

        Ok(Self {
            changed_paths,
            _watcher: watcher,
        })
    }

    pub async fn next_changed_path(&self) -> Result<PathBuf> {
        self.changed_paths
            .recv()
            .await
            .with_context(|| "File watch channel closed")
    }
}

pub fn watch_dirs(targets: &[Target]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    for target in targets {
        let dir = target.input_dir().to_path_buf();
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    dirs
}
