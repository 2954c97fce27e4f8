mod builder;
mod watcher;

use crate::domain::Target;
use anyhow::Result;
use async_std::task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use watcher::InputsWatcher;

pub struct BuildOptions {
    pub stylesheet: PathBuf,
}

pub struct Engine {
    targets: Vec<Target>,
    options: BuildOptions,
}

impl Engine {
    pub fn new(targets: Vec<Target>, options: BuildOptions) -> Self {
        Self { targets, options }
    }

    /// Builds every target once, sequentially, in discovery order. Any
    /// failure aborts the pass and propagates to the caller.
    pub async fn build(&self) -> Result<()> {
        log::info!("Initial build phase starting");

        for target in &self.targets {
            builder::build_target(target, &self.options).await?;
        }

        log::info!("Initial build phase completed");
        Ok(())
    }

    /// Runs the initial build pass, then rebuilds targets as their inputs
    /// change, indefinitely. Each change event gets its own task; rebuilds
    /// of the same target triggered by rapid successive events may overlap.
    pub async fn watch(self) -> Result<()> {
        self.build().await?;

        let watcher = InputsWatcher::new(&self.targets)?;
        let engine = Arc::new(self);

        loop {
            let changed_path = watcher.next_changed_path().await?;
            log::info!("Filesystem event: {}", changed_path.display());

            let engine = Arc::clone(&engine);
            task::spawn(async move {
                for target in engine.matching_targets(&changed_path) {
                    log::info!("{} - Input changed", target);
                    if let Err(e) = builder::build_target(target, &engine.options).await {
                        log::warn!("{} - Build failed: {:#}", target, e);
                    }
                }
            });
        }
    }

    fn matching_targets<'a>(&'a self, changed_path: &'a Path) -> impl Iterator<Item = &'a Target> {
        self.targets
            .iter()
            .filter(move |target| target.input_path == changed_path)
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildOptions, Engine};
    use crate::domain::Target;
    use std::path::{Path, PathBuf};

    fn engine_with_targets(targets: Vec<Target>) -> Engine {
        Engine::new(
            targets,
            BuildOptions {
                stylesheet: PathBuf::from("/config/styles.css"),
            },
        )
    }

    fn target(name: &str, input: &str) -> Target {
        Target {
            name: name.to_string(),
            input_path: PathBuf::from(input),
            output_path: PathBuf::from("/out/doc.pdf"),
            title: String::new(),
        }
    }

    #[test]
    fn test_matching_targets_requires_an_exact_path_match() {
        let engine = engine_with_targets(vec![
            target("handbook", "/data/handbook.md"),
            target("notes", "/data/notes.md"),
        ]);

        let matched: Vec<_> = engine
            .matching_targets(Path::new("/data/handbook.md"))
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "handbook");

        // A sibling in the same watched directory matches nothing.
        let matched: Vec<_> = engine
            .matching_targets(Path::new("/data/other.md"))
            .collect();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matching_targets_keeps_discovery_order_for_shared_inputs() {
        let engine = engine_with_targets(vec![
            target("first", "/data/doc.md"),
            target("other", "/data/other.md"),
            target("second", "/data/doc.md"),
        ]);

        let matched: Vec<_> = engine.matching_targets(Path::new("/data/doc.md")).collect();
        let names: Vec<_> = matched.iter().map(|target| target.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
