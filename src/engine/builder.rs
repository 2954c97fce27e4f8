use crate::domain::Target;
use crate::engine::BuildOptions;
use crate::pandoc;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Renders both artifacts of one target. The HTML rendition is always
/// rebuilt on the way to the PDF, never independently.
pub async fn build_target(target: &Target, options: &BuildOptions) -> Result<()> {
    if target.input_path.as_os_str().is_empty() || target.output_path.as_os_str().is_empty() {
        return Err(anyhow!("Target {} has an empty input or output path", target));
    }

    if !target.input_path.exists() {
        log::debug!(
            "{} - Input {} does not exist yet, nothing to build",
            target,
            target.input_path.display()
        );
        return Ok(());
    }

    let target_start = Instant::now();
    log::info!("{} - Building {}", target, target.output_path.display());

    ensure_parent_dir(&target.output_path)?;

    let stylesheet = options
        .stylesheet
        .exists()
        .then(|| options.stylesheet.as_path());

    let html_output = target.html_output_path();
    ensure_parent_dir(&html_output)?;
    pandoc::run(&pandoc::html_args(target, stylesheet))
        .await
        .with_context(|| format!("{} - Failed to render {}", target, html_output.display()))?;

    pandoc::run(&pandoc::pdf_args(target, stylesheet))
        .await
        .with_context(|| {
            format!(
                "{} - Failed to render {}",
                target,
                target.output_path.display()
            )
        })?;

    log::info!(
        "{} - Built (took: {}ms)",
        target,
        target_start.elapsed().as_millis()
    );

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    Ok(())
}
