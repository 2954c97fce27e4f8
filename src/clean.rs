use crate::domain::Target;
use anyhow::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn clean_target_outputs(targets: &[Target]) -> Result<()> {
    for target in targets {
        remove_file(&target.html_output_path())?;
        remove_file(&target.output_path)?;
    }

    Ok(())
}

fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(_) => log::info!("Removed {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(
                Error::new(e).context(format!("Failed to remove file {}", path.display()))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::clean_target_outputs;
    use crate::domain::Target;
    use std::fs;

    #[test]
    fn test_clean_target_outputs_removes_both_renditions() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("doc.pdf");
        let html = dir.path().join("doc.html");
        fs::write(&pdf, b"pdf").unwrap();
        fs::write(&html, b"html").unwrap();

        let target = Target {
            name: "doc".to_string(),
            input_path: dir.path().join("doc.md"),
            output_path: pdf.clone(),
            title: String::new(),
        };

        clean_target_outputs(&[target]).expect("Cleaning existing outputs should succeed");
        assert!(!pdf.exists());
        assert!(!html.exists());
    }

    #[test]
    fn test_clean_target_outputs_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();

        let target = Target {
            name: "doc".to_string(),
            input_path: dir.path().join("doc.md"),
            output_path: dir.path().join("doc.pdf"),
            title: String::new(),
        };

        clean_target_outputs(&[target]).expect("Missing outputs should not be an error");
    }
}
