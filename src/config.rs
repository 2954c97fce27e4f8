use crate::domain;
use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A missing `input` or `output` key is kept as an empty string so the build
/// executor can reject it with the rest of the per-target checks.
#[derive(Debug, Deserialize)]
pub struct Pdf {
    #[serde(default)]
    input: String,
    #[serde(default)]
    output: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    pdfs: IndexMap<String, Pdf>,
}

#[derive(Debug)]
pub struct Config {
    pdfs: IndexMap<String, Pdf>,
}

impl Config {
    pub fn load(file: &Path) -> Result<Self> {
        let contents = fs::read_to_string(file)
            .with_context(|| format!("Something went wrong reading {}", file.display()))?;
        log::info!("Config file content:\n{}", contents);

        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid configuration found in file {}", file.display()))?;
        log::info!(
            "Discovered pdf definitions: {}",
            config.target_names().join(", ")
        );

        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        let document: Document =
            serde_yaml::from_str(contents).with_context(|| "Invalid format")?;

        if document.pdfs.is_empty() {
            return Err(anyhow!("No pdf definitions found"));
        }

        Ok(Self {
            pdfs: document.pdfs,
        })
    }

    pub fn target_names(&self) -> Vec<String> {
        self.pdfs.keys().cloned().collect()
    }

    pub fn into_targets(
        self,
        requested_targets: Option<Vec<String>>,
    ) -> Result<Vec<domain::Target>> {
        if let Some(requested_targets) = &requested_targets {
            self.validate_requested_targets(requested_targets)?;
        }

        let targets = self
            .pdfs
            .into_iter()
            .filter(|(name, _)| match &requested_targets {
                Some(requested_targets) => requested_targets.contains(name),
                None => true,
            })
            .map(|(name, Pdf { input, output, title })| domain::Target {
                name,
                input_path: PathBuf::from(input),
                output_path: PathBuf::from(output),
                title,
            })
            .collect();

        Ok(targets)
    }

    fn validate_requested_targets(&self, requested_targets: &[String]) -> Result<()> {
        let invalid_targets: Vec<String> = requested_targets
            .iter()
            .filter(|requested_target| !self.pdfs.contains_key(*requested_target))
            .map(|i| i.to_owned())
            .collect();

        if !invalid_targets.is_empty() {
            return Err(anyhow!("Invalid targets: {}", invalid_targets.join(", ")));
        }

        Ok(())
    }
}
