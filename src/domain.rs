use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Target {
    pub name: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
}

impl Target {
    /// The HTML rendition sits next to the PDF, with only the trailing
    /// extension swapped.
    pub fn html_output_path(&self) -> PathBuf {
        self.output_path.with_extension("html")
    }

    /// Directory the renderer resolves relative resources against.
    pub fn input_dir(&self) -> &Path {
        match self.input_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.name)
    }
}
