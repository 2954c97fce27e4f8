use crate::domain::Target;
use anyhow::{anyhow, Context, Result};
use async_process::Command;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Keeps the renderer's intermediate artifacts out of the output tree.
const PANDOC_TMPDIR: &str = "/tmp";

fn pandoc_program() -> OsString {
    env::var_os("PANDOC").unwrap_or_else(|| "pandoc".into())
}

pub fn html_args(target: &Target, stylesheet: Option<&Path>) -> Vec<OsString> {
    let mut args = vec![
        target.input_path.clone().into_os_string(),
        "-o".into(),
        target.html_output_path().into_os_string(),
        "--to=html".into(),
        "--standalone".into(),
        "--self-contained".into(),
        path_arg("--resource-path=", target.input_dir()),
        title_arg(target),
    ];
    push_stylesheet(&mut args, stylesheet);
    args
}

pub fn pdf_args(target: &Target, stylesheet: Option<&Path>) -> Vec<OsString> {
    let mut args = vec![
        target.input_path.clone().into_os_string(),
        "-o".into(),
        target.output_path.clone().into_os_string(),
        "--pdf-engine=weasyprint".into(),
        path_arg("--pdf-engine-opt=--base-url=", target.input_dir()),
        title_arg(target),
    ];
    push_stylesheet(&mut args, stylesheet);
    args
}

fn title_arg(target: &Target) -> OsString {
    format!("--metadata=title:{}", target.title).into()
}

fn path_arg(prefix: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(prefix);
    arg.push(path);
    arg
}

fn push_stylesheet(args: &mut Vec<OsString>, stylesheet: Option<&Path>) {
    if let Some(stylesheet) = stylesheet {
        args.push("--css".into());
        args.push(stylesheet.into());
    }
}

pub async fn run(args: &[OsString]) -> Result<()> {
    run_program(&pandoc_program(), args).await
}

async fn run_program(program: &OsStr, args: &[OsString]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .env("TMPDIR", PANDOC_TMPDIR)
        .status()
        .await
        .with_context(|| format!("Failed to spawn {}", program.to_string_lossy()))?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(anyhow!(
            "{} exited with code {}",
            program.to_string_lossy(),
            code
        )),
        None => Err(anyhow!(
            "{} was terminated by a signal",
            program.to_string_lossy()
        )),
    }
}
