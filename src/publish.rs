//! Commit-message gated `npm publish`.
//!
//! Publishing only happens when the commit message carries the [`MARKER`] and
//! an `NPM_TOKEN` is available. Anything else is a benign skip.
use std::ffi::OsStr;

use xshell::{cmd, Shell};

use crate::{
    dry_run,
    manifest::{package_json, PackageJson},
    run_attached, Result,
};

pub const MARKER: &str = "[publish]";
pub const TOKEN_VAR: &str = "NPM_TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Skip(&'static str),
    Publish,
}

pub fn decide(message: &str, token: Option<&OsStr>) -> Decision {
    if !message.contains(MARKER) {
        return Decision::Skip("Please include \"[publish]\" in your commit message");
    }
    match token {
        Some(token) if !token.is_empty() => Decision::Publish,
        _ => Decision::Skip("Please set the NPM_TOKEN environment variable"),
    }
}

pub fn publish(sh: &Shell, message: &str, token: Option<&OsStr>) -> Result<Decision> {
    publish_with(sh, "npm", message, token)
}

fn announcement(manifest: &PackageJson, message: &str) -> String {
    format!(
        "Publish of {} v{} triggered by commit message: {}",
        manifest.name, manifest.version, message
    )
}

/// Like [`publish`], but runs `npm` from the given program path.
pub fn publish_with(
    sh: &Shell,
    npm: impl AsRef<OsStr>,
    message: &str,
    token: Option<&OsStr>,
) -> Result<Decision> {
    let decision = decide(message, token);
    if let Decision::Skip(reason) = decision {
        println!("{}", reason);
        return Ok(decision);
    }

    let manifest = package_json(sh)?;
    println!("{}", announcement(&manifest, message));

    let npm = npm.as_ref();
    let dry_run = dry_run();
    run_attached(cmd!(sh, "{npm} publish {dry_run...}"))?;
    Ok(decision)
}
