//! Runs `main.sh` and turns its `a.out` into the new `main.sh`.
//!
//! There is no rollback: if cleanup or the final rename fails after a
//! successful build, the working directory is left half-way.
use std::{collections::BTreeMap, fs, io, path::Path};

use xshell::{cmd, Shell};

use crate::{manifest::package_json, run_attached, section, Result};

pub const BUILD_SCRIPT: &str = "main.sh";
pub const ARTIFACT: &str = "a.out";
const INCLUDE_DIR: &str = "inc";
const SOURCE_EXTENSIONS: &[&str] = &["hxx", "cxx"];

/// Variables set for the build script on top of the inherited environment.
pub fn build_env(sh: &Shell, with_version: bool) -> Result<BTreeMap<&'static str, String>> {
    let mut env = BTreeMap::new();
    env.insert("DOWNLOAD", "0".to_string());
    env.insert("RUN", "0".to_string());
    if with_version {
        env.insert("VERSION", package_json(sh)?.version);
    }
    Ok(env)
}

pub fn run(sh: &Shell, with_version: bool) -> Result<()> {
    let env = build_env(sh, with_version)?;
    {
        let _s = section("BUILD");
        build(sh, &env)?;
    }
    {
        let _s = section("INSTALL");
        clean(sh)?;
        install(sh)?;
    }
    Ok(())
}

pub fn build(sh: &Shell, env: &BTreeMap<&'static str, String>) -> Result<()> {
    run_attached(cmd!(sh, "bash {BUILD_SCRIPT}").envs(env))
}

/// Removes `inc/` and the top-level `*.hxx`/`*.cxx` files, matching the way
/// `rm -rf inc/ *.hxx *.cxx` would: dotfiles are left alone, symlinks are
/// removed rather than followed. Absent paths are fine.
pub fn clean(sh: &Shell) -> Result<()> {
    sh.remove_path(INCLUDE_DIR)?;
    for path in sh.read_dir(sh.current_dir())? {
        if is_source(&path) {
            remove_entry(&path)
                .map_err(|err| format!("can't remove `{}`: {}", path.display(), err))?;
        }
    }
    Ok(())
}

fn is_source(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(true, |name| name.starts_with('.'));
    let source = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| SOURCE_EXTENSIONS.contains(&ext));
    source && !hidden
}

fn remove_entry(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

pub fn install(sh: &Shell) -> Result<()> {
    let dir = sh.current_dir();
    sh.remove_path(BUILD_SCRIPT)?;
    fs::rename(dir.join(ARTIFACT), dir.join(BUILD_SCRIPT))
        .map_err(|err| format!("can't move `{}` to `{}`: {}", ARTIFACT, BUILD_SCRIPT, err))?;
    Ok(())
}
