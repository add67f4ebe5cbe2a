use serde::Deserialize;
use xshell::Shell;

use crate::{text::read_text, Result};

pub const PACKAGE_JSON: &str = "package.json";

/// The fields of `package.json` we care about; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
}

pub fn package_json(sh: &Shell) -> Result<PackageJson> {
    let path = sh.current_dir().join(PACKAGE_JSON);
    let contents = read_text(sh, &path)?;
    let res = serde_json::from_str(&contents)
        .map_err(|err| format!("can't parse {}: {}", path.display(), err))?;
    Ok(res)
}
