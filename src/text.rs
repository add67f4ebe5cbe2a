//! Text files with normalized line endings.
use std::path::Path;

use xshell::Shell;

use crate::Result;

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Reads a text file, turning every `\r\n` and lone `\r` into `\n`.
pub fn read_text(sh: &Shell, path: impl AsRef<Path>) -> Result<String> {
    let text = sh.read_file(path)?;
    Ok(normalize(&text))
}

/// Writes a text file using the host's line ending.
pub fn write_text(sh: &Shell, path: impl AsRef<Path>, text: &str) -> Result<()> {
    let text = normalize(text);
    let text = if EOL == "\n" { text } else { text.replace('\n', EOL) };
    sh.write_file(path, text)?;
    Ok(())
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
