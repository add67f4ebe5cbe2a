use std::{env, process};

use npmaction::{setup, Result, Shell};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let mut with_version = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--with-version" => with_version = true,
            _ => return Err(format!("unexpected argument `{}`", arg).into()),
        }
    }

    let sh = Shell::new()?;
    setup::run(&sh, with_version)
}
