use std::{env, process};

use npmaction::{
    publish::{self, TOKEN_VAR},
    section, Result, Shell,
};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let mut message = None;
    for arg in env::args_os().skip(1) {
        let arg = arg.to_string_lossy().into_owned();
        match arg.as_str() {
            "--dry-run" => npmaction::set_dry_run(true),
            _ if message.is_none() => message = Some(arg),
            _ => return Err(format!("unexpected argument `{}`", arg).into()),
        }
    }
    let message = message.ok_or("usage: publish [--dry-run] <commit message>")?;

    let sh = Shell::new()?;
    let token = sh.var_os(TOKEN_VAR);

    let _s = section("PUBLISH");
    publish::publish(&sh, &message, token.as_deref())?;
    Ok(())
}
