use std::{
    process::{Command, Stdio},
    sync::atomic::AtomicBool,
    sync::atomic::Ordering,
    time::Instant,
};

pub use xshell::{cmd, Cmd, Shell};

pub mod manifest;
pub mod publish;
pub mod setup;
pub mod text;

pub type Error = Box<dyn std::error::Error>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn section(name: &'static str) -> Section {
    Section::new(name)
}

static DRY_RUN: AtomicBool = AtomicBool::new(false);
pub fn set_dry_run(yes: bool) {
    DRY_RUN.store(yes, Ordering::Relaxed)
}
fn dry_run() -> Option<&'static str> {
    let dry_run = DRY_RUN.load(Ordering::Relaxed);
    if dry_run {
        Some("--dry-run")
    } else {
        None
    }
}

/// Runs `cmd` attached to the caller's terminal, stdin included.
///
/// `Cmd::run` feeds the child an empty stdin, which breaks interactive
/// prompts like npm's OTP request.
pub fn run_attached(cmd: Cmd<'_>) -> Result<()> {
    let display = cmd.to_string();
    eprintln!("$ {}", display);
    let mut command: Command = cmd.into();
    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| format!("command `{}` failed to start: {}", display, err))?;
    if !status.success() {
        return Err(format!("command `{}` failed: {}", display, status).into());
    }
    Ok(())
}

/// A GitHub Actions log group, closed and timed on drop.
pub struct Section {
    name: &'static str,
    start: Instant,
}

impl Section {
    fn new(name: &'static str) -> Section {
        println!("::group::{}", name);
        let start = Instant::now();
        Section { name, start }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        eprintln!("{}: {:.2?}", self.name, self.start.elapsed());
        println!("::endgroup::");
    }
}
