use std::io::Read;
use std::process::ExitCode;

use anyhow::Result;
use argh::FromArgs;

use fourth::core::SystemEnvironment;

/// A small threaded-code Forth interpreter.
#[derive(FromArgs)]
struct App {
    /// cell width in bytes: 1, 2, 4 or 8
    #[argh(option, short = 'c', default = "8")]
    cell_size: u32,

    /// suppress `.` output and the trailing `ok`
    #[argh(switch, short = 's')]
    silent: bool,

    /// do not preload the standard prelude
    #[argh(switch, short = 'n')]
    bare: bool,

    /// an optional path to the source file (stdin will be used otherwise)
    #[argh(positional)]
    source_file: Option<String>,
}

fn main() -> Result<ExitCode> {
    let app: App = argh::from_env();

    let source = match &app.source_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut env = SystemEnvironment;
    let mut stdout = std::io::stdout();

    let mut interp = fourth::Interp::new(&mut env, &mut stdout)
        .with_cell_size(app.cell_size)?
        .with_silent(app.silent)
        .with_basic_words()?;
    if !app.bare {
        interp = interp.with_prelude()?;
    }

    Ok(match interp.run(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    })
}
