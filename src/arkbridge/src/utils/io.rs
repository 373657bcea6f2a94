use std::{
    io::{self, IsTerminal, Read},
    process,
};

use clap::CommandFactory;

use crate::cli::Cli;

/// Reads a whole document piped through stdin.
///
/// An interactive terminal has nothing piped in, so the help of the
/// application is printed and the process exits instead.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data)?;
    log::debug!("Read {} bytes from stdin", data.len());

    Ok(data)
}
