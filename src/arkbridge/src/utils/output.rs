use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use serde::Serialize;

/// Serializes the given value as JSON to the respective output source.
///
/// Files and pipes receive a minified representation, an interactive
/// stdout gets pretty-printed output.
pub fn serialize_to_output_source<T: Serialize>(
    out: Option<PathBuf>,
    value: &T,
) -> eyre::Result<()> {
    if let Some(out) = out {
        let mut writer = BufWriter::new(fs::File::create(&out)?);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();

        if stdout.is_terminal() {
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        } else {
            serde_json::to_writer(&mut stdout, value)?;
        }
    }

    Ok(())
}

/// Writes raw bytes to the respective output source.
///
/// An interactive stdout gets a hex dump instead of the raw bytes.
pub fn write_to_output_source(out: Option<PathBuf>, data: &[u8]) -> eyre::Result<()> {
    if let Some(out) = out {
        fs::write(&out, data)?;
        log::debug!("Wrote {} bytes to '{}'", data.len(), out.display());
    } else {
        let mut stdout = io::stdout().lock();

        if stdout.is_terminal() {
            for line in data.chunks(16) {
                for b in line {
                    write!(stdout, "{b:02X} ")?;
                }
                writeln!(stdout)?;
            }
        } else {
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
