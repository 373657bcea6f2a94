use std::path::PathBuf;

use super::OutputSource;
use crate::utils;

// Resolves the file a result is written to, if any.
fn output_path(inpath: Option<PathBuf>, out: OutputSource) -> eyre::Result<Option<PathBuf>> {
    match (out, inpath) {
        (OutputSource::Stdout, _) => Ok(None),
        (OutputSource::File(path), _) => Ok(Some(path)),
        (OutputSource::Dir(mut out, extension), Some(path)) => {
            let infile = path.with_extension(extension);
            let name = infile
                .file_name()
                .ok_or_else(|| eyre::eyre!("input '{}' has no file name", path.display()))?;
            out.push(name);

            Ok(Some(out))
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

/// Writes any serializable `T` value as JSON to an output source.
///
/// To be used as the writer callback of [`super::process_par`].
pub fn write_as_json<T: serde::Serialize>(
    inpath: Option<PathBuf>,
    value: T,
    out: OutputSource,
) -> eyre::Result<()> {
    utils::serialize_to_output_source(output_path(inpath, out)?, &value)
}

/// Writes an encoded message to an output source.
///
/// To be used as the writer callback of [`super::process_par`].
pub fn write_as_bytes(inpath: Option<PathBuf>, value: Vec<u8>, out: OutputSource) -> eyre::Result<()> {
    utils::write_to_output_source(output_path(inpath, out)?, &value)
}
