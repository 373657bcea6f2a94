use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::Context;
use rayon::prelude::*;

use super::{InputSource, OutputSource};
use crate::utils;

fn read_file(path: &Path) -> eyre::Result<Vec<u8>> {
    let mut file =
        fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;

    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut data = Vec::with_capacity(size);
    file.read_to_end(&mut data)?;

    // Closing files is slow on Windows, do it off-thread.
    #[cfg(windows)]
    blocking::unblock(move || drop(file)).detach();

    Ok(data)
}

/// Converts every input document and hands the results to `write`.
///
/// `convert` receives the full contents of one document at a time.
/// Batches of files are converted in parallel, with one `init` state
/// per rayon worker.
pub fn process_par<T, S, C, W>(
    input: InputSource,
    output: OutputSource,
    init: impl Fn() -> S + Sync + Send,
    convert: C,
    write: W,
) -> eyre::Result<()>
where
    T: Send,
    S: Send,
    C: Fn(&mut S, &[u8]) -> eyre::Result<T> + Sync,
    W: Fn(Option<PathBuf>, T, OutputSource) -> eyre::Result<()> + Sync,
{
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = convert(&mut init(), &utils::read_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = convert(&mut init(), &read_file(&path)?)
                .with_context(|| format!("failed to convert '{}'", path.display()))?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, extension)) => {
            fs::create_dir_all(&dir)?;
            log::info!("Converting {} files into '{}'", paths.len(), dir.display());

            paths
                .into_par_iter()
                .try_for_each_init(init, |state, path| {
                    let value = convert(state, &read_file(&path)?)
                        .with_context(|| format!("failed to convert '{}'", path.display()))?;
                    write(Some(path), value, OutputSource::Dir(dir.clone(), extension))
                })
        }

        (InputSource::Files(paths), _) => Err(eyre::eyre!(
            "{} inputs need an output directory",
            paths.len()
        )),
    }
}
