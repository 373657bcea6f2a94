use std::path::PathBuf;

use clap::Args;
use glob::glob;

use crate::cli::HYPHEN;

/// Where a command reads its documents from.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// A single document piped through stdin.
    Stdin,
    /// A single document stored in a file.
    File(PathBuf),
    /// A batch of documents matched by a glob pattern.
    Files(Vec<PathBuf>),
}

/// Where a command writes its results to.
#[derive(Clone, Debug)]
pub enum OutputSource {
    /// Results are printed to stdout.
    Stdout,
    /// The result is stored in a single file.
    File(PathBuf),
    /// One result file per input is created in the directory.
    ///
    /// Each file is named after its input with the given extension.
    Dir(PathBuf, &'static str),
}

/// Input and output arguments shared by all conversion commands.
#[derive(Debug, Args)]
pub struct InputsOutputs {
    /// The documents to convert.
    ///
    /// "-" reads a single document from stdin. Anything else is a
    /// file path, which may be a UNIX glob pattern to select many
    /// files at once.
    ///
    /// A pattern matching several files requires the output option
    /// to name a directory for the results.
    pub input: String,

    /// Where to write the converted documents.
    ///
    /// Defaults to "-" for stdout. Otherwise this is the path of the
    /// result file for a single input, or a directory that receives
    /// one result file per input.
    #[clap(short, default_value = HYPHEN)]
    pub output: PathBuf,
}

impl InputsOutputs {
    /// Resolves the arguments into concrete input and output sources.
    ///
    /// `extension` names the files created in an output directory.
    pub fn evaluate(self, extension: &'static str) -> eyre::Result<(InputSource, OutputSource)> {
        let inputs = self.input_source()?;
        let outputs = self.output_source(extension, &inputs)?;

        Ok((inputs, outputs))
    }

    fn input_source(&self) -> eyre::Result<InputSource> {
        if self.input == HYPHEN {
            return Ok(InputSource::Stdin);
        }

        // A plain path is a glob pattern that matches itself.
        let mut paths: Vec<PathBuf> = glob(&self.input)?.collect::<Result<_, _>>()?;
        match paths.len() {
            0 => Err(eyre::eyre!("no files match '{}'", self.input)),
            1 => Ok(InputSource::File(paths.remove(0))),
            n => {
                log::debug!("Pattern '{}' matched {n} files", self.input);
                Ok(InputSource::Files(paths))
            }
        }
    }

    fn output_source(
        self,
        extension: &'static str,
        input: &InputSource,
    ) -> eyre::Result<OutputSource> {
        let stdout = self.output.as_os_str() == HYPHEN;

        let out = match input {
            InputSource::Files(paths) if stdout => {
                return Err(eyre::eyre!(
                    "input pattern matched {} files; specify an output directory with -o",
                    paths.len()
                ));
            }
            _ if stdout => OutputSource::Stdout,

            InputSource::Files(..) => OutputSource::Dir(self.output, extension),
            _ if self.output.is_dir() => OutputSource::Dir(self.output, extension),
            InputSource::Stdin | InputSource::File(..) => OutputSource::File(self.output),
        };

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: &str) -> InputsOutputs {
        InputsOutputs {
            input: "blobs/*.bin".into(),
            output: PathBuf::from(output),
        }
    }

    fn batch() -> InputSource {
        InputSource::Files(vec!["blobs/a.bin".into(), "blobs/b.bin".into()])
    }

    #[test]
    fn batch_to_stdout_is_rejected() {
        let err = args(HYPHEN).output_source("json", &batch()).unwrap_err();
        assert!(err.to_string().contains("specify an output directory"));
    }

    #[test]
    fn batch_writes_into_directory() {
        let out = args("decoded").output_source("json", &batch()).unwrap();
        assert!(matches!(out, OutputSource::Dir(dir, "json") if dir == PathBuf::from("decoded")));
    }

    #[test]
    fn single_inputs_may_use_stdout() {
        let file = InputSource::File("blobs/a.bin".into());

        assert!(matches!(
            args(HYPHEN).output_source("json", &file).unwrap(),
            OutputSource::Stdout
        ));
        assert!(matches!(
            args(HYPHEN).output_source("json", &InputSource::Stdin).unwrap(),
            OutputSource::Stdout
        ));
    }
}
