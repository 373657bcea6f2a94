use arkbridge_codec::{json, serde::Serializer};
use clap::Args;

use super::Command;
use crate::cli::{helpers, process_par, InputsOutputs};

/// Encodes JSON documents into binary bridge messages.
#[derive(Debug, Args)]
pub struct Ser {
    #[clap(flatten)]
    args: InputsOutputs,
}

impl Command for Ser {
    fn handle(self) -> eyre::Result<()> {
        let (inputs, outputs) = self.args.evaluate("bin")?;

        process_par(
            inputs,
            outputs,
            Serializer::default,
            |ser, data| {
                let doc: serde_json::Value = serde_json::from_slice(data)?;
                ser.serialize(&json::from_json(&doc)).map_err(Into::into)
            },
            helpers::write_as_bytes,
        )
    }
}
