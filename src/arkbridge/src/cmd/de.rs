use arkbridge_codec::{
    json,
    serde::{Serializer, SerializerOptions},
};
use clap::Args;

use super::Command;
use crate::cli::{helpers, process_par, InputsOutputs};

/// Decodes binary bridge messages into JSON.
#[derive(Debug, Args)]
pub struct De {
    #[clap(flatten)]
    args: InputsOutputs,

    /// Degrades malformed input instead of failing.
    ///
    /// Truncated data reads as zeros, unknown opcodes read as null
    /// and invalid UTF-8 is replaced. Every occurrence is logged.
    ///
    /// Declared lengths are trusted in this mode and allocated as-is,
    /// so corrupt length prefixes may exhaust memory.
    #[clap(short, long, env = "ARKBRIDGE_LENIENT", default_value_t = false)]
    lenient: bool,

    /// The maximum nesting depth of maps and lists.
    #[clap(short, long, env = "ARKBRIDGE_RECURSION_LIMIT", default_value_t = 128)]
    recursion_limit: u8,
}

impl Command for De {
    fn handle(self) -> eyre::Result<()> {
        let (inputs, outputs) = self.args.evaluate("json")?;
        let options = SerializerOptions {
            lenient: self.lenient,
            recursion_limit: self.recursion_limit,
        };

        process_par(
            inputs,
            outputs,
            || Serializer::new(options),
            |de, data| {
                let value = de.deserialize(data)?;
                Ok(json::to_json(&value))
            },
            helpers::write_as_json,
        )
    }
}
