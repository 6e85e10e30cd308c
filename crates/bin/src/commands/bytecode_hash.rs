use crate::helpers::read_input;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use zktx::primitives::{alloy_primitives::hex, bytecode::hash_bytecode};

#[derive(Args, Debug)]
pub struct BytecodeHashCommand {
    /// Path to the bytecode, raw or `0x`-prefixed hex; `-` reads from stdin
    #[arg(default_value = "-")]
    path: PathBuf,
}

impl BytecodeHashCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let input = read_input(&self.path)?;
        let bytecode = decode_bytecode(input)?;
        let hash = hash_bytecode(&bytecode)
            .with_context(|| format!("cannot hash bytecode from {}", self.path.display()))?;
        println!("{hash}");
        Ok(())
    }
}

/// Hex text starting with `0x` is decoded, anything else is taken as raw bytes.
fn decode_bytecode(input: Vec<u8>) -> anyhow::Result<Vec<u8>> {
    match input.trim_ascii().strip_prefix(b"0x") {
        Some(hex) => hex::decode(hex).context("invalid hex bytecode"),
        None => Ok(input),
    }
}
