use anyhow::{anyhow, bail, Context};
use clap::Args;
use serde_json::Value;
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use zktx::primitives::{chain::Network, ChainId, TxEip712, TxLegacy, TxType, TypedTransaction};

/// Keys that may carry the transaction type, in lookup order.
const TYPE_KEYS: [&str; 2] = ["type", "txType"];

#[derive(Debug, Args)]
pub struct TxArgs {
    /// Path to the transaction JSON, `-` reads from stdin
    #[arg(default_value = "-")]
    pub path: PathBuf,
    /// Override the chain id with a known network
    #[arg(long, conflicts_with = "chain_id")]
    pub chain: Option<Network>,
    /// Override the chain id
    #[arg(long)]
    pub chain_id: Option<ChainId>,
}

impl TxArgs {
    /// Read the transaction and apply the chain override, if any.
    pub fn load(&self) -> anyhow::Result<TypedTransaction> {
        let json = read_input(&self.path)?;
        let value: Value = serde_json::from_slice(&json)
            .with_context(|| format!("{} is not valid JSON", self.path.display()))?;
        let mut tx = parse_transaction(value)?;

        if let Some(chain_id) = self.chain_id.or(self.chain.map(Network::chain_id)) {
            dev_debug!(chain_id, "overriding chain id");
            match &mut tx {
                TypedTransaction::Legacy(tx) => tx.chain_id = Some(chain_id),
                TypedTransaction::Eip712(tx) => tx.chain_id = chain_id,
            }
        }
        Ok(tx)
    }
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Deserialize a transaction, dispatching on its `type` field.
///
/// A missing type selects the extended transaction.
pub fn parse_transaction(value: Value) -> anyhow::Result<TypedTransaction> {
    let tx_type = match TYPE_KEYS.iter().find_map(|key| value.get(*key)) {
        Some(tx_type) => parse_tx_type(tx_type)?,
        None => TxType::Eip712,
    };
    dev_debug!(%tx_type, "parsing transaction");

    Ok(match tx_type {
        TxType::Legacy => TypedTransaction::Legacy(
            serde_path_to_error::deserialize::<_, TxLegacy>(value)
                .context("invalid legacy transaction")?,
        ),
        TxType::Eip712 => TypedTransaction::Eip712(
            serde_path_to_error::deserialize::<_, TxEip712>(value)
                .context("invalid extended transaction")?,
        ),
    })
}

fn parse_tx_type(value: &Value) -> anyhow::Result<TxType> {
    let raw = match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| anyhow!("transaction type {n} is not an unsigned integer"))?,
        Value::String(s) => match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse(),
        }
        .with_context(|| format!("invalid transaction type `{s}`"))?,
        other => bail!("transaction type must be a number or a string, got {other}"),
    };
    Ok(TxType::try_from(raw)?)
}
