use crate::helpers::TxArgs;
use clap::Args;
use zktx::core::TxEncoder;

#[derive(Args, Debug)]
pub struct EncodeCommand {
    #[command(flatten)]
    tx: TxArgs,
    /// Also print the transaction hash
    #[arg(long)]
    with_hash: bool,
}

impl EncodeCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let sealed = self.tx.load()?.seal()?;
        dev_info!(
            tx_type = %sealed.tx_type(),
            len = sealed.payload().len(),
            "encoded transaction"
        );

        if self.with_hash {
            let output = serde_json::json!({
                "type": format!("{:#04x}", u8::from(sealed.tx_type())),
                "payload": sealed.payload(),
                "hash": sealed.hash(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", sealed.payload());
        }
        Ok(())
    }
}
