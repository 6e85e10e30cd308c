use crate::helpers::TxArgs;
use clap::Args;
use zktx::core::SignableTransaction;

#[derive(Args, Debug)]
pub struct SigningHashCommand {
    #[command(flatten)]
    tx: TxArgs,
}

impl SigningHashCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let tx = self.tx.load()?;
        println!("{}", tx.signing_hash());
        Ok(())
    }
}
