use crate::helpers::TxArgs;
use clap::Args;
use zktx::core::hash;

#[derive(Args, Debug)]
pub struct HashCommand {
    #[command(flatten)]
    tx: TxArgs,
}

impl HashCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let tx = self.tx.load()?;
        println!("{}", hash(&tx)?);
        Ok(())
    }
}
