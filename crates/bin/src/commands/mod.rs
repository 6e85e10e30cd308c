use clap::Subcommand;

mod bytecode_hash;
mod encode;
mod hash;
mod signing_hash;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Encode a transaction into its network payload")]
    Encode(encode::EncodeCommand),
    #[command(about = "Print the transaction hash")]
    Hash(hash::HashCommand),
    #[command(about = "Print the digest a wallet signs for the transaction")]
    SigningHash(signing_hash::SigningHashCommand),
    #[command(about = "Hash deployment bytecode for use as a factory dependency")]
    BytecodeHash(bytecode_hash::BytecodeHashCommand),
}

impl Commands {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Hash(cmd) => cmd.run(),
            Commands::SigningHash(cmd) => cmd.run(),
            Commands::BytecodeHash(cmd) => cmd.run(),
        }
    }
}
