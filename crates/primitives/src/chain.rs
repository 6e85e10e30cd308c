use crate::ChainId;
use std::{fmt, str::FromStr};

pub use alloy_chains::{Chain, NamedChain};

/// Chain id of a locally run development node.
pub const LOCAL_CHAIN_ID: ChainId = 270;

/// Networks that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// zkSync Era mainnet (324).
    Mainnet,
    /// zkSync Era Sepolia testnet (300).
    Sepolia,
    /// Local development node (270).
    Local,
}

/// Returned when a network name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown network `{0}`, expected one of: mainnet, sepolia, local")]
pub struct UnknownNetwork(pub String);

impl Network {
    /// All known networks.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Sepolia, Network::Local];

    /// The chain of this network.
    pub fn chain(self) -> Chain {
        match self {
            Network::Mainnet => Chain::from_named(NamedChain::ZkSync),
            Network::Sepolia => Chain::from_named(NamedChain::ZkSyncTestnet),
            Network::Local => Chain::from_id(LOCAL_CHAIN_ID),
        }
    }

    /// The numeric chain id of this network.
    pub fn chain_id(self) -> ChainId {
        self.chain().id()
    }

    /// Find the network with the given chain id.
    pub fn from_chain_id(chain_id: ChainId) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Local => "local",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "era" | "zksync" => Ok(Network::Mainnet),
            "sepolia" | "testnet" => Ok(Network::Sepolia),
            "local" | "dev" | "localhost" => Ok(Network::Local),
            _ => Err(UnknownNetwork(s.to_owned())),
        }
    }
}
