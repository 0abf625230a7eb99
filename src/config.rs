//! Domain Configuration
//!
//! The EIP-712 domain every order and cancellation is bound to. Each market
//! has its own trader contract, so the verifying contract is always supplied
//! by the caller; networks only fix the chain id and onboarding URL.

use crate::eip712::domain_separator;
use crate::error::{SignerError, SignerResult};
use crate::types::{Address, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Domain name used by the isolated trader contracts
pub const DOMAIN_NAME: &str = "IsolatedTrader";

/// Domain version used by the isolated trader contracts
pub const DOMAIN_VERSION: &str = "1.0";

/// Deployment the signatures are meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Arbitrum Goerli
    #[default]
    Testnet,
    /// Arbitrum One
    Mainnet,
}

impl Network {
    pub fn chain_id(&self) -> u128 {
        match self {
            Network::Testnet => 421_613,
            Network::Mainnet => 42_161,
        }
    }

    /// The message signed during onboarding
    pub fn onboarding_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://testnet.firefly.exchange",
            Network::Mainnet => "https://trade-arb.firefly.exchange",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn from_chain_id(chain_id: u128) -> Option<Self> {
        match chain_id {
            421_613 => Some(Network::Testnet),
            42_161 => Some(Network::Mainnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SignerError;

    fn from_str(s: &str) -> SignerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(SignerError::Config(format!(
                "unknown network '{}': expected testnet or mainnet",
                other
            ))),
        }
    }
}

fn default_name() -> String {
    DOMAIN_NAME.to_string()
}

fn default_version() -> String {
    DOMAIN_VERSION.to_string()
}

/// EIP-712 domain values
///
/// Loaded from JSON as
/// `{"chainId": 421613, "verifyingContract": "0x..."}`; `name` and `version`
/// default to the trader contract's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub chain_id: u128,
    pub verifying_contract: Address,
}

impl DomainConfig {
    pub fn new(chain_id: u128, verifying_contract: Address) -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            chain_id,
            verifying_contract,
        }
    }

    pub fn for_network(network: Network, verifying_contract: Address) -> Self {
        Self::new(network.chain_id(), verifying_contract)
    }

    /// The preset network matching `chain_id`, if any
    pub fn network(&self) -> Option<Network> {
        Network::from_chain_id(self.chain_id)
    }

    /// Domain separator for these values
    pub fn separator(&self) -> Digest {
        domain_separator(&self.name, &self.version, self.chain_id, &self.verifying_contract)
    }

    pub fn from_json(json: &str) -> SignerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SignerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SignerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> SignerResult<()> {
        if self.name.is_empty() || self.version.is_empty() {
            return Err(SignerError::Config(
                "domain name and version must not be empty".to_string(),
            ));
        }
        if self.chain_id == 0 {
            return Err(SignerError::Config("chain id must not be zero".to_string()));
        }
        Ok(())
    }
}
