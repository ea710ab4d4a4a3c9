//! Connection profile: which channel to join and which contracts it hosts.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

/// Which contract implementation a name on the channel resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractVariant {
    /// The flat hotel-quality contract.
    Hotel,
    /// The nested service-level-agreement contract.
    Sla,
}

/// Endpoint of the peer the session talks to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    pub endpoint: String,
}

/// Profile describing one channel and the contracts deployed on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Channel name, e.g. `mychannel`.
    pub channel: String,
    /// MSP the connecting identity must belong to.
    pub msp_id: String,
    pub peer: PeerConfig,
    /// Contract name → implementation variant.
    pub contracts: BTreeMap<String, ContractVariant>,
}

impl ConnectionProfile {
    /// Load a profile from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| GatewayError::Profile(e.to_string()))
    }

    /// A profile for local development: one channel, both contract
    /// variants deployed.
    pub fn local_default() -> Self {
        let mut contracts = BTreeMap::new();
        contracts.insert("hotel".to_string(), ContractVariant::Hotel);
        contracts.insert("hotel-sla".to_string(), ContractVariant::Sla);
        Self {
            channel: "mychannel".into(),
            msp_id: "Org1MSP".into(),
            peer: PeerConfig {
                endpoint: "localhost:7051".into(),
            },
            contracts,
        }
    }
}
