//! The `Gateway` → `Network` → `Contract` handle chain.
//!
//! Shapes mirror the session API a ledger SDK exposes: connect with a
//! profile and a wallet identity, open the channel, pick a contract, then
//! submit or evaluate named invocations with string arguments. Here the
//! channel is backed by an in-process world state and every invocation
//! runs as one transaction over it; ordering and endorsement are the host
//! platform's job and are out of scope.

use std::sync::Arc;

use tracing::{debug, info};

use stay_contract::{HotelContract, SlaContract, TransactionContext};
use stay_state::MemoryState;

use crate::config::{ConnectionProfile, ContractVariant};
use crate::error::{GatewayError, GatewayResult};
use crate::wallet::{Identity, Wallet};

/// An authenticated session against one channel's ledger.
pub struct Gateway {
    profile: ConnectionProfile,
    identity: Identity,
    channel_state: Arc<MemoryState>,
}

impl Gateway {
    /// Open a session using the identity stored under `label` in `wallet`.
    pub fn connect(
        profile: ConnectionProfile,
        wallet: &dyn Wallet,
        label: &str,
    ) -> GatewayResult<Self> {
        let identity = wallet
            .get(label)?
            .ok_or_else(|| GatewayError::IdentityNotFound(label.to_string()))?;
        info!(
            peer = %profile.peer.endpoint,
            msp = %identity.msp_id,
            label,
            "gateway connected"
        );
        Ok(Self {
            profile,
            identity,
            channel_state: Arc::new(MemoryState::new()),
        })
    }

    /// The identity this session signs invocations with.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Open the named channel.
    ///
    /// Only the channel declared in the connection profile exists.
    pub fn get_network(&self, channel: &str) -> GatewayResult<Network> {
        if channel != self.profile.channel {
            return Err(GatewayError::UnknownChannel(channel.to_string()));
        }
        Ok(Network {
            profile: self.profile.clone(),
            state: self.channel_state.clone(),
        })
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("channel", &self.profile.channel)
            .field("msp_id", &self.identity.msp_id)
            .finish_non_exhaustive()
    }
}

/// A channel handle: shared world state plus the profile's contract table.
#[derive(Clone, Debug)]
pub struct Network {
    profile: ConnectionProfile,
    state: Arc<MemoryState>,
}

impl Network {
    /// Resolve a deployed contract by name.
    pub fn get_contract(&self, name: &str) -> GatewayResult<Contract> {
        let variant = self
            .profile
            .contracts
            .get(name)
            .copied()
            .ok_or_else(|| GatewayError::UnknownContract(name.to_string()))?;
        Ok(Contract {
            name: name.to_string(),
            variant,
            state: self.state.clone(),
        })
    }
}

/// Handle for submitting and evaluating invocations of one contract.
#[derive(Clone)]
pub struct Contract {
    name: String,
    variant: ContractVariant,
    state: Arc<MemoryState>,
}

impl Contract {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submit a state-changing invocation.
    pub fn submit_transaction(&self, operation: &str, args: &[&str]) -> GatewayResult<Vec<u8>> {
        debug!(contract = %self.name, operation, "submit");
        self.invoke(operation, args)
    }

    /// Evaluate a query invocation.
    ///
    /// Against the in-process channel both paths execute immediately; the
    /// submit/evaluate split exists so callers keep the distinction a real
    /// ordering service requires.
    pub fn evaluate_transaction(&self, operation: &str, args: &[&str]) -> GatewayResult<Vec<u8>> {
        debug!(contract = %self.name, operation, "evaluate");
        self.invoke(operation, args)
    }

    fn invoke(&self, operation: &str, args: &[&str]) -> GatewayResult<Vec<u8>> {
        // One transaction context per invocation; the contract never holds
        // state across calls.
        let ctx = TransactionContext::new(self.state.as_ref());
        let result = match self.variant {
            ContractVariant::Hotel => HotelContract::new().invoke(&ctx, operation, args),
            ContractVariant::Sla => SlaContract::new().invoke(&ctx, operation, args),
        };
        // Only the rendered message crosses the session boundary.
        result.map_err(|e| GatewayError::Invocation(e.to_string()))
    }
}

impl std::fmt::Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("name", &self.name)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
