//! Endpoint resolution: logical operation → absolute request URL.
//!
//! Resolution is pure string joining. Identifiers are substituted verbatim,
//! without percent-encoding, so callers must pass already-safe values.

use crate::config::ClientConfig;

/// One query the node exposes, with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    LatestHeight,
    LatestHash,
    LatestBlock,
    LatestStateRoot,
    /// Block by height or hash.
    Block(&'a str),
    HeightByHash(&'a str),
    Transaction(&'a str),
    Program(&'a str),
    MappingNames(&'a str),
    MappingValue {
        program_id: &'a str,
        mapping_name: &'a str,
        mapping_key: &'a str,
    },
    StatePath(&'a str),
    Beacons,
    PeerCount,
    AllPeers,
    NodeAddress,
    BlockHashByTransactionId(&'a str),
    TransactionIdByProgramId(&'a str),
    TransactionIdByTransitionId(&'a str),
    TransitionIdByIoId(&'a str),
}

impl Endpoint<'_> {
    /// Path relative to `{base}/{network}`, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::LatestHeight => "/latest/height".to_owned(),
            Self::LatestHash => "/latest/hash".to_owned(),
            Self::LatestBlock => "/latest/block".to_owned(),
            Self::LatestStateRoot => "/latest/stateRoot".to_owned(),
            Self::Block(id) => format!("/block/{id}"),
            Self::HeightByHash(hash) => format!("/height/{hash}"),
            Self::Transaction(id) => format!("/transaction/{id}"),
            Self::Program(program_id) => format!("/program/{program_id}"),
            Self::MappingNames(program_id) => format!("/program/{program_id}/mappings"),
            Self::MappingValue {
                program_id,
                mapping_name,
                mapping_key,
            } => format!("/program/{program_id}/mapping/{mapping_name}/{mapping_key}"),
            Self::StatePath(commitment) => format!("/statePath/{commitment}"),
            Self::Beacons => "/beacons".to_owned(),
            Self::PeerCount => "/peers/count".to_owned(),
            Self::AllPeers => "/peers/all".to_owned(),
            Self::NodeAddress => "/node/address".to_owned(),
            Self::BlockHashByTransactionId(id) => format!("/find/blockHash/{id}"),
            Self::TransactionIdByProgramId(program_id) => {
                format!("/find/transactionID/deployment/{program_id}")
            }
            Self::TransactionIdByTransitionId(id) => format!("/find/transactionID/{id}"),
            Self::TransitionIdByIoId(id) => format!("/find/transitionID/{id}"),
        }
    }

    /// Short operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LatestHeight => "latest_height",
            Self::LatestHash => "latest_hash",
            Self::LatestBlock => "latest_block",
            Self::LatestStateRoot => "latest_state_root",
            Self::Block(_) => "block",
            Self::HeightByHash(_) => "height_by_hash",
            Self::Transaction(_) => "transaction",
            Self::Program(_) => "program",
            Self::MappingNames(_) => "mapping_names",
            Self::MappingValue { .. } => "mapping_value",
            Self::StatePath(_) => "state_path",
            Self::Beacons => "beacons",
            Self::PeerCount => "peer_count",
            Self::AllPeers => "all_peers",
            Self::NodeAddress => "node_address",
            Self::BlockHashByTransactionId(_) => "block_hash_by_transaction_id",
            Self::TransactionIdByProgramId(_) => "transaction_id_by_program_id",
            Self::TransactionIdByTransitionId(_) => "transaction_id_by_transition_id",
            Self::TransitionIdByIoId(_) => "transition_id_by_io_id",
        }
    }
}

/// Resolves endpoints against a fixed `{base}/{network}` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver {
    root: String,
}

impl EndpointResolver {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            root: config.root(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn resolve(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.root, endpoint.path())
    }
}
