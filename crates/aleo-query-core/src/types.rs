//! Ledger entities as the node serializes them.
//!
//! The model is a strict tree: a [`Block`] owns its confirmed
//! [`Transactions`], each wrapping one [`Transaction`], which is either a
//! deployment or an execution of [`Transition`]s. Everything here is decoded
//! fresh per call and never mutated by the client.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Block
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub block_hash: String,
    pub previous_hash: String,
    pub header: BlockHeader,
    #[serde(default)]
    pub transactions: Vec<Transactions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Block {
    pub fn hash(&self) -> &str {
        &self.block_hash
    }

    pub fn height(&self) -> u32 {
        self.header.metadata.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub previous_state_root: String,
    pub transactions_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalize_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratifications_root: Option<String>,
    pub metadata: BlockMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    pub network: u16,
    pub round: u64,
    pub height: u32,
    #[serde(default)]
    pub coinbase_target: u64,
    #[serde(default)]
    pub proof_target: u64,
    #[serde(default)]
    pub last_coinbase_target: u64,
    #[serde(default)]
    pub last_coinbase_timestamp: i64,
    pub timestamp: i64,
}

// ==============================================================================
// Confirmed Transactions
// ==============================================================================

/// Confirmation status of a transaction in a block.
///
/// Only `deploy` and `execute` transactions are modelled. A rejected entry
/// whose wrapped transaction is fee-only (`"type": "fee"`) fails to decode,
/// and with it the whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deploy,
    Execute,
}

/// A transaction as confirmed inside a block: its status plus the
/// transaction itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transactions {
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    pub transaction: Transaction,
}

// ==============================================================================
// Transaction
// ==============================================================================

/// A ledger transaction, tagged by its JSON `type` field.
///
/// Being an enum, a transaction carries a deployment or an execution, never
/// both and never neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transaction {
    Deploy {
        id: String,
        deployment: Deployment,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fee: Option<Fee>,
    },
    Execute {
        id: String,
        execution: Execution,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fee: Option<Fee>,
    },
}

impl Transaction {
    pub fn id(&self) -> &str {
        match self {
            Self::Deploy { id, .. } | Self::Execute { id, .. } => id,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deploy { .. } => TransactionKind::Deploy,
            Self::Execute { .. } => TransactionKind::Execute,
        }
    }

    pub fn deployment(&self) -> Option<&Deployment> {
        match self {
            Self::Deploy { deployment, .. } => Some(deployment),
            Self::Execute { .. } => None,
        }
    }

    pub fn execution(&self) -> Option<&Execution> {
        match self {
            Self::Execute { execution, .. } => Some(execution),
            Self::Deploy { .. } => None,
        }
    }

    pub fn fee(&self) -> Option<&Fee> {
        match self {
            Self::Deploy { fee, .. } | Self::Execute { fee, .. } => fee.as_ref(),
        }
    }

    /// Execution transitions; empty for a deployment.
    pub fn transitions(&self) -> &[Transition] {
        self.execution()
            .map(|execution| execution.transitions.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(default)]
    pub edition: u16,
    /// Full program source text.
    pub program: String,
    /// Verifying keys are carried through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub verifying_keys: serde_json::Value,
}

impl Deployment {
    /// Program id declared by the `program <id>;` header of the source.
    pub fn program_id(&self) -> Option<&str> {
        self.program
            .lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix("program "))
            .map(|rest| rest.trim().trim_end_matches(';').trim_end())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_state_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub transition: Transition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_state_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
}

// ==============================================================================
// Transition
// ==============================================================================

/// A single program-function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub program: String,
    pub function: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcm: Option<String>,
}

/// Visibility tag of a transition input or output.
///
/// Tags this client does not know decode as [`IoKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoKind {
    Constant,
    Public,
    Private,
    Record,
    ExternalRecord,
    Future,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "type")]
    pub kind: IoKind,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record tag, present on `record` inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "type")]
    pub kind: IoKind,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Record checksum, present on `record` outputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

// ==============================================================================
// Programs and Mappings
// ==============================================================================

/// Deployed program source, split into lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub program_id: String,
    pub lines: Vec<String>,
}

impl Program {
    pub fn source(&self) -> String {
        self.lines.join("\n")
    }
}

/// A single mapping entry. `value` is the node's text, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingValue {
    pub program_id: String,
    pub mapping_name: String,
    pub key: String,
    pub value: String,
}
