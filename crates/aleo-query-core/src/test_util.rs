//! Shared fixture builders for `aleo-query-core` unit tests.

use crate::types::{
    Block, BlockHeader, BlockMetadata, Deployment, Execution, Input, IoKind, Output, Transaction,
    TransactionStatus, Transactions, Transition,
};

// ==============================================================================
// Transitions
// ==============================================================================

/// A `credits.aleo/transfer_public` transition with one public input and one
/// future output.
pub fn make_transition(id: &str) -> Transition {
    Transition {
        id: id.to_owned(),
        program: "credits.aleo".into(),
        function: "transfer_public".into(),
        inputs: vec![
            Input {
                kind: IoKind::Public,
                id: "1field".into(),
                value: Some("aleo1recipient".into()),
                tag: None,
            },
            Input {
                kind: IoKind::Public,
                id: "2field".into(),
                value: Some("100u64".into()),
                tag: None,
            },
        ],
        outputs: vec![Output {
            kind: IoKind::Future,
            id: "3field".into(),
            value: Some("{ program_id: credits.aleo }".into()),
            checksum: None,
        }],
        tpk: Some("1group".into()),
        tcm: Some("4field".into()),
    }
}

// ==============================================================================
// Transactions
// ==============================================================================

pub fn execute_transaction(id: &str) -> Transaction {
    Transaction::Execute {
        id: id.to_owned(),
        execution: Execution {
            transitions: vec![make_transition("as1transition")],
            global_state_root: Some("ar1root".into()),
            proof: Some("proof1xyz".into()),
        },
        fee: None,
    }
}

pub fn deploy_transaction(id: &str, program_id: &str) -> Transaction {
    Transaction::Deploy {
        id: id.to_owned(),
        deployment: Deployment {
            edition: 0,
            program: format!("program {program_id};\n\nfunction main:\n    input r0 as u32.public;"),
            verifying_keys: serde_json::json!([["main", ["verifier1", "certificate1"]]]),
        },
        fee: None,
    }
}

/// Wrap a transaction as accepted at index 0.
pub fn confirmed(transaction: Transaction) -> Transactions {
    Transactions {
        status: TransactionStatus::Accepted,
        kind: transaction.kind(),
        index: Some(0),
        transaction,
    }
}

// ==============================================================================
// Blocks
// ==============================================================================

pub fn make_block(height: u32, transactions: Vec<Transactions>) -> Block {
    Block {
        block_hash: format!("ab1hash{height}"),
        previous_hash: format!("ab1hash{}", height.saturating_sub(1)),
        header: BlockHeader {
            previous_state_root: "ar1previous".into(),
            transactions_root: "4567field".into(),
            finalize_root: None,
            ratifications_root: None,
            metadata: BlockMetadata {
                network: 3,
                round: u64::from(height) + 1,
                height,
                coinbase_target: 1 << 20,
                proof_target: 1 << 10,
                last_coinbase_target: 1 << 20,
                last_coinbase_timestamp: 1_690_000_000,
                timestamp: 1_690_000_015,
            },
        },
        transactions,
        signature: Some("sign1xyz".into()),
    }
}

/// Block JSON shaped as the node serves it, including fields the model ignores.
pub fn block_json(height: u32, transaction_id: &str) -> String {
    serde_json::json!({
        "block_hash": format!("ab1hash{height}"),
        "previous_hash": "ab1previous",
        "header": {
            "previous_state_root": "ar1previous",
            "transactions_root": "1field",
            "coinbase_accumulator_point": "0field",
            "metadata": {
                "network": 3,
                "round": height + 1,
                "height": height,
                "total_supply_in_microcredits": 1_500_000_000_000_000u64,
                "cumulative_weight": 0,
                "coinbase_target": 1,
                "proof_target": 1,
                "last_coinbase_target": 1,
                "last_coinbase_timestamp": 0,
                "timestamp": 1_690_000_000
            }
        },
        "transactions": [{
            "status": "accepted",
            "type": "execute",
            "index": 0,
            "transaction": {
                "type": "execute",
                "id": transaction_id,
                "execution": {
                    "transitions": [{
                        "id": "as1transition",
                        "program": "credits.aleo",
                        "function": "transfer_public",
                        "inputs": [{ "type": "public", "id": "1field", "value": "100u64" }],
                        "outputs": [{ "type": "record", "id": "2field", "checksum": "3field", "value": "record1abc" }],
                        "tpk": "1group",
                        "tcm": "4field"
                    }],
                    "global_state_root": "ar1root"
                }
            },
            "finalize": []
        }],
        "ratifications": [],
        "coinbase": null,
        "signature": "sign1xyz"
    })
    .to_string()
}
