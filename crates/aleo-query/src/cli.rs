use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// aleo-query — read-only queries against an Aleo node's ledger API.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node API base URL.
    #[arg(long, default_value = "https://vm.aleo.org/api", env = "ALEO_QUERY_ENDPOINT")]
    pub endpoint: String,

    /// Network name appended to the base URL.
    #[arg(long, default_value = "testnet3", env = "ALEO_QUERY_NETWORK")]
    pub network: String,

    /// Abort the query after this many seconds (unbounded if omitted).
    #[arg(long, env = "ALEO_QUERY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Latest block height.
    Height,
    /// Latest block hash.
    Hash,
    /// Latest block.
    LatestBlock,
    /// Latest state root.
    StateRoot,
    /// Block by height or hash.
    Block { id: String },
    /// Confirmed transactions of the block at a height.
    BlockTransactions { height: u32 },
    /// Height of the block with the given hash.
    HeightByHash { hash: String },
    /// Transaction by id.
    Transaction { id: String },
    /// Program source. Printed, or written line by line with `--out`.
    Program {
        program_id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Mapping names declared by a program.
    Mappings { program_id: String },
    /// Value stored under a key in a program mapping.
    MappingValue {
        program_id: String,
        mapping_name: String,
        mapping_key: String,
    },
    /// Current beacon addresses.
    Beacons,
    /// Number of connected peers.
    PeerCount,
    /// Connected peer addresses.
    Peers,
    /// Address of the queried node.
    NodeAddress,
    /// Hash of the block containing a transaction.
    FindBlockHash { transaction_id: String },
    /// Id of the transaction that deployed a program.
    FindDeployment { program_id: String },
    /// Id of the transaction containing a transition.
    FindTransaction { transition_id: String },
    /// Id of the transition owning an input or output.
    FindTransition { io_id: String },
    /// State path for a commitment.
    StatePath { commitment: String },
}
