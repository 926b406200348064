use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::decode::{split_program_lines, Digits, Json, Opaque, Quoted, ResponseShape};
use crate::endpoint::{Endpoint, EndpointResolver};
use crate::error::QueryError;
use crate::transport::{CallContext, HttpTransport, ReqwestTransport};
use crate::types::{Block, MappingValue, Program, Transaction, Transactions};

// ==============================================================================
// LedgerClient — read-only client for an Aleo node's query API
// ==============================================================================

/// Read-only client for one node and network.
///
/// Every operation resolves its endpoint, performs a single GET bounded by
/// the supplied [`CallContext`], rejects non-2xx statuses, and decodes the
/// body in the shape that operation expects. Nothing is cached and nothing
/// is retried; cloning the client shares the transport.
#[derive(Clone)]
pub struct LedgerClient {
    config: ClientConfig,
    resolver: EndpointResolver,
    transport: Arc<dyn HttpTransport>,
}

impl LedgerClient {
    /// Build a client over the default `reqwest` transport. Performs no I/O.
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Validate `base_url` and `network`, then build a client.
    pub fn connect(base_url: &str, network: &str) -> Result<Self, QueryError> {
        Self::new(ClientConfig::new(base_url, network)?)
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let resolver = EndpointResolver::new(&config);
        Self {
            config,
            resolver,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    async fn fetch<S: ResponseShape>(
        &self,
        endpoint: Endpoint<'_>,
        target: &'static str,
        ctx: &CallContext,
    ) -> Result<S, QueryError> {
        let op = endpoint.name();
        let url = self.resolver.resolve(&endpoint);
        debug!(query.op = op, http.url = %url, "ledger query");

        let response = ctx.run(&url, self.transport.get(&url)).await?;
        debug!(
            query.op = op,
            http.url = %url,
            http.status = response.status,
            body_len = response.body.len(),
            "ledger response"
        );
        trace!(query.op = op, body = %response.body, "ledger response body");

        if !response.is_success() {
            return Err(QueryError::Status {
                url,
                status: response.status,
                body: response.body,
            });
        }

        S::decode(target, &response.body)
    }

    // ── Latest ───────────────────────────────────────────────────

    pub async fn latest_height(&self, ctx: &CallContext) -> Result<u32, QueryError> {
        let Digits(height) = self.fetch(Endpoint::LatestHeight, "height", ctx).await?;
        Ok(height)
    }

    pub async fn latest_hash(&self, ctx: &CallContext) -> Result<String, QueryError> {
        let Quoted(hash) = self.fetch(Endpoint::LatestHash, "block hash", ctx).await?;
        Ok(hash)
    }

    pub async fn latest_block(&self, ctx: &CallContext) -> Result<Block, QueryError> {
        let Json(block) = self.fetch(Endpoint::LatestBlock, "block", ctx).await?;
        Ok(block)
    }

    pub async fn latest_state_root(&self, ctx: &CallContext) -> Result<String, QueryError> {
        let Quoted(root) = self
            .fetch(Endpoint::LatestStateRoot, "state root", ctx)
            .await?;
        Ok(root)
    }

    // ── Blocks / Transactions ────────────────────────────────────

    /// Fetch a block by height or hash.
    pub async fn block(&self, id: &str, ctx: &CallContext) -> Result<Block, QueryError> {
        let Json(block) = self.fetch(Endpoint::Block(id), "block", ctx).await?;
        Ok(block)
    }

    /// Confirmed transactions of the block at `height`, in block order.
    pub async fn block_transactions(
        &self,
        height: u32,
        ctx: &CallContext,
    ) -> Result<Vec<Transactions>, QueryError> {
        let block = self.block(&height.to_string(), ctx).await?;
        Ok(block.transactions)
    }

    pub async fn height_by_hash(&self, hash: &str, ctx: &CallContext) -> Result<u32, QueryError> {
        let Digits(height) = self
            .fetch(Endpoint::HeightByHash(hash), "height", ctx)
            .await?;
        Ok(height)
    }

    pub async fn transaction(
        &self,
        transaction_id: &str,
        ctx: &CallContext,
    ) -> Result<Transaction, QueryError> {
        let Json(transaction) = self
            .fetch(Endpoint::Transaction(transaction_id), "transaction", ctx)
            .await?;
        Ok(transaction)
    }

    // ── Programs / Mappings ──────────────────────────────────────

    /// Program source split into lines. Writing it anywhere is left to the
    /// caller.
    pub async fn program(
        &self,
        program_id: &str,
        ctx: &CallContext,
    ) -> Result<Program, QueryError> {
        let Quoted(source) = self
            .fetch(Endpoint::Program(program_id), "program source", ctx)
            .await?;
        Ok(Program {
            program_id: program_id.to_owned(),
            lines: split_program_lines(&source),
        })
    }

    pub async fn mapping_names(
        &self,
        program_id: &str,
        ctx: &CallContext,
    ) -> Result<Vec<String>, QueryError> {
        let Json(names) = self
            .fetch(Endpoint::MappingNames(program_id), "mapping names", ctx)
            .await?;
        Ok(names)
    }

    /// Value stored under `mapping_key`, returned as the node's raw text.
    pub async fn mapping_value(
        &self,
        program_id: &str,
        mapping_name: &str,
        mapping_key: &str,
        ctx: &CallContext,
    ) -> Result<MappingValue, QueryError> {
        let endpoint = Endpoint::MappingValue {
            program_id,
            mapping_name,
            mapping_key,
        };
        let Opaque(value) = self.fetch(endpoint, "mapping value", ctx).await?;
        Ok(MappingValue {
            program_id: program_id.to_owned(),
            mapping_name: mapping_name.to_owned(),
            key: mapping_key.to_owned(),
            value,
        })
    }

    /// State path proving `commitment` against a state root.
    pub async fn state_path(
        &self,
        commitment: &str,
        ctx: &CallContext,
    ) -> Result<String, QueryError> {
        let Quoted(path) = self
            .fetch(Endpoint::StatePath(commitment), "state path", ctx)
            .await?;
        Ok(path)
    }

    // ── Network ──────────────────────────────────────────────────

    pub async fn beacons(&self, ctx: &CallContext) -> Result<Vec<String>, QueryError> {
        let Json(beacons) = self.fetch(Endpoint::Beacons, "beacons", ctx).await?;
        Ok(beacons)
    }

    pub async fn peer_count(&self, ctx: &CallContext) -> Result<u64, QueryError> {
        let Digits(count) = self.fetch(Endpoint::PeerCount, "peer count", ctx).await?;
        Ok(count)
    }

    pub async fn all_peers(&self, ctx: &CallContext) -> Result<Vec<String>, QueryError> {
        let Json(peers) = self.fetch(Endpoint::AllPeers, "peers", ctx).await?;
        Ok(peers)
    }

    pub async fn node_address(&self, ctx: &CallContext) -> Result<String, QueryError> {
        let Quoted(address) = self
            .fetch(Endpoint::NodeAddress, "node address", ctx)
            .await?;
        Ok(address)
    }

    // ── Find ─────────────────────────────────────────────────────

    pub async fn block_hash_by_transaction_id(
        &self,
        transaction_id: &str,
        ctx: &CallContext,
    ) -> Result<String, QueryError> {
        let Quoted(hash) = self
            .fetch(
                Endpoint::BlockHashByTransactionId(transaction_id),
                "block hash",
                ctx,
            )
            .await?;
        Ok(hash)
    }

    pub async fn transaction_id_by_program_id(
        &self,
        program_id: &str,
        ctx: &CallContext,
    ) -> Result<String, QueryError> {
        let Quoted(id) = self
            .fetch(
                Endpoint::TransactionIdByProgramId(program_id),
                "transaction id",
                ctx,
            )
            .await?;
        Ok(id)
    }

    pub async fn transaction_id_by_transition_id(
        &self,
        transition_id: &str,
        ctx: &CallContext,
    ) -> Result<String, QueryError> {
        let Quoted(id) = self
            .fetch(
                Endpoint::TransactionIdByTransitionId(transition_id),
                "transaction id",
                ctx,
            )
            .await?;
        Ok(id)
    }

    pub async fn transition_id_by_io_id(
        &self,
        io_id: &str,
        ctx: &CallContext,
    ) -> Result<String, QueryError> {
        let Quoted(id) = self
            .fetch(Endpoint::TransitionIdByIoId(io_id), "transition id", ctx)
            .await?;
        Ok(id)
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("root", &self.resolver.root())
            .finish_non_exhaustive()
    }
}
