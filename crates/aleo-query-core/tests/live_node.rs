use std::env;
use std::sync::Once;
use std::time::Duration;

use aleo_query_core::{CallContext, LedgerClient};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("aleo_query_core=debug")
                }),
            )
            .with_target(true)
            .try_init();
    });
}

fn live_client() -> LedgerClient {
    let endpoint =
        env::var("ALEO_QUERY_TEST_ENDPOINT").expect("ALEO_QUERY_TEST_ENDPOINT must be set");
    let network = env::var("ALEO_QUERY_TEST_NETWORK").unwrap_or_else(|_| "testnet3".to_owned());
    LedgerClient::connect(&endpoint, &network).expect("client must construct")
}

fn bounded() -> CallContext {
    CallContext::background().with_timeout(Duration::from_secs(30))
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a reachable Aleo node; set ALEO_QUERY_TEST_ENDPOINT"]
async fn live_node_latest_chain_state_is_consistent() {
    init_tracing();
    let client = live_client();

    let height = client
        .latest_height(&bounded())
        .await
        .expect("latest height must decode");
    let block = client
        .block(&height.to_string(), &bounded())
        .await
        .expect("block at latest height must decode");
    assert_eq!(block.height(), height, "block height must match request");

    let by_hash = client
        .height_by_hash(block.hash(), &bounded())
        .await
        .expect("height by hash must decode");
    assert_eq!(by_hash, height, "hash lookup must round back to height");

    let root = client
        .latest_state_root(&bounded())
        .await
        .expect("state root must decode");
    assert!(!root.starts_with('"'), "state root must be unquoted");

    for confirmed in &block.transactions {
        let id = confirmed.transaction.id();
        let tx = client
            .transaction(id, &bounded())
            .await
            .expect("transaction by id must decode");
        assert_eq!(tx.id(), id);

        let block_hash = client
            .block_hash_by_transaction_id(id, &bounded())
            .await
            .expect("block hash lookup must decode");
        assert_eq!(block_hash, block.hash());
    }
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a reachable Aleo node; set ALEO_QUERY_TEST_ENDPOINT"]
async fn live_node_serves_credits_program() {
    init_tracing();
    let client = live_client();

    let program = client
        .program("credits.aleo", &bounded())
        .await
        .expect("credits.aleo source must decode");
    assert_eq!(program.lines[0], "program credits.aleo;");

    let mappings = client
        .mapping_names("credits.aleo", &bounded())
        .await
        .expect("mapping names must decode");
    assert!(mappings.iter().any(|name| name == "account"));
}
