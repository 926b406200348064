mod cli;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use aleo_query_core::{CallContext, LedgerClient, QueryError};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let client = LedgerClient::connect(&args.endpoint, &args.network)
        .wrap_err("while configuring the ledger client")?;
    tracing::debug!(root = client.resolver().root(), "client ready");

    // Ctrl-C drops the in-flight request instead of killing the process
    // mid-write.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received; cancelling query");
                cancel.cancel();
            }
        });
    }

    let mut ctx = CallContext::background().with_cancellation(cancel);
    if let Some(secs) = args.timeout_secs {
        ctx = ctx.with_timeout(Duration::from_secs(secs));
    }

    run(&client, &args.endpoint, args.command, &ctx).await
}

async fn run(
    client: &LedgerClient,
    endpoint: &str,
    command: Command,
    ctx: &CallContext,
) -> eyre::Result<()> {
    let fail = |err: QueryError| {
        eyre!(format_query_error(endpoint, &err)).wrap_err("ledger query failed")
    };

    match command {
        Command::Height => print_scalar(client.latest_height(ctx).await.map_err(fail)?),
        Command::Hash => print_scalar(client.latest_hash(ctx).await.map_err(fail)?),
        Command::LatestBlock => print_json(&client.latest_block(ctx).await.map_err(fail)?)?,
        Command::StateRoot => print_scalar(client.latest_state_root(ctx).await.map_err(fail)?),
        Command::Block { id } => print_json(&client.block(&id, ctx).await.map_err(fail)?)?,
        Command::BlockTransactions { height } => {
            print_json(&client.block_transactions(height, ctx).await.map_err(fail)?)?
        }
        Command::HeightByHash { hash } => {
            print_scalar(client.height_by_hash(&hash, ctx).await.map_err(fail)?)
        }
        Command::Transaction { id } => {
            print_json(&client.transaction(&id, ctx).await.map_err(fail)?)?
        }
        Command::Program { program_id, out } => {
            let program = client.program(&program_id, ctx).await.map_err(fail)?;
            match out {
                Some(path) => {
                    write_program_lines(&path, &program.lines)
                        .await
                        .wrap_err_with(|| format!("write program source to {}", path.display()))?;
                    tracing::info!(
                        program = %program.program_id,
                        path = %path.display(),
                        lines = program.lines.len(),
                        "wrote program source"
                    );
                }
                None => {
                    for line in &program.lines {
                        println!("{line}");
                    }
                }
            }
        }
        Command::Mappings { program_id } => {
            print_json(&client.mapping_names(&program_id, ctx).await.map_err(fail)?)?
        }
        Command::MappingValue {
            program_id,
            mapping_name,
            mapping_key,
        } => print_json(
            &client
                .mapping_value(&program_id, &mapping_name, &mapping_key, ctx)
                .await
                .map_err(fail)?,
        )?,
        Command::Beacons => print_json(&client.beacons(ctx).await.map_err(fail)?)?,
        Command::PeerCount => print_scalar(client.peer_count(ctx).await.map_err(fail)?),
        Command::Peers => print_json(&client.all_peers(ctx).await.map_err(fail)?)?,
        Command::NodeAddress => print_scalar(client.node_address(ctx).await.map_err(fail)?),
        Command::FindBlockHash { transaction_id } => print_scalar(
            client
                .block_hash_by_transaction_id(&transaction_id, ctx)
                .await
                .map_err(fail)?,
        ),
        Command::FindDeployment { program_id } => print_scalar(
            client
                .transaction_id_by_program_id(&program_id, ctx)
                .await
                .map_err(fail)?,
        ),
        Command::FindTransaction { transition_id } => print_scalar(
            client
                .transaction_id_by_transition_id(&transition_id, ctx)
                .await
                .map_err(fail)?,
        ),
        Command::FindTransition { io_id } => {
            print_scalar(client.transition_id_by_io_id(&io_id, ctx).await.map_err(fail)?)
        }
        Command::StatePath { commitment } => {
            print_scalar(client.state_path(&commitment, ctx).await.map_err(fail)?)
        }
    }
    Ok(())
}

fn print_scalar(value: impl std::fmt::Display) {
    println!("{value}");
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).wrap_err("render result as JSON")?;
    println!("{json}");
    Ok(())
}

/// One source line per file line, each newline-terminated.
async fn write_program_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut contents = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    tokio::fs::write(path, contents).await
}

fn format_query_error(endpoint: &str, err: &QueryError) -> String {
    let mut lines = vec![format!("query against `{endpoint}` failed"), format!("error: {err}")];

    match err {
        QueryError::Transport { .. } => {
            let chain = error_chain(err);
            if chain.contains("dns error") || chain.contains("resolve") {
                lines.push(
                    "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                        .into(),
                );
            } else {
                lines.push(
                    "hint: request could not be sent; verify the endpoint URL and network access"
                        .into(),
                );
            }
        }
        QueryError::Status { status: 404, .. } => lines.push(
            "hint: the node has no such entity, or --network does not match the node".into(),
        ),
        QueryError::Decode { .. } | QueryError::MalformedScalar { .. } => lines.push(
            "hint: the node answered in an unexpected shape; verify the endpoint serves the Aleo ledger API"
                .into(),
        ),
        QueryError::DeadlineExceeded { .. } => {
            lines.push("hint: raise --timeout-secs or pick a closer node".into())
        }
        _ => {}
    }

    lines.join("\n")
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
