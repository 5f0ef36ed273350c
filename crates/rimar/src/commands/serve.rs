//! Serve command: run the MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rimar_core::config::Config;
use rimar_core::store::LyricStore;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use super::StoreHandle;
use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Seed the rhyme pool with the built-in vocabulary before serving.
    #[arg(long)]
    pub seed: bool,
}

/// Serve tools over stdio until the client disconnects.
///
/// The store snapshot is saved after every write and once more on shutdown.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let handle = StoreHandle::open(&config)?;
    let path = handle.path().map(camino::Utf8Path::to_path_buf);
    let store = Arc::new(handle.store);
    if args.seed {
        rimar_core::seed_words(store.as_ref())?;
    }
    info!(
        words = store.word_count()?,
        store = ?path,
        "starting MCP server on stdio"
    );

    let server = ProjectServer::new(Arc::clone(&store), path.clone(), &config)
        .with_max_input(max_input_bytes);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped unexpectedly")?;

    if let Some(ref path) = path {
        store
            .save(path)
            .with_context(|| format!("failed to save store to {path}"))?;
    }
    info!("MCP server stopped");
    Ok(())
}
