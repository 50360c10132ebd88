//! Daftar offline report
//!
//! Reads a JSON export of entries and archive copies and prints the summary,
//! analytics, first listing page and any half-finished deletes as JSON.
//!
//! Usage: daftar-report <snapshot.json> [user-id]
//!
//! Without a user id, the owner of the newest entry is used.

use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daftar_core::entries::EntryService;
use daftar_core::filter::EntryFilter;
use daftar_core::session::{Actor, SessionContext};
use daftar_shared::{AppConfig, AppResult};
use daftar_shared::types::UserId;
use daftar_store::{InMemoryStore, Snapshot};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daftar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: daftar-report <snapshot.json> [user-id]");
    };

    let config = AppConfig::load().context("failed to load configuration")?;
    let snapshot =
        Snapshot::load(&path).with_context(|| format!("failed to read snapshot {path}"))?;
    info!(
        path = %path,
        entries = snapshot.entries.len(),
        archived = snapshot.deleted_entries.len(),
        "Snapshot loaded"
    );

    let user_id = match args.next() {
        Some(raw) => UserId::from_str(&raw).context("invalid user id")?,
        None => match snapshot.entries.iter().max_by_key(|e| (e.date, e.created_at)) {
            Some(entry) => entry.user_id,
            None => bail!("snapshot has no entries; pass a user id"),
        },
    };

    let store = InMemoryStore::from_snapshot(snapshot)?;
    let report = build_report(store, &config, user_id).inspect_err(|err| {
        error!(
            code = err.error_code(),
            retryable = err.is_retryable(),
            error = %err,
            "Report failed"
        );
    })?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn build_report(store: InMemoryStore, config: &AppConfig, user_id: UserId) -> AppResult<Value> {
    let service = EntryService::from_config(store, config)?;
    let session = SessionContext::signed_in(Actor::new(user_id));
    let today = Utc::now().date_naive();

    let filter = EntryFilter::new();
    let summary = service.summary(&session, &filter)?;
    let analytics = service.analytics(&session, today)?;
    let first_page = service.list_page(&session, &filter, 1)?;
    let reconciliation = service.reconcile(false)?;
    if !reconciliation.is_clean() {
        warn!(
            stranded = reconciliation.stranded.len(),
            "Archived entries still active"
        );
    }

    Ok(json!({
        "user_id": user_id,
        "rate_table": config.calculation.rate_table.version,
        "summary": summary,
        "analytics": analytics,
        "first_page": first_page,
        "stranded_deletes": reconciliation
            .stranded
            .iter()
            .map(|archived| archived.original_entry_id)
            .collect::<Vec<_>>(),
    }))
}
