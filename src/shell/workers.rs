use crate::modules::reservations::adapters::outbound::projections::{
    MembershipProjectionRepository, WatermarkRepository,
};
use crate::modules::reservations::core::events::RosterEvent;
use crate::modules::reservations::use_cases::list_reservations_by_user::handler::Projector;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MembershipSyncError {
    #[error("outbox drain failed: {0}")]
    Outbox(#[from] OutboxError),

    #[error("undecodable {event_type} payload: {source}")]
    Decode {
        event_type: String,
        source: serde_json::Error,
    },

    #[error("membership index rejected {stream_id}:{stream_version}: {error}")]
    Projection {
        stream_id: String,
        stream_version: i64,
        error: anyhow::Error,
    },
}

/// Relays roster messages from the outbox into the membership index.
///
/// A message that cannot be applied is logged and dropped. It is never
/// retried and never compensated against the roster.
pub struct MembershipSyncWorker<TOutbox, TRepository, TWatermarkRepository>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TRepository: MembershipProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    outbox: Arc<TOutbox>,
    projector: Projector<TRepository, TWatermarkRepository>,
    batch_size: usize,
    interval: Duration,
}

impl<TOutbox, TRepository, TWatermarkRepository>
    MembershipSyncWorker<TOutbox, TRepository, TWatermarkRepository>
where
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TRepository: MembershipProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        outbox: Arc<TOutbox>,
        projector: Projector<TRepository, TWatermarkRepository>,
        batch_size: usize,
        interval: Duration,
    ) -> Self {
        Self {
            outbox,
            projector,
            batch_size,
            interval,
        }
    }

    /// Drains one batch. Returns how many messages reached the index.
    pub async fn run_once(&self) -> Result<usize, MembershipSyncError> {
        let rows = self.outbox.drain(self.batch_size).await?;
        let mut applied = 0;
        for row in rows {
            match self.sync_row(&row).await {
                Ok(()) => applied += 1,
                Err(error) => tracing::warn!(
                    stream_id = %row.stream_id,
                    stream_version = row.stream_version,
                    %error,
                    "membership index sync failed, message dropped"
                ),
            }
        }
        Ok(applied)
    }

    pub async fn run(self) {
        tracing::info!(projector = %self.projector.name, "membership sync worker started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match self.run_once().await {
                Ok(0) => {}
                Ok(applied) => tracing::debug!(applied, "membership index synced"),
                Err(error) => tracing::warn!(%error, "membership sync cycle skipped"),
            }
        }
    }

    async fn sync_row(&self, row: &OutboxRow) -> Result<(), MembershipSyncError> {
        let event: RosterEvent = serde_json::from_value(row.payload.clone()).map_err(|source| {
            MembershipSyncError::Decode {
                event_type: row.event_type.clone(),
                source,
            }
        })?;
        self.projector
            .apply_one(&row.stream_id, row.stream_version, &event)
            .await
            .map_err(|error| MembershipSyncError::Projection {
                stream_id: row.stream_id.clone(),
                stream_version: row.stream_version,
                error,
            })
    }
}
