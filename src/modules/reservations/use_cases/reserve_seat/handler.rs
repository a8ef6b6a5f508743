use crate::modules::reservations::adapters::outbound::event_records::{
    ConditionalUpdate, EventRecordStore,
};
use crate::modules::reservations::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::reservations::use_cases::errors::{ApplicationError, within_deadline};
use crate::modules::reservations::use_cases::reserve_seat::command::ReserveSeat;
use crate::modules::reservations::use_cases::reserve_seat::decide::{
    classify_rejection, decide_admitted,
};
use crate::modules::reservations::use_cases::reserve_seat::decision::{
    RejectionReason, ReserveOutcome,
};
use crate::shared::core::primitives::now_millis;
use crate::modules::reservations::core::record::EventRecord;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use std::time::Duration;

pub struct ReserveSeatHandler<TStore, TOutbox>
where
    TStore: EventRecordStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    timeout: Duration,
    retry_attempts: u32,
}

impl<TStore, TOutbox> ReserveSeatHandler<TStore, TOutbox>
where
    TStore: EventRecordStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        store: Arc<TStore>,
        outbox: Arc<TOutbox>,
        timeout: Duration,
        retry_attempts: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
            timeout,
            retry_attempts,
        }
    }

    /// One admission attempt: a single conditional update, followed by a
    /// diagnostic read only when the update was not applied.
    pub async fn handle(&self, command: ReserveSeat) -> Result<ReserveOutcome, ApplicationError> {
        let update = within_deadline(
            self.timeout,
            self.store.admit_if_open(&command.event_id, &command.user_id),
        )
        .await?;

        match update {
            ConditionalUpdate::Applied(record) => {
                tracing::info!(
                    event_id = %command.event_id,
                    user_id = %command.user_id,
                    revision = record.revision,
                    seats_taken = record.roster.len(),
                    "reservation admitted"
                );
                self.sync_admission(&record, &command).await;
                Ok(ReserveOutcome::Admitted(record.snapshot()))
            }
            ConditionalUpdate::NotApplied => {
                let reason = self.diagnose(&command).await;
                tracing::debug!(
                    event_id = %command.event_id,
                    user_id = %command.user_id,
                    %reason,
                    "reservation rejected"
                );
                Ok(ReserveOutcome::Rejected(reason))
            }
        }
    }

    /// Idempotent retry policy over [`Self::handle`].
    ///
    /// Retries store failures and unknown outcomes. Once an attempt ended with
    /// an unknown outcome, a later `AlreadyReserved` means that attempt landed
    /// and is reported as an admission, and a final failure is still reported
    /// as an unknown outcome.
    pub async fn reserve_with_retry(
        &self,
        command: ReserveSeat,
    ) -> Result<ReserveOutcome, ApplicationError> {
        let mut unknown_timeout_ms: Option<u64> = None;
        let mut attempt = 0;
        loop {
            let result = match self.handle(command.clone()).await {
                Ok(ReserveOutcome::Rejected(RejectionReason::AlreadyReserved))
                    if unknown_timeout_ms.is_some() =>
                {
                    self.confirm_earlier_admission(&command).await
                }
                other => other,
            };
            match result {
                Ok(outcome) => return Ok(outcome),
                Err(error) if error.is_retryable() && attempt < self.retry_attempts => {
                    if let ApplicationError::OutcomeUnknown { timeout_ms } = &error {
                        unknown_timeout_ms = Some(*timeout_ms);
                    }
                    attempt += 1;
                    tracing::warn!(
                        event_id = %command.event_id,
                        user_id = %command.user_id,
                        attempt,
                        %error,
                        "retrying reservation"
                    );
                }
                Err(error) => {
                    return Err(match (unknown_timeout_ms, error) {
                        (_, error @ ApplicationError::OutcomeUnknown { .. }) => error,
                        (Some(timeout_ms), error) => {
                            tracing::warn!(
                                event_id = %command.event_id,
                                user_id = %command.user_id,
                                %error,
                                "giving up with an earlier attempt unconfirmed"
                            );
                            ApplicationError::OutcomeUnknown { timeout_ms }
                        }
                        (None, error) => error,
                    });
                }
            }
        }
    }

    async fn sync_admission(&self, record: &EventRecord, command: &ReserveSeat) {
        let intents = decide_admitted(record, &command.user_id, now_millis());
        match dispatch_intents(&*self.outbox, &self.topic, intents).await {
            Ok(()) => {}
            Err(OutboxError::Duplicate { stream_version, .. }) => tracing::warn!(
                event_id = %command.event_id,
                user_id = %command.user_id,
                stream_version,
                "membership sync already enqueued"
            ),
            Err(error) => tracing::warn!(
                event_id = %command.event_id,
                user_id = %command.user_id,
                %error,
                "membership index sync failed"
            ),
        }
    }

    async fn diagnose(&self, command: &ReserveSeat) -> RejectionReason {
        match within_deadline(self.timeout, self.store.find(&command.event_id)).await {
            Ok(diagnostic) => classify_rejection(diagnostic.as_ref(), &command.user_id),
            Err(error) => {
                tracing::warn!(
                    event_id = %command.event_id,
                    %error,
                    "diagnostic read failed, rejection left unclassified"
                );
                RejectionReason::Contended
            }
        }
    }

    async fn confirm_earlier_admission(
        &self,
        command: &ReserveSeat,
    ) -> Result<ReserveOutcome, ApplicationError> {
        let record = within_deadline(self.timeout, self.store.find(&command.event_id)).await?;
        match record {
            Some(record) if record.is_member(&command.user_id) => {
                tracing::info!(
                    event_id = %command.event_id,
                    user_id = %command.user_id,
                    "earlier attempt with unknown outcome was admitted"
                );
                // The unconfirmed attempt never reached its own sync.
                self.sync_admission(&record, command).await;
                Ok(ReserveOutcome::Admitted(record.snapshot()))
            }
            Some(record) => Ok(ReserveOutcome::Rejected(classify_rejection(
                Some(&record),
                &command.user_id,
            ))),
            None => Ok(ReserveOutcome::Rejected(RejectionReason::EventNotFound)),
        }
    }
}
