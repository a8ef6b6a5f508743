use crate::modules::reservations::adapters::outbound::projections::{
    MembershipProjectionRepository, WatermarkRepository,
};
use crate::modules::reservations::core::events::RosterEvent;
use crate::modules::reservations::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: MembershipProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: MembershipProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &RosterEvent,
    ) -> anyhow::Result<()> {
        let position = format!("{stream_id}:{version}");
        if self.watermark_repository.get(&self.name).await?.as_deref() == Some(position.as_str()) {
            tracing::debug!(projector = %self.name, %position, "already applied, skipping");
            return Ok(());
        }
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Remove { user_id, event_id } => {
                    self.repository.remove(&user_id, &event_id).await?
                }
            }
        }
        self.watermark_repository.set(&self.name, &position).await?;
        Ok(())
    }
}
