use crate::modules::reservations::use_cases::list_reservations_by_user::projection::MembershipRow;
use async_trait::async_trait;

#[async_trait]
pub trait MembershipProjectionRepository: Send + Sync {
    async fn upsert(&self, row: MembershipRow) -> anyhow::Result<()>;
    async fn remove(&self, user_id: &str, event_id: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
