use crate::modules::reservations::adapters::outbound::projections::{
    MembershipProjectionRepository, WatermarkRepository,
};
use crate::modules::reservations::use_cases::list_reservations_by_user::projection::{
    MembershipRow, MembershipView,
};
use crate::modules::reservations::use_cases::list_reservations_by_user::queries_port::MembershipQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<(String, String), MembershipRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl MembershipProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: MembershipRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        guard.insert((row.user_id.clone(), row.event_id.clone()), row);
        Ok(())
    }

    async fn remove(&self, user_id: &str, event_id: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        self.rows
            .write()
            .await
            .remove(&(user_id.to_string(), event_id.to_string()));
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl MembershipQueries for InMemoryProjections {
    async fn list_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<MembershipView>> {
        let guard = self.rows.read().await;

        let mut items: Vec<MembershipRow> = guard
            .iter()
            .filter(|((uid, _), _)| uid == user_id)
            .map(|(_, row)| row.clone())
            .collect();

        items.sort_by(|a, b| {
            a.reserved_at
                .cmp(&b.reserved_at)
                .then_with(|| a.event_id.cmp(&b.event_id))
        });
        Ok(items.into_iter().map(MembershipView::from).collect())
    }
}
