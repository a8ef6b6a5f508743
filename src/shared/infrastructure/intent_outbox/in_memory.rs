use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::{HashSet, VecDeque};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pending: Mutex<VecDeque<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn pending_len(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }

        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut s = self.seen.lock().await;
            if !s.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.pending.lock().await.push_back(row);
        Ok(())
    }

    async fn drain(&self, max: usize) -> Result<Vec<OutboxRow>, OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Transient("Outbox offline".into()));
        }

        let mut guard = self.pending.lock().await;
        let take = max.min(guard.len());
        Ok(guard.drain(..take).collect())
    }
}

#[cfg(test)]
mod in_memory_domain_outbox_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> OutboxRow {
        OutboxRow {
            topic: "test_topic".to_string(),
            event_type: "test_event_type".to_string(),
            event_version: 1,
            stream_id: "Event-123".to_string(),
            stream_version: 1,
            occurred_at: 0,
            payload: serde_json::json!({ "name": "Teddy Test" }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_the_row(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        assert!(outbox.enqueue(row).await.is_ok());
        assert_eq!(outbox.pending_len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_enqueue_a_duplicate_stream_version(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(row.clone()).await.unwrap();
        let result = outbox.enqueue(row).await;
        assert!(matches!(
            result,
            Err(OutboxError::Duplicate {
                stream_id: _,
                stream_version: 1
            })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drain_in_enqueue_order_up_to_the_limit(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        for version in 1..=3 {
            let mut next = row.clone();
            next.stream_version = version;
            outbox.enqueue(next).await.unwrap();
        }

        let first = outbox.drain(2).await.unwrap();
        assert_eq!(
            first.iter().map(|r| r.stream_version).collect::<Vec<_>>(),
            vec![1, 2]
        );
        let rest = outbox.drain(10).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(outbox.pending_len().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_enqueue_when_offline(row: OutboxRow) {
        let mut outbox = InMemoryDomainOutbox::new();
        outbox.toggle_offline();
        let result = outbox.enqueue(row).await;
        assert!(matches!(result, Err(OutboxError::Backend(_))));
    }
}
