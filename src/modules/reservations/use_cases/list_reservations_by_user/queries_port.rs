use crate::modules::reservations::use_cases::list_reservations_by_user::projection::MembershipView;
use async_trait::async_trait;

/// Reads the best-effort membership mirror. Results may be stale or drift from
/// the rosters; capacity and membership decisions must read the event record
/// store instead.
#[async_trait]
pub trait MembershipQueries {
    async fn list_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<MembershipView>>;
}
