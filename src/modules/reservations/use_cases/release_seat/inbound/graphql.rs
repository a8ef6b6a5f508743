use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::reservations::use_cases::manage_events::inbound::graphql::GqlRosterSnapshot;
use crate::modules::reservations::use_cases::release_seat::command::ReleaseSeat;
use crate::modules::reservations::use_cases::release_seat::decision::{
    ReleaseOutcome, ReleaseStatus,
};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlReleaseStatus {
    Released,
    EventNotFound,
}

impl From<ReleaseStatus> for GqlReleaseStatus {
    fn from(v: ReleaseStatus) -> Self {
        match v {
            ReleaseStatus::Released => Self::Released,
            ReleaseStatus::EventNotFound => Self::EventNotFound,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReleaseResult {
    pub status: GqlReleaseStatus,
    pub event: Option<GqlRosterSnapshot>,
    pub message: Option<String>,
}

impl From<ReleaseOutcome> for GqlReleaseResult {
    fn from(v: ReleaseOutcome) -> Self {
        let status = v.status().into();
        match v {
            ReleaseOutcome::Released(snapshot) => Self {
                status,
                event: Some(snapshot.into()),
                message: None,
            },
            ReleaseOutcome::EventNotFound => Self {
                status,
                event: None,
                message: Some("event not found".into()),
            },
        }
    }
}

#[derive(Default)]
pub struct ReleaseMutation;

#[Object]
impl ReleaseMutation {
    async fn release(
        &self,
        context: &Context<'_>,
        event_id: ID,
        user_id: String,
    ) -> GqlResult<GqlReleaseResult> {
        if user_id.trim().is_empty() {
            return Err(async_graphql::Error::new("userId must not be blank"));
        }
        let state = context.data_unchecked::<AppState>();
        let outcome = state
            .release_handler
            .handle(ReleaseSeat::new(event_id.0, user_id))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(outcome.into())
    }
}
