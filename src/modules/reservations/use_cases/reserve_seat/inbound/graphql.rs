use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::reservations::use_cases::manage_events::inbound::graphql::GqlRosterSnapshot;
use crate::modules::reservations::use_cases::reserve_seat::command::ReserveSeat;
use crate::modules::reservations::use_cases::reserve_seat::decision::{
    ReserveOutcome, ReserveStatus,
};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlReserveStatus {
    Admitted,
    AlreadyReserved,
    Full,
    EventNotFound,
    Contended,
}

impl From<ReserveStatus> for GqlReserveStatus {
    fn from(v: ReserveStatus) -> Self {
        match v {
            ReserveStatus::Admitted => Self::Admitted,
            ReserveStatus::AlreadyReserved => Self::AlreadyReserved,
            ReserveStatus::Full => Self::Full,
            ReserveStatus::EventNotFound => Self::EventNotFound,
            ReserveStatus::Contended => Self::Contended,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReserveResult {
    pub status: GqlReserveStatus,
    pub event: Option<GqlRosterSnapshot>,
    pub message: Option<String>,
}

impl From<ReserveOutcome> for GqlReserveResult {
    fn from(v: ReserveOutcome) -> Self {
        let status = v.status().into();
        match v {
            ReserveOutcome::Admitted(snapshot) => Self {
                status,
                event: Some(snapshot.into()),
                message: None,
            },
            ReserveOutcome::Rejected(reason) => Self {
                status,
                event: None,
                message: Some(reason.to_string()),
            },
        }
    }
}

#[derive(Default)]
pub struct ReserveMutation;

#[Object]
impl ReserveMutation {
    async fn reserve(
        &self,
        context: &Context<'_>,
        event_id: ID,
        user_id: String,
    ) -> GqlResult<GqlReserveResult> {
        if user_id.trim().is_empty() {
            return Err(async_graphql::Error::new("userId must not be blank"));
        }
        let state = context.data_unchecked::<AppState>();
        let outcome = state
            .reserve_handler
            .reserve_with_retry(ReserveSeat::new(event_id.0, user_id))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(outcome.into())
    }
}
