use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::reservations::use_cases::list_reservations_by_user::projection::MembershipView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMembership {
    pub event_id: ID,
    pub reserved_at: i64,
}

impl From<MembershipView> for GqlMembership {
    fn from(v: MembershipView) -> Self {
        Self {
            event_id: ID(v.event_id),
            reserved_at: v.reserved_at,
        }
    }
}

#[derive(Default)]
pub struct ReservationsQuery;

#[Object]
impl ReservationsQuery {
    /// Best-effort mirror; may lag behind the rosters.
    async fn reservations_by_user(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlMembership>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_by_user_id(&user_id).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
