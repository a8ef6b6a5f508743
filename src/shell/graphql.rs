use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::reservations::use_cases::list_reservations_by_user::inbound::graphql::ReservationsQuery;
use crate::modules::reservations::use_cases::manage_events::inbound::graphql::{
    EventsMutation, EventsQuery,
};
use crate::modules::reservations::use_cases::release_seat::inbound::graphql::ReleaseMutation;
use crate::modules::reservations::use_cases::reserve_seat::inbound::graphql::ReserveMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EventsQuery, ReservationsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(EventsMutation, ReserveMutation, ReleaseMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
