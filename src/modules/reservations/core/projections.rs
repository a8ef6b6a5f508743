use crate::modules::reservations::core::events::RosterEvent;
use crate::modules::reservations::use_cases::list_reservations_by_user::projection::MembershipRow;

pub enum Mutation {
    Upsert(MembershipRow),
    Remove { user_id: String, event_id: String },
}

pub fn apply(stream_id: &str, version: i64, event: &RosterEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        RosterEvent::AttendeeAdmittedV1(details) => vec![Mutation::Upsert(MembershipRow {
            user_id: details.user_id.clone(),
            event_id: details.event_id.clone(),
            reserved_at: details.occurred_at,
            last_event_id: Some(stream_key),
        })],
        RosterEvent::AttendeeReleasedV1(details) => vec![Mutation::Remove {
            user_id: details.user_id.clone(),
            event_id: details.event_id.clone(),
        }],
    }
}
