use crate::modules::reservations::core::{
    events::v1::attendee_admitted::AttendeeAdmittedV1,
    intents::RosterIntent,
    record::EventRecord,
    state::MembershipState,
};
use crate::modules::reservations::use_cases::reserve_seat::decision::RejectionReason;
use crate::shared::core::primitives::UserId;

/// Classifies a rejected admission from a diagnostic read of the record.
pub fn classify_rejection(diagnostic: Option<&EventRecord>, user_id: &UserId) -> RejectionReason {
    let Some(record) = diagnostic else {
        return RejectionReason::EventNotFound;
    };
    match MembershipState::of(record, user_id) {
        MembershipState::Member => RejectionReason::AlreadyReserved,
        MembershipState::NotMember if record.is_full() => RejectionReason::Full,
        MembershipState::NotMember => RejectionReason::Contended,
    }
}

/// Follow-up intents for an applied admission.
pub fn decide_admitted(record: &EventRecord, user_id: &UserId, occurred_at: i64) -> Vec<RosterIntent> {
    vec![RosterIntent::SyncMembershipAdded {
        payload: AttendeeAdmittedV1 {
            event_id: record.event_id.to_string(),
            user_id: user_id.to_string(),
            revision: record.revision,
            occurred_at,
        },
    }]
}
