// Shared test fixture for AttendeeAdmittedV1.

use crate::modules::reservations::core::events::v1::attendee_admitted::AttendeeAdmittedV1;

/// Canonical admission of the fixed user into the fixed event.
pub fn make_attendee_admitted_v1_event() -> AttendeeAdmittedV1 {
    AttendeeAdmittedV1 {
        event_id: "event-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        revision: 1,
        occurred_at: 1_700_000_000_000,
    }
}
