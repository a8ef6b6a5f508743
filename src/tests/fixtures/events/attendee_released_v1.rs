// Shared test fixture for AttendeeReleasedV1.

use crate::modules::reservations::core::events::v1::attendee_released::AttendeeReleasedV1;

/// Release that follows [`make_attendee_admitted_v1_event`].
///
/// [`make_attendee_admitted_v1_event`]: crate::tests::fixtures::events::attendee_admitted_v1::make_attendee_admitted_v1_event
pub fn make_attendee_released_v1_event() -> AttendeeReleasedV1 {
    AttendeeReleasedV1 {
        event_id: "event-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        revision: 2,
        occurred_at: 1_700_000_360_000,
        was_member: true,
    }
}
