use crate::modules::reservations::core::events::v1::attendee_admitted::AttendeeAdmittedV1;
use crate::modules::reservations::core::events::v1::attendee_released::AttendeeReleasedV1;

/// Follow-up work requested by a successful roster mutation.
/// The outbound intent_outbox adapter translates these into OutboxRows.
pub enum RosterIntent {
    SyncMembershipAdded { payload: AttendeeAdmittedV1 },
    SyncMembershipRemoved { payload: AttendeeReleasedV1 },
}
