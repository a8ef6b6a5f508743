use crate::modules::reservations::adapters::outbound::event_records::MemberRemoval;
use crate::modules::reservations::core::{
    events::v1::attendee_released::AttendeeReleasedV1, intents::RosterIntent,
};
use crate::shared::core::primitives::UserId;

/// Every release is mirrored, including no-op ones, so a drifted mirror entry
/// gets cleaned up by the next release of that user.
pub fn decide_released(
    removal: &MemberRemoval,
    user_id: &UserId,
    occurred_at: i64,
) -> Vec<RosterIntent> {
    vec![RosterIntent::SyncMembershipRemoved {
        payload: AttendeeReleasedV1 {
            event_id: removal.record.event_id.to_string(),
            user_id: user_id.to_string(),
            revision: removal.record.revision,
            occurred_at,
            was_member: removal.was_member,
        },
    }]
}
