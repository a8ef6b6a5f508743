use crate::modules::reservations::core::record::EventRecord;
use crate::shared::core::primitives::UserId;

/// Membership of one user in one event roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipState {
    NotMember,
    Member,
}

impl MembershipState {
    pub fn of(record: &EventRecord, user_id: &UserId) -> Self {
        if record.is_member(user_id) {
            MembershipState::Member
        } else {
            MembershipState::NotMember
        }
    }
}
