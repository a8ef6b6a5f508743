#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AttendeeReleasedV1 {
    pub event_id: String,
    pub user_id: String,
    pub revision: i64,
    pub occurred_at: i64,
    /// False when the user was not on the roster and the release was a no-op.
    pub was_member: bool,
}
