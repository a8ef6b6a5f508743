/// Mirror row: one user believes they hold a seat at one event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MembershipRow {
    pub user_id: String,
    pub event_id: String,
    pub reserved_at: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MembershipView {
    pub event_id: String,
    pub reserved_at: i64,
}

impl From<MembershipRow> for MembershipView {
    fn from(row: MembershipRow) -> Self {
        Self {
            event_id: row.event_id,
            reserved_at: row.reserved_at,
        }
    }
}
