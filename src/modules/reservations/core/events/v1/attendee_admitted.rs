// A user was added to an event roster by an applied admission.
//
// `revision` is the event record revision produced by the admission and
// doubles as the stream version for outbox de-duplication.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AttendeeAdmittedV1 {
    pub event_id: String,
    pub user_id: String,
    pub revision: i64,
    pub occurred_at: i64,
}
