pub mod v1 {
    pub mod attendee_admitted;
    pub mod attendee_released;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RosterEvent {
    AttendeeAdmittedV1(v1::attendee_admitted::AttendeeAdmittedV1),
    AttendeeReleasedV1(v1::attendee_released::AttendeeReleasedV1),
}

impl RosterEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            RosterEvent::AttendeeAdmittedV1(_) => "AttendeeAdmitted",
            RosterEvent::AttendeeReleasedV1(_) => "AttendeeReleased",
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            RosterEvent::AttendeeAdmittedV1(e) => e.occurred_at,
            RosterEvent::AttendeeReleasedV1(e) => e.occurred_at,
        }
    }
}
