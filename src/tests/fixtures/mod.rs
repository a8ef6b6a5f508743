pub mod events {
    pub mod attendee_admitted_v1;
    pub mod attendee_released_v1;
}

pub mod records {
    pub mod event_record;
}

pub mod state;
