pub mod json_api;

pub use json_api::{
    derive_state_json, event_row_schema_json, validate_event_json, DeriveRequest, DeriveResponse,
    SCHEMA_VERSION,
};
