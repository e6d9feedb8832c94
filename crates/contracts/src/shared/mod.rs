pub mod api_error;
pub mod batch;
pub mod envelope;
pub mod fetch_state;
pub mod request_seq;
pub mod table;
pub mod validation;
