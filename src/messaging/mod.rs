pub mod events;
pub mod signature;

pub use events::{parse_events, Event, Message};
pub use signature::{verify_signature, SIGNATURE_HEADER};
