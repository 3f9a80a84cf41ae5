// Adapters layer: HTTP clients for the external services behind the domain ports.

pub mod messaging;
pub mod nlp;

pub use messaging::LineClient;
pub use nlp::CotohaClient;
