pub mod dispatcher;
pub mod filter;
pub mod pipeline;
