pub mod candidates;
pub mod enrich;
pub mod http_client;
pub mod output;
pub mod probe;

// re-export modules used in tests
pub use crate::enrich::*;
pub use crate::probe::*;
