pub mod endpoint;

pub use endpoint::{probe_url, run_pass, ProbeOutcome, ProbeReport};
