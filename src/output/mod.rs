pub mod artifact;
pub mod reporter;

pub use artifact::save_artifact;
