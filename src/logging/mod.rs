//! Console logging and the run summary.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{SectionEntry, SectionStatus};

/// Target used for stage headers (`==> ...`).
pub(crate) const STAGE_TARGET: &str = "setup_gen::stage";
