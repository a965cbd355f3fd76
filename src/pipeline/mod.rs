pub mod executor;

pub use executor::{CutExecutor, ExecutionSummary};
pub use markcut_av::{MediaGateway, Workspace};
