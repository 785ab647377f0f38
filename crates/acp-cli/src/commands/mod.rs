//! Command implementations for the acp CLI

pub mod completions;
pub mod env;
pub mod init;
pub mod show;
pub mod validate;

pub use completions::run_completions;
pub use env::run_check_env;
pub use init::run_init;
pub use show::{run_schema, run_show};
pub use validate::run_validate;
