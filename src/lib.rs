//! flipmatch (workspace facade crate).
//!
//! This package keeps the `flipmatch::{core,host,persist,types}` public API in
//! one place while the implementation lives in dedicated crates under `crates/`.

pub use flipmatch_core as core;
pub use flipmatch_host as host;
pub use flipmatch_persist as persist;
pub use flipmatch_types as types;
