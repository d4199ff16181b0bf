//! Ground-truth acquisition for protodex
//!
//! Reads the on-disk game sources an index is checked against: the server
//! `.cfg` config, `.lst` listing files, art/proto directory contents, `.msg`
//! dialogue files, and `#define` declarations in script sources. Every
//! reader recomputes its result from disk; nothing is cached between runs.

pub mod cfg;
pub mod defines;
pub mod error;
pub mod listing;
pub mod msg;
pub mod scan;

pub use cfg::ServerConfig;
pub use defines::{define_names, read_define_names};
pub use error::{Error, Result};
pub use listing::{parse_listing, read_listing};
pub use msg::{msg_pids, read_msg_pids};
pub use scan::scan_extensions;
