//! CLI command handlers, one file per action.

mod dir_album;
mod internal_link;
mod lock;

pub use dir_album::run_dir_album;
pub use internal_link::run_internal_link;
pub use lock::run_lock;
