//! CLI command handlers.

mod discover;

pub use discover::run_discover;
#[cfg(test)]
pub(crate) use discover::write_apps;
