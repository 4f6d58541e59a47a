// Service identity, stamped at build time

/// Crate version; also reported as `node_version` in the status payload.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
