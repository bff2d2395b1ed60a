//! Binary Locator Implementations

mod platform;

pub use platform::{bundled_relative_paths, PlatformBinaryLocator, BINARY_ENV, SNAPSHOT_ENV};
