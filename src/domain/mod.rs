//! Domain Layer
//!
//! The core of sasskit: target resolution, argument building and output
//! parsing. Nothing here spawns processes.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (CompilationTarget, BuildMode)
//! - `services/` - Domain services (TargetResolver, ArgumentBuilder, OutputParser)
//! - `ports/` - Interface definitions for infrastructure

pub mod ports;
pub mod services;
pub mod value_objects;
