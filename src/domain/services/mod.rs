//! Domain Services
//!
//! Pure logic that turns configuration into compiler invocations and
//! compiler output back into results. Existence checks go through the
//! [`FileSystem`](crate::domain::ports::FileSystem) port.

mod argument_builder;
mod output_parser;
mod target_resolver;

pub use argument_builder::{
    render_command_line, ArgumentBuilder, BuiltArguments, Invocation, INTERACTIVE_FLAG,
    STDIN_FLAG, UPDATE_FLAG, WATCH_FLAG,
};
pub use output_parser::{CompiledFile, OutputParser};
pub use target_resolver::{ResolvedTargetSet, SourceCheck, TargetResolver};
