//! Compile Use Case implementation

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CompilerOptions;
use crate::domain::ports::{LogSink, SassCommand};
use crate::domain::services::{
    ArgumentBuilder, Invocation, OutputParser, ResolvedTargetSet, TargetResolver,
};
use crate::error::SassResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::logging::TracingLogSink;
use crate::infrastructure::process::{ProcessInvoker, ProcessOutcome};

use super::options::CompileOptions;
use super::result::CompileReport;

/// Compile Use Case
///
/// Runs the compiler once and waits for it. Every method returns the
/// compiler's exit as an error when it is nonzero, with full stderr kept.
pub struct CompileUseCase {
    options: CompilerOptions,
    program: PathBuf,
    invoker: ProcessInvoker,
    sink: Arc<dyn LogSink>,
}

impl CompileUseCase {
    pub fn new(options: CompilerOptions, command: SassCommand) -> Self {
        let options = crate::application::with_command_snapshot(options, &command);
        Self {
            options,
            program: command.program,
            invoker: ProcessInvoker::new(),
            sink: Arc::new(TracingLogSink),
        }
    }

    /// Use this invoker (registrar, working directory) for every run
    pub fn with_invoker(mut self, invoker: ProcessInvoker) -> Self {
        self.invoker = invoker;
        self
    }

    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Batch compile every configured target with `--update`.
    ///
    /// Fails before spawning anything when a flag is not allowed or a
    /// required source is missing. When no source exists at all the
    /// compiler is not run and the report is empty.
    pub fn compile_project(&self, compile: &CompileOptions) -> SassResult<CompileReport> {
        let targets = TargetResolver::resolve(&self.options);
        tracing::debug!(targets = targets.len(), "resolved compilation targets");

        let built = self.builder(compile).build(
            Invocation::Update,
            &targets,
            &compile.extra_flags,
        )?;

        let mut report = CompileReport {
            skipped: built.skipped.clone(),
            ..CompileReport::default()
        };
        for target in &report.skipped {
            tracing::debug!(source = %target.source, "optional source missing, skipped");
        }

        if built.input_count == 0 {
            tracing::info!("no sass sources found, nothing to compile");
            return Ok(report);
        }

        let outcome = self
            .invoker
            .clone()
            .with_working_dir(&compile.project_root)
            .invoke(&self.program, &built.args, None)?
            .into_success()?;

        report.compiled = OutputParser::parse_compiled(&outcome.stdout_text());
        report.generated = report
            .compiled
            .iter()
            .map(|file| file.destination.clone())
            .collect();
        report.warnings = non_blank_lines(&outcome.stderr_text());
        for warning in &report.warnings {
            self.sink.warn(warning);
        }

        tracing::info!(files = report.generated.len(), "sass compile finished");
        Ok(report)
    }

    /// Run the compiler with `flags` only: no targets, no defaults.
    ///
    /// `--watch` and `--interactive` are rejected.
    pub fn compile_args(&self, flags: &[String]) -> SassResult<ProcessOutcome> {
        let raw = self.raw_options();
        let built = ArgumentBuilder::new(&raw, LocalFs::new()).build(
            Invocation::Raw,
            &ResolvedTargetSet::default(),
            flags,
        )?;
        self.invoker
            .invoke(&self.program, &built.args, None)?
            .into_success()
    }

    /// Compile one document read from `input`; returns the compiled CSS
    pub fn compile_stdin(&self, input: &[u8], flags: &[String]) -> SassResult<Vec<u8>> {
        let raw = self.raw_options();
        let built = ArgumentBuilder::new(&raw, LocalFs::new()).build(
            Invocation::Stdin,
            &ResolvedTargetSet::default(),
            flags,
        )?;
        let outcome = self
            .invoker
            .invoke(&self.program, &built.args, Some(input))?
            .into_success()?;
        Ok(outcome.stdout)
    }

    pub fn compile_to_string(&self, input: &str, flags: &[String]) -> SassResult<String> {
        let css = self.compile_stdin(input.as_bytes(), flags)?;
        Ok(String::from_utf8_lossy(&css).into_owned())
    }

    fn builder<'a>(&'a self, compile: &CompileOptions) -> ArgumentBuilder<'a, LocalFs> {
        let builder =
            ArgumentBuilder::new(&self.options, LocalFs::new()).with_root(&compile.project_root);
        match compile.build_mode {
            Some(mode) => builder.with_build_mode(mode),
            None => builder,
        }
    }

    /// Only the snapshot survives into raw invocations
    fn raw_options(&self) -> CompilerOptions {
        let raw = CompilerOptions::empty();
        match &self.options.snapshot {
            Some(snapshot) => raw.with_snapshot(snapshot.clone()),
            None => raw,
        }
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
