use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use crate::{
    config::Config,
    foundation::error::{VideoSwitchError, VideoSwitchResult},
};

/// External word cloud generator as seen by the controller.
///
/// Runs out of process; completion is observed with a non-blocking poll.
pub trait Regenerator {
    /// Launch one run. Must not be called while [`Regenerator::is_running`].
    fn start(&mut self) -> VideoSwitchResult<()>;
    /// Whether a run is in flight.
    fn is_running(&self) -> bool;
    /// Exit code of the finished run, once. Termination by signal reports `-1`.
    fn try_exit(&mut self) -> Option<i32>;
}

/// Generator program spawned as a child process:
/// `<program> input=<wordlist> output=<image> mask=<mask>`.
///
/// A run still in flight when this is dropped is killed and reaped.
#[derive(Debug)]
pub struct ProcessRegenerator {
    program: PathBuf,
    args: Vec<OsString>,
    child: Option<Child>,
}

impl ProcessRegenerator {
    /// Generator invocation for explicit paths.
    pub fn new(program: &Path, wordlist: &Path, image: &Path, mask: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            args: vec![
                key_value("input", wordlist),
                key_value("output", image),
                key_value("mask", mask),
            ],
            child: None,
        }
    }

    /// Generator invocation for the paths in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.program_path,
            &config.wordlist_path,
            &config.image_path,
            &config.mask_path,
        )
    }

    /// Arguments passed on every run.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

fn key_value(key: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(format!("{key}="));
    arg.push(path.as_os_str());
    arg
}

impl Regenerator for ProcessRegenerator {
    fn start(&mut self) -> VideoSwitchResult<()> {
        if self.child.is_some() {
            return Err(VideoSwitchError::generator("generator is already running"));
        }
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                VideoSwitchError::generator(format!(
                    "failed to spawn '{}': {e}",
                    self.program.display()
                ))
            })?;
        tracing::debug!(pid = child.id(), program = %self.program.display(), "generator started");
        self.child = Some(child);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.child.is_some()
    }

    fn try_exit(&mut self) -> Option<i32> {
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(None) => None,
            Ok(Some(status)) => {
                self.child = None;
                Some(status.code().unwrap_or(-1))
            }
            Err(e) => {
                tracing::warn!("lost track of generator process: {e}");
                self.child = None;
                Some(-1)
            }
        }
    }
}

impl Drop for ProcessRegenerator {
    fn drop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        tracing::debug!(pid = child.id(), "stopping generator");
        if let Err(e) = child.kill() {
            tracing::warn!("could not stop generator: {e}");
        }
        if let Err(e) = child.wait() {
            tracing::warn!("could not reap generator: {e}");
        }
    }
}

/// What happened to a regeneration request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegenRequest {
    /// A run was launched.
    Started,
    /// A run is in flight; one follow-up run will start when it exits.
    Queued,
    /// The generator could not be launched.
    Failed,
}

/// Keeps at most one generator run in flight.
///
/// Requests arriving during a run collapse into a single follow-up run, so
/// words submitted meanwhile are still picked up.
#[derive(Debug)]
pub struct GeneratorSupervisor<R> {
    inner: R,
    rerun_pending: bool,
}

impl<R: Regenerator> GeneratorSupervisor<R> {
    /// Supervise `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            rerun_pending: false,
        }
    }

    /// Supervised generator.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Mutable access to the supervised generator.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Whether a follow-up run is queued.
    pub fn rerun_pending(&self) -> bool {
        self.rerun_pending
    }

    /// Ask for a regeneration.
    pub fn request(&mut self) -> RegenRequest {
        if self.inner.is_running() {
            self.rerun_pending = true;
            tracing::debug!("generator busy, follow-up run queued");
            return RegenRequest::Queued;
        }
        self.launch()
    }

    /// Exit code of a finished run, if any. Starts the queued follow-up run.
    pub fn poll(&mut self) -> Option<i32> {
        let code = self.inner.try_exit()?;
        if self.rerun_pending {
            self.rerun_pending = false;
            self.launch();
        }
        Some(code)
    }

    fn launch(&mut self) -> RegenRequest {
        match self.inner.start() {
            Ok(()) => RegenRequest::Started,
            Err(e) => {
                tracing::warn!("word cloud generator not started: {e}");
                RegenRequest::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wordcloud/generator.rs"]
mod tests;
