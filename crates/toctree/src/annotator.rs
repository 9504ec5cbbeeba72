//! Top-level orchestration: acquire the root, then annotate it
//!
//! The feature is cosmetic, so nothing here may break the page: every
//! failure degrades to leaving the outline unstyled, with a warning log
//! as the only trace.

use std::time::Duration;

use crossbeam_channel::Receiver;

use crate::acquire::{self, FrameClock, OutlineHost, MAX_ATTEMPTS};
use crate::context::AnnotateContext;
use crate::error::AnnotateError;
use crate::node::List;
use crate::render::{self, Outcome};

/// Acquires the outline root from a host and runs the annotation pass.
#[derive(Debug, Clone)]
pub struct TreeAnnotator {
    ctx: AnnotateContext,
    max_attempts: usize,
}

impl Default for TreeAnnotator {
    fn default() -> Self {
        Self {
            ctx: AnnotateContext::default(),
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl TreeAnnotator {
    /// Create an annotator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotator with a custom render context.
    pub fn with_context(ctx: AnnotateContext) -> Self {
        Self {
            ctx,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the polling budget used by [`TreeAnnotator::run`].
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Annotate an already-acquired root directly.
    pub fn annotate(&self, root: &mut List) -> Result<Outcome, AnnotateError> {
        render::annotate(root, &self.ctx)
    }

    /// Poll the host once per frame for the root, then annotate it.
    ///
    /// Gives up silently (returning [`Outcome::Abandoned`]) if the root
    /// never appears within the polling budget.
    pub fn run<H: OutlineHost>(&self, host: &mut H, clock: &mut impl FrameClock) -> Outcome {
        if let Err(err) = acquire::wait_polling(host, clock, self.max_attempts) {
            log::warn!("toc tree left unstyled: {err}");
            return Outcome::Abandoned;
        }
        self.finish(host)
    }

    /// Wait for the pipeline's readiness signal, then annotate the root.
    pub fn run_when_ready<H: OutlineHost>(
        &self,
        host: &mut H,
        ready: &Receiver<()>,
        timeout: Duration,
    ) -> Outcome {
        if let Err(err) = acquire::wait_signal(ready, timeout) {
            log::warn!("toc tree left unstyled: {err}");
            return Outcome::Abandoned;
        }
        self.finish(host)
    }

    fn finish<H: OutlineHost>(&self, host: &mut H) -> Outcome {
        let Some(root) = host.root_mut() else {
            log::warn!("host reported readiness but produced no outline root");
            return Outcome::Abandoned;
        };
        match render::annotate(root, &self.ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("toc tree annotation aborted: {err}");
                Outcome::Abandoned
            }
        }
    }
}
