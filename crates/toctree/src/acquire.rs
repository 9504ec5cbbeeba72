//! Acquiring the outline root from its producing host
//!
//! The root list is produced asynchronously by an external templating
//! pipeline. Hosts that can signal completion should hand the annotator a
//! readiness channel and use [`wait_signal`]; [`wait_polling`] keeps the
//! bounded once-per-frame poll for hosts that cannot.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::error::AcquireError;
use crate::node::List;

/// Default polling budget before the root is declared missing.
pub const MAX_ATTEMPTS: usize = 100;

/// A host page whose templating pipeline may not have produced the
/// outline root yet.
pub trait OutlineHost {
    /// Whether the root outline list exists yet.
    fn root_ready(&self) -> bool;

    /// The root outline list, if present.
    fn root_mut(&mut self) -> Option<&mut List>;
}

/// The suspension point between polling attempts. In the original browser
/// setting this is one animation frame.
pub trait FrameClock {
    /// Block or yield until the next frame.
    fn wait_frame(&mut self);
}

/// Poll the host once per frame until the root appears, up to
/// `max_attempts` checks.
pub fn wait_polling(
    host: &impl OutlineHost,
    clock: &mut impl FrameClock,
    max_attempts: usize,
) -> Result<(), AcquireError> {
    for attempt in 0..max_attempts {
        if host.root_ready() {
            log::debug!("outline root ready after {attempt} frame(s)");
            return Ok(());
        }
        clock.wait_frame();
    }
    Err(AcquireError::MissingRoot {
        attempts: max_attempts,
    })
}

/// Wait for an explicit readiness signal from the producing pipeline.
///
/// Preferred over polling when the host controls the pipeline: the
/// producer sends one unit on the channel once the root exists.
pub fn wait_signal(ready: &Receiver<()>, timeout: Duration) -> Result<(), AcquireError> {
    match ready.recv_timeout(timeout) {
        Ok(()) => Ok(()),
        Err(RecvTimeoutError::Timeout) => Err(AcquireError::SignalTimeout {
            waited_ms: timeout.as_millis() as u64,
        }),
        Err(RecvTimeoutError::Disconnected) => Err(AcquireError::SignalDropped),
    }
}
