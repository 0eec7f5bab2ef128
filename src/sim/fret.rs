//! The fret currently held down, shared by every string.

use log::debug;

use crate::clock::Deadline;

use super::params::MAX_FRET;

/// Holds the fret offset. Releasing a fret key does not clear it right away:
/// the clear waits out a short coyote time so that rolling from one fret key
/// to the next never drops back to the open string in between.
#[derive(Debug, Clone)]
pub struct FretSelector {
    fret: u8,
    clear: Deadline,
    coyote_ms: f64,
}

impl FretSelector {
    pub fn new(coyote_ms: f64) -> Self {
        FretSelector {
            fret: 0,
            clear: Deadline::disarmed(),
            coyote_ms,
        }
    }

    pub fn fret(&self) -> u8 {
        self.fret
    }

    pub fn clear_pending(&self) -> bool {
        self.clear.is_armed()
    }

    /// A fret key went down. Supersedes any pending clear.
    pub fn press(&mut self, fret: u8) {
        self.clear.cancel();
        self.fret = fret.min(MAX_FRET);
        debug!("fret {}", self.fret);
    }

    /// A fret key came up: clear after the coyote time.
    pub fn release(&mut self, now_ms: f64) {
        self.clear.arm(now_ms, self.coyote_ms);
    }

    /// Apply a pending clear if its time has come.
    pub fn poll(&mut self, now_ms: f64) {
        if self.clear.poll(now_ms) {
            debug!("fret cleared (was {})", self.fret);
            self.fret = 0;
        }
    }
}
