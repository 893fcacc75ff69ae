use crate::state::FrameState;

/// Flag-guarded scheduler: at most one unit of work is pending at a time.
///
/// Requests made while work is already pending are absorbed rather than
/// queued, so a burst of triggers between two frames costs one run.
#[derive(Debug)]
pub struct FrameThrottle {
    state: FrameState,
    absorbed: usize,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self { state: FrameState::Idle, absorbed: 0 }
    }

    /// Returns `true` when this call scheduled new work.
    pub fn request(&mut self) -> bool {
        match self.state {
            FrameState::Idle => {
                self.state = FrameState::Pending;
                true
            }
            FrameState::Pending => {
                self.absorbed += 1;
                false
            }
            FrameState::Cancelled => false,
        }
    }

    /// Called once per frame. Returns `true` if the pending work should run now.
    pub fn fire(&mut self) -> bool {
        if self.state == FrameState::Pending {
            self.state = FrameState::Idle;
            self.absorbed = 0;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.state = FrameState::Cancelled;
        self.absorbed = 0;
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Requests absorbed since the pending work was scheduled.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_into_one_run() {
        let mut throttle = FrameThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert_eq!(throttle.absorbed(), 2);

        assert!(throttle.fire());
        assert!(!throttle.fire());
        assert_eq!(throttle.state(), FrameState::Idle);
    }

    #[test]
    fn request_after_fire_schedules_again() {
        let mut throttle = FrameThrottle::new();
        throttle.request();
        throttle.fire();
        assert!(throttle.request());
        assert!(throttle.fire());
    }

    #[test]
    fn cancel_drops_pending_work_and_refuses_more() {
        let mut throttle = FrameThrottle::new();
        throttle.request();
        throttle.cancel();
        assert!(!throttle.fire());
        assert!(!throttle.request());
        assert_eq!(throttle.state(), FrameState::Cancelled);
    }
}
