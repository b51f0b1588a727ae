//! Auto-play as a two-state machine.
//!
//! The controller owns one [`AutoPlay`]; the driver owns the actual timer.
//! Every transition into `Running` gets a fresh epoch, which is how the
//! driver notices that the next tick has to be pushed out by a full
//! interval.

/// Whether a repeating advance is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPlayState {
    Idle,
    Running { epoch: u64 },
}

#[derive(Debug, Clone)]
pub struct AutoPlay {
    state: AutoPlayState,
    /// Pointer is over the carousel; auto-play stays idle until it leaves.
    hovered: bool,
    epochs: u64,
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self {
            state: AutoPlayState::Idle,
            hovered: false,
            epochs: 0,
        }
    }
}

impl AutoPlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the repeating advance. Refused while hovered; a running
    /// timer is left alone. Returns whether a new schedule was created.
    pub fn start(&mut self) -> bool {
        if self.hovered || self.is_running() {
            return false;
        }
        self.epochs += 1;
        self.state = AutoPlayState::Running { epoch: self.epochs };
        true
    }

    /// Cancel the schedule. Idempotent. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = AutoPlayState::Idle;
        was_running
    }

    /// Cancel and reschedule so the next advance is a full interval away.
    pub fn restart(&mut self) -> bool {
        self.stop();
        self.start()
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.stop();
    }

    /// Clears the hover flag only; the caller decides whether to start.
    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    pub fn state(&self) -> AutoPlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoPlayState::Running { .. })
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Epoch of the current schedule, `None` when idle.
    pub fn epoch(&self) -> Option<u64> {
        match self.state {
            AutoPlayState::Running { epoch } => Some(epoch),
            AutoPlayState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_idempotent() {
        let mut auto = AutoPlay::new();
        assert!(!auto.stop());
        auto.start();
        assert!(auto.stop());
        assert!(!auto.stop());
        assert_eq!(auto.state(), AutoPlayState::Idle);
    }

    #[test]
    fn start_does_not_duplicate_running_schedule() {
        let mut auto = AutoPlay::new();
        assert!(auto.start());
        let epoch = auto.epoch();
        assert!(!auto.start());
        assert_eq!(auto.epoch(), epoch);
    }

    #[test]
    fn restart_bumps_epoch() {
        let mut auto = AutoPlay::new();
        auto.start();
        let first = auto.epoch().unwrap();
        assert!(auto.restart());
        assert!(auto.epoch().unwrap() > first);
    }

    #[test]
    fn hover_blocks_start_until_leave() {
        let mut auto = AutoPlay::new();
        auto.start();
        auto.hover_enter();
        assert!(!auto.is_running());
        assert!(!auto.restart());
        assert!(!auto.is_running());
        auto.hover_leave();
        assert!(auto.start());
    }
}
