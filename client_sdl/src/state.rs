//! Run state
//!
//! The game has no menus: it is either running or quitting.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Quit,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Frame,
    QuitRequested,
}

impl RunState {
    /// Quit is terminal; a frame never revives a quitting loop
    pub fn transition(self, action: RunAction) -> RunState {
        match (self, action) {
            (RunState::Running, RunAction::Frame) => RunState::Running,
            (_, RunAction::QuitRequested) | (RunState::Quit, _) => RunState::Quit,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}
