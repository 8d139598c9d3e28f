//! Match State Machine
//!
//! `Playing -> GameOver` when a side reaches the winning score,
//! `GameOver -> Playing` on restart.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Finish,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_phase: MatchPhase,
    pub to_phase: MatchPhase,
    pub action: MatchAction,
}

#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Playing,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition. Invalid actions leave the phase unchanged.
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_phase = self.phase;

        match self.next_phase(action) {
            Some(next) => {
                self.phase = next;
                TransitionResult {
                    success: true,
                    from_phase,
                    to_phase: next,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            },
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::Playing, MatchAction::Finish) => Some(MatchPhase::GameOver),
            (MatchPhase::GameOver, MatchAction::Restart) => Some(MatchPhase::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
