//! Events queued by the controller for audio and other listeners.

use crate::grid::Cell;
use crate::input::{Direction, Rotation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Restarted,
    Moved { head: Cell },
    Ate { at: Cell, points: u32 },
    GameOver { score: u32 },
    Won { score: u32 },
    MuteToggled { muted: bool },
    /// An accepted heading change; `rotation` is set for swipes.
    Turned { to: Direction, rotation: Option<Rotation> },
}

/// Result of a single tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved: not running, or no heading chosen yet.
    Idle,
    Moved,
    Ate,
    GameOver,
    Won,
}
