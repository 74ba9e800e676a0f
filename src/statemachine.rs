//! Keeps track of the state of a TAP controller and works out the TMS values that move it to any
//! other state by the most efficient path.  Actually clocking those values out is left to the
//! caller, see `Cable`.
use log::{debug, trace};

use crate::search::{encode, find_path};
use crate::state::JtagState;
use crate::tms::BitSequence;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    state: JtagState,
}

impl Navigator {
    /// Create a navigator for a TAP that has just been reset
    pub fn new() -> Self {
        Self {
            state: JtagState::Reset,
        }
    }

    /// The state the TAP is in, assuming every sequence returned by `move_to` was clocked out
    pub fn current_state(&self) -> JtagState {
        self.state
    }

    /// Work out the TMS values that get the TAP into `state` and assume it is there from now on.
    /// Returns `None` if the TAP is already in `state`, as there's nothing to clock out.
    pub fn move_to(&mut self, state: JtagState) -> Option<BitSequence> {
        let Some(path) = find_path(self.state, state) else {
            trace!("already in {}", state);
            return None;
        };

        let seq = match encode(&path) {
            Ok(seq) => seq,
            Err(e) => unreachable!("search produced an unencodable path {:?}: {}", path, e),
        };
        debug!("{} -> {}: tms {} ({} clocks)", self.state, state, seq, seq.count());
        self.state = state;
        Some(seq)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
