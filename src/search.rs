//! Shortest paths through the TAP state graph, and turning those paths into TMS values.
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use log::trace;
use thiserror::Error;

use crate::state::JtagState;
use crate::tms::{BitSequence, MAX_BITS};

/// Reasons a list of states can't be turned into a TMS sequence
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("a path needs at least two states, got {len}")]
    TooShort { len: usize },

    #[error("no TMS value moves {from} to {to}")]
    NotAdjacent { from: JtagState, to: JtagState },

    #[error("{edges} transitions don't fit in a {} bit sequence", MAX_BITS)]
    TooLong { edges: usize },
}

/// Find the shortest walk from `start` to `goal`, including both ends.  Returns `None` when the
/// two are the same, since there is nothing to clock out.
///
/// Paths are explored breadth first, taking the TMS=0 edge before the TMS=1 edge, so of all the
/// shortest paths the one that goes low earliest is returned.
pub fn find_path(start: JtagState, goal: JtagState) -> Option<Vec<JtagState>> {
    if start == goal {
        return None;
    }

    let mut visited: u16 = 1 << start as usize;
    let mut paths = VecDeque::new();
    paths.push_back(vec![start]);

    while let Some(path) = paths.pop_front() {
        let last = *path.last()?;
        if last == goal {
            return Some(path);
        }

        let (low, high) = last.successors();
        for next in [low, high] {
            // The first path into a state is the best one, later ones can only tie or lose
            if visited & (1 << next as usize) != 0 {
                continue;
            }
            visited |= 1 << next as usize;

            trace!("extend {:?} with {}", path, next);
            let mut p = path.clone();
            p.push(next);
            paths.push_back(p);
        }
    }

    None
}

/// Recover the TMS value behind each step of `path`.  Where both edges out of a state lead to
/// the same place, TMS=0 is used.
pub fn encode(path: &[JtagState]) -> Result<BitSequence, EncodeError> {
    if path.len() < 2 {
        return Err(EncodeError::TooShort { len: path.len() });
    }
    let edges = path.len() - 1;
    if edges > MAX_BITS {
        return Err(EncodeError::TooLong { edges });
    }

    let mut bits: u16 = 0;
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (low, high) = from.successors();
        let bit = if low == to {
            0
        } else if high == to {
            1
        } else {
            return Err(EncodeError::NotAdjacent { from, to });
        };
        // Shifting out the top bit is fine, it was checked against MAX_BITS
        bits = (bits << 1) | bit;
    }

    Ok(BitSequence::new(bits, edges))
}
