//! Packed TMS sequences as produced by the navigator.
use alloc::vec::Vec;
use core::fmt;

use crate::state::JtagState;

/// Largest number of TMS bits a `BitSequence` can hold
pub const MAX_BITS: usize = u16::BITS as usize;

/// A non-empty run of TMS values.  The first value to clock out is the most significant of the
/// `count` populated bits of `bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBitSequence"))]
pub struct BitSequence {
    bits: u16,
    count: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBitSequence {
    bits: u16,
    count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitSequence> for BitSequence {
    type Error = &'static str;

    fn try_from(raw: RawBitSequence) -> Result<Self, Self::Error> {
        if raw.count == 0 || raw.count > MAX_BITS {
            return Err("count must be between 1 and 16");
        }
        if raw.count < MAX_BITS && raw.bits >> raw.count != 0 {
            return Err("bits set above count");
        }
        Ok(Self::new(raw.bits, raw.count))
    }
}

impl BitSequence {
    pub(crate) fn new(bits: u16, count: usize) -> Self {
        debug_assert!(count >= 1 && count <= MAX_BITS);
        Self { bits, count }
    }

    /// The packed TMS values, oldest in the highest populated bit
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Number of TCK cycles needed to clock the sequence out
    pub fn count(&self) -> usize {
        self.count
    }

    /// TMS values in the order they should be clocked out
    pub fn tms(&self) -> Tms {
        Tms {
            bits: self.bits,
            remaining: self.count,
        }
    }

    /// TMS values in the form taken by `Cable::change_mode`, zero for low and one for high
    pub fn to_tms(&self) -> Vec<usize> {
        self.tms().map(usize::from).collect()
    }

    /// Walk the transition table from `start` following this sequence and return where it ends up
    pub fn replay(&self, start: JtagState) -> JtagState {
        self.tms().fold(start, JtagState::next)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.count)
    }
}

/// Iterator over the TMS values of a `BitSequence`, most significant first
#[derive(Clone, Debug)]
pub struct Tms {
    bits: u16,
    remaining: usize,
}

impl Iterator for Tms {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.bits >> self.remaining) & 1 != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Tms {}
