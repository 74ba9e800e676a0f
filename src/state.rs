//! The sixteen IEEE 1149.1 TAP controller states and the fixed transition table between them.
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JtagState {
    /// Test-Logic-Reset
    Reset = 0,
    /// Run-Test/Idle
    Idle = 1,
    SelectDR = 2,
    CaptureDR = 3,
    ShiftDR = 4,
    Exit1DR = 5,
    PauseDR = 6,
    Exit2DR = 7,
    UpdateDR = 8,
    SelectIR = 9,
    CaptureIR = 10,
    ShiftIR = 11,
    Exit1IR = 12,
    PauseIR = 13,
    Exit2IR = 14,
    UpdateIR = 15,
}

impl JtagState {
    /// Every state, in ordinal order
    pub const ALL: [JtagState; 16] = [
        JtagState::Reset, JtagState::Idle,
        JtagState::SelectDR, JtagState::CaptureDR, JtagState::ShiftDR, JtagState::Exit1DR,
        JtagState::PauseDR, JtagState::Exit2DR, JtagState::UpdateDR,
        JtagState::SelectIR, JtagState::CaptureIR, JtagState::ShiftIR, JtagState::Exit1IR,
        JtagState::PauseIR, JtagState::Exit2IR, JtagState::UpdateIR,
    ];

    /// The states the controller moves to when TMS is sampled low and high, in that order.
    pub const fn successors(self) -> (JtagState, JtagState) {
        use JtagState::*;

        match self {
            Reset     => (Idle, Reset),
            Idle      => (Idle, SelectDR),

            SelectDR  => (CaptureDR, SelectIR),
            CaptureDR => (ShiftDR, Exit1DR),
            ShiftDR   => (ShiftDR, Exit1DR),
            Exit1DR   => (PauseDR, UpdateDR),
            PauseDR   => (PauseDR, Exit2DR),
            Exit2DR   => (ShiftDR, UpdateDR),
            UpdateDR  => (Idle, SelectDR),

            SelectIR  => (CaptureIR, Reset),
            CaptureIR => (ShiftIR, Exit1IR),
            ShiftIR   => (ShiftIR, Exit1IR),
            Exit1IR   => (PauseIR, UpdateIR),
            PauseIR   => (PauseIR, Exit2IR),
            Exit2IR   => (ShiftIR, UpdateIR),
            UpdateIR  => (Idle, SelectDR),
        }
    }

    /// The state reached after one TCK with TMS at `tms`
    pub const fn next(self, tms: bool) -> JtagState {
        let (low, high) = self.successors();
        if tms { high } else { low }
    }

    /// Name of the state as used by SVF files
    pub const fn svf_name(self) -> &'static str {
        use JtagState::*;

        match self {
            Reset     => "RESET",
            Idle      => "IDLE",
            SelectDR  => "DRSELECT",
            CaptureDR => "DRCAPTURE",
            ShiftDR   => "DRSHIFT",
            Exit1DR   => "DREXIT1",
            PauseDR   => "DRPAUSE",
            Exit2DR   => "DREXIT2",
            UpdateDR  => "DRUPDATE",
            SelectIR  => "IRSELECT",
            CaptureIR => "IRCAPTURE",
            ShiftIR   => "IRSHIFT",
            Exit1IR   => "IREXIT1",
            PauseIR   => "IRPAUSE",
            Exit2IR   => "IREXIT2",
            UpdateIR  => "IRUPDATE",
        }
    }

    /// Whether SVF allows this state as the end state of a STATE command.  These are the states a
    /// TAP can sit in indefinitely without disturbing the registers.
    pub const fn is_stable(self) -> bool {
        matches!(self, JtagState::Reset | JtagState::Idle | JtagState::PauseDR | JtagState::PauseIR)
    }
}

impl fmt::Display for JtagState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.svf_name())
    }
}

/// Returned when a string isn't one of the SVF state names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown TAP state name {name:?}")]
pub struct ParseStateError {
    pub name: String,
}

impl FromStr for JtagState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JtagState::ALL
            .iter()
            .copied()
            .find(|state| state.svf_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStateError { name: s.to_string() })
    }
}
