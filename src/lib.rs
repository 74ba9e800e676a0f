//! This crate works out how to drive a JTAG TAP controller from one state to another.  Every TAP
//! follows the same 16-state machine from IEEE 1149.1, advancing one state per TCK according to
//! the value of TMS.  Getting from, say, Test-Logic-Reset to Shift-DR means clocking out a
//! particular series of TMS values, and this crate finds the shortest such series.
//!
//! The `Navigator` keeps track of which state the TAP is in.  You tell it which state you want
//! and it returns the TMS values to clock out, packed into a `BitSequence` with the first value
//! in the most significant bit.  If the TAP is already in that state you get `None`, since there
//! is nothing to clock out.
//!
//! Actually toggling TMS and TCK is the job of a hardware adapter.  Adapters implement the
//! `Cable` trait, which can clock out a `BitSequence` directly.  The lower level pieces, the
//! transition table on `JtagState` and the path search in `search`, are public as well.
//!
//! # Example
//! ```
//! use jtag_nav::cable::Cable;
//! use jtag_nav::state::JtagState;
//! use jtag_nav::statemachine::Navigator;
//!
//! struct Printer;
//!
//! impl Cable for Printer {
//!     fn change_mode(&mut self, tms: &[usize]) {
//!         println!("tms: {:?}", tms);
//!     }
//! }
//!
//! let mut nav = Navigator::new();
//! let seq = nav.move_to(JtagState::ShiftDR).unwrap();
//! assert_eq!(seq.bits(), 0b0100);
//! assert_eq!(seq.count(), 4);
//! Printer.clock_tms(&seq);
//!
//! assert!(nav.move_to(JtagState::ShiftDR).is_none());
//! ```


#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod cable;
pub mod search;
pub mod state;
pub mod statemachine;
pub mod tms;

pub use search::EncodeError;
pub use state::{JtagState, ParseStateError};
pub use statemachine::Navigator;
pub use tms::BitSequence;
