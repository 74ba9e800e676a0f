//! The hardware side of the JTAG chain.  Adapters that drive TMS and TCK should implement the
//! `Cable` trait; this crate only decides what to send.
use crate::tms::BitSequence;

pub trait Cable {
    /// Clock out a series of TMS values to change the state of the TAP controller.  Each element
    /// of `tms` determines the value of the TMS line, zero for low and any other value for high.
    fn change_mode(&mut self, tms: &[usize]);

    /// Clock out a sequence returned by `Navigator::move_to`, most significant bit first
    fn clock_tms(&mut self, seq: &BitSequence) {
        self.change_mode(&seq.to_tms());
    }
}
