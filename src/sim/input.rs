//! Input state handed to the sim once per tick.
//!
//! The core only ever sees this button set; how it was produced (keyboard,
//! touch, replay) is the caller's business.

use bitflags::bitflags;

bitflags! {
    /// Buttons held during one tick.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const LEFT     = 0b0001;
        const RIGHT    = 0b0010;
        const FORWARD  = 0b0100;
        const BACKWARD = 0b1000;
    }
}
