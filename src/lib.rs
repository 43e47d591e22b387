/*
    Model of the i.MX23 RTC register block: the live time counters, the
    control clock-gate latch, and the persistent storage slots. The
    alarm and watchdog registers exist but are storage only.
*/

pub mod clock;
pub mod ctrl;
pub mod interface;
pub mod regs;
pub mod timebase;
pub mod types;

mod rtc;

pub use rtc::{Rtc, RtcHandle};
pub use types::{AccessWidth, BadOffset};
