use std::fmt::{self, Display};
use std::sync::Arc;

use log::trace;
use parking_lot::Mutex;
use strum::IntoEnumIterator;

use crate::clock::{SystemClock, WallClock};
use crate::ctrl;
use crate::interface::{ErrorSink, IrqLine, LogSink};
use crate::regs::{RegisterFile, RtcReg};
use crate::timebase::TimeBase;
use crate::types::{AccessWidth, BadOffset};

/// The RTC register block. One instance per emulated device; the bus
/// dispatch delivers whole read/write operations, one at a time.
pub struct Rtc {
    regs: RegisterFile,
    timebase: TimeBase,
    clock: Box<dyn WallClock + Send>,
    sink: Box<dyn ErrorSink + Send>,
    #[allow(unused)]
    alarm_irq: Option<Box<dyn IrqLine + Send>>,
}

impl Rtc {
    pub fn new() -> Self {
        Rtc::with_parts(Box::new(SystemClock), Box::new(LogSink))
    }

    pub fn with_parts(
        clock: Box<dyn WallClock + Send>,
        sink: Box<dyn ErrorSink + Send>,
    ) -> Self {
        Rtc {
            regs: RegisterFile::new(),
            timebase: TimeBase::new(),
            clock,
            sink,
            alarm_irq: None,
        }
    }

    /// Attach the alarm interrupt output. Stored only; nothing drives
    /// the line yet.
    // TODO raise this line once ALARM comparison is modeled.
    pub fn attach_alarm_irq(&mut self, irq: Box<dyn IrqLine + Send>) {
        self.alarm_irq = Some(irq);
    }

    /// Pull both live counters forward from a fresh wall-clock sample.
    fn refresh_time(&mut self) {
        let (ms, s) = self.timebase.refresh(self.clock.sample());
        self.regs.set(RtcReg::Ms, ms);
        self.regs.set(RtcReg::Seconds, s);
    }

    pub fn read(&mut self, offset: u32, width: AccessWidth) -> u32 {
        let reg = match RtcReg::decode(offset) {
            Some(reg) => reg,
            None => {
                self.sink.report(BadOffset(offset));
                return 0;
            }
        };

        if reg == RtcReg::Ms || reg == RtcReg::Seconds {
            self.refresh_time();
        }

        // Lane extraction for narrow reads is the bus's job; the guest
        // always sees the whole cell here.
        let val = self.regs.get(reg);
        trace!(
            "rtc read  {:#06x} ({}) -> {:#010x} ({})",
            offset,
            reg,
            val,
            width.bytes()
        );
        val
    }

    pub fn write(&mut self, offset: u32, value: u32, width: AccessWidth) {
        let reg = match RtcReg::decode(offset) {
            Some(reg) => reg,
            None => {
                self.sink.report(BadOffset(offset));
                return;
            }
        };

        let old = self.regs.get(reg);
        let merged = width.merge(old, offset, value);
        trace!(
            "rtc write {:#06x} ({}) <- {:#010x} ({})",
            offset,
            reg,
            merged,
            width.bytes()
        );

        match reg {
            RtcReg::Ms => {
                self.regs.set(reg, merged);
                let now = self.clock.sample();
                self.timebase.rebase_ms(merged, now.millis);
            }
            RtcReg::Seconds => {
                self.regs.set(reg, merged);
                let now = self.clock.sample();
                self.timebase.rebase_seconds(merged, now.seconds);
            }
            // The only non-plain overwrite: the edge detector needs the
            // pre-write value.
            RtcReg::Ctrl => self.regs.set(reg, ctrl::apply_write(old, merged)),
            _ => self.regs.set(reg, merged),
        }
    }
}

impl Display for Rtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reg in RtcReg::iter() {
            writeln!(f, "{:<11} {:#010X}", reg.to_string(), self.regs.get(reg))?;
        }
        Ok(())
    }
}

/// Cloneable handle serializing all access to one device instance. The
/// CTRL edge detector is a read-modify-write over the stored value, so
/// whole operations hold the lock.
#[derive(Clone)]
pub struct RtcHandle {
    rtc: Arc<Mutex<Rtc>>,
}

impl RtcHandle {
    pub fn new(rtc: Rtc) -> Self {
        RtcHandle {
            rtc: Arc::new(Mutex::new(rtc)),
        }
    }

    pub fn read(&self, offset: u32, width: AccessWidth) -> u32 {
        self.rtc.lock().read(offset, width)
    }

    pub fn write(&self, offset: u32, value: u32, width: AccessWidth) {
        self.rtc.lock().write(offset, value, width)
    }
}
