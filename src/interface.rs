use crate::types::BadOffset;

/// Sink for guest access errors. Reporting must not abort the caller;
/// the offending access is already a no-op by the time this is invoked.
pub trait ErrorSink {
    fn report(&mut self, err: BadOffset);
}

/// Default sink: routes reports to the log facade.
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&mut self, err: BadOffset) {
        log::warn!("rtc: {}", err);
    }
}

/// Alarm interrupt output. The core stores the line but never drives it;
/// alarm comparison is not modeled.
pub trait IrqLine {
    fn set(&mut self, level: bool);
}
