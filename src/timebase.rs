use crate::clock::TimeSample;

/// Offsets between the wall clock and the two live counters. The guest
/// sees "elapsed since last write" values, not absolute time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeBase {
    base_ms: u32,
    base_s: u32,
}

impl TimeBase {
    pub fn new() -> Self {
        Default::default()
    }

    /// Live counter values `(ms, seconds)` for the supplied wall-clock
    /// sample. The caller supplies the sample; this never touches the
    /// system clock itself.
    pub fn refresh(&self, now: TimeSample) -> (u32, u32) {
        (
            now.millis.wrapping_sub(self.base_ms),
            now.seconds.wrapping_sub(self.base_s),
        )
    }

    /// Re-origin the millisecond counter so it reads `value` at the
    /// instant of the supplied sample.
    pub fn rebase_ms(&mut self, value: u32, now_ms: u32) {
        self.base_ms = now_ms.wrapping_sub(value);
    }

    /// Re-origin the seconds counter so it reads `value` at the instant
    /// of the supplied sample.
    pub fn rebase_seconds(&mut self, value: u32, now_s: u32) {
        self.base_s = now_s.wrapping_sub(value);
    }
}
