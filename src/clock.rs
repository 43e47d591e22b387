use std::time::{SystemTime, UNIX_EPOCH};

/// One wall-clock reading: whole seconds, plus the milliseconds elapsed
/// within the current second (0..=999 for a real clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub seconds: u32,
    pub millis: u32,
}

/// Source of wall-clock samples. Injected into the device so that tests
/// and record/replay hosts can supply synthetic time.
pub trait WallClock {
    fn sample(&mut self) -> TimeSample;
}

/// Host system time.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn sample(&mut self) -> TimeSample {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        TimeSample {
            seconds: now.as_secs() as u32,
            millis: now.subsec_millis(),
        }
    }
}
