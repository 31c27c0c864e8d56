use chrono::Utc;
use crux_core::Timestamp;
use crux_ports::Clock;

/// Wall-clock time for snapshots taken in live sessions
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "wall-clock"
    }
}
