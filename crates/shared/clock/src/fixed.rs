use chrono::{DateTime, Duration, Utc};
use crux_core::Timestamp;
use crux_ports::Clock;
use parking_lot::RwLock;

/// Clock frozen at a given instant
///
/// Time only moves through [`FixedClock::advance`] or [`FixedClock::set`].
pub struct FixedClock {
    current: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current: RwLock::new(time),
        }
    }

    /// Clock frozen at the Unix epoch
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.write();
        *current += by;
    }

    pub fn set(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_stays_put() {
        let clock = FixedClock::at_epoch();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp(), 0);
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::at_epoch();
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now().timestamp(), 90);

        clock.set(DateTime::<Utc>::UNIX_EPOCH + Duration::days(1));
        assert_eq!(clock.now().timestamp(), 86_400);
    }
}
