use embassy_time::{Duration, Instant};

pub struct BlockingTimer {
    expires_at: Instant,
}

impl BlockingTimer {
    pub fn after(duration: Duration) -> Self {
        Self {
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }

    pub fn wait(self) {
        while !self.is_expired() {
            core::hint::spin_loop();
        }
    }
}

/// Put the current thread to sleep, yielding the CPU, for `duration`.
pub fn sleep(duration: Duration) {
    std::thread::sleep(core::time::Duration::from_micros(duration.as_micros()));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_duration_is_expired() {
        assert!(BlockingTimer::after(Duration::from_ticks(0)).is_expired());
    }

    #[test]
    fn wait() {
        let start = Instant::now();
        let timer = BlockingTimer::after(Duration::from_millis(5));
        assert!(!timer.is_expired());
        timer.wait();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn sleep_for() {
        let start = Instant::now();
        sleep(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
