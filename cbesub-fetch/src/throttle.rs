use std::cell::Cell;
use std::thread::sleep;
use std::time::{Duration, Instant};

///
/// Enforces a minimum delay between consecutive calls.
///
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    last_call: Cell<Option<Instant>>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Throttle {
            delay,
            last_call: Cell::new(None),
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Throttle::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    ///
    /// Block until at least `delay` has passed since the previous call, then
    /// mark this call.
    ///
    pub fn wait(&self) {
        if let Some(last) = self.last_call.get() {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                sleep(self.delay - elapsed);
            }
        }
        self.last_call.set(Some(Instant::now()));
    }
}
