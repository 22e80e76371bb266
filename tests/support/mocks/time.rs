// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use pulsefeed::application::ports::time::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// 呼び出しごとに1秒進む決定論的クロック（並び順テスト用）
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            base: base_time(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + chrono::Duration::seconds(n)
    }
}
