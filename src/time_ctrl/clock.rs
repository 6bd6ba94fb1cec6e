// src/time_ctrl/clock.rs
//! Источник времени для движка.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Часы движка. Время: unix-миллисекунды.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Настоящие системные часы.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Ручные часы для тестов и симуляций.
///
/// Клоны разделяют одно и то же значение, поэтому тест может держать у себя
/// копию и двигать время, пока движок владеет другой.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance_ms(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, delta_secs: u64) {
        self.advance_ms(delta_secs * 1_000);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
