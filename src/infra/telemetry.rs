//! Инициализация логов для бинарников.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{fmt, EnvFilter};

/// Поднять `tracing`-подписчик. Уровень берётся из `RUST_LOG`, иначе `default_filter`.
///
/// Повторный вызов ничего не ломает: второй подписчик просто не ставится.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
