//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - seed-деривация для воспроизводимых раздач;
//! - инициализация логов.

pub mod rng;
pub mod rng_seed;
pub mod telemetry;

pub use rng::*;
pub use rng_seed::RngSeed;
#[cfg(not(target_arch = "wasm32"))]
pub use telemetry::init_tracing;
