use crate::engine::RandomSource;

//
// ✅ NATIVE ВАРИАНТ (НЕ wasm32):
//    тут есть rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(seed: [u8; 32]) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::from_seed(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// RNG, который ничего не перемешивает.
///
/// Пул остаётся по возрастанию, а `Deck::draw_n` берёт карты с конца,
/// поэтому первый активный игрок получает старшие номиналы, следующий чуть ниже и т.д.
/// Удобно для сценариев с заранее известными руками.
#[derive(Clone, Debug, Default)]
pub struct NoShuffleRng;

impl RandomSource for NoShuffleRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

//
// ✅ WASM ВАРИАНТ (Linera контракт):
//    тут НЕТ rand / getrandom / wasm-bindgen.
//
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(target_arch = "wasm32")]
impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // На wasm пока заглушка: не перемешиваем пул.
        // Раздача не будет случайной, но контракт остаётся детерминированным.
    }
}
