//! RngSeed: доменный seed для RNG раздачи.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || room_code || game_index)
//!   - создавать DeterministicRng из seed
//!
//! Одна и та же пара (seed, комната, номер партии) всегда даёт одни и те же руки.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с контекстом комнаты:
    ///   - room_code
    ///   - game_index (номер партии в этой комнате)
    pub fn derive(&self, room_code: &str, game_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"READ_MY_MIND_RNG_V1");
        hasher.update(self.bytes);
        // Длина перед кодом, чтобы "AB"+"C" и "A"+"BC" не совпадали.
        hasher.update((room_code.len() as u64).to_le_bytes());
        hasher.update(room_code.as_bytes());
        hasher.update(game_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> crate::infra::rng::DeterministicRng {
        crate::infra::rng::DeterministicRng::from_seed_bytes(self.bytes)
    }
}
