use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::Zeroizing;

pub const SEED_LEN: usize = 32;

const BUFFER_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("seed must be {} hex characters", SEED_LEN * 2)]
    InvalidSeed(#[source] hex::FromHexError),
}

/// A source of uniformly distributed indices.
pub trait UniformSource {
    /// Returns an integer drawn uniformly from `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;

    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.index(items.len())]
    }
}

/// ChaCha20 keystream with unbiased rejection sampling.
pub struct KeystreamSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamSource {
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let mut cipher = ChaCha20::new(seed.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    pub fn from_entropy() -> Self {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        OsRng.fill_bytes(&mut *seed);
        Self::from_seed(&seed)
    }

    pub fn from_hex(seed: &str) -> Result<Self, SourceError> {
        let mut bytes = Zeroizing::new([0u8; SEED_LEN]);
        hex::decode_to_slice(seed.trim(), &mut *bytes).map_err(SourceError::InvalidSeed)?;
        Ok(Self::from_seed(&bytes))
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.buffer.iter_mut().for_each(|b| *b = 0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let bytes = [
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ];
        self.pos += 4;
        u32::from_le_bytes(bytes)
    }
}

impl UniformSource for KeystreamSource {
    fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be non-zero");
        let bound = u64::try_from(bound).unwrap_or(u64::MAX).min(1 << 32);

        let span = 1u64 << 32;
        let rejection_threshold = span - (span % bound);

        loop {
            let value = u64::from(self.next_u32());
            if value < rejection_threshold {
                return (value % bound) as usize;
            }
        }
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, S: UniformSource>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index(i + 1);
        items.swap(i, j);
    }
}
