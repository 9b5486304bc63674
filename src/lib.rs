pub mod charset;
pub mod generator;
pub mod source;
pub mod strength;

pub use charset::{CharacterClass, GenerationOptions};
pub use generator::{clamp_length, entropy_bits, generate, pool_size};
pub use source::{KeystreamSource, SourceError, UniformSource};
pub use strength::{Strength, StrengthResult, Tone, evaluate};
