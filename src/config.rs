use argon2::Params;
use serde::Deserialize;

use crate::error::PasswordError;
use crate::password::{ITERATIONS, MEMORY_KIB, OUTPUT_LEN, PARALLELISM};

const ENV_PREFIX: &str = "PASSWORD_HASH_";

fn default_memory_kib() -> u32 {
    MEMORY_KIB
}
fn default_iterations() -> u32 {
    ITERATIONS
}
fn default_parallelism() -> u32 {
    PARALLELISM
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Argon2 memory cost in KiB (default: 65536 = 64 MiB)
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Argon2 time cost (default: 3)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Argon2 lanes (default: 1)
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_kib: MEMORY_KIB,
            iterations: ITERATIONS,
            parallelism: PARALLELISM,
        }
    }
}

impl Config {
    /// Read `PASSWORD_HASH_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Self, PasswordError> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, PasswordError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }

    /// Argon2 parameters with a 32-byte output. Out-of-range costs are
    /// rejected here rather than on the first hash.
    pub fn params(&self) -> Result<Params, PasswordError> {
        Ok(Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(OUTPUT_LEN),
        )?)
    }
}
