use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const SAMPLE_VIDEO_URL: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub jwt_secret: String,
    pub jwt_ttl_seconds: u64,
    pub admin_email: String,
    pub admin_password: String,
    pub password: PasswordConfig,
    pub generation: GenerationConfig,
    pub seed_demo_catalog: bool,
}

/// Argon2 cost parameters used when hashing account passwords.
#[derive(Clone, Debug, Deserialize)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenerationConfig {
    pub daily_limit: u32,
    /// Probability in `[0, 1]` that a simulated job resolves as FAILED.
    pub failure_rate: f64,
    pub result_url: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        let failure_rate: f64 = env::get_parsed(EnvKey::GenerationFailureRate, 0.1);

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            jwt_secret: env::get(EnvKey::JwtSecret)?,
            jwt_ttl_seconds: env::get_parsed(EnvKey::JwtTtlSeconds, 24 * 60 * 60),
            admin_email: env::get_or(EnvKey::AdminEmail, "admin@drama.com"),
            admin_password: env::get_or(EnvKey::AdminPassword, "123456"),
            password: PasswordConfig {
                memory_kib: env::get_parsed(EnvKey::PasswordMemoryKib, 19 * 1024),
                iterations: env::get_parsed(EnvKey::PasswordIterations, 2),
            },
            generation: GenerationConfig {
                daily_limit: env::get_parsed(EnvKey::GenerationDailyLimit, 20),
                failure_rate: failure_rate.clamp(0.0, 1.0),
                result_url: env::get_or(EnvKey::GenerationResultUrl, SAMPLE_VIDEO_URL),
            },
            seed_demo_catalog: env::get_parsed(EnvKey::SeedDemoCatalog, true),
        })
    }
}
