use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    JwtSecret,
    JwtTtlSeconds,
    AdminEmail,
    AdminPassword,
    PasswordMemoryKib,
    PasswordIterations,
    GenerationDailyLimit,
    GenerationFailureRate,
    GenerationResultUrl,
    SeedDemoCatalog,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::JwtSecret => "JWT_SECRET",
            EnvKey::JwtTtlSeconds => "JWT_TTL_SECONDS",
            EnvKey::AdminEmail => "ADMIN_EMAIL",
            EnvKey::AdminPassword => "ADMIN_PASSWORD",
            EnvKey::PasswordMemoryKib => "PASSWORD_MEMORY_KIB",
            EnvKey::PasswordIterations => "PASSWORD_ITERATIONS",
            EnvKey::GenerationDailyLimit => "GENERATION_DAILY_LIMIT",
            EnvKey::GenerationFailureRate => "GENERATION_FAILURE_RATE",
            EnvKey::GenerationResultUrl => "GENERATION_RESULT_URL",
            EnvKey::SeedDemoCatalog => "SEED_DEMO_CATALOG",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
