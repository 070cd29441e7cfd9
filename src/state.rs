use std::sync::Arc;

use anyhow::Result;

use crate::config::settings::AppConfig;
use crate::infrastructure::memory::store::{open_pool, MemoryPool};
use crate::modules::auth::model::UserRole;
use crate::modules::auth::repository::AuthRepository;
use crate::modules::content::repository::ContentRepository;
use crate::common::security;
use crate::workers::simulator::{JobSimulator, OutcomePolicy};
use crate::workers::transcoder::TranscodeWorker;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: MemoryPool,
    pub simulator: JobSimulator,
    pub transcoder: TranscodeWorker,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        db: MemoryPool,
        simulator: JobSimulator,
        transcoder: TranscodeWorker,
    ) -> Self {
        Self {
            config,
            db,
            simulator,
            transcoder,
        }
    }

    /// Opens the store, seeds the admin account (and the demo catalog when
    /// enabled) and wires the workers to it.
    pub fn bootstrap(config: AppConfig, policy: Arc<dyn OutcomePolicy>) -> Result<Self> {
        let db = open_pool(config.generation.daily_limit);

        {
            let mut guard = db.try_lock()?;
            let password_hash = security::hash_password(&config.password, &config.admin_password)?;
            let admin = AuthRepository::create_user(
                &mut guard,
                "admin",
                &config.admin_email,
                &password_hash,
                "Administrator",
                UserRole::Admin,
            );
            if config.seed_demo_catalog {
                ContentRepository::seed_demo_catalog(&mut guard, admin.id);
            }
        }

        let simulator = JobSimulator::new(db.clone(), policy, config.generation.result_url.clone());
        let transcoder = TranscodeWorker::new(db.clone());

        Ok(Self::new(config, db, simulator, transcoder))
    }
}
