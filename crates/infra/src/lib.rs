mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{
    ICertificateRepo, IContractRepo, IEmployeeRepo, IMaintenanceRepo, ITaskRepo, IVehicleRepo,
    Repos,
};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct PlannerContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PlannerContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    pub async fn create_sqlite(connection_string: &str) -> anyhow::Result<Self> {
        let repos = Repos::create_sqlite(connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<PlannerContext> {
    let config = Config::new();
    let mut context = PlannerContext::create_sqlite(&config.database_url).await?;
    context.config = config;
    Ok(context)
}
