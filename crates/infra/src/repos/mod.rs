mod certificate;
mod contract;
mod employee;
mod maintenance;
mod shared;
mod task;
mod vehicle;

pub use certificate::ICertificateRepo;
use certificate::{InMemoryCertificateRepo, SqliteCertificateRepo};
pub use contract::IContractRepo;
use contract::{InMemoryContractRepo, SqliteContractRepo};
pub use employee::IEmployeeRepo;
use employee::{InMemoryEmployeeRepo, SqliteEmployeeRepo};
pub use maintenance::IMaintenanceRepo;
use maintenance::{InMemoryMaintenanceRepo, SqliteMaintenanceRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc};
pub use task::ITaskRepo;
use task::{InMemoryTaskRepo, SqliteTaskRepo};
use tracing::info;
pub use vehicle::IVehicleRepo;
use vehicle::{InMemoryVehicleRepo, SqliteVehicleRepo};

#[derive(Clone)]
pub struct Repos {
    pub tasks: Arc<dyn ITaskRepo>,
    pub vehicles: Arc<dyn IVehicleRepo>,
    pub employees: Arc<dyn IEmployeeRepo>,
    pub certificates: Arc<dyn ICertificateRepo>,
    pub contracts: Arc<dyn IContractRepo>,
    pub maintenance: Arc<dyn IMaintenanceRepo>,
}

impl Repos {
    pub async fn create_sqlite(connection_string: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(connection_string)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new();
        if connection_string.contains(":memory:") {
            // Every connection to an in-memory database opens a new database
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            pool_options = pool_options.max_connections(5);
        }

        info!("DB CHECKING CONNECTION ...");
        let pool = pool_options.connect_with(options).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            tasks: Arc::new(SqliteTaskRepo::new(pool.clone())),
            vehicles: Arc::new(SqliteVehicleRepo::new(pool.clone())),
            employees: Arc::new(SqliteEmployeeRepo::new(pool.clone())),
            certificates: Arc::new(SqliteCertificateRepo::new(pool.clone())),
            contracts: Arc::new(SqliteContractRepo::new(pool.clone())),
            maintenance: Arc::new(SqliteMaintenanceRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskRepo::new()),
            vehicles: Arc::new(InMemoryVehicleRepo::new()),
            employees: Arc::new(InMemoryEmployeeRepo::new()),
            certificates: Arc::new(InMemoryCertificateRepo::new()),
            contracts: Arc::new(InMemoryContractRepo::new()),
            maintenance: Arc::new(InMemoryMaintenanceRepo::new()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::PlannerContext;

    /// One context per repository implementation
    pub async fn create_contexts() -> Vec<PlannerContext> {
        vec![
            PlannerContext::create_inmemory(),
            PlannerContext::create_sqlite("sqlite::memory:")
                .await
                .expect("To create in-memory sqlite context"),
        ]
    }
}
