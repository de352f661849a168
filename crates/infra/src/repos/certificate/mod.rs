mod inmemory;
mod sqlite;

use enterprise_planner_domain::{Certificate, ID};
pub use inmemory::InMemoryCertificateRepo;
pub use sqlite::SqliteCertificateRepo;

#[async_trait::async_trait]
pub trait ICertificateRepo: Send + Sync {
    async fn insert(&self, certificate: &Certificate) -> anyhow::Result<()>;
    async fn save(&self, certificate: &Certificate) -> anyhow::Result<()>;
    async fn find(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>>;
    /// All certificates, the ones expiring first come first
    async fn find_all(&self) -> anyhow::Result<Vec<Certificate>>;
    async fn delete(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>>;
}
