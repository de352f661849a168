use super::ICertificateRepo;
use crate::repos::shared::inmemory_repo::*;
use enterprise_planner_domain::{Certificate, ID};

pub struct InMemoryCertificateRepo {
    certificates: std::sync::Mutex<Vec<Certificate>>,
}

impl InMemoryCertificateRepo {
    pub fn new() -> Self {
        Self {
            certificates: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICertificateRepo for InMemoryCertificateRepo {
    async fn insert(&self, certificate: &Certificate) -> anyhow::Result<()> {
        insert(certificate, &self.certificates);
        Ok(())
    }

    async fn save(&self, certificate: &Certificate) -> anyhow::Result<()> {
        save(certificate, &self.certificates);
        Ok(())
    }

    async fn find(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>> {
        Ok(find(certificate_id, &self.certificates))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Certificate>> {
        let mut certificates = find_all(&self.certificates);
        // Certificates without expiry date last
        certificates.sort_by_key(|c| (c.expiry_date.is_none(), c.expiry_date));
        Ok(certificates)
    }

    async fn delete(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>> {
        Ok(delete(certificate_id, &self.certificates))
    }
}
