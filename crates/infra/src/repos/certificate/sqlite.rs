use super::ICertificateRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column};
use chrono::{DateTime, Utc};
use enterprise_planner_domain::{Certificate, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteCertificateRepo {
    pool: SqlitePool,
}

impl SqliteCertificateRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CertificateRaw {
    certificate_uid: String,
    name: String,
    issuer: Option<String>,
    issued_date: Option<String>,
    certificate_type: Option<String>,
    expiry_date: Option<String>,
    reminder_days: Option<i64>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CertificateRaw> for Certificate {
    type Error = anyhow::Error;

    fn try_from(raw: CertificateRaw) -> anyhow::Result<Self> {
        Ok(Certificate {
            id: id_column("certificates", &raw.certificate_uid)?,
            name: raw.name,
            issuer: raw.issuer,
            issued_date: date_column("certificates", "issued_date", raw.issued_date),
            certificate_type: raw.certificate_type,
            expiry_date: date_column("certificates", "expiry_date", raw.expiry_date),
            reminder_days: raw.reminder_days,
            description: raw.description,
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl ICertificateRepo for SqliteCertificateRepo {
    async fn insert(&self, certificate: &Certificate) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO certificates(certificate_uid, name, issuer, issued_date,
                certificate_type, expiry_date, reminder_days, description, created_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(certificate.id.as_string())
        .bind(&certificate.name)
        .bind(&certificate.issuer)
        .bind(date_value(&certificate.issued_date))
        .bind(&certificate.certificate_type)
        .bind(date_value(&certificate.expiry_date))
        .bind(certificate.reminder_days)
        .bind(&certificate.description)
        .bind(certificate.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, certificate: &Certificate) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE certificates
            SET name = ?,
            issuer = ?,
            issued_date = ?,
            certificate_type = ?,
            expiry_date = ?,
            reminder_days = ?,
            description = ?
            WHERE certificate_uid = ?
            "#,
        )
        .bind(&certificate.name)
        .bind(&certificate.issuer)
        .bind(date_value(&certificate.issued_date))
        .bind(&certificate.certificate_type)
        .bind(date_value(&certificate.expiry_date))
        .bind(certificate.reminder_days)
        .bind(&certificate.description)
        .bind(certificate.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>> {
        let certificate: Option<CertificateRaw> = sqlx::query_as("SELECT * FROM certificates WHERE certificate_uid = ?")
            .bind(certificate_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        certificate.map(Certificate::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Certificate>> {
        let certificates: Vec<CertificateRaw> = sqlx::query_as(
            "SELECT * FROM certificates ORDER BY expiry_date IS NULL, expiry_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        certificates.into_iter().map(Certificate::try_from).collect()
    }

    async fn delete(&self, certificate_id: &ID) -> anyhow::Result<Option<Certificate>> {
        let certificate: Option<CertificateRaw> =
            sqlx::query_as("DELETE FROM certificates WHERE certificate_uid = ? RETURNING *")
                .bind(certificate_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        certificate.map(Certificate::try_from).transpose()
    }
}
