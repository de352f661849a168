use super::IContractRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column};
use chrono::{DateTime, Utc};
use enterprise_planner_domain::{Contract, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteContractRepo {
    pool: SqlitePool,
}

impl SqliteContractRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContractRaw {
    contract_uid: String,
    name: String,
    partner: String,
    contract_type: String,
    start_date: Option<String>,
    end_date: Option<String>,
    cancelation_period: Option<String>,
    reminder_days: Option<i64>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContractRaw> for Contract {
    type Error = anyhow::Error;

    fn try_from(raw: ContractRaw) -> anyhow::Result<Self> {
        Ok(Contract {
            id: id_column("contracts", &raw.contract_uid)?,
            name: raw.name,
            partner: raw.partner,
            contract_type: raw.contract_type,
            start_date: date_column("contracts", "start_date", raw.start_date),
            end_date: date_column("contracts", "end_date", raw.end_date),
            cancelation_period: raw.cancelation_period,
            reminder_days: raw.reminder_days,
            notes: raw.notes,
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IContractRepo for SqliteContractRepo {
    async fn insert(&self, contract: &Contract) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contracts(contract_uid, name, partner, contract_type, start_date,
                end_date, cancelation_period, reminder_days, notes, created_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contract.id.as_string())
        .bind(&contract.name)
        .bind(&contract.partner)
        .bind(&contract.contract_type)
        .bind(date_value(&contract.start_date))
        .bind(date_value(&contract.end_date))
        .bind(&contract.cancelation_period)
        .bind(contract.reminder_days)
        .bind(&contract.notes)
        .bind(contract.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, contract: &Contract) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE contracts
            SET name = ?,
            partner = ?,
            contract_type = ?,
            start_date = ?,
            end_date = ?,
            cancelation_period = ?,
            reminder_days = ?,
            notes = ?
            WHERE contract_uid = ?
            "#,
        )
        .bind(&contract.name)
        .bind(&contract.partner)
        .bind(&contract.contract_type)
        .bind(date_value(&contract.start_date))
        .bind(date_value(&contract.end_date))
        .bind(&contract.cancelation_period)
        .bind(contract.reminder_days)
        .bind(&contract.notes)
        .bind(contract.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>> {
        let contract: Option<ContractRaw> = sqlx::query_as("SELECT * FROM contracts WHERE contract_uid = ?")
            .bind(contract_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        contract.map(Contract::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Contract>> {
        let contracts: Vec<ContractRaw> =
            sqlx::query_as("SELECT * FROM contracts ORDER BY end_date IS NULL, end_date ASC")
                .fetch_all(&self.pool)
                .await?;
        contracts.into_iter().map(Contract::try_from).collect()
    }

    async fn delete(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>> {
        let contract: Option<ContractRaw> =
            sqlx::query_as("DELETE FROM contracts WHERE contract_uid = ? RETURNING *")
                .bind(contract_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        contract.map(Contract::try_from).transpose()
    }
}
