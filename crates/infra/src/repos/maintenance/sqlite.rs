use super::IMaintenanceRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column, optional_id_column};
use chrono::{DateTime, Utc};
use enterprise_planner_domain::{MaintenanceRecord, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteMaintenanceRepo {
    pool: SqlitePool,
}

impl SqliteMaintenanceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaintenanceRaw {
    maintenance_uid: String,
    vehicle_uid: Option<String>,
    object: String,
    maintenance_type: Option<String>,
    last_maintenance: Option<String>,
    next_maintenance: Option<String>,
    interval_label: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<MaintenanceRaw> for MaintenanceRecord {
    type Error = anyhow::Error;

    fn try_from(raw: MaintenanceRaw) -> anyhow::Result<Self> {
        Ok(MaintenanceRecord {
            id: id_column("maintenance", &raw.maintenance_uid)?,
            vehicle_id: optional_id_column("maintenance", raw.vehicle_uid),
            object: raw.object,
            maintenance_type: raw.maintenance_type,
            last_maintenance: date_column("maintenance", "last_maintenance", raw.last_maintenance),
            next_maintenance: date_column("maintenance", "next_maintenance", raw.next_maintenance),
            interval: raw.interval_label,
            description: raw.description,
            notes: raw.notes,
            created_by: raw.created_by,
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IMaintenanceRepo for SqliteMaintenanceRepo {
    async fn insert(&self, record: &MaintenanceRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO maintenance(maintenance_uid, vehicle_uid, object, maintenance_type,
                last_maintenance, next_maintenance, interval_label, description, notes,
                created_by, created_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.as_string())
        .bind(record.vehicle_id.as_ref().map(|id| id.as_string()))
        .bind(&record.object)
        .bind(&record.maintenance_type)
        .bind(date_value(&record.last_maintenance))
        .bind(date_value(&record.next_maintenance))
        .bind(&record.interval)
        .bind(&record.description)
        .bind(&record.notes)
        .bind(&record.created_by)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, record: &MaintenanceRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE maintenance
            SET vehicle_uid = ?,
            object = ?,
            maintenance_type = ?,
            last_maintenance = ?,
            next_maintenance = ?,
            interval_label = ?,
            description = ?,
            notes = ?
            WHERE maintenance_uid = ?
            "#,
        )
        .bind(record.vehicle_id.as_ref().map(|id| id.as_string()))
        .bind(&record.object)
        .bind(&record.maintenance_type)
        .bind(date_value(&record.last_maintenance))
        .bind(date_value(&record.next_maintenance))
        .bind(&record.interval)
        .bind(&record.description)
        .bind(&record.notes)
        .bind(record.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>> {
        let record: Option<MaintenanceRaw> = sqlx::query_as("SELECT * FROM maintenance WHERE maintenance_uid = ?")
            .bind(record_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        record.map(MaintenanceRecord::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<MaintenanceRecord>> {
        let records: Vec<MaintenanceRaw> = sqlx::query_as(
            "SELECT * FROM maintenance ORDER BY next_maintenance IS NULL, next_maintenance ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        records.into_iter().map(MaintenanceRecord::try_from).collect()
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>> {
        let record: Option<MaintenanceRaw> =
            sqlx::query_as("DELETE FROM maintenance WHERE maintenance_uid = ? RETURNING *")
                .bind(record_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        record.map(MaintenanceRecord::try_from).transpose()
    }
}
