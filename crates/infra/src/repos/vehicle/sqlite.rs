use super::IVehicleRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column};
use chrono::{DateTime, Utc};
use enterprise_planner_domain::{Vehicle, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteVehicleRepo {
    pool: SqlitePool,
}

impl SqliteVehicleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VehicleRaw {
    vehicle_uid: String,
    plate: String,
    vehicle_type: String,
    model: Option<String>,
    year: Option<i32>,
    tuv_date: Option<String>,
    au_date: Option<String>,
    uvv_date: Option<String>,
    tachograph_last_read: Option<String>,
    tachograph_next_read: Option<String>,
    tachograph_last_check: Option<String>,
    tachograph_next_check: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<VehicleRaw> for Vehicle {
    type Error = anyhow::Error;

    fn try_from(raw: VehicleRaw) -> anyhow::Result<Self> {
        let date = |column: &str, value: Option<String>| date_column("vehicles", column, value);
        Ok(Vehicle {
            id: id_column("vehicles", &raw.vehicle_uid)?,
            plate: raw.plate,
            vehicle_type: raw.vehicle_type,
            model: raw.model,
            year: raw.year,
            tuv_date: date("tuv_date", raw.tuv_date),
            au_date: date("au_date", raw.au_date),
            uvv_date: date("uvv_date", raw.uvv_date),
            tachograph_last_read: date("tachograph_last_read", raw.tachograph_last_read),
            tachograph_next_read: date("tachograph_next_read", raw.tachograph_next_read),
            tachograph_last_check: date("tachograph_last_check", raw.tachograph_last_check),
            tachograph_next_check: date("tachograph_next_check", raw.tachograph_next_check),
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IVehicleRepo for SqliteVehicleRepo {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicles(vehicle_uid, plate, vehicle_type, model, year, tuv_date,
                au_date, uvv_date, tachograph_last_read, tachograph_next_read,
                tachograph_last_check, tachograph_next_check, created_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.id.as_string())
        .bind(&vehicle.plate)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(date_value(&vehicle.tuv_date))
        .bind(date_value(&vehicle.au_date))
        .bind(date_value(&vehicle.uvv_date))
        .bind(date_value(&vehicle.tachograph_last_read))
        .bind(date_value(&vehicle.tachograph_next_read))
        .bind(date_value(&vehicle.tachograph_last_check))
        .bind(date_value(&vehicle.tachograph_next_check))
        .bind(vehicle.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE vehicles
            SET plate = ?,
            vehicle_type = ?,
            model = ?,
            year = ?,
            tuv_date = ?,
            au_date = ?,
            uvv_date = ?,
            tachograph_last_read = ?,
            tachograph_next_read = ?,
            tachograph_last_check = ?,
            tachograph_next_check = ?
            WHERE vehicle_uid = ?
            "#,
        )
        .bind(&vehicle.plate)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(date_value(&vehicle.tuv_date))
        .bind(date_value(&vehicle.au_date))
        .bind(date_value(&vehicle.uvv_date))
        .bind(date_value(&vehicle.tachograph_last_read))
        .bind(date_value(&vehicle.tachograph_next_read))
        .bind(date_value(&vehicle.tachograph_last_check))
        .bind(date_value(&vehicle.tachograph_next_check))
        .bind(vehicle.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>> {
        let vehicle: Option<VehicleRaw> =
            sqlx::query_as("SELECT * FROM vehicles WHERE vehicle_uid = ?")
                .bind(vehicle_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        vehicle.map(Vehicle::try_from).transpose()
    }

    async fn find_by_plate(&self, plate: &str) -> anyhow::Result<Option<Vehicle>> {
        let vehicle: Option<VehicleRaw> = sqlx::query_as("SELECT * FROM vehicles WHERE plate = ?")
            .bind(plate)
            .fetch_optional(&self.pool)
            .await?;
        vehicle.map(Vehicle::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Vehicle>> {
        let vehicles: Vec<VehicleRaw> = sqlx::query_as("SELECT * FROM vehicles ORDER BY plate")
            .fetch_all(&self.pool)
            .await?;
        vehicles.into_iter().map(Vehicle::try_from).collect()
    }

    async fn delete(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>> {
        let vehicle: Option<VehicleRaw> =
            sqlx::query_as("DELETE FROM vehicles WHERE vehicle_uid = ? RETURNING *")
                .bind(vehicle_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        vehicle.map(Vehicle::try_from).transpose()
    }
}
