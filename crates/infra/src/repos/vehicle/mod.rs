mod inmemory;
mod sqlite;

use enterprise_planner_domain::{Vehicle, ID};
pub use inmemory::InMemoryVehicleRepo;
pub use sqlite::SqliteVehicleRepo;

#[async_trait::async_trait]
pub trait IVehicleRepo: Send + Sync {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn find(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>>;
    async fn find_by_plate(&self, plate: &str) -> anyhow::Result<Option<Vehicle>>;
    /// All vehicles ordered by plate
    async fn find_all(&self) -> anyhow::Result<Vec<Vehicle>>;
    async fn delete(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>>;
}

#[cfg(test)]
mod tests {
    use crate::repos::tests::create_contexts;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::{InspectionKind, Vehicle};

    #[tokio::test]
    async fn create_update_and_delete() {
        for ctx in create_contexts().await {
            let mut vehicle = Vehicle::new("B-LK 42".into(), "LKW".into(), Utc::now());
            vehicle.year = Some(2019);
            vehicle.tuv_date = NaiveDate::from_ymd_opt(2024, 5, 1);

            assert!(ctx.repos.vehicles.insert(&vehicle).await.is_ok());

            let res = ctx.repos.vehicles.find(&vehicle.id).await.unwrap().unwrap();
            assert_eq!(res.plate, "B-LK 42");
            assert_eq!(res.tuv_date, vehicle.tuv_date);
            assert_eq!(res.year, Some(2019));
            assert!(res.is_truck());

            let by_plate = ctx.repos.vehicles.find_by_plate("B-LK 42").await.unwrap();
            assert_eq!(by_plate.map(|v| v.id), Some(vehicle.id.clone()));

            // Save
            let next_tuv = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
            vehicle.set_inspection_date(InspectionKind::Tuv, next_tuv);
            ctx.repos.vehicles.save(&vehicle).await.unwrap();
            let res = ctx.repos.vehicles.find(&vehicle.id).await.unwrap().unwrap();
            assert_eq!(res.tuv_date, Some(next_tuv));

            assert_eq!(ctx.repos.vehicles.find_all().await.unwrap().len(), 1);

            // Delete
            let res = ctx.repos.vehicles.delete(&vehicle.id).await.unwrap();
            assert_eq!(res.map(|v| v.id), Some(vehicle.id.clone()));
            assert!(ctx.repos.vehicles.find(&vehicle.id).await.unwrap().is_none());
        }
    }
}
