use super::IVehicleRepo;
use crate::repos::shared::inmemory_repo::*;
use enterprise_planner_domain::{Vehicle, ID};

pub struct InMemoryVehicleRepo {
    vehicles: std::sync::Mutex<Vec<Vehicle>>,
}

impl InMemoryVehicleRepo {
    pub fn new() -> Self {
        Self {
            vehicles: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVehicleRepo for InMemoryVehicleRepo {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        insert(vehicle, &self.vehicles);
        Ok(())
    }

    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        save(vehicle, &self.vehicles);
        Ok(())
    }

    async fn find(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>> {
        Ok(find(vehicle_id, &self.vehicles))
    }

    async fn find_by_plate(&self, plate: &str) -> anyhow::Result<Option<Vehicle>> {
        Ok(find_by(&self.vehicles, |vehicle| vehicle.plate == plate)
            .into_iter()
            .next())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Vehicle>> {
        let mut vehicles = find_all(&self.vehicles);
        vehicles.sort_by(|a, b| a.plate.cmp(&b.plate));
        Ok(vehicles)
    }

    async fn delete(&self, vehicle_id: &ID) -> anyhow::Result<Option<Vehicle>> {
        Ok(delete(vehicle_id, &self.vehicles))
    }
}
