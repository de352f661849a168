use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::create_vehicle::*;
use enterprise_planner_domain::Vehicle;
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::MissingPlateOrType => {
            PlannerError::BadClientData("Plate and type of the vehicle are required".into())
        }
        UseCaseError::PlateTaken(plate) => PlannerError::Conflict(format!(
            "A vehicle with the plate: {}, already exists",
            plate
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn create_vehicle_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let mut vehicle = Vehicle::new(
        body.plate.trim().to_string(),
        body.vehicle_type.trim().to_string(),
        ctx.sys.now(),
    );
    vehicle.model = body.model;
    vehicle.year = body.year;
    vehicle.tuv_date = body.tuv_date;
    vehicle.au_date = body.au_date;
    vehicle.uvv_date = body.uvv_date;
    vehicle.tachograph_last_read = body.tachograph_last_read;
    vehicle.tachograph_next_read = body.tachograph_next_read;
    vehicle.tachograph_last_check = body.tachograph_last_check;
    vehicle.tachograph_next_check = body.tachograph_next_check;

    let usecase = CreateVehicleUseCase { vehicle };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Created().json(APIResponse::new(vehicle)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateVehicleUseCase {
    pub vehicle: Vehicle,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    MissingPlateOrType,
    PlateTaken(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateVehicle";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.vehicle.plate.is_empty() || self.vehicle.vehicle_type.is_empty() {
            return Err(UseCaseError::MissingPlateOrType);
        }

        match ctx.repos.vehicles.find_by_plate(&self.vehicle.plate).await {
            Ok(Some(_)) => return Err(UseCaseError::PlateTaken(self.vehicle.plate.clone())),
            Ok(None) => (),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        ctx.repos
            .vehicles
            .insert(&self.vehicle)
            .await
            .map(|_| self.vehicle.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[actix_web::test]
    async fn plates_are_unique() {
        let ctx = PlannerContext::create_inmemory();
        let vehicle = Vehicle::new("HH-AB 123".into(), "LKW".into(), Utc::now());
        execute(CreateVehicleUseCase { vehicle }, &ctx).await.unwrap();

        let vehicle = Vehicle::new("HH-AB 123".into(), "PKW".into(), Utc::now());
        let res = execute(CreateVehicleUseCase { vehicle }, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::PlateTaken("HH-AB 123".into()));
    }

    #[actix_web::test]
    async fn plate_and_type_are_required() {
        let ctx = PlannerContext::create_inmemory();
        let vehicle = Vehicle::new("".into(), "LKW".into(), Utc::now());
        let res = execute(CreateVehicleUseCase { vehicle }, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingPlateOrType);
    }
}
