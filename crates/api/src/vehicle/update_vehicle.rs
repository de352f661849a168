use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::update_vehicle::*;
use enterprise_planner_domain::{Vehicle, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(vehicle_id) => PlannerError::NotFound(format!(
            "The vehicle with id: {}, was not found.",
            vehicle_id
        )),
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

pub async fn update_vehicle_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = UpdateVehicleUseCase {
        vehicle_id: path.vehicle_id.clone(),
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(handle_error)
}

/// Replaces the master data and inspection dates of a vehicle
#[derive(Debug)]
struct UpdateVehicleUseCase {
    pub vehicle_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    MissingPlateOrType,
    PlateTaken(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateVehicle";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut vehicle = match ctx.repos.vehicles.find(&self.vehicle_id).await {
            Ok(Some(vehicle)) => vehicle,
            Ok(None) => return Err(UseCaseError::NotFound(self.vehicle_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let body = &self.body;
        let plate = body.plate.trim();
        let vehicle_type = body.vehicle_type.trim();
        if plate.is_empty() || vehicle_type.is_empty() {
            return Err(UseCaseError::MissingPlateOrType);
        }
        match ctx.repos.vehicles.find_by_plate(plate).await {
            Ok(Some(other)) if other.id != vehicle.id => {
                return Err(UseCaseError::PlateTaken(plate.to_string()))
            }
            Ok(_) => (),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        vehicle.plate = plate.to_string();
        vehicle.vehicle_type = vehicle_type.to_string();
        vehicle.model = body.model.clone();
        vehicle.year = body.year;
        vehicle.tuv_date = body.tuv_date;
        vehicle.au_date = body.au_date;
        vehicle.uvv_date = body.uvv_date;
        vehicle.tachograph_last_read = body.tachograph_last_read;
        vehicle.tachograph_next_read = body.tachograph_next_read;
        vehicle.tachograph_last_check = body.tachograph_last_check;
        vehicle.tachograph_next_check = body.tachograph_next_check;

        ctx.repos
            .vehicles
            .save(&vehicle)
            .await
            .map(|_| vehicle)
            .map_err(|_| UseCaseError::StorageError)
    }
}
