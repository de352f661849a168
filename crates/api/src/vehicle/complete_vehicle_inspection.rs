use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use enterprise_planner_api_structs::complete_vehicle_inspection::*;
use enterprise_planner_domain::{date::add_months, InspectionKind, TaskStatus, Vehicle, ID};
use enterprise_planner_infra::PlannerContext;
use tracing::info;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::VehicleNotFound(vehicle_id) => PlannerError::NotFound(format!(
            "The vehicle with id: {}, was not found.",
            vehicle_id
        )),
        UseCaseError::TaskNotFound(task_id) => {
            PlannerError::NotFound(format!("The task with id: {}, was not found.", task_id))
        }
        UseCaseError::InvalidValidity(months) => PlannerError::BadClientData(format!(
            "Invalid validity of the inspection: {} months",
            months
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn complete_vehicle_inspection_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let usecase = CompleteVehicleInspectionUseCase {
        task_id: body.task_id,
        vehicle_id: body.vehicle_id,
        inspection: body.inspection_type,
        completed_date: body.completed_date,
        validity_months: body.validity_months,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(
                res.inspection,
                res.next_due_date,
                res.vehicle,
            ))
        })
        .map_err(handle_error)
}

/// Moves the inspection date of a vehicle to `validity_months` after the
/// inspection was done and completes the reminder task, if any.
#[derive(Debug)]
struct CompleteVehicleInspectionUseCase {
    pub task_id: Option<ID>,
    pub vehicle_id: ID,
    pub inspection: InspectionKind,
    pub completed_date: NaiveDate,
    pub validity_months: u32,
}

#[derive(Debug)]
struct UseCaseResponse {
    pub inspection: InspectionKind,
    pub next_due_date: NaiveDate,
    pub vehicle: Vehicle,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    VehicleNotFound(ID),
    TaskNotFound(ID),
    InvalidValidity(u32),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CompleteVehicleInspectionUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteVehicleInspection";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.validity_months == 0 {
            return Err(UseCaseError::InvalidValidity(self.validity_months));
        }
        let next_due_date = add_months(self.completed_date, self.validity_months)
            .ok_or(UseCaseError::InvalidValidity(self.validity_months))?;

        let mut vehicle = match ctx.repos.vehicles.find(&self.vehicle_id).await {
            Ok(Some(vehicle)) => vehicle,
            Ok(None) => return Err(UseCaseError::VehicleNotFound(self.vehicle_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let task = match &self.task_id {
            Some(task_id) => match ctx.repos.tasks.find(task_id).await {
                Ok(Some(task)) => Some(task),
                Ok(None) => return Err(UseCaseError::TaskNotFound(task_id.clone())),
                Err(_) => return Err(UseCaseError::StorageError),
            },
            None => None,
        };

        vehicle.set_inspection_date(self.inspection, next_due_date);
        ctx.repos
            .vehicles
            .save(&vehicle)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if let Some(mut task) = task {
            task.set_status(TaskStatus::Completed, ctx.sys.today());
            ctx.repos
                .tasks
                .save(&task)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        info!(
            "{} of {} completed, next due on {}",
            self.inspection.label(),
            vehicle.plate,
            next_due_date
        );

        Ok(UseCaseResponse {
            inspection: self.inspection,
            next_due_date,
            vehicle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use enterprise_planner_domain::{Task, TaskCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[actix_web::test]
    async fn moves_inspection_date_and_completes_task() {
        let ctx = PlannerContext::create_inmemory();
        let mut vehicle = Vehicle::new("HH-AB 123".into(), "LKW".into(), Utc::now());
        vehicle.au_date = Some(date(2024, 3, 1));
        ctx.repos.vehicles.insert(&vehicle).await.unwrap();
        let task = Task::new(
            "AU HH-AB 123: abgelaufen".into(),
            TaskCategory::Vehicle,
            "System (Compliance)".into(),
            Utc::now(),
        );
        ctx.repos.tasks.insert(&task).await.unwrap();

        let usecase = CompleteVehicleInspectionUseCase {
            task_id: Some(task.id.clone()),
            vehicle_id: vehicle.id.clone(),
            inspection: InspectionKind::Au,
            completed_date: date(2024, 3, 5),
            validity_months: 24,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.next_due_date, date(2026, 3, 5));

        let vehicle = ctx.repos.vehicles.find(&vehicle.id).await.unwrap().unwrap();
        assert_eq!(vehicle.au_date, Some(date(2026, 3, 5)));
        let task = ctx.repos.tasks.find(&task.id).await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_at.is_some());
    }

    #[actix_web::test]
    async fn unknown_vehicle_is_not_found() {
        let ctx = PlannerContext::create_inmemory();
        let vehicle_id = ID::default();
        let usecase = CompleteVehicleInspectionUseCase {
            task_id: None,
            vehicle_id: vehicle_id.clone(),
            inspection: InspectionKind::Tuv,
            completed_date: date(2024, 3, 5),
            validity_months: 12,
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::VehicleNotFound(vehicle_id));
    }
}
