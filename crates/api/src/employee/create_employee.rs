use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::create_employee::*;
use enterprise_planner_domain::{DrivingLicense, Employee};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::EmptyName => {
            PlannerError::BadClientData("The name of the employee is required".into())
        }
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn create_employee_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let mut employee = Employee::new(body.name.trim().to_string(), ctx.sys.now());
    employee.position = body.position;
    employee.department = body.department;
    employee.email = body.email;
    employee.phone = body.phone;
    employee.hire_date = body.hire_date;
    employee.driver_card_read = body.driver_card_read;
    employee.first_aid = body.first_aid;
    employee.safety = body.safety;
    employee.forklift = body.forklift;
    let licenses: Vec<DrivingLicense> = body
        .driving_licenses
        .into_iter()
        .map(DrivingLicense::from)
        .collect();
    employee.set_driving_licenses(&licenses);

    execute(CreateEmployeeUseCase { employee }, &ctx)
        .await
        .map(|employee| HttpResponse::Created().json(APIResponse::new(employee)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateEmployeeUseCase {
    pub employee: Employee,
}

#[derive(Debug)]
enum UseCaseError {
    EmptyName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEmployeeUseCase {
    type Response = Employee;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEmployee";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.employee.name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        ctx.repos
            .employees
            .insert(&self.employee)
            .await
            .map(|_| self.employee.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}
