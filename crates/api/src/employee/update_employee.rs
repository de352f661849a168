use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::update_employee::*;
use enterprise_planner_domain::{DrivingLicense, Employee, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(employee_id) => PlannerError::NotFound(format!(
            "The employee with id: {}, was not found.",
            employee_id
        )),
        UseCaseError::EmptyName => {
            PlannerError::BadClientData("The name of the employee is required".into())
        }
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn update_employee_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = UpdateEmployeeUseCase {
        employee_id: path.employee_id.clone(),
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|employee| HttpResponse::Ok().json(APIResponse::new(employee)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateEmployeeUseCase {
    pub employee_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    EmptyName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEmployeeUseCase {
    type Response = Employee;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEmployee";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut employee = match ctx.repos.employees.find(&self.employee_id).await {
            Ok(Some(employee)) => employee,
            Ok(None) => return Err(UseCaseError::NotFound(self.employee_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let body = &self.body;
        let name = body.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        employee.name = name.to_string();
        employee.position = body.position.clone();
        employee.department = body.department.clone();
        employee.email = body.email.clone();
        employee.phone = body.phone.clone();
        employee.hire_date = body.hire_date;
        employee.driver_card_read = body.driver_card_read;
        employee.first_aid = body.first_aid;
        employee.safety = body.safety;
        employee.forklift = body.forklift;
        let licenses: Vec<DrivingLicense> = body
            .driving_licenses
            .iter()
            .cloned()
            .map(DrivingLicense::from)
            .collect();
        employee.set_driving_licenses(&licenses);

        ctx.repos
            .employees
            .save(&employee)
            .await
            .map(|_| employee)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_api_structs::dtos::DrivingLicenseDTO;

    #[actix_web::test]
    async fn replaces_licenses_and_dates() {
        let ctx = PlannerContext::create_inmemory();
        let mut employee = Employee::new("Jana Berg".into(), Utc::now());
        employee.first_aid = NaiveDate::from_ymd_opt(2024, 5, 1);
        employee.set_driving_licenses(&[DrivingLicense {
            class: "B".into(),
            expiry: NaiveDate::from_ymd_opt(2030, 1, 1),
        }]);
        ctx.repos.employees.insert(&employee).await.unwrap();

        let usecase = UpdateEmployeeUseCase {
            employee_id: employee.id.clone(),
            body: RequestBody {
                name: "Jana Berg-Kraus ".into(),
                position: Some("LKW-Fahrerin".into()),
                driving_licenses: vec![DrivingLicenseDTO {
                    class: "CE".into(),
                    expiry: NaiveDate::from_ymd_opt(2026, 9, 30),
                }],
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.name, "Jana Berg-Kraus");
        assert_eq!(updated.first_aid, None);

        let stored = ctx.repos.employees.find(&employee.id).await.unwrap().unwrap();
        assert!(stored.is_driver());
        assert_eq!(
            stored.driving_licenses().unwrap(),
            vec![DrivingLicense {
                class: "CE".into(),
                expiry: NaiveDate::from_ymd_opt(2026, 9, 30),
            }]
        );
    }

    #[actix_web::test]
    async fn name_is_required() {
        let ctx = PlannerContext::create_inmemory();
        let employee = Employee::new("Jana Berg".into(), Utc::now());
        ctx.repos.employees.insert(&employee).await.unwrap();

        let usecase = UpdateEmployeeUseCase {
            employee_id: employee.id.clone(),
            body: RequestBody::default(),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap_err(), UseCaseError::EmptyName);
        let stored = ctx.repos.employees.find(&employee.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Jana Berg");
    }
}
