use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::update_contract::*;
use enterprise_planner_domain::{Contract, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(contract_id) => PlannerError::NotFound(format!(
            "The contract with id: {}, was not found.",
            contract_id
        )),
        UseCaseError::MissingFields => PlannerError::BadClientData(
            "Name, partner and type of the contract are required".into(),
        ),
        UseCaseError::InvalidTerm => PlannerError::BadClientData(
            "The start date of the contract has to be before its end date".into(),
        ),
        UseCaseError::NegativeReminderDays(days) => PlannerError::BadClientData(format!(
            "Reminder days can not be negative, got: {}",
            days
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn update_contract_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = UpdateContractUseCase {
        contract_id: path.contract_id.clone(),
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|contract| HttpResponse::Ok().json(APIResponse::new(contract)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateContractUseCase {
    pub contract_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    MissingFields,
    InvalidTerm,
    NegativeReminderDays(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateContractUseCase {
    type Response = Contract;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateContract";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut contract = match ctx.repos.contracts.find(&self.contract_id).await {
            Ok(Some(contract)) => contract,
            Ok(None) => return Err(UseCaseError::NotFound(self.contract_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let body = &self.body;
        contract.name = body.name.trim().to_string();
        contract.partner = body.partner.trim().to_string();
        contract.contract_type = body.contract_type.trim().to_string();
        contract.start_date = body.start_date;
        contract.end_date = body.end_date;
        contract.cancelation_period = body.cancelation_period.clone();
        contract.reminder_days = body.reminder_days;
        contract.notes = body.notes.clone();

        if contract.name.is_empty()
            || contract.partner.is_empty()
            || contract.contract_type.is_empty()
        {
            return Err(UseCaseError::MissingFields);
        }
        if !contract.has_valid_term() {
            return Err(UseCaseError::InvalidTerm);
        }
        match contract.reminder_days {
            Some(days) if days < 0 => return Err(UseCaseError::NegativeReminderDays(days)),
            _ => (),
        }

        ctx.repos
            .contracts
            .save(&contract)
            .await
            .map(|_| contract)
            .map_err(|_| UseCaseError::StorageError)
    }
}
