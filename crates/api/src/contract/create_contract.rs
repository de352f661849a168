use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::create_contract::*;
use enterprise_planner_domain::Contract;
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
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

pub async fn create_contract_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let mut contract = Contract::new(
        body.name.trim().to_string(),
        body.partner.trim().to_string(),
        body.contract_type.trim().to_string(),
        ctx.sys.now(),
    );
    contract.start_date = body.start_date;
    contract.end_date = body.end_date;
    contract.cancelation_period = body.cancelation_period;
    contract.reminder_days = body.reminder_days;
    contract.notes = body.notes;

    execute(CreateContractUseCase { contract }, &ctx)
        .await
        .map(|contract| HttpResponse::Created().json(APIResponse::new(contract)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateContractUseCase {
    pub contract: Contract,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    MissingFields,
    InvalidTerm,
    NegativeReminderDays(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateContractUseCase {
    type Response = Contract;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateContract";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let contract = &self.contract;
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
            .insert(contract)
            .await
            .map(|_| contract.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}
