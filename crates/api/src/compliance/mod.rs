mod checkers;
mod get_employees_compliance;
mod reminder;
mod run_compliance_sweep;

use actix_web::web;
use get_employees_compliance::get_employees_compliance_controller;
use run_compliance_sweep::run_compliance_check_controller;
pub use run_compliance_sweep::{RunComplianceSweepUseCase, SweepTrigger};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/compliance/check",
        web::post().to(run_compliance_check_controller),
    );
    cfg.route(
        "/employees/compliance",
        web::get().to(get_employees_compliance_controller),
    );
}
