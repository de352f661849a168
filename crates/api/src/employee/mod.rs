mod create_employee;
mod delete_employee;
mod get_employees;
mod update_employee;

use actix_web::web;
use create_employee::create_employee_controller;
use delete_employee::delete_employee_controller;
use get_employees::get_employees_controller;
use update_employee::update_employee_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/employees", web::get().to(get_employees_controller));
    cfg.route("/employees", web::post().to(create_employee_controller));
    cfg.route(
        "/employees/{employee_id}",
        web::delete().to(delete_employee_controller),
    );
    cfg.route(
        "/employees/{employee_id}",
        web::put().to(update_employee_controller),
    );
}
