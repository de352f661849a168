mod create_contract;
mod delete_contract;
mod get_contracts;
mod update_contract;

use actix_web::web;
use create_contract::create_contract_controller;
use delete_contract::delete_contract_controller;
use get_contracts::get_contracts_controller;
use update_contract::update_contract_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contracts", web::get().to(get_contracts_controller));
    cfg.route("/contracts", web::post().to(create_contract_controller));
    cfg.route(
        "/contracts/{contract_id}",
        web::delete().to(delete_contract_controller),
    );
    cfg.route(
        "/contracts/{contract_id}",
        web::put().to(update_contract_controller),
    );
}
