mod complete_vehicle_inspection;
mod create_vehicle;
mod delete_vehicle;
mod get_vehicles;
mod update_vehicle;

use actix_web::web;
use complete_vehicle_inspection::complete_vehicle_inspection_controller;
use create_vehicle::create_vehicle_controller;
use delete_vehicle::delete_vehicle_controller;
use get_vehicles::get_vehicles_controller;
use update_vehicle::update_vehicle_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/vehicles", web::get().to(get_vehicles_controller));
    cfg.route("/vehicles", web::post().to(create_vehicle_controller));
    cfg.route(
        "/vehicles/{vehicle_id}",
        web::delete().to(delete_vehicle_controller),
    );
    cfg.route(
        "/vehicles/{vehicle_id}",
        web::put().to(update_vehicle_controller),
    );

    cfg.route(
        "/vehicle-inspections/complete",
        web::post().to(complete_vehicle_inspection_controller),
    );
}
