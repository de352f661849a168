mod create_maintenance_record;
mod delete_maintenance_record;
mod get_maintenance_records;
mod update_maintenance_record;

use actix_web::web;
use create_maintenance_record::create_maintenance_record_controller;
use delete_maintenance_record::delete_maintenance_record_controller;
use get_maintenance_records::get_maintenance_records_controller;
use update_maintenance_record::update_maintenance_record_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/maintenance",
        web::get().to(get_maintenance_records_controller),
    );
    cfg.route(
        "/maintenance",
        web::post().to(create_maintenance_record_controller),
    );
    cfg.route(
        "/maintenance/{maintenance_id}",
        web::delete().to(delete_maintenance_record_controller),
    );
    cfg.route(
        "/maintenance/{maintenance_id}",
        web::put().to(update_maintenance_record_controller),
    );
}
