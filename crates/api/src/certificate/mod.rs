mod create_certificate;
mod delete_certificate;
mod get_certificates;
mod update_certificate;

use actix_web::web;
use create_certificate::create_certificate_controller;
use delete_certificate::delete_certificate_controller;
use get_certificates::get_certificates_controller;
use update_certificate::update_certificate_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/certificates", web::get().to(get_certificates_controller));
    cfg.route("/certificates", web::post().to(create_certificate_controller));
    cfg.route(
        "/certificates/{certificate_id}",
        web::delete().to(delete_certificate_controller),
    );
    cfg.route(
        "/certificates/{certificate_id}",
        web::put().to(update_certificate_controller),
    );
}
