pub mod common_handler;
pub mod request_handler;
pub mod swagger;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    common_handler::configure(cfg);
    request_handler::configure(cfg);
    swagger::configure(cfg);
}
