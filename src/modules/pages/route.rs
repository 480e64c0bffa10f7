use actix_web::web;

use crate::modules::pages::handle;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handle::get_index).service(handle::get_about);
}
