use actix_web::web;

use crate::modules::statics::handle;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/assets/{filename:.*}").route(web::get().to(handle::get_asset)))
        .service(
            web::resource("/uploads/{filename:.*}")
                .route(web::get().to(handle::get_uploaded_file)),
        );
}
