use actix_web::web;

use crate::modules::feed::repository::FeedRepository;

pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: FeedRepository + Send + Sync + 'static,
{
    cfg.service(
        web::resource("/feed").route(web::get().to(crate::modules::feed::handle::get_feed::<R>)),
    )
    .service(
        // form page and submission share the resource so neither method 405s
        web::resource("/upload")
            .route(web::get().to(crate::modules::pages::handle::get_upload))
            .route(web::post().to(crate::modules::feed::handle::post_upload::<R>)),
    );
}
