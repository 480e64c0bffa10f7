use actix_web::{get, web, HttpResponse};
use minijinja::context;

use crate::api::error;
use crate::modules::pages::engine::PageEngine;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}

#[get("/")]
pub async fn get_index(engine: web::Data<PageEngine>) -> Result<HttpResponse, error::Error> {
    Ok(html(engine.render("index.html", context! {})?))
}

#[get("/about")]
pub async fn get_about(engine: web::Data<PageEngine>) -> Result<HttpResponse, error::Error> {
    Ok(html(engine.render("about.html", context! {})?))
}

/// Upload form page. Registered next to the POST handler in the feed
/// routes, so it stays a plain handler function.
pub async fn get_upload(engine: web::Data<PageEngine>) -> Result<HttpResponse, error::Error> {
    Ok(html(engine.render("upload.html", context! {})?))
}
