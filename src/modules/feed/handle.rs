use actix_multipart::Multipart;
use actix_web::{http::StatusCode, web, HttpResponse};
use futures_util::TryStreamExt;
use minijinja::context;
use serde::Deserialize;

use crate::api::{error, success};
use crate::modules::feed::repository::FeedRepository;
use crate::modules::feed::schema::FeedItem;
use crate::modules::feed::service::FeedService;
use crate::modules::pages::engine::PageEngine;
use crate::utils::{self, SQLITE_TIMEFMT_HINT};

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub since: Option<String>,
}

/// Feed handler: uploads strictly newer than `since`, newest first.
pub async fn get_feed<R>(
    query: web::Query<FeedQuery>,
    service: web::Data<FeedService<R>>,
) -> Result<success::Success<Vec<FeedItem>>, error::Error>
where
    R: FeedRepository + Send + Sync + 'static,
{
    let since = query.since.as_deref().unwrap_or("0");
    let cutoff = utils::parse_since(since).ok_or_else(|| {
        error::Error::bad_request(format!(
            "`since` can either be a unix timestamp in seconds, an RFC 3339 datetime or a datetime like `{}`",
            SQLITE_TIMEFMT_HINT
        ))
    })?;

    let items = service.feed_since(cutoff).await?;
    Ok(success::Success::ok(Some(items)))
}

/// Upload handler: multipart `file` plus optional `channels`, answered with
/// a re-render of the upload page carrying a flash message.
pub async fn post_upload<R>(
    mut payload: Multipart,
    service: web::Data<FeedService<R>>,
    engine: web::Data<PageEngine>,
) -> Result<HttpResponse, error::Error>
where
    R: FeedRepository + Send + Sync + 'static,
{
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut channels: Option<String> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| error::Error::bad_request("Invalid multipart payload"))?
    {
        let (name, filename) = {
            let disposition = field
                .content_disposition()
                .ok_or_else(|| error::Error::bad_request("Missing content disposition"))?;
            (
                disposition.get_name().map(str::to_string),
                disposition.get_filename().map(str::to_string),
            )
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|_| error::Error::bad_request("Invalid multipart payload"))?
        {
            bytes.extend_from_slice(&chunk);
        }

        match name.as_deref() {
            Some("file") => {
                if let Some(filename) = filename.filter(|name| !name.is_empty()) {
                    file = Some((filename, bytes));
                }
            }
            Some("channels") => {
                channels = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => {}
        }
    }

    let Some((filename, bytes)) = file else {
        return upload_page(
            &engine,
            StatusCode::BAD_REQUEST,
            context! { error => "Please select a file to upload." },
        );
    };

    match service.create_upload(&filename, bytes, channels).await {
        Ok(_) => upload_page(
            &engine,
            StatusCode::OK,
            context! { info => "Thanks! Your upload was added to the feed." },
        ),
        Err(error::SystemError::BadRequest(msg)) => {
            upload_page(&engine, StatusCode::BAD_REQUEST, context! { error => msg })
        }
        Err(err) => {
            log::error!("upload failed: {err}");
            upload_page(
                &engine,
                StatusCode::INTERNAL_SERVER_ERROR,
                context! { error => "Could not save the uploaded file." },
            )
        }
    }
}

fn upload_page(
    engine: &PageEngine,
    status: StatusCode,
    ctx: minijinja::Value,
) -> Result<HttpResponse, error::Error> {
    let html = engine.render("upload.html", ctx)?;
    Ok(HttpResponse::build(status).content_type("text/html; charset=utf-8").body(html))
}
