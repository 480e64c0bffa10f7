use std::path::{Component, Path, PathBuf};

use actix_web::{web, HttpResponse};

use crate::api::error;
use crate::ENV;

/// Resolve `rel` under `root`, refusing anything but plain path components.
fn resolve(root: &str, rel: &str) -> Result<PathBuf, error::Error> {
    let rel = Path::new(rel);
    if rel.as_os_str().is_empty()
        || rel.components().any(|component| !matches!(component, Component::Normal(_)))
    {
        return Err(error::Error::not_found("File not found"));
    }
    Ok(Path::new(root).join(rel))
}

async fn serve(root: &str, rel: &str) -> Result<HttpResponse, error::Error> {
    let path = resolve(root, rel)?;

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(error::Error::not_found("File not found"));
        }
        Err(err) => return Err(error::SystemError::from(err).into()),
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(HttpResponse::Ok().content_type(mime.as_ref()).body(bytes))
}

pub async fn get_asset(path: web::Path<String>) -> Result<HttpResponse, error::Error> {
    serve(&ENV.assets_dir, &path).await
}

pub async fn get_uploaded_file(path: web::Path<String>) -> Result<HttpResponse, error::Error> {
    serve(&ENV.upload_dir, &path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_plain_paths() {
        assert_eq!(resolve("assets", "style.css").unwrap(), Path::new("assets/style.css"));
        assert_eq!(resolve("uploads", "1-cat.png").unwrap(), Path::new("uploads/1-cat.png"));
    }

    #[test]
    fn resolve_rejects_traversal() {
        assert!(resolve("assets", "../secret").is_err());
        assert!(resolve("assets", "a/../../b").is_err());
        assert!(resolve("assets", "/etc/passwd").is_err());
        assert!(resolve("assets", "").is_err());
    }
}
