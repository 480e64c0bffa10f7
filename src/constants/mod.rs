pub struct Env {
    pub database_url: String,
    pub ip: String,
    pub upload_dir: String,
    pub assets_dir: String,
    pub templates_dir: String,
    pub max_upload_size: usize,
}

impl Env {
    fn new() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://inkpot.db".to_string());

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let assets_dir = std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string());
        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_SIZE must be a valid usize integer");

        Env { database_url, ip, upload_dir, assets_dir, templates_dir, max_upload_size }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
