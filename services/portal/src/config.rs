/// Portal configuration loaded from environment variables.
///
/// Only `DATABASE_URL` is required. The auth backend, object storage, and
/// the elevated database tier are optional: when absent the corresponding
/// feature degrades (guarded routes treat every request as unauthenticated,
/// uploads are refused with a backend-missing error) instead of failing at
/// startup.
#[derive(Debug)]
pub struct PortalConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Elevated-credential connection URL used for the privileged profile
    /// upsert tier. Env var: `DATABASE_ADMIN_URL`.
    pub database_admin_url: Option<String>,
    /// Auth backend base URL (e.g. "https://auth.example.com"). Env var:
    /// `AUTH_BASE_URL`.
    pub auth_base_url: Option<String>,
    /// API key sent with every auth backend call. Env var: `AUTH_API_KEY`.
    pub auth_api_key: Option<String>,
    /// Object storage base URL. Env var: `STORAGE_BASE_URL`.
    pub storage_base_url: Option<String>,
    /// API key for object storage uploads. Env var: `STORAGE_API_KEY`.
    pub storage_api_key: Option<String>,
    /// Emails allowed to manage portfolio content, comma separated,
    /// matched case-insensitively. Env var: `ADMIN_EMAILS`.
    pub admin_emails: Vec<String>,
    /// Cookie Domain attribute; omitted from cookies when unset.
    /// Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: Option<String>,
    /// TCP port for the HTTP server (default 3110). Env var: `PORTAL_PORT`.
    pub portal_port: u16,
}

fn opt_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            database_admin_url: opt_env("DATABASE_ADMIN_URL"),
            auth_base_url: opt_env("AUTH_BASE_URL"),
            auth_api_key: opt_env("AUTH_API_KEY"),
            storage_base_url: opt_env("STORAGE_BASE_URL"),
            storage_api_key: opt_env("STORAGE_API_KEY"),
            admin_emails: parse_admin_emails(opt_env("ADMIN_EMAILS").as_deref()),
            cookie_domain: opt_env("COOKIE_DOMAIN"),
            portal_port: std::env::var("PORTAL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
        }
    }
}

pub fn parse_admin_emails(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}
