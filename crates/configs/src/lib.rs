use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub json_logs: bool,
    /// Static web frontend served as router fallback when present.
    #[serde(default)]
    pub frontend_dir: Option<String>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4), json_logs: false, frontend_dir: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

/// Limits and validation rules of the `/reports` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
    #[serde(default = "default_true")]
    pub validate_coordinates: bool,
    #[serde(default)]
    pub bounds: GeoBounds,
}

fn default_limit() -> u64 { 200 }
fn default_max_limit() -> u64 { 1000 }

impl Default for ReportsConfig {
    fn default() -> Self {
        Self { default_limit: default_limit(), max_limit: default_max_limit(), validate_coordinates: true, bounds: GeoBounds::default() }
    }
}

/// Inclusive lat/lon bounding box. Defaults to Mexico City.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self { min_lat: 19.0, max_lat: 19.6, min_lon: -99.4, max_lon: -98.9 }
    }
}

impl GeoBounds {
    pub fn contains_lat(&self, lat: f64) -> bool { (self.min_lat..=self.max_lat).contains(&lat) }
    pub fn contains_lon(&self, lon: f64) -> bool { (self.min_lon..=self.max_lon).contains(&lon) }
}

/// `CONFIG_PATH`, defaulting to `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Read `CONFIG_PATH` (default `config.toml`) when it exists, otherwise
    /// fall back to environment variables. A present but invalid file is an error.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if std::path::Path::new(&path).exists() {
            let mut cfg = load_from_file(&path)?;
            cfg.normalize_and_validate()?;
            Ok(cfg)
        } else {
            Self::from_env()
        }
    }

    /// Config built only from `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`.
    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.reports.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // URL missing from TOML: take it from the environment
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl ReportsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(anyhow!("reports.max_limit must be >= 1"));
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(anyhow!("reports.default_limit must be in 1..=max_limit"));
        }
        let b = &self.bounds;
        if !(b.min_lat < b.max_lat && b.min_lon < b.max_lon) {
            return Err(anyhow!("reports.bounds min values must be below max values"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.reports.default_limit, 200);
        assert_eq!(cfg.reports.max_limit, 1000);
        assert!(cfg.reports.validate_coordinates);
        assert!(cfg.database.run_migrations);
        assert_eq!(cfg.reports.bounds, GeoBounds::default());
    }

    #[test]
    fn parses_full_file() {
        let cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            json_logs = true
            frontend_dir = "frontend"

            [database]
            url = "sqlite://data/reportes.db?mode=rwc"
            max_connections = 4
            min_connections = 1

            [reports]
            default_limit = 50
            max_limit = 500
            validate_coordinates = false
            bounds = { min_lat = 1.0, max_lat = 2.0, min_lon = 3.0, max_lon = 4.0 }
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert!(cfg.server.json_logs);
        assert_eq!(cfg.server.frontend_dir.as_deref(), Some("frontend"));
        assert!(cfg.database.is_sqlite());
        assert_eq!(cfg.reports.max_limit, 500);
        assert!(!cfg.reports.validate_coordinates);
        assert!(cfg.reports.bounds.contains_lat(1.5));
    }

    #[test]
    fn rejects_unsupported_database_scheme() {
        let mut db = DatabaseConfig { url: "mysql://localhost/x".into(), ..Default::default() };
        assert!(db.validate().is_err());
        db.url = "postgres://localhost/x".into();
        assert!(db.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_pool_sizes() {
        let db = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 5, max_connections: 2, ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_default_limit_above_max() {
        let r = ReportsConfig { default_limit: 2000, ..Default::default() };
        assert!(r.validate().is_err());
        assert!(ReportsConfig::default().validate().is_ok());
    }

    #[test]
    fn server_normalize_fills_blank_host_and_threads() {
        let mut s = ServerConfig { host: "  ".into(), worker_threads: Some(0), ..Default::default() };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }

    // Only test in this crate touching CONFIG_PATH / DATABASE_URL.
    #[test]
    fn load_prefers_config_file_then_env() {
        let path = std::env::temp_dir().join(format!("reportes-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nport = 9100\n[database]\nurl = \"sqlite::memory:\"\n").unwrap();

        std::env::set_var("CONFIG_PATH", &path);
        std::env::set_var("DATABASE_URL", "postgres://localhost/from_env");
        let cfg = AppConfig::load().unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.database.url, "sqlite::memory:");

        std::fs::remove_file(&path).unwrap();
        let cfg = AppConfig::load().unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.database.url, "postgres://localhost/from_env");

        std::env::remove_var("CONFIG_PATH");
        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    fn mexico_city_bounds() {
        let b = GeoBounds::default();
        assert!(b.contains_lat(19.43) && b.contains_lon(-99.13));
        assert!(!b.contains_lat(40.7) && !b.contains_lon(-74.0));
    }
}
