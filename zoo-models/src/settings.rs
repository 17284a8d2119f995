use config::{Config, File};
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use zoo_error::ZooResult;

use crate::constants::DATA_DIR;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    pub fn new(config_path: String) -> ZooResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix("ZOO")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("web.cors.whitelist.origins")
                    .with_list_parse_key("web.cors.whitelist.methods")
                    .with_list_parse_key("web.cors.whitelist.headers")
                    .with_list_parse_key("web.cors.whitelist.expose_headers"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Directory that the sqlite file and other runtime data live under.
    ///
    /// # Environment override
    /// - `ZOO__GENERAL__DATA_DIR=/var/lib/zoo`
    #[serde(default = "General::data_dir_default")]
    pub data_dir: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            data_dir: General::data_dir_default(),
        }
    }
}

impl General {
    fn data_dir_default() -> String {
        DATA_DIR.into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: usize,
    #[serde(default)]
    pub cors: Cors,
    #[serde(default)]
    pub jwt: Jwt,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            cors: Default::default(),
            jwt: Default::default(),
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        8080
    }

    fn workers_default() -> usize {
        0 // 0 means one worker per CPU
    }

    /// Get actual number of workers based on configuration
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    #[serde(default)]
    pub whitelist: Whitelist,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Whitelist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Whitelist {
    #[serde(default = "Whitelist::origins_default")]
    pub origins: Vec<String>,
    #[serde(default = "Whitelist::methods_default")]
    pub methods: Vec<String>,
    #[serde(default = "Whitelist::headers_default")]
    pub headers: Vec<String>,
    #[serde(default = "Whitelist::expose_headers_default")]
    pub expose_headers: Vec<String>,
    #[serde(default = "Whitelist::credentials_default")]
    pub credentials: bool,
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist {
            origins: Whitelist::origins_default(),
            methods: Whitelist::methods_default(),
            headers: Whitelist::headers_default(),
            expose_headers: Whitelist::expose_headers_default(),
            credentials: Whitelist::credentials_default(),
        }
    }
}

impl Whitelist {
    fn origins_default() -> Vec<String> {
        vec!["*".into()]
    }

    fn methods_default() -> Vec<String> {
        vec!["GET".into(), "POST".into(), "PUT".into(), "DELETE".into()]
    }

    fn headers_default() -> Vec<String> {
        vec!["Content-Type".into(), "Authorization".into()]
    }

    fn expose_headers_default() -> Vec<String> {
        vec!["Content-Length".into(), "Content-Type".into()]
    }

    fn credentials_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Jwt {
    #[serde(default = "Jwt::secret_default")]
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "Jwt::expire_default")]
    pub expire: i64,
    #[serde(default = "Jwt::issuer_default")]
    pub issuer: String,
}

impl Default for Jwt {
    fn default() -> Self {
        Jwt {
            secret: Jwt::secret_default(),
            expire: Jwt::expire_default(),
            issuer: Jwt::issuer_default(),
        }
    }
}

impl Jwt {
    fn secret_default() -> String {
        "virtual-zoo".into()
    }

    fn expire_default() -> i64 {
        86_400
    }

    fn issuer_default() -> String {
        "virtual-zoo".into()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl Sqlite {
    /// Generates a URL for the database connection.
    pub fn to_url(&self, data_dir: &str) -> String {
        if self.auto_create {
            // mode=rwc creates the file if it doesn't exist
            format!("sqlite:{}/{}?mode=rwc", data_dir, self.path)
        } else {
            format!("sqlite:{}/{}", data_dir, self.path)
        }
    }

    fn path_default() -> String {
        "zoo.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        5000
    }

    fn max_lifetime_default() -> u64 {
        5000
    }

    fn max_connections_default() -> u32 {
        100
    }

    fn auto_create_default() -> bool {
        true
    }
}

/// Contact form delivery configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    /// Address contact-form mail is delivered to.
    #[serde(default = "Contact::recipient_default")]
    pub recipient: String,
    #[serde(default = "Contact::sender_default")]
    pub sender: String,
}

impl Default for Contact {
    fn default() -> Self {
        Contact {
            recipient: Contact::recipient_default(),
            sender: Contact::sender_default(),
        }
    }
}

impl Contact {
    fn recipient_default() -> String {
        "zooadmin@example.com".into()
    }

    fn sender_default() -> String {
        "no-reply@example.com".into()
    }
}
