/// Server configuration
use crate::error::{Result, ServerError};
use catalog_storage::{load_seed_file, InMemoryAlbumStore};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub seed: SeedKind,

    /// JSON array of albums; takes precedence over `seed`
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    #[serde(default = "default_permissive")]
    pub permissive: bool,
}

/// Built-in start-up contents of the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    /// The six demo albums
    #[default]
    Sample,
    /// No albums
    Empty,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` if given, otherwise `config.toml` when it exists, then
    /// applies `CATALOG_`-prefixed environment variables using `__` between
    /// sections, e.g. `CATALOG_SERVER__PORT=8080`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CATALOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        self.socket_addr()?;

        if let Some(seed_file) = &self.catalog.seed_file {
            if !seed_file.is_file() {
                return Err(ServerError::Config(format!(
                    "Seed file not found at {:?}",
                    seed_file
                )));
            }
        }

        Ok(())
    }

    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self.server.host.parse().map_err(|_| {
            ServerError::Config(format!("Invalid host address: {}", self.server.host))
        })?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

impl CatalogSettings {
    /// Build the store the server starts with
    pub fn open_store(&self) -> Result<InMemoryAlbumStore> {
        if let Some(seed_file) = &self.seed_file {
            let albums = load_seed_file(seed_file)?;
            return Ok(InMemoryAlbumStore::with_albums(albums));
        }

        Ok(match self.seed {
            SeedKind::Sample => InMemoryAlbumStore::sample(),
            SeedKind::Empty => InMemoryAlbumStore::new(),
        })
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        seed: SeedKind::default(),
        seed_file: None,
    }
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        permissive: default_permissive(),
    }
}

fn default_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            catalog: default_catalog(),
            cors: default_cors(),
        }
    }
}
