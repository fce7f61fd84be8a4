use matcher::RankConfig;
use serde::{Deserialize, Serialize};
use source::SourceConfig;
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable permissive CORS on every route
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Upper bound on results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Score candidates on the rayon pool
    #[serde(default)]
    pub use_parallel: bool,

    /// Longest `token` accepted over HTTP, in characters
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,

    /// Where candidate paths are loaded from
    #[serde(default = "default_source")]
    pub source: SourceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            max_results: default_max_results(),
            use_parallel: false,
            max_query_len: default_max_query_len(),
            source: default_source(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    ///
    /// Reads an optional `server.{toml,yaml,json}` from the working directory,
    /// then applies `PATHRANK_SERVER__*` overrides, e.g.
    /// `PATHRANK_SERVER__PORT=9000` or `PATHRANK_SERVER__SOURCE__KIND=git`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("PATHRANK_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.rank_config().validate()?;
        self.source.validate()?;
        if self.max_query_len == 0 {
            anyhow::bail!("max_query_len must be greater than zero");
        }
        if !matches!(self.log_format.as_str(), "json" | "pretty") {
            anyhow::bail!(
                "log_format must be \"json\" or \"pretty\", got {:?}",
                self.log_format
            );
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Ranking settings derived from this configuration.
    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            max_results: self.max_results,
            use_parallel: self.use_parallel,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_max_results() -> usize {
    RankConfig::DEFAULT_MAX_RESULTS
}

fn default_max_query_len() -> usize {
    256
}

fn default_source() -> SourceConfig {
    SourceConfig::sqlite("builddb.sqlite")
}
