//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory, then overridden by
//! `REIGNSCORE__<SECTION>__<KEY>` environment variables.
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [server]
//! bind = "0.0.0.0"
//! port = 3000
//!
//! [[auth.clients]]
//! name = "mobile"
//! token = "mobile-client-token"
//! ```
//!
//! Clients can also be given as `name=token` pairs, which is the only form the
//! environment can carry:
//!
//! ```sh
//! REIGNSCORE__AUTH__TOKENS="mobile=mobile-client-token,web=web-client-token"
//! ```
use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "settings";
const ENV_PREFIX: &str = "REIGNSCORE";

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// A client allowed to call the server with its bearer token.
#[derive(Debug, Deserialize)]
pub struct Client {
    pub name: String,
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub clients: Vec<Client>,
    /// `name=token` pairs, comma separated when read from the environment.
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Auth {
    /// Bearer token -> client name, as expected by the server.
    pub fn token_table(&self) -> Result<HashMap<String, String>, ConfigError> {
        let pairs = self.tokens.iter().map(|entry| {
            entry
                .split_once('=')
                .map(|(name, token)| (name.trim(), token.trim()))
                .ok_or_else(|| {
                    ConfigError::Message(format!("auth token entry must be name=token: {entry}"))
                })
        });
        let clients = self
            .clients
            .iter()
            .map(|client| Ok::<_, ConfigError>((client.name.as_str(), client.token.as_str())));

        let mut table = HashMap::new();
        for pair in clients.chain(pairs) {
            let (name, token) = pair?;
            if name.is_empty() || token.is_empty() {
                return Err(ConfigError::Message(format!(
                    "auth client \"{name}\" needs both a name and a token"
                )));
            }
            table.insert(token.to_string(), name.to_string());
        }

        Ok(table)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("auth.tokens")
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub auth: Auth,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false))
                .add_source(environment()),
        )
    }

    fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Address the server should listen on.
    pub fn address(&self) -> String {
        let bind = self.server.bind.as_deref().unwrap_or("127.0.0.1");
        format!("{}:{}", bind, self.server.port)
    }
}
