use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub jwt_secret: String,
    pub session_dir: String,
    pub token_ttl_hours: i64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            jwt_secret: get_env("JWT_SECRET")?,
            session_dir: get_env("SESSION_DIR")?,
            token_ttl_hours: get_env_parse("TOKEN_TTL_HOURS")?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
