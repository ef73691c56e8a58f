use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub listen_port: String,
    pub database_host: String,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,
    pub database_port: u16,
    pub database_pool_max_connections: u32,
    pub session_secret: String,
    pub session_ttl_hours: i64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_port", "3000")?
            .set_default("database_host", "db_service")?
            .set_default("database_user", "hustlink_user")?
            .set_default("database_password", "hustlink_pass")?
            .set_default("database_name", "hustlink_db")?
            .set_default("database_port", 5432)?
            .set_default("database_pool_max_connections", 10)?
            .set_default("session_secret", "hustlink-secret-key-2024-rotate-me-before-deploy")?
            .set_default("session_ttl_hours", 24)?
            .add_source(Environment::default())
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        // the signing key derivation requires at least 32 bytes of secret
        if s.session_secret.len() < 32 {
            return Err(ConfigError::Message(
                "session_secret must be at least 32 bytes".into(),
            ));
        }
        Ok(s)
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database_name
        )
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_a_database_url() {
        let s = Settings::new().expect("defaults should satisfy the schema");
        let url = s.database_url();
        assert!(url.starts_with("postgres://"));
        assert!(url.contains(&s.database_name));
    }
}
