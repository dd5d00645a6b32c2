use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use super::{
    config_model::{Auth, Cors, Database, DotEnvyConfig, Server},
    stage::Stage,
};

const DEFAULT_PORT: u16 = 5003;
const DEFAULT_BODY_LIMIT_MB: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;
const DEFAULT_COOKIE_NAME: &str = "jwt";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let server = Server {
        port: parsed_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
        body_limit: parsed_or(&lookup, "SERVER_BODY_LIMIT", DEFAULT_BODY_LIMIT_MB)?,
        timeout: parsed_or(&lookup, "SERVER_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
    };

    let database = Database {
        url: required(&lookup, "DATABASE_URL")?,
        pool_timeout: parsed_or(&lookup, "DATABASE_POOL_TIMEOUT", DEFAULT_POOL_TIMEOUT_SECS)?,
    };

    let auth = Auth {
        jwt_secret: required(&lookup, "JWT_SECRET_KEY")?,
        cookie_name: non_empty(&lookup, "AUTH_COOKIE_NAME")
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
    };

    let cors = Cors {
        allowed_origin: non_empty(&lookup, "CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
    };

    let stage = match non_empty(&lookup, "STAGE") {
        Some(raw) => Stage::try_from(&raw)?,
        None => Stage::default(),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        auth,
        cors,
        stage,
    })
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).ok_or_else(|| anyhow!("{} is required", key))
}

fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.parse().with_context(|| format!("{} is invalid", key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost:5432/recharge"),
        ("JWT_SECRET_KEY", "supersecretjwtsecretforunittesting123"),
    ];

    #[test]
    fn applies_defaults_for_optional_keys() {
        let config = load_from(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.server.port, 5003);
        assert_eq!(config.server.body_limit, 10);
        assert_eq!(config.server.timeout, 30);
        assert_eq!(config.database.pool_timeout, 5);
        assert_eq!(config.auth.cookie_name, "jwt");
        assert_eq!(config.cors.allowed_origin, "http://localhost:5173");
        assert_eq!(config.stage, Stage::Local);
    }

    #[test]
    fn reads_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("SERVER_PORT", "8080"),
            ("AUTH_COOKIE_NAME", "session"),
            ("STAGE", "Production"),
        ]);

        let config = load_from(lookup_from(&pairs)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.cookie_name, "session");
        assert_eq!(config.stage, Stage::Production);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = load_from(lookup_from(&[("JWT_SECRET_KEY", "secret")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn unparseable_port_names_the_key() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SERVER_PORT", "eighty"));

        let err = load_from(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn unknown_stage_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("STAGE", "qa"));

        assert!(load_from(lookup_from(&pairs)).is_err());
    }
}
