use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub auth: Auth,
    pub cors: Cors,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub pool_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Auth {
    pub jwt_secret: String,
    pub cookie_name: String,
}

#[derive(Debug, Clone)]
pub struct Cors {
    pub allowed_origin: String,
}
