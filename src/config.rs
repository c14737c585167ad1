use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub mail_service_url: String,
    pub mail_service_token: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub supervisor_email: Option<String>,
    pub supervisor_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            mail_service_url: env::var("MAIL_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            mail_service_token: env::var("MAIL_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_hours: env::var("TOKEN_TTL_HOURS").unwrap_or_else(|_| "24".to_string()).parse().expect("TOKEN_TTL_HOURS must be a number"),
            supervisor_email: env::var("SUPERVISOR_EMAIL").ok(),
            supervisor_password: env::var("SUPERVISOR_PASSWORD").ok(),
        }
    }
}
