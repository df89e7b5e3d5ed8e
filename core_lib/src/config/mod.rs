pub mod settings;

pub use settings::{
    AppConfig, CorsConfig, DatabaseConfig, EmailConfig, EmailJsConfig, RateLimitConfig,
    ServerConfig, SmtpConfig,
};
