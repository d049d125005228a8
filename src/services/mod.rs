//! Business logic services layer

pub mod auth_service;
pub mod mail_service;

pub use auth_service::AuthService;
pub use mail_service::MailService;
