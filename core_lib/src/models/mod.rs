//! API-facing data models

pub mod contact;
pub mod project;
pub mod request;

pub use contact::ContactMessage;
pub use project::Project;
pub use request::ContactForm;
