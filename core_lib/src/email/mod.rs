//! Outbound email notification pipeline.
//!
//! Delivery is modeled as an ordered list of [`NotificationChannel`]
//! implementations; the [`NotificationSender`] walks the list in priority
//! order and stops at the first success.

pub mod channel;
pub mod emailjs;
pub mod sender;
pub mod smtp;

pub use channel::{ContactNotification, NotificationChannel};
pub use emailjs::EmailJsChannel;
pub use sender::{NotificationOutcome, NotificationSender};
pub use smtp::SmtpChannel;
