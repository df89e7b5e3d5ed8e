use async_trait::async_trait;
use core_lib::config::EmailJsConfig;
use core_lib::email::{
    ContactNotification, EmailJsChannel, NotificationChannel, NotificationSender,
};
use httpmock::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn emailjs_config(base_url: &str) -> EmailJsConfig {
    EmailJsConfig {
        api_key: Some("test_key".to_string()),
        service_id: "service_1".to_string(),
        template_id: "template_1".to_string(),
        endpoint: base_url.to_string(),
        timeout_seconds: 5,
    }
}

fn notification() -> ContactNotification {
    ContactNotification {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        message: "Hello".to_string(),
    }
}

struct CountingChannel {
    attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl NotificationChannel for CountingChannel {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn attempt(&self, _notification: &ContactNotification) -> core_lib::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn test_emailjs_delivery_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body_partial(
                    r#"{
                        "service_id": "service_1",
                        "template_id": "template_1",
                        "user_id": "test_key"
                    }"#,
                );
            then.status(200).body("OK");
        })
        .await;

    let channel = EmailJsChannel::from_config(&emailjs_config(&server.base_url()), "admin@x.com")
        .unwrap()
        .unwrap();
    let sender = NotificationSender::new(vec![Box::new(channel)]);

    let outcome = sender.send(&notification()).await;
    assert!(outcome.success);
    assert_eq!(outcome.message, "Email sent successfully via emailjs");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_emailjs_sends_template_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body_partial(
                    r#"{
                        "template_params": {
                            "from_name": "Ann",
                            "from_email": "ann@x.com",
                            "message": "Hello",
                            "to_email": "admin@x.com"
                        }
                    }"#,
                );
            then.status(200).body("OK");
        })
        .await;

    let channel = EmailJsChannel::from_config(&emailjs_config(&server.base_url()), "admin@x.com")
        .unwrap()
        .unwrap();

    channel.attempt(&notification()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_emailjs_api_error_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(500).body("upstream broke");
        })
        .await;

    let channel = EmailJsChannel::from_config(&emailjs_config(&server.base_url()), "admin@x.com")
        .unwrap()
        .unwrap();
    let sender = NotificationSender::new(vec![Box::new(channel)]);

    let outcome = sender.send(&notification()).await;
    assert!(!outcome.success);
    assert_eq!(outcome.message, "All notification channels failed");
}

#[tokio::test]
async fn test_failing_primary_falls_through_to_next_channel() {
    let server = MockServer::start_async().await;
    let primary_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(503).body("unavailable");
        })
        .await;

    let primary = EmailJsChannel::from_config(&emailjs_config(&server.base_url()), "admin@x.com")
        .unwrap()
        .unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let fallback = CountingChannel {
        attempts: attempts.clone(),
    };

    let sender = NotificationSender::new(vec![Box::new(primary), Box::new(fallback)]);

    let outcome = sender.send(&notification()).await;
    assert!(outcome.success);
    assert_eq!(outcome.message, "Email sent successfully via fallback");
    assert_eq!(attempts.load(Ordering::SeqCst), 1);

    primary_mock.assert_async().await;
}

#[tokio::test]
async fn test_channel_skipped_without_api_key() {
    let config = EmailJsConfig {
        api_key: None,
        ..emailjs_config("http://localhost:1")
    };
    assert!(EmailJsChannel::from_config(&config, "admin@x.com")
        .unwrap()
        .is_none());
}
