use std::time::Instant;

use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::config::config;
use crate::types::mail::SendEmail;

pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let mail = &config().mail;

    let payload =
        serde_json::to_string(&email).map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("roleplay/1.0 (+reqwest)")
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    let t0 = Instant::now();
    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| format!("read body failed: {e}"))?;
    debug!(
        "[mail] {} -> {status} in {} ms",
        mail.endpoint,
        t0.elapsed().as_millis()
    );

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("mail API error: HTTP {status}: {body}"))
    }
}

/// Password recovery notice. The reset URL comes from the caller and is
/// forwarded verbatim.
pub async fn mail_password_reset(
    to: &str,
    username: &str,
    reset_url: &str,
) -> Result<(), String> {
    let text = format!(
        "Hi {username},\n\nA password reset was requested for your Roleplay account.\n\
         Open this link to pick a new password: {reset_url}\n\n\
         If this wasn't you, you can safely ignore this email."
    );
    let html = format!(
        "<p>Hi <strong>{username}</strong>,</p>\
         <p>A password reset was requested for your Roleplay account.</p>\
         <p><a href=\"{reset_url}\">Pick a new password</a></p>\
         <p>If this wasn't you, you can safely ignore this email.</p>"
    );

    send_email(SendEmail {
        from: config().mail.from.clone(),
        to: vec![to.to_string()],
        subject: "Roleplay: password recovery".to_string(),
        html: Some(html),
        text: Some(text),
        ..Default::default()
    })
    .await
    .map(|_| ())
}
