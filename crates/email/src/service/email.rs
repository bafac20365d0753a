use crate::{abstract_trait::EmailServiceTrait, config::Config, template::render_email};
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use shared::{domain::EmailRequest, errors::ServiceError};
use tracing::{error, info};

type Mailer = AsyncSmtpTransport<Tokio1Executor>;

#[derive(Clone)]
pub struct EmailService {
    mailer: Mailer,
    from: Mailbox,
}

impl EmailService {
    pub fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

        let mailer = Mailer::starttls_relay(&config.smtp_server)
            .context("Failed to create SMTP relay")?
            .credentials(creds)
            .port(config.smtp_port)
            .build();

        let from: Mailbox = config
            .from_address
            .parse()
            .context("Invalid sender email format")?;

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl EmailServiceTrait for EmailService {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        let body = render_email(&req.data)
            .map_err(|e| ServiceError::Custom(format!("Failed to render email template: {e}")))?;

        let to: Mailbox = req.to.parse().map_err(|e| {
            error!("❌ Invalid recipient email '{}': {e}", req.to);
            ServiceError::Custom(format!("Invalid recipient email: {e}"))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&req.subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| {
                error!("❌ Failed to build email: {e}");
                ServiceError::Custom(format!("Failed to build email: {e}"))
            })?;

        match self.mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {}", req.to);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to send email to {}: {e}", req.to);
                Err(ServiceError::Custom(format!("Failed to send email: {e}")))
            }
        }
    }
}
