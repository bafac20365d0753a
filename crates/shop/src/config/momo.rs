use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Clone)]
pub struct MomoConfig {
    pub endpoint: String,
    pub partner_code: String,
    pub access_key: String,
    pub secret_key: String,
    pub redirect_url: String,
    pub ipn_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for MomoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MomoConfig")
            .field("endpoint", &self.endpoint)
            .field("partner_code", &self.partner_code)
            .field("access_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("ipn_url", &self.ipn_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MomoConfig {
    pub fn init() -> Result<Self> {
        let endpoint =
            std::env::var("MOMO_ENDPOINT").context("Missing environment variable: MOMO_ENDPOINT")?;
        let partner_code = std::env::var("MOMO_PARTNER_CODE")
            .context("Missing environment variable: MOMO_PARTNER_CODE")?;
        let access_key = std::env::var("MOMO_ACCESS_KEY")
            .context("Missing environment variable: MOMO_ACCESS_KEY")?;
        let secret_key = std::env::var("MOMO_SECRET_KEY")
            .context("Missing environment variable: MOMO_SECRET_KEY")?;
        let redirect_url = std::env::var("MOMO_REDIRECT_URL")
            .context("Missing environment variable: MOMO_REDIRECT_URL")?;
        let ipn_url =
            std::env::var("MOMO_IPN_URL").context("Missing environment variable: MOMO_IPN_URL")?;

        let timeout_secs: u64 = std::env::var("MOMO_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("Unable to parse MOMO_TIMEOUT_SECS as u64")?;

        Ok(Self {
            endpoint,
            partner_code,
            access_key,
            secret_key,
            redirect_url,
            ipn_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
