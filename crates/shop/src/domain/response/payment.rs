use serde::{Deserialize, Serialize};

/// Subset of the gateway's create-payment reply the shop acts on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    #[serde(default)]
    pub result_code: Option<i64>,
    #[serde(default)]
    pub pay_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
}

impl PaymentResult {
    /// The pay URL, but only when the gateway reported result code 0.
    pub fn pay_url_if_success(&self) -> Option<&str> {
        match self.result_code {
            Some(0) => self.pay_url.as_deref(),
            _ => None,
        }
    }
}
