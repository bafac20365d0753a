use crate::{
    abstract_trait::payment::PaymentGatewayTrait, config::momo::MomoConfig,
    domain::response::payment::PaymentResult,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use shared::errors::ServiceError;
use tracing::{error, info};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const REQUEST_TYPE: &str = "captureWallet";
const ORDER_INFO: &str = "pay with MoMo";
const LANG: &str = "vi";
const PARTNER_NAME: &str = "Test";
const STORE_ID: &str = "MomoTestStore";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePaymentBody<'a> {
    partner_code: &'a str,
    partner_name: &'a str,
    store_id: &'a str,
    request_id: &'a str,
    amount: i64,
    order_id: &'a str,
    order_info: &'a str,
    redirect_url: &'a str,
    ipn_url: &'a str,
    lang: &'a str,
    extra_data: &'a str,
    request_type: &'a str,
    signature: String,
}

/// Capture-wallet client for the MoMo create-payment API.
pub struct MomoClient {
    http: reqwest::Client,
    config: MomoConfig,
}

impl MomoClient {
    pub fn new(config: MomoConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build MoMo HTTP client")?;

        Ok(Self { http, config })
    }

    fn raw_signature(&self, amount: &str, order_id: &str, request_id: &str) -> String {
        format!(
            "accessKey={}&amount={}&extraData={}&ipnUrl={}&orderId={}&orderInfo={}&partnerCode={}&redirectUrl={}&requestId={}&requestType={}",
            self.config.access_key,
            amount,
            "",
            self.config.ipn_url,
            order_id,
            ORDER_INFO,
            self.config.partner_code,
            self.config.redirect_url,
            request_id,
            REQUEST_TYPE,
        )
    }

    fn sign(&self, raw: &str) -> Result<String, ServiceError> {
        let mut mac = HmacSha256::new_from_slice(self.config.secret_key.as_bytes())
            .map_err(|e| ServiceError::Payment(format!("invalid MoMo secret key: {e}")))?;
        mac.update(raw.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Fresh `(orderId, requestId)` pair, each its own v4 uuid.
fn payment_ids() -> (String, String) {
    (Uuid::new_v4().to_string(), Uuid::new_v4().to_string())
}

#[async_trait]
impl PaymentGatewayTrait for MomoClient {
    async fn create_payment(&self, amount: i64) -> Result<PaymentResult, ServiceError> {
        let (order_id, request_id) = payment_ids();

        let signature =
            self.sign(&self.raw_signature(&amount.to_string(), &order_id, &request_id))?;

        let body = CreatePaymentBody {
            partner_code: &self.config.partner_code,
            partner_name: PARTNER_NAME,
            store_id: STORE_ID,
            request_id: &request_id,
            amount,
            order_id: &order_id,
            order_info: ORDER_INFO,
            redirect_url: &self.config.redirect_url,
            ipn_url: &self.config.ipn_url,
            lang: LANG,
            extra_data: "",
            request_type: REQUEST_TYPE,
            signature,
        };

        info!("💳 Requesting MoMo payment {} for amount {}", order_id, body.amount);

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ MoMo request failed: {e:?}");
                ServiceError::Payment(e.to_string())
            })?;

        let result = response.json::<PaymentResult>().await.map_err(|e| {
            error!("❌ Undecodable MoMo response: {e:?}");
            ServiceError::Payment(e.to_string())
        })?;

        info!(
            "💳 MoMo answered resultCode={:?} for {}",
            result.result_code, order_id
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> MomoClient {
        MomoClient::new(MomoConfig {
            endpoint: "https://test-payment.momo.vn/v2/gateway/api/create".into(),
            partner_code: "MOMO".into(),
            access_key: "F8BBA842ECF85".into(),
            secret_key: "K951B6PE1waDMi640xX08PD3vg6EkVlz".into(),
            redirect_url: "https://shop.example/return".into(),
            ipn_url: "https://shop.example/ipn".into(),
            timeout: Duration::from_secs(10),
        })
        .unwrap()
    }

    #[test]
    fn raw_signature_lists_fields_alphabetically() {
        let raw = client().raw_signature("1600", "oid", "rid");
        assert_eq!(
            raw,
            "accessKey=F8BBA842ECF85&amount=1600&extraData=&ipnUrl=https://shop.example/ipn\
             &orderId=oid&orderInfo=pay with MoMo&partnerCode=MOMO\
             &redirectUrl=https://shop.example/return&requestId=rid&requestType=captureWallet"
        );
    }

    #[test]
    fn signature_is_lowercase_hex_sha256_and_deterministic() {
        let momo = client();
        let raw = momo.raw_signature("1600", "oid", "rid");
        let first = momo.sign(&raw).unwrap();
        let second = momo.sign(&raw).unwrap();

        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(first, second);
        assert_ne!(first, momo.sign(&momo.raw_signature("1601", "oid", "rid")).unwrap());
    }

    #[test]
    fn order_and_request_ids_are_independent_uuids() {
        let (order_id, request_id) = payment_ids();

        assert_ne!(order_id, request_id);
        assert!(Uuid::parse_str(&order_id).is_ok());
        assert!(Uuid::parse_str(&request_id).is_ok());
    }

    #[test]
    fn body_serializes_with_camel_case_keys() {
        let body = CreatePaymentBody {
            partner_code: "MOMO",
            partner_name: PARTNER_NAME,
            store_id: STORE_ID,
            request_id: "rid",
            amount: 10,
            order_id: "oid",
            order_info: ORDER_INFO,
            redirect_url: "r",
            ipn_url: "i",
            lang: LANG,
            extra_data: "",
            request_type: REQUEST_TYPE,
            signature: "sig".into(),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["partnerCode"], "MOMO");
        assert_eq!(json["requestType"], "captureWallet");
        assert_eq!(json["ipnUrl"], "i");
        assert_eq!(json["extraData"], "");
        assert_eq!(json["amount"], 10);
    }
}
