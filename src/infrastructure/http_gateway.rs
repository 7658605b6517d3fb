use crate::domain::payment_request::PaymentRequest;
use crate::domain::ports::{ConnectionData, PaymentGateway, Registration};
use crate::domain::settings::GatewaySettings;
use crate::error::GatewayError;
use crate::infrastructure::connection::PagSeguroConnectionData;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    code: String,
}

#[derive(Debug, Deserialize)]
struct ErrorsResponse {
    #[serde(default)]
    error: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Registers payment requests with the PagSeguro v2 checkout API.
///
/// The request is posted as a form body with the account credentials in the
/// query string. A successful call answers with a checkout code; standard
/// checkouts turn it into the payment page URL.
#[derive(Debug, Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    connection: PagSeguroConnectionData,
}

impl HttpPaymentGateway {
    pub fn new(connection: PagSeguroConnectionData) -> Self {
        Self {
            client: reqwest::Client::new(),
            connection,
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn register(
        &self,
        request: &PaymentRequest,
        settings: &GatewaySettings,
    ) -> Result<Registration, GatewayError> {
        let body = request
            .to_form_body(settings.charset)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if settings.log_enabled {
            tracing::debug!(
                target: "pagseguro",
                reference = %request.reference,
                %body,
                "registering payment request"
            );
        }

        let credentials = &settings.credentials;
        let response = self
            .client
            .post(self.connection.checkout_url(settings))
            .query(&[
                ("email", credentials.email.as_str()),
                ("token", credentials.token.as_str()),
            ])
            .header(
                CONTENT_TYPE,
                format!(
                    "application/x-www-form-urlencoded; charset={}",
                    settings.charset
                ),
            )
            .header(ACCEPT, "application/xml")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if settings.log_enabled {
            tracing::debug!(target: "pagseguro", status, body = %text, "gateway response");
        }

        let code = parse_checkout_code(status, &text)?;
        if settings.is_lightbox() {
            Ok(Registration::LightboxCode(code))
        } else {
            let base = self.connection.build_payment_response_url(settings);
            Ok(Registration::Redirect(format!("{base}?code={code}")))
        }
    }
}

/// Extracts the checkout code from a gateway answer, or the errors it reports.
fn parse_checkout_code(status: u16, body: &str) -> Result<String, GatewayError> {
    match status {
        200 => quick_xml::de::from_str::<CheckoutResponse>(body)
            .map(|response| response.code)
            .map_err(|e| GatewayError::Deserialization(e.to_string())),
        401 => Err(GatewayError::Service {
            code: None,
            message: "Unauthorized".to_string(),
        }),
        _ => {
            let errors = quick_xml::de::from_str::<ErrorsResponse>(body)
                .map_err(|_| GatewayError::Deserialization(format!("HTTP {status}: {body}")))?;
            let code = errors.error.first().and_then(|entry| entry.code.clone());
            let message = errors
                .error
                .iter()
                .map(|entry| entry.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(GatewayError::Service {
                code,
                message: if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    message
                },
            })
        }
    }
}
