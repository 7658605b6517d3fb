use crate::domain::address::{StreetAddress, fix_postal_code};
use crate::domain::order::{Address, OrderSnapshot};
use crate::domain::payment_request::{
    PaymentItem, PaymentRequest, Phone, Sender, ShippingAddress, ShippingType,
    order_store_reference, to_cents,
};
use crate::domain::ports::{
    CheckoutSessionBox, ConnectionDataBox, CountryInformationBox, PaymentGatewayBox, Registration,
    ScopeConfigBox,
};
use crate::domain::region;
use crate::domain::settings::{self, Charset, GatewaySettings};
use crate::error::Result;
use serde::Serialize;

/// Result of submitting a payment request.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Send the buyer to the gateway's hosted checkout.
    Redirect { url: String },
    /// Open the lightbox checkout with this code.
    Lightbox { code: String },
    /// The gateway refused the request. The buyer goes back to the store.
    Failed {
        message: String,
        fallback_url: Option<String>,
    },
}

/// Maps the last order of the checkout session onto a gateway payment request.
pub struct PaymentMethod {
    session: CheckoutSessionBox,
    scope_config: ScopeConfigBox,
    country_information: CountryInformationBox,
    gateway: PaymentGatewayBox,
    connection_data: ConnectionDataBox,
}

impl PaymentMethod {
    pub fn new(
        session: CheckoutSessionBox,
        scope_config: ScopeConfigBox,
        country_information: CountryInformationBox,
        gateway: PaymentGatewayBox,
        connection_data: ConnectionDataBox,
    ) -> Self {
        Self {
            session,
            scope_config,
            country_information,
            gateway,
            connection_data,
        }
    }

    /// Builds the payment request and registers it with the gateway.
    ///
    /// Gateway failures are logged and reported as [`CheckoutOutcome::Failed`];
    /// configuration and order problems surface as errors.
    #[tracing::instrument(skip(self))]
    pub async fn create_payment_request(&self) -> Result<CheckoutOutcome> {
        let request = self.build_payment_request().await?;
        let settings = GatewaySettings::from_config(self.scope_config.as_ref())?;

        match self.gateway.register(&request, &settings).await {
            Ok(Registration::Redirect(url)) => {
                tracing::info!(reference = %request.reference, "payment request registered");
                Ok(CheckoutOutcome::Redirect { url })
            }
            Ok(Registration::LightboxCode(code)) => {
                tracing::info!(
                    reference = %request.reference,
                    "lightbox payment request registered"
                );
                Ok(CheckoutOutcome::Lightbox { code })
            }
            Err(e) => {
                tracing::debug!(
                    reference = %request.reference,
                    error = %e,
                    "payment request registration failed"
                );
                Ok(CheckoutOutcome::Failed {
                    message: e.to_string(),
                    fallback_url: self.redirect_url(),
                })
            }
        }
    }

    /// Builds the payment request for the last order without contacting the gateway.
    pub async fn build_payment_request(&self) -> Result<PaymentRequest> {
        let order = self.session.last_real_order().await?;
        let prefix = settings::required(self.scope_config.as_ref(), settings::STORE_REFERENCE)?;

        let mut request = PaymentRequest::new();
        request.reference = order_store_reference(&prefix, order.entity_id);

        request.shipping.address = self.shipping_address(&order).await?;
        request.shipping.r#type = ShippingType::NotSpecified;
        request.shipping.cost = to_cents(order.base_shipping_amount);

        request.sender = sender(&order)?;

        for item in items(&order)? {
            request.add_item(item);
        }

        request.redirect_url = self.redirect_url();
        request.notification_url = self.notification_url();

        Ok(request)
    }

    /// Payment page URL for a checkout code.
    #[tracing::instrument(skip(self))]
    pub fn checkout_url(&self, code: &str, service_name: &str) -> Result<String> {
        let settings = GatewaySettings::from_config(self.scope_config.as_ref())?;
        let base = self.connection_data.build_payment_response_url(&settings);
        Ok(format!("{base}?code={code}"))
    }

    /// Store URL the gateway notifies about payment status changes.
    pub fn notification_url(&self) -> Option<String> {
        settings::optional(self.scope_config.as_ref(), settings::NOTIFICATION_URL)
    }

    /// Store URL the buyer returns to after paying.
    pub fn redirect_url(&self) -> Option<String> {
        settings::optional(self.scope_config.as_ref(), settings::REDIRECT_URL)
    }

    /// Charset the form body is encoded in.
    pub fn charset(&self) -> Result<Charset> {
        Charset::from_config(self.scope_config.as_ref())
    }

    async fn shipping_address(&self, order: &OrderSnapshot) -> Result<ShippingAddress> {
        let shipping = order.shipping_source()?;
        let country = self
            .country_information
            .country_info(&shipping.country_id)
            .await?;
        let street = StreetAddress::from_lines(&shipping.street);

        Ok(ShippingAddress {
            street: street.street,
            number: street.number,
            district: street.district,
            postal_code: fix_postal_code(&shipping.postcode),
            city: shipping.city.clone(),
            state: region::abbreviation(&shipping.region).to_string(),
            country: country.full_name_locale,
            complement: street.complement,
        })
    }
}

fn sender(order: &OrderSnapshot) -> Result<Sender> {
    let name = if order.is_guest() {
        order.billing_address.full_name()
    } else {
        order.customer_name.clone()
    };

    Ok(Sender {
        name,
        email: order.customer_email.clone(),
        phone: sender_phone(order.shipping_source()?),
    })
}

fn sender_phone(shipping: &Address) -> Option<Phone> {
    shipping
        .telephone
        .as_deref()
        .map(Phone::parse)
        .filter(|phone| !phone.number.is_empty())
}

fn items(order: &OrderSnapshot) -> Result<Vec<PaymentItem>> {
    order
        .visible_items()
        .map(|item| {
            PaymentItem::new(
                item.id,
                &item.name,
                item.qty_to_ship,
                item.price,
                item.weight,
            )
        })
        .collect()
}
