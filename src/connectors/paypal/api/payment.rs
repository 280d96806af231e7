//! Payments API v1 resources (`/v1/payments/payment`).

use crate::connectors::paypal::mapper::paypal_struct;

pub const INTENT_SALE: &str = "sale";
pub const INTENT_AUTHORIZE: &str = "authorize";
pub const INTENT_ORDER: &str = "order";

paypal_struct! {
    pub struct Payment {
        id ("id"): scalar String,
        intent ("intent"): scalar String,
        state ("state"): scalar String,
        cart ("cart"): scalar String,
        payer ("payer"): one Payer,
        transactions ("transactions"): many Transaction,
        redirect_urls ("redirectUrls"): one RedirectUrls,
        application_context ("applicationContext"): one ApplicationContext,
        create_time ("createTime"): scalar String,
        update_time ("updateTime"): scalar String,
        links ("links"): many Link,
    }
}

paypal_struct! {
    pub struct Payer {
        payment_method ("paymentMethod"): scalar String,
        status ("status"): scalar String,
        payer_info ("payerInfo"): one PayerInfo,
    }
}

paypal_struct! {
    pub struct PayerInfo {
        email ("email"): scalar String,
        first_name ("firstName"): scalar String,
        last_name ("lastName"): scalar String,
        payer_id ("payerId"): scalar String,
        phone ("phone"): scalar String,
        country_code ("countryCode"): scalar String,
    }
}

paypal_struct! {
    pub struct Transaction {
        amount ("amount"): one Amount,
        item_list ("itemList"): one ItemList,
        description ("description"): scalar String,
        invoice_number ("invoiceNumber"): scalar String,
        custom ("custom"): scalar String,
        soft_descriptor ("softDescriptor"): scalar String,
        related_resources ("relatedResources"): raw serde_json::Value,
    }
}

paypal_struct! {
    /// Money amounts are decimal strings, as PayPal expects them.
    pub struct Amount {
        total ("total"): scalar String,
        currency ("currency"): scalar String,
        details ("details"): one Details,
    }
}

paypal_struct! {
    pub struct Details {
        subtotal ("subtotal"): scalar String,
        shipping ("shipping"): scalar String,
        tax ("tax"): scalar String,
        handling_fee ("handlingFee"): scalar String,
        shipping_discount ("shippingDiscount"): scalar String,
    }
}

paypal_struct! {
    pub struct ItemList {
        items ("items"): many Item,
        shipping_address ("shippingAddress"): one ShippingAddress,
    }
}

paypal_struct! {
    pub struct Item {
        name ("name"): scalar String,
        sku ("sku"): scalar String,
        price ("price"): scalar String,
        currency ("currency"): scalar String,
        tax ("tax"): scalar String,
        quantity ("quantity"): scalar String,
    }
}

paypal_struct! {
    pub struct ShippingAddress {
        recipient_name ("recipientName"): scalar String,
        line1 ("line1"): scalar String,
        line2 ("line2"): scalar String,
        city ("city"): scalar String,
        state ("state"): scalar String,
        postal_code ("postalCode"): scalar String,
        country_code ("countryCode"): scalar String,
    }
}

paypal_struct! {
    pub struct RedirectUrls {
        return_url ("returnUrl"): scalar String,
        cancel_url ("cancelUrl"): scalar String,
    }
}

paypal_struct! {
    pub struct ApplicationContext {
        brand_name ("brandName"): scalar String,
        locale ("locale"): scalar String,
        landing_page ("landingPage"): scalar String,
        shipping_preference ("shippingPreference"): scalar String,
        user_action ("userAction"): scalar String,
    }
}

paypal_struct! {
    /// HATEOAS link.
    pub struct Link {
        href ("href"): scalar String,
        rel ("rel"): scalar String,
        method ("method"): scalar String,
    }
}

paypal_struct! {
    /// Body of `POST /v1/payments/payment/{id}/execute`.
    pub struct ExecutePayment {
        payer_id ("payerId"): scalar String,
    }
}

impl ExecutePayment {
    pub fn new(payer_id: &str) -> Self {
        Self {
            payer_id: Some(payer_id.to_string()),
        }
    }
}

impl Payment {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links
            .as_deref()?
            .iter()
            .find(|link| link.rel.as_deref() == Some(rel))
    }

    /// Where the buyer has to be sent to approve the payment.
    pub fn approval_url(&self) -> Option<&str> {
        self.link("approval_url")?.href.as_deref()
    }
}
