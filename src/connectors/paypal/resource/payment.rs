use crate::connectors::errors::PayPalError;
use crate::connectors::paypal::api::{ExecutePayment, Patch, Payment};
use crate::connectors::paypal::client::PayPalClient;
use crate::connectors::paypal::mapper::PayPalStruct;

pub const PAYMENT_RESOURCE: &str = "payments/payment";

/// `/v1/payments/payment` endpoints.
pub struct PaymentResource<'a> {
    client: &'a PayPalClient,
}

impl<'a> PaymentResource<'a> {
    pub fn new(client: &'a PayPalClient) -> Self {
        Self { client }
    }

    pub fn create(&self, payment: &Payment) -> Result<Payment, PayPalError> {
        let response = self.client.post(PAYMENT_RESOURCE, payment)?;
        Ok(Payment::from_wire(response)?)
    }

    pub fn get(&self, payment_id: &str) -> Result<Payment, PayPalError> {
        let response = self
            .client
            .get(&format!("{}/{}", PAYMENT_RESOURCE, payment_id))?;
        Ok(Payment::from_wire(response)?)
    }

    pub fn patch(&self, patches: &[Patch], payment_id: &str) -> Result<Payment, PayPalError> {
        let response = self
            .client
            .patch(&format!("{}/{}", PAYMENT_RESOURCE, payment_id), patches)?;
        Ok(Payment::from_wire(response)?)
    }

    /// Complete a payment the buyer approved.
    pub fn execute(&self, payer_id: &str, payment_id: &str) -> Result<Payment, PayPalError> {
        let response = self.client.post(
            &format!("{}/{}/execute", PAYMENT_RESOURCE, payment_id),
            &ExecutePayment::new(payer_id),
        )?;
        Ok(Payment::from_wire(response)?)
    }
}
