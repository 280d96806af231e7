use serde_json::Value;

use crate::connectors::paypal::api::payment::{Amount, Item};
use crate::connectors::paypal::mapper::{paypal_struct, MapperError, PayPalStruct};

paypal_struct! {
    /// JSON Patch operation sent with `PATCH` requests.
    pub struct Patch {
        op ("op"): scalar String,
        path ("path"): scalar String,
        value ("value"): raw Value,
    }
}

impl Patch {
    pub const OPERATION_ADD: &'static str = "add";
    pub const OPERATION_REPLACE: &'static str = "replace";

    pub const ITEM_LIST_PATH: &'static str = "/transactions/0/item_list/items";
    pub const AMOUNT_PATH: &'static str = "/transactions/0/amount";

    pub fn new(op: &str, path: &str, value: Value) -> Self {
        Self {
            op: Some(op.to_string()),
            path: Some(path.to_string()),
            value,
        }
    }

    pub fn add(path: &str, value: Value) -> Self {
        Self::new(Self::OPERATION_ADD, path, value)
    }

    pub fn replace(path: &str, value: Value) -> Self {
        Self::new(Self::OPERATION_REPLACE, path, value)
    }

    /// Replace the item list of the first transaction.
    pub fn item_list(items: &[Item]) -> Result<Self, MapperError> {
        let items = items
            .iter()
            .map(|item| item.to_wire().map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::replace(Self::ITEM_LIST_PATH, Value::Array(items)))
    }

    /// Replace the amount of the first transaction.
    pub fn amount(amount: &Amount) -> Result<Self, MapperError> {
        Ok(Self::replace(
            Self::AMOUNT_PATH,
            Value::Object(amount.to_wire()?),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_list_patch() {
        let items = vec![Item {
            name: Some("hat".to_string()),
            price: Some("3.00".to_string()),
            currency: Some("EUR".to_string()),
            quantity: Some("2".to_string()),
            ..Default::default()
        }];

        let patch = Patch::item_list(&items).unwrap();
        assert_eq!(patch.op.as_deref(), Some("replace"));
        assert_eq!(patch.path.as_deref(), Some("/transactions/0/item_list/items"));

        let value = patch.value;
        assert_eq!(value[0]["name"], json!("hat"));
        assert_eq!(value[0]["quantity"], json!("2"));
        assert!(value[0]["sku"].is_null());
    }

    #[test]
    fn test_amount_patch_serialization() {
        let amount = Amount {
            total: Some("10.00".to_string()),
            currency: Some("EUR".to_string()),
            details: None,
        };

        let wire = Patch::amount(&amount).unwrap().to_wire().unwrap();
        assert_eq!(
            serde_json::Value::Object(wire),
            json!({
                "op": "replace",
                "path": "/transactions/0/amount",
                "value": { "total": "10.00", "currency": "EUR", "details": null }
            })
        );
    }

    #[test]
    fn test_patch_assign_keeps_value_untouched() {
        let mut patch = Patch::default();
        patch
            .assign(
                json!({ "op": "add", "path": "/url", "value": { "nested_key": [1, 2] } })
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .unwrap();

        assert_eq!(patch, Patch::add("/url", json!({ "nested_key": [1, 2] })));
    }

    #[test]
    fn test_null_value_survives_round_trip() {
        let patch = Patch::add("/transactions/0/custom", Value::Null);

        let wire = patch.to_wire().unwrap();
        assert!(wire["value"].is_null());
        assert_eq!(Patch::from_wire(wire).unwrap(), patch);
    }
}
