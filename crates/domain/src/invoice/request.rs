//! Invoice request payloads and their persisted form.

use chrono::{DateTime, Utc};
use common::{Money, RequestId};
use serde::{Deserialize, Deserializer, Serialize};

use super::InvoiceRequestStatus;

/// Kind of invoice being requested.
///
/// Only [`InvoiceType::Special`] carries extra requirements. Unrecognised
/// labels are kept verbatim so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceType {
    #[default]
    Ordinary,
    /// Dedicated invoice that lets the buyer deduct input tax.
    Special,
    Other(String),
}

impl InvoiceType {
    pub const ORDINARY: &'static str = "ordinary invoice";
    pub const SPECIAL: &'static str = "special invoice";

    /// Returns true for the variant that requires a tax number.
    pub fn is_special(&self) -> bool {
        matches!(self, InvoiceType::Special)
    }

    pub fn as_str(&self) -> &str {
        match self {
            InvoiceType::Ordinary => Self::ORDINARY,
            InvoiceType::Special => Self::SPECIAL,
            InvoiceType::Other(label) => label,
        }
    }
}

impl From<String> for InvoiceType {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::ORDINARY | "普通发票" => InvoiceType::Ordinary,
            Self::SPECIAL | "专用发票" => InvoiceType::Special,
            _ => InvoiceType::Other(label),
        }
    }
}

impl From<&str> for InvoiceType {
    fn from(label: &str) -> Self {
        InvoiceType::from(label.to_string())
    }
}

impl From<InvoiceType> for String {
    fn from(invoice_type: InvoiceType) -> Self {
        match invoice_type {
            InvoiceType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A customer's request to invoice one or more orders.
///
/// Missing or `null` fields decode to their empty value so that
/// validation, not decoding, decides what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub order_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: Money,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_type: InvoiceType,
    /// Legal billing name.
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    /// Delivery address for the issued invoice.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

impl InvoiceRequest {
    /// Starts a request for the given orders with every other field empty.
    pub fn for_orders<I, S>(order_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order_ids: order_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.invoice_title = title.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_type(mut self, invoice_type: impl Into<InvoiceType>) -> Self {
        self.invoice_type = invoice_type.into();
        self
    }

    pub fn with_tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.tax_number = Some(tax_number.into());
        self
    }

    pub fn with_total(mut self, total: Money) -> Self {
        self.total_amount = total;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An invoice request as held by the request store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequestRecord {
    pub id: RequestId,
    #[serde(flatten)]
    pub request: InvoiceRequest,
    pub request_date: DateTime<Utc>,
    pub status: InvoiceRequestStatus,
}

impl InvoiceRequestRecord {
    /// Wraps a freshly accepted request in its initial `Pending` state.
    pub fn new(id: RequestId, request: InvoiceRequest, request_date: DateTime<Utc>) -> Self {
        Self {
            id,
            request,
            request_date,
            status: InvoiceRequestStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_type_recognises_labels_and_aliases() {
        assert_eq!(InvoiceType::from("special invoice"), InvoiceType::Special);
        assert_eq!(InvoiceType::from("专用发票"), InvoiceType::Special);
        assert_eq!(InvoiceType::from("ordinary invoice"), InvoiceType::Ordinary);
        assert_eq!(InvoiceType::from("普通发票"), InvoiceType::Ordinary);
        assert_eq!(
            InvoiceType::from("electronic invoice"),
            InvoiceType::Other("electronic invoice".to_string())
        );
    }

    #[test]
    fn invoice_type_is_case_sensitive() {
        assert!(!InvoiceType::from("Special Invoice").is_special());
    }

    #[test]
    fn decodes_camel_case_payload() {
        let request: InvoiceRequest = serde_json::from_value(serde_json::json!({
            "orderIds": ["o1", "o2"],
            "totalAmount": 3730.5,
            "description": "August purchases",
            "invoiceType": "special invoice",
            "invoiceTitle": "Acme Corp",
            "taxNumber": "91310000MA1FL0000X",
            "email": "a@b.com"
        }))
        .unwrap();

        assert_eq!(request.order_ids, vec!["o1", "o2"]);
        assert_eq!(request.total_amount, Money::from_cents(373050));
        assert!(request.invoice_type.is_special());
        assert_eq!(request.tax_number.as_deref(), Some("91310000MA1FL0000X"));
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let request: InvoiceRequest = serde_json::from_str("{}").unwrap();
        assert!(request.order_ids.is_empty());
        assert!(request.invoice_title.is_empty());
        assert!(request.email.is_empty());
        assert_eq!(request.tax_number, None);
        assert_eq!(request.invoice_type, InvoiceType::Ordinary);
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let request: InvoiceRequest = serde_json::from_value(serde_json::json!({
            "orderIds": null,
            "totalAmount": null,
            "description": null,
            "invoiceType": null,
            "invoiceTitle": null,
            "taxNumber": null,
            "email": null
        }))
        .unwrap();
        assert_eq!(request, InvoiceRequest::default());
    }

    #[test]
    fn record_flattens_request_fields() {
        let id = RequestId::new();
        let request = InvoiceRequest::for_orders(["o1"])
            .with_title("Acme Corp")
            .with_email("a@b.com")
            .with_type("electronic invoice");
        let record = InvoiceRequestRecord::new(id, request, Utc::now());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["orderIds"][0], "o1");
        assert_eq!(json["invoiceType"], "electronic invoice");
        assert_eq!(json["status"], "pending");
        assert!(json["requestDate"].is_string());
        assert!(json.get("taxNumber").is_none());
    }
}
