use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

/// Request body for the `verifyReceipt` endpoint.
///
/// Key order and the omission of absent optional fields are part of the wire
/// contract: the service expects `receipt-data` first, and an optional field
/// that was not supplied must not appear in the payload at all.
///
/// https://developer.apple.com/documentation/appstorereceipts/requestbody
#[derive(Debug, Serialize)]
pub(crate) struct VerifyReceiptRequestModel {
    /// The base64-encoded receipt data.
    #[serde(rename = "receipt-data")]
    pub(crate) receipt_data: String,

    /// The app's shared secret. Required for receipts that contain
    /// auto-renewable subscriptions.
    #[serde(rename = "password", skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,

    /// Only used for iOS7-style app receipts that contain auto-renewable or
    /// non-renewing subscriptions; left unset otherwise.
    #[serde(
        rename = "exclude-old-transactions",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) exclude_old_transactions: Option<bool>,
}

impl VerifyReceiptRequestModel {
    /// Builds the request from the receipt text as supplied by the client.
    ///
    /// The receipt text is base64-encoded here with the standard padded
    /// alphabet; callers always pass the raw text, never a pre-encoded form.
    /// The text itself is not validated — the verification service is the
    /// source of truth for malformed receipts, and an empty string is legal
    /// input.
    pub(crate) fn new(
        receipt_text: &str,
        password: Option<&str>,
        exclude_old_transactions: Option<bool>,
    ) -> Self {
        Self {
            receipt_data: STANDARD.encode(receipt_text.as_bytes()),
            password: password.map(str::to_owned),
            exclude_old_transactions,
        }
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_fields_in_fixed_order() {
        let model = VerifyReceiptRequestModel::new("foo", Some("bar"), Some(true));
        assert_eq!(
            model.to_json().unwrap(),
            r#"{"receipt-data":"Zm9v","password":"bar","exclude-old-transactions":true}"#
        );
    }

    #[test]
    fn test_exclude_flag_false_is_emitted() {
        let model = VerifyReceiptRequestModel::new("foo", Some("bar"), Some(false));
        assert_eq!(
            model.to_json().unwrap(),
            r#"{"receipt-data":"Zm9v","password":"bar","exclude-old-transactions":false}"#
        );
    }

    #[test]
    fn test_absent_exclude_flag_is_omitted() {
        let model = VerifyReceiptRequestModel::new("foo", Some("bar"), None);
        assert_eq!(
            model.to_json().unwrap(),
            r#"{"receipt-data":"Zm9v","password":"bar"}"#
        );
    }

    #[test]
    fn test_absent_password_is_omitted() {
        let model = VerifyReceiptRequestModel::new("foo", None, None);
        assert_eq!(model.to_json().unwrap(), r#"{"receipt-data":"Zm9v"}"#);
    }

    #[test]
    fn test_empty_receipt_text_is_legal() {
        let model = VerifyReceiptRequestModel::new("", None, None);
        assert_eq!(model.to_json().unwrap(), r#"{"receipt-data":""}"#);
    }

    #[test]
    fn test_receipt_data_is_standard_base64_with_padding() {
        let model = VerifyReceiptRequestModel::new("fo", None, None);
        assert_eq!(model.receipt_data, "Zm8=");
    }
}
