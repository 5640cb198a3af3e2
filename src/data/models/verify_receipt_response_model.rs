use serde::Deserialize;

/// Response body returned by the `verifyReceipt` endpoint.
///
/// The endpoint replies with HTTP 200 even for rejections and reports the
/// result through the `status` field; every other field is ignored here.
///
/// https://developer.apple.com/documentation/appstorereceipts/responsebody
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyReceiptResponseModel {
    /// 0 for an approved receipt, a non-zero rejection code otherwise.
    pub(crate) status: i64,
}

impl VerifyReceiptResponseModel {
    /// Parses a raw response body. A body that is not valid JSON, or that
    /// lacks an integer `status` field, is an error — the caller treats it
    /// the same as a transport failure.
    pub(crate) fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
