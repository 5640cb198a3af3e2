use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::errors::ValidationError;

pub(crate) trait VerifyReceiptDatasource: Send + Sync {
    /// Submit a serialized receipt-verification request:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// url:
    ///   The sandbox or production `verifyReceipt` endpoint.
    /// body:
    ///   The serialized JSON request body.
    ///
    /// Returns the raw response body. The endpoint reports rejections inside
    /// a 200 response, so a non-success HTTP status is a transport-level
    /// failure, as is any I/O error while sending or reading. No retries are
    /// performed at this layer.
    fn post_receipt(&self, url: &str, body: &str) -> Result<String, ValidationError>;
}

pub(crate) struct VerifyReceiptDatasourceImpl {
    client: reqwest::blocking::Client,
}

impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    fn post_receipt(&self, url: &str, body: &str) -> Result<String, ValidationError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body.to_owned())
            .send()
            .map_err(ValidationError::Callout)?;

        if !response.status().is_success() {
            return Err(ValidationError::CalloutStatus(response.status()));
        }

        response.text().map_err(ValidationError::Callout)
    }
}

impl VerifyReceiptDatasourceImpl {
    /// Both timeouts are mandatory: a stalled connection must release the
    /// calling thread once they elapse.
    pub(crate) fn new(
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .connect_timeout(connect_timeout)
                .timeout(read_timeout)
                .build()
                .map_err(ValidationError::ClientConstruction)?,
        })
    }
}
