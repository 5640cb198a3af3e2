use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reversal text for a cancelled purchase.
pub const REVERSAL_TEXT_CANCELLED: &str = "Cancelled";
/// Reversal text for a refunded purchase.
pub const REVERSAL_TEXT_REFUNDED: &str = "Refunded";

/// A completed in-app purchase as reported by the client.
///
/// Plain data holder with no behavior beyond [`is_purchased`]; every field
/// is optional because stores differ in what they report. Receipt validation
/// consumes only `transaction_data`, which for Apple purchases carries the
/// receipt itself.
///
/// [`is_purchased`]: PaymentTransaction::is_purchased
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    /// Item identifier/SKU matching the item id in the IAP service.
    pub identifier: Option<String>,
    /// The store the purchase was made on.
    pub store_name: Option<String>,
    /// Unique identifier of the purchase on the corresponding store.
    pub order_id: Option<String>,
    /// Unique id of the in-app purchasing request.
    pub request_id: Option<String>,
    /// Unique user id associated with the purchase.
    pub user_id: Option<String>,
    /// The original purchase time.
    pub purchase_time: Option<DateTime<Utc>>,
    /// Title/info for the purchase, e.g. "Purchased: 100 Coins".
    pub purchase_text: Option<String>,
    /// Amount charged in the lowest denomination, e.g. 499 for USD 4.99.
    pub purchase_cost: Option<i64>,
    /// ISO 4217 currency code for `purchase_cost`, e.g. "GBP".
    pub purchase_cost_currency: Option<String>,
    /// Refund/cancellation time, if the purchase was reversed.
    pub reversal_time: Option<DateTime<Utc>>,
    /// Title/info for the reversal, e.g. [`REVERSAL_TEXT_REFUNDED`].
    pub reversal_text: Option<String>,
    /// The original data string from the purchase. For Apple purchases this
    /// is the receipt submitted for verification.
    pub transaction_data: Option<String>,
    /// Store-provided signature over `transaction_data`, where one exists.
    pub transaction_data_signature: Option<String>,
}

impl PaymentTransaction {
    /// True if the order stands, i.e. no refund or cancellation is recorded.
    pub fn is_purchased(&self) -> bool {
        self.reversal_time.is_none()
    }
}
