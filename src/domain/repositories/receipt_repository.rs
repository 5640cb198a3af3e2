use crate::domain::entities::{
    payment_transaction::PaymentTransaction, validation_outcome::ValidationOutcome,
};

pub trait ReceiptRepository: Send + Sync {
    /// Submits a receipt to the verification service and classifies the
    /// result.
    ///
    /// receipt_text:
    ///   The text of the receipt as received from the client (not base64
    ///   encoded).
    /// exclude_old_transactions:
    ///   Only used for iOS7-style app receipts that contain auto-renewable
    ///   or non-renewing subscriptions; pass `None` otherwise.
    ///
    /// Total: every transport or protocol failure comes back as a
    /// not-approved [`ValidationOutcome`], never as an error or a panic.
    fn validate_receipt(
        &self,
        receipt_text: &str,
        exclude_old_transactions: Option<bool>,
    ) -> ValidationOutcome;

    /// Validates the receipt carried by a purchase record's transaction
    /// data.
    fn validate_transaction(&self, transaction: &PaymentTransaction) -> ValidationOutcome;
}
