use crate::{
    config::ValidatorConfig,
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasourceImpl,
        repositories::receipt_repository_impl::ReceiptRepositoryImpl,
    },
    domain::{
        entities::{
            payment_transaction::PaymentTransaction, validation_outcome::ValidationOutcome,
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::ValidationError,
    logging::TracingSink,
};

/// Entry point for receipt validation.
///
/// Holds an immutable configuration and a reusable HTTP client; one instance
/// serves many validations, concurrently if desired.
pub struct ReceiptValidator<R: ReceiptRepository> {
    receipt_repository: R,
}

impl<R: ReceiptRepository> ReceiptValidator<R> {
    /// Validates a receipt and returns the full classified outcome.
    ///
    /// receipt_text:
    ///   The text of the receipt (not base64 encoded).
    /// exclude_old_transactions:
    ///   Only used for iOS7-style app receipts that contain auto-renewable
    ///   or non-renewing subscriptions; pass `None` otherwise.
    pub fn validate(
        &self,
        receipt_text: &str,
        exclude_old_transactions: Option<bool>,
    ) -> ValidationOutcome {
        self.receipt_repository
            .validate_receipt(receipt_text, exclude_old_transactions)
    }

    /// Checks if a receipt is valid or not. Transport failures and protocol
    /// rejections alike come back as `false`; use [`validate`] to tell them
    /// apart.
    ///
    /// [`validate`]: ReceiptValidator::validate
    pub fn is_valid(&self, receipt_text: &str, exclude_old_transactions: Option<bool>) -> bool {
        self.validate(receipt_text, exclude_old_transactions).approved
    }

    /// Validates the receipt carried by a purchase record.
    pub fn validate_transaction(&self, transaction: &PaymentTransaction) -> ValidationOutcome {
        self.receipt_repository.validate_transaction(transaction)
    }

    /// Checks if a purchase record's receipt is valid or not.
    pub fn is_transaction_valid(&self, transaction: &PaymentTransaction) -> bool {
        self.validate_transaction(transaction).approved
    }
}

impl ReceiptValidator<ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl, TracingSink>> {
    /// Builds a validator with the production datasource and the
    /// tracing-backed diagnostic sink.
    pub fn new(config: ValidatorConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            receipt_repository: ReceiptRepositoryImpl::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::validation_outcome::StatusCategory;

    /// Repository stub answering from a fixed status code.
    struct StubRepository {
        status: i64,
    }

    impl ReceiptRepository for StubRepository {
        fn validate_receipt(
            &self,
            _receipt_text: &str,
            _exclude_old_transactions: Option<bool>,
        ) -> ValidationOutcome {
            ValidationOutcome::from_status(self.status)
        }

        fn validate_transaction(&self, transaction: &PaymentTransaction) -> ValidationOutcome {
            self.validate_receipt(transaction.transaction_data.as_deref().unwrap_or(""), None)
        }
    }

    #[test]
    fn test_is_valid_mirrors_outcome() {
        let validator = ReceiptValidator {
            receipt_repository: StubRepository { status: 0 },
        };
        assert!(validator.is_valid("receipt", None));

        let validator = ReceiptValidator {
            receipt_repository: StubRepository { status: 21003 },
        };
        assert!(!validator.is_valid("receipt", None));
        assert_eq!(
            validator.validate("receipt", None).category,
            StatusCategory::Unauthenticated
        );
    }

    #[test]
    fn test_transaction_check() {
        let validator = ReceiptValidator {
            receipt_repository: StubRepository { status: 0 },
        };
        let transaction = PaymentTransaction {
            transaction_data: Some("receipt".to_owned()),
            ..Default::default()
        };
        assert!(validator.is_transaction_valid(&transaction));
    }

    #[test]
    fn test_construction_from_config() {
        assert!(ReceiptValidator::new(ValidatorConfig::sandbox().with_shared_secret("foo")).is_ok());
    }
}
