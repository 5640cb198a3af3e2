use crate::{
    config::ValidatorConfig,
    data::{
        datasources::verify_receipt_datasource::{
            VerifyReceiptDatasource, VerifyReceiptDatasourceImpl,
        },
        models::{
            verify_receipt_request_model::VerifyReceiptRequestModel,
            verify_receipt_response_model::VerifyReceiptResponseModel,
        },
    },
    domain::{
        entities::{
            payment_transaction::PaymentTransaction,
            validation_outcome::{StatusCategory, ValidationOutcome},
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::ValidationError,
    logging::{DiagnosticSink, Severity, TracingSink},
};

pub(crate) struct ReceiptRepositoryImpl<D: VerifyReceiptDatasource, S: DiagnosticSink> {
    verify_receipt_datasource: D,
    diagnostic_sink: S,
    config: ValidatorConfig,
}

impl<D: VerifyReceiptDatasource, S: DiagnosticSink> ReceiptRepository
    for ReceiptRepositoryImpl<D, S>
{
    fn validate_receipt(
        &self,
        receipt_text: &str,
        exclude_old_transactions: Option<bool>,
    ) -> ValidationOutcome {
        let request = VerifyReceiptRequestModel::new(
            receipt_text,
            self.config.shared_secret.as_deref(),
            exclude_old_transactions,
        );
        // Serialization of this model cannot fail for well-formed inputs,
        // but the contract of this method is total, so degrade rather than
        // propagate.
        let body = match request.to_json() {
            Ok(body) => body,
            Err(e) => {
                return self.report(ValidationOutcome::transport_failure(
                    ValidationError::RequestEncoding(e).to_string(),
                ))
            }
        };

        let response_body = match self
            .verify_receipt_datasource
            .post_receipt(self.config.verify_url(), &body)
        {
            Ok(response_body) => response_body,
            Err(e) => return self.report(ValidationOutcome::transport_failure(e.to_string())),
        };

        // A body without an integer `status` field is indistinguishable from
        // an unreadable response.
        let outcome = match VerifyReceiptResponseModel::from_json(&response_body) {
            Ok(response) => ValidationOutcome::from_status(response.status),
            Err(e) => {
                ValidationOutcome::transport_failure(ValidationError::InvalidResponse(e).to_string())
            }
        };
        self.report(outcome)
    }

    fn validate_transaction(&self, transaction: &PaymentTransaction) -> ValidationOutcome {
        // A record with no stored receipt is submitted as an empty receipt;
        // the verification service rejects it as malformed. The exclusion
        // flag never applies to transaction-level checks.
        self.validate_receipt(transaction.transaction_data.as_deref().unwrap_or(""), None)
    }
}

impl<D: VerifyReceiptDatasource, S: DiagnosticSink> ReceiptRepositoryImpl<D, S> {
    pub(crate) fn with_parts(
        verify_receipt_datasource: D,
        diagnostic_sink: S,
        config: ValidatorConfig,
    ) -> Self {
        Self {
            verify_receipt_datasource,
            diagnostic_sink,
            config,
        }
    }

    /// Emits the diagnostic for a non-approved outcome and passes the
    /// outcome through. Approvals are never reported; protocol rejections
    /// are warnings, transport failures are errors.
    fn report(&self, outcome: ValidationOutcome) -> ValidationOutcome {
        if self.config.logging_enabled && !outcome.approved {
            let severity = if outcome.category == StatusCategory::TransportFailure {
                Severity::Error
            } else {
                Severity::Warn
            };
            let line = match outcome.status_code {
                Some(code) if outcome.category != StatusCategory::UnknownStatus => {
                    format!("{code}: {}", outcome.message)
                }
                _ => outcome.message.clone(),
            };
            self.diagnostic_sink.emit(severity, &line);
        }
        outcome
    }
}

impl ReceiptRepositoryImpl<VerifyReceiptDatasourceImpl, TracingSink> {
    pub(crate) fn new(config: ValidatorConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            verify_receipt_datasource: VerifyReceiptDatasourceImpl::new(
                config.connect_timeout,
                config.read_timeout,
            )?,
            diagnostic_sink: TracingSink,
            config,
        })
    }
}
