/// Classification of a validation result.
///
/// Every status code the verification service can return maps to exactly one
/// category; `TransportFailure` covers failures that never produced a status
/// code at all (network errors, unreadable responses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Approved,
    /// The service could not read the request, or the receipt data it
    /// carried was malformed.
    MalformedRequest,
    /// The receipt could not be authenticated.
    Unauthenticated,
    /// The supplied shared secret does not match the one on file.
    SecretMismatch,
    /// The receipt server is temporarily unavailable.
    ServerUnavailable,
    /// The receipt is valid, but the subscription it attests to has expired.
    SubscriptionExpired,
    /// The receipt was submitted to the wrong environment (sandbox receipt
    /// to production, or the reverse).
    EnvironmentMismatch,
    /// A status code outside the documented table. Still a rejection.
    UnknownStatus,
    /// The exchange with the verification service failed before a status
    /// code was obtained.
    TransportFailure,
}

/// The result of one receipt validation.
///
/// A value object: immutable once built, compared by its fields. `approved`
/// is true exactly when the service returned status 0; every other status
/// code, every unknown code, and every transport failure is a denial that
/// callers can tell apart through `category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub approved: bool,
    /// The protocol status code, or `None` when the exchange failed before
    /// one was obtained.
    pub status_code: Option<i64>,
    pub category: StatusCategory,
    /// Human-readable diagnostic; empty for approved outcomes.
    pub message: String,
}

impl ValidationOutcome {
    /// Maps a protocol status code to its outcome. Total over `i64`:
    /// undocumented codes classify as `UnknownStatus`.
    pub fn from_status(status: i64) -> Self {
        let (category, message) = match status {
            0 => (StatusCategory::Approved, String::new()),
            21000 => (
                StatusCategory::MalformedRequest,
                "App store could not read".to_owned(),
            ),
            21002 => (
                StatusCategory::MalformedRequest,
                "Data was malformed".to_owned(),
            ),
            21003 => (
                StatusCategory::Unauthenticated,
                "Receipt not authenticated".to_owned(),
            ),
            21004 => (
                StatusCategory::SecretMismatch,
                "Shared secret does not match".to_owned(),
            ),
            21005 => (
                StatusCategory::ServerUnavailable,
                "Receipt server unavailable".to_owned(),
            ),
            21006 => (
                StatusCategory::SubscriptionExpired,
                "Receipt valid but sub expired".to_owned(),
            ),
            21007 => (
                StatusCategory::EnvironmentMismatch,
                "Sandbox receipt sent to Production environment".to_owned(),
            ),
            21008 => (
                StatusCategory::EnvironmentMismatch,
                "Production receipt sent to Sandbox environment".to_owned(),
            ),
            other => (
                StatusCategory::UnknownStatus,
                format!("Unknown error: status code = {other}"),
            ),
        };
        Self {
            approved: status == 0,
            status_code: Some(status),
            category,
            message,
        }
    }

    /// Outcome for an exchange that failed before a status code was
    /// obtained: network error, unreadable response, or a response without a
    /// `status` field.
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            approved: false,
            status_code: None,
            category: StatusCategory::TransportFailure,
            message: detail.into(),
        }
    }

    /// True when the receipt was submitted to the wrong environment
    /// (status 21007 or 21008). Callers wanting automatic fallback against
    /// the opposite endpoint can key a retry off this; the validator itself
    /// never retries.
    pub fn is_environment_mismatch(&self) -> bool {
        self.category == StatusCategory::EnvironmentMismatch
    }

    /// True when the denial came from the transport rather than the
    /// protocol. Unlike a protocol rejection, retrying one of these with the
    /// same receipt can succeed.
    pub fn is_transport_failure(&self) -> bool {
        self.category == StatusCategory::TransportFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_iff_status_zero() {
        for code in [0, 1, -1, 21000, 21004, 21008, 99999] {
            let outcome = ValidationOutcome::from_status(code);
            assert_eq!(outcome.approved, code == 0, "status {code}");
            assert_eq!(outcome.status_code, Some(code));
        }
    }

    #[test]
    fn test_status_table() {
        let expect = [
            (21000, StatusCategory::MalformedRequest, "App store could not read"),
            (21002, StatusCategory::MalformedRequest, "Data was malformed"),
            (21003, StatusCategory::Unauthenticated, "Receipt not authenticated"),
            (21004, StatusCategory::SecretMismatch, "Shared secret does not match"),
            (21005, StatusCategory::ServerUnavailable, "Receipt server unavailable"),
            (21006, StatusCategory::SubscriptionExpired, "Receipt valid but sub expired"),
            (
                21007,
                StatusCategory::EnvironmentMismatch,
                "Sandbox receipt sent to Production environment",
            ),
            (
                21008,
                StatusCategory::EnvironmentMismatch,
                "Production receipt sent to Sandbox environment",
            ),
        ];
        for (code, category, message) in expect {
            let outcome = ValidationOutcome::from_status(code);
            assert!(!outcome.approved);
            assert_eq!(outcome.category, category, "status {code}");
            assert_eq!(outcome.message, message, "status {code}");
        }
    }

    #[test]
    fn test_approved_outcome_has_empty_message() {
        let outcome = ValidationOutcome::from_status(0);
        assert_eq!(outcome.category, StatusCategory::Approved);
        assert!(outcome.message.is_empty());
    }

    #[test]
    fn test_unknown_status_code() {
        let outcome = ValidationOutcome::from_status(99999);
        assert!(!outcome.approved);
        assert_eq!(outcome.category, StatusCategory::UnknownStatus);
        assert_eq!(outcome.message, "Unknown error: status code = 99999");
    }

    #[test]
    fn test_mapping_is_pure() {
        assert_eq!(
            ValidationOutcome::from_status(21004),
            ValidationOutcome::from_status(21004)
        );
    }

    #[test]
    fn test_transport_failure() {
        let outcome = ValidationOutcome::transport_failure("connection refused");
        assert!(!outcome.approved);
        assert_eq!(outcome.status_code, None);
        assert!(outcome.is_transport_failure());
        assert_eq!(outcome.message, "connection refused");
    }

    #[test]
    fn test_environment_mismatch_predicate() {
        assert!(ValidationOutcome::from_status(21007).is_environment_mismatch());
        assert!(ValidationOutcome::from_status(21008).is_environment_mismatch());
        assert!(!ValidationOutcome::from_status(21004).is_environment_mismatch());
        assert!(!ValidationOutcome::transport_failure("x").is_environment_mismatch());
    }
}
