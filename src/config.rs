use std::time::Duration;

/// Sandbox `verifyReceipt` endpoint, for receipts from test purchases.
pub const SANDBOX_VERIFY_URL: &str = "https://sandbox.itunes.apple.com/verifyReceipt";

/// Production `verifyReceipt` endpoint.
pub const PRODUCTION_VERIFY_URL: &str = "https://buy.itunes.apple.com/verifyReceipt";

/// Default timeout for establishing a connection to the verification
/// endpoint.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for the full request/response exchange. The endpoint
/// normally answers well within this; a stalled connection must not hold the
/// calling thread indefinitely.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a receipt validator.
///
/// Built once and reused for the lifetime of the validator. All fields are
/// read-only after construction, so a configured validator may be shared
/// across concurrently running validations without synchronization.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// If true, receipts are submitted to the sandbox endpoint, else
    /// production.
    pub use_sandbox: bool,
    /// The app's shared secret. Required by the verification service for
    /// receipts containing auto-renewable subscriptions.
    pub shared_secret: Option<String>,
    /// If true, non-approved outcomes are reported through the configured
    /// diagnostic sink.
    pub logging_enabled: bool,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            use_sandbox: false,
            shared_secret: None,
            logging_enabled: true,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl ValidatorConfig {
    /// Configuration targeting the sandbox endpoint.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            use_sandbox: true,
            ..Self::default()
        }
    }

    /// Sets the app's shared secret.
    #[must_use]
    pub fn with_shared_secret(mut self, shared_secret: impl Into<String>) -> Self {
        self.shared_secret = Some(shared_secret.into());
        self
    }

    /// Enables or disables diagnostic logging of non-approved outcomes.
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Overrides the connect and read timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }

    /// The `verifyReceipt` endpoint selected by this configuration.
    pub fn verify_url(&self) -> &'static str {
        if self.use_sandbox {
            SANDBOX_VERIFY_URL
        } else {
            PRODUCTION_VERIFY_URL
        }
    }
}
