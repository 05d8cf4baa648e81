//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source carried by struct variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for credsync
#[derive(Error, Debug)]
pub enum Error {
    /// The shared store could not complete an operation (network, timeout, protocol)
    #[error("Shared store unavailable: {message}")]
    StoreUnavailable {
        /// Description of the failed store operation
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Another holder owns the lock for this key
    #[error("Lock contended: {key}")]
    LockContended {
        /// The lock key that is held elsewhere
        key: String,
    },

    /// Another process is refreshing and no cached value exists yet
    #[error("Credential not yet available: {key}")]
    NotYetAvailable {
        /// The credential key that has no value yet
        key: String,
    },

    /// The issuer call failed or returned an unusable value
    #[error("Credential refresh failed: {message}")]
    RefreshFailed {
        /// Description of the refresh failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A change observer rejected an event
    #[error("Observer '{observer}' failed: {message}")]
    ObserverFailed {
        /// Name of the failing observer
        observer: String,
        /// Description of the failure
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Store error creation methods
impl Error {
    /// Create a store unavailable error
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store unavailable error with source
    pub fn store_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Coordination error creation methods
impl Error {
    /// Create a lock contended error
    pub fn lock_contended<S: Into<String>>(key: S) -> Self {
        Self::LockContended { key: key.into() }
    }

    /// Create a not-yet-available error
    pub fn not_yet_available<S: Into<String>>(key: S) -> Self {
        Self::NotYetAvailable { key: key.into() }
    }
}

// Refresh and observer error creation methods
impl Error {
    /// Create a refresh failure
    pub fn refresh_failed<S: Into<String>>(message: S) -> Self {
        Self::RefreshFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a refresh failure with source
    pub fn refresh_failed_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::RefreshFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an observer failure
    pub fn observer_failed<O: Into<String>, S: Into<String>>(observer: O, message: S) -> Self {
        Self::ObserverFailed {
            observer: observer.into(),
            message: message.into(),
        }
    }

    /// Re-classify an error returned by a refresh function
    ///
    /// Refresh failures pass through unchanged; anything else is wrapped so the
    /// caller of `get_or_refresh` always sees `RefreshFailed` for issuer problems.
    pub fn into_refresh_failure(self) -> Self {
        match self {
            refresh @ Self::RefreshFailed { .. } => refresh,
            other => Self::RefreshFailed {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

// Argument, configuration and internal error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether retrying the same call later may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. }
                | Self::LockContended { .. }
                | Self::NotYetAvailable { .. }
        )
    }

    /// Whether this is the transient "someone else is refreshing" outcome
    pub fn is_not_yet_available(&self) -> bool {
        matches!(self, Self::NotYetAvailable { .. })
    }

    /// Whether this is a lock contention outcome
    pub fn is_lock_contended(&self) -> bool {
        matches!(self, Self::LockContended { .. })
    }
}
