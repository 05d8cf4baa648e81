//! Domain constants
//!
//! Defaults that describe the credential lifecycle. Infrastructure-level
//! defaults (config file names, env prefixes) live in `credsync_infrastructure::constants`.

use std::time::Duration;

// ============================================================================
// KEY LAYOUT
// ============================================================================

/// Separator between key components (`<namespace>:<owner>:<field>`)
pub const KEY_SEPARATOR: char = ':';

/// Default namespace prefix for credential keys
pub const DEFAULT_NAMESPACE: &str = "cred";

/// Field name of the per-owner lock key
pub const LOCK_FIELD: &str = "sync";

/// Field name used for access tokens
pub const ACCESS_TOKEN_FIELD: &str = "token";

/// Field name used for JS-API tickets
pub const JS_API_TICKET_FIELD: &str = "ticket";

// ============================================================================
// CREDENTIAL LIFETIME
// ============================================================================

/// Lifetime the issuer grants a credential, in seconds
pub const ISSUER_EXPIRY_SECS: u64 = 7200;

/// Cache TTL in seconds, kept below the issuer expiry to force a proactive refresh
pub const DEFAULT_CREDENTIAL_TTL_SECS: u64 = 7100;

// ============================================================================
// LOCKING
// ============================================================================

/// Default lease of the refresh lock (10 seconds)
pub const DEFAULT_LOCK_LEASE: Duration = Duration::from_secs(10);

/// Default interval between acquisition attempts when blocking
pub const DEFAULT_LOCK_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fraction of the lease after which a running refresh renews it
pub const DEFAULT_LEASE_RENEW_FRACTION: f64 = 0.5;
