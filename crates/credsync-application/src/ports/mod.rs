//! Application ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CredentialSource`] | Strategy answering `get_or_refresh` |
//! | [`CredentialIssuer`] | Remote call minting new credentials |

pub mod issuer;
pub mod source;

pub use issuer::CredentialIssuer;
pub use source::{CredentialSource, RefreshFn, RefreshFuture, SourceMode, refresh_with};
