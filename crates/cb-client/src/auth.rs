//! Authentication header derivation.
//!
//! [`AuthHeaders`] is derived from a [`ConnectionConfig`] by a pure
//! function; the header set for token auth and password auth is mutually
//! exclusive by construction.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::config::ConnectionConfig;

/// Vendor auth header carrying base64 `login:password`.
pub const HEADER_CYBOZU_AUTHORIZATION: &str = "X-Cybozu-Authorization";

/// Vendor auth header carrying a per-app API token.
pub const HEADER_CYBOZU_API_TOKEN: &str = "X-Cybozu-API-Token";

/// Standard HTTP Basic auth header.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Default header/transport options derived from a [`ConnectionConfig`].
///
/// Recomputed as a whole whenever auth options change; callers never see a
/// partially updated set.
#[derive(Clone)]
pub struct AuthHeaders {
    cybozu_authorization: Option<String>,
    api_token: Option<String>,
    basic_authorization: Option<String>,
    identity: Option<ClientIdentity>,
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field(
                "cybozu_authorization",
                &self.cybozu_authorization.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "basic_authorization",
                &self.basic_authorization.as_ref().map(|_| "[REDACTED]"),
            )
            .field("identity", &self.identity)
            .finish()
    }
}

/// TLS client certificate options applied at transport level.
#[derive(Clone)]
pub struct ClientIdentity {
    /// Path to the PKCS#12 certificate file.
    pub file: PathBuf,
    /// Certificate passphrase.
    pub password: String,
}

impl std::fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("file", &self.file)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AuthHeaders {
    /// Derive the default header set from a validated configuration.
    pub fn from_config(config: &ConnectionConfig) -> Self {
        // Token auth and password auth never coexist in the output.
        let (cybozu_authorization, api_token) = if config.use_api_token() {
            (None, config.token().map(String::from))
        } else {
            let credential = format!(
                "{}:{}",
                config.login().unwrap_or_default(),
                config.password().unwrap_or_default()
            );
            (Some(BASE64.encode(credential)), None)
        };

        let basic_authorization = if config.use_basic() {
            let credential = format!(
                "{}:{}",
                config.basic_login().unwrap_or_default(),
                config.basic_password().unwrap_or_default()
            );
            Some(format!("Basic {}", BASE64.encode(credential)))
        } else {
            None
        };

        let identity = if config.use_client_cert() {
            config.cert_file().map(|file| ClientIdentity {
                file: file.to_path_buf(),
                password: config.cert_password().unwrap_or_default().to_string(),
            })
        } else {
            None
        };

        Self {
            cybozu_authorization,
            api_token,
            basic_authorization,
            identity,
        }
    }

    /// The header name/value pairs to attach to every request.
    pub fn header_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(ref value) = self.cybozu_authorization {
            pairs.push((HEADER_CYBOZU_AUTHORIZATION, value.clone()));
        }
        if let Some(ref value) = self.api_token {
            pairs.push((HEADER_CYBOZU_API_TOKEN, value.clone()));
        }
        if let Some(ref value) = self.basic_authorization {
            pairs.push((HEADER_AUTHORIZATION, value.clone()));
        }
        pairs
    }

    /// Look up a default header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(HEADER_CYBOZU_AUTHORIZATION) {
            self.cybozu_authorization.as_deref()
        } else if name.eq_ignore_ascii_case(HEADER_CYBOZU_API_TOKEN) {
            self.api_token.as_deref()
        } else if name.eq_ignore_ascii_case(HEADER_AUTHORIZATION) {
            self.basic_authorization.as_deref()
        } else {
            None
        }
    }

    /// The TLS client certificate options, if configured.
    pub fn identity(&self) -> Option<&ClientIdentity> {
        self.identity.as_ref()
    }
}
