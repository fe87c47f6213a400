//! Connection and transport configuration.
//!
//! `ConnectionConfig` replaces the loose option mapping of older Cybozu
//! clients with a typed value validated once at construction. Credential
//! fields are redacted in Debug output.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Connection options for a Cybozu/Kintone tenant.
///
/// Exactly one primary credential scheme is active: an API token
/// (`use_api_token`) or a login/password pair. Basic authentication and a
/// TLS client certificate may each be layered on top independently.
///
/// Immutable once built; [`ConnectionConfig::merged`] derives a new value
/// from a partial [`AuthOptions`] overlay and re-validates it.
#[derive(Clone)]
pub struct ConnectionConfig {
    domain: String,
    subdomain: String,
    use_api_token: bool,
    token: Option<String>,
    login: Option<String>,
    password: Option<String>,
    use_basic: bool,
    basic_login: Option<String>,
    basic_password: Option<String>,
    use_client_cert: bool,
    cert_file: Option<PathBuf>,
    cert_password: Option<String>,
    debug: bool,
    logfile: Option<PathBuf>,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("domain", &self.domain)
            .field("subdomain", &self.subdomain)
            .field("use_api_token", &self.use_api_token)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("use_basic", &self.use_basic)
            .field("basic_login", &self.basic_login)
            .field(
                "basic_password",
                &self.basic_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("use_client_cert", &self.use_client_cert)
            .field("cert_file", &self.cert_file)
            .field(
                "cert_password",
                &self.cert_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("debug", &self.debug)
            .field("logfile", &self.logfile)
            .finish()
    }
}

impl ConnectionConfig {
    /// Create a new connection config builder.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }

    /// Load a configuration from environment variables.
    ///
    /// Required: `CYBOZU_DOMAIN`, `CYBOZU_SUBDOMAIN`, and either
    /// `CYBOZU_API_TOKEN` or both `CYBOZU_LOGIN` and `CYBOZU_PASSWORD`.
    ///
    /// Optional: `CYBOZU_BASIC_LOGIN`/`CYBOZU_BASIC_PASSWORD` (enables basic
    /// auth when both are set) and `CYBOZU_CERT_FILE`/`CYBOZU_CERT_PASSWORD`
    /// (enables a client certificate when both are set).
    pub fn from_env() -> Result<Self> {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }

        let mut builder = Self::builder()
            .domain(var("CYBOZU_DOMAIN").ok_or_else(|| Error::missing_option("domain"))?)
            .subdomain(var("CYBOZU_SUBDOMAIN").ok_or_else(|| Error::missing_option("subdomain"))?);

        if let Some(token) = var("CYBOZU_API_TOKEN") {
            builder = builder.api_token(token);
        } else {
            if let Some(login) = var("CYBOZU_LOGIN") {
                builder = builder.login(login);
            }
            if let Some(password) = var("CYBOZU_PASSWORD") {
                builder = builder.password(password);
            }
        }

        if let (Some(login), Some(password)) =
            (var("CYBOZU_BASIC_LOGIN"), var("CYBOZU_BASIC_PASSWORD"))
        {
            builder = builder.basic_auth(login, password);
        }
        if let (Some(file), Some(password)) =
            (var("CYBOZU_CERT_FILE"), var("CYBOZU_CERT_PASSWORD"))
        {
            builder = builder.client_cert(file, password);
        }

        builder.build()
    }

    /// The tenant domain, e.g. `cybozu.com`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The tenant subdomain.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// Whether API-token auth is the primary credential scheme.
    pub fn use_api_token(&self) -> bool {
        self.use_api_token
    }

    /// The API token, when token auth is configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The login name, when password auth is configured.
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// The login password, when password auth is configured.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Whether HTTP Basic auth is layered on top of the primary scheme.
    pub fn use_basic(&self) -> bool {
        self.use_basic
    }

    /// Basic auth login.
    pub fn basic_login(&self) -> Option<&str> {
        self.basic_login.as_deref()
    }

    /// Basic auth password.
    pub fn basic_password(&self) -> Option<&str> {
        self.basic_password.as_deref()
    }

    /// Whether a TLS client certificate is configured.
    pub fn use_client_cert(&self) -> bool {
        self.use_client_cert
    }

    /// Path to the PKCS#12 client certificate file.
    pub fn cert_file(&self) -> Option<&Path> {
        self.cert_file.as_deref()
    }

    /// Passphrase for the client certificate.
    pub fn cert_password(&self) -> Option<&str> {
        self.cert_password.as_deref()
    }

    /// Whether diagnostic request logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Optional diagnostic log file.
    pub fn logfile(&self) -> Option<&Path> {
        self.logfile.as_deref()
    }

    /// The API base URL, `https://{subdomain}.{domain}`.
    pub fn base_url(&self) -> String {
        format!("https://{}.{}", self.subdomain, self.domain)
    }

    /// Derive a new configuration by overlaying the set fields of `options`
    /// and re-validating the result. `self` is left untouched on failure.
    pub fn merged(&self, options: &AuthOptions) -> Result<Self> {
        let mut config = self.clone();
        if let Some(v) = options.use_api_token {
            config.use_api_token = v;
        }
        if let Some(ref v) = options.token {
            config.token = Some(v.clone());
        }
        if let Some(ref v) = options.login {
            config.login = Some(v.clone());
        }
        if let Some(ref v) = options.password {
            config.password = Some(v.clone());
        }
        if let Some(v) = options.use_basic {
            config.use_basic = v;
        }
        if let Some(ref v) = options.basic_login {
            config.basic_login = Some(v.clone());
        }
        if let Some(ref v) = options.basic_password {
            config.basic_password = Some(v.clone());
        }
        if let Some(v) = options.use_client_cert {
            config.use_client_cert = v;
        }
        if let Some(ref v) = options.cert_file {
            config.cert_file = Some(v.clone());
        }
        if let Some(ref v) = options.cert_password {
            config.cert_password = Some(v.clone());
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        fn present(value: Option<&str>) -> bool {
            value.is_some_and(|v| !v.is_empty())
        }

        if self.domain.is_empty() {
            return Err(Error::missing_option("domain"));
        }
        if self.subdomain.is_empty() {
            return Err(Error::missing_option("subdomain"));
        }

        // Exactly one primary credential scheme.
        if self.use_api_token {
            if !present(self.token.as_deref()) {
                return Err(Error::missing_option("token"));
            }
        } else {
            if !present(self.login.as_deref()) {
                return Err(Error::missing_option("login"));
            }
            if !present(self.password.as_deref()) {
                return Err(Error::missing_option("password"));
            }
        }

        if self.use_basic {
            if !present(self.basic_login.as_deref()) {
                return Err(Error::missing_option("basic_login"));
            }
            if !present(self.basic_password.as_deref()) {
                return Err(Error::missing_option("basic_password"));
            }
        }

        if self.use_client_cert {
            if self.cert_file.is_none() {
                return Err(Error::missing_option("cert_file"));
            }
            if !present(self.cert_password.as_deref()) {
                return Err(Error::missing_option("cert_password"));
            }
        }

        let base = self.base_url();
        url::Url::parse(&base)
            .map_err(|e| Error::new(ErrorKind::Config(format!("Invalid base URL {base}: {e}"))))?;

        Ok(())
    }
}

/// Builder for [`ConnectionConfig`]. `build()` validates the option
/// combination and fails with `MissingRequiredOption` naming the first
/// absent field.
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    domain: String,
    subdomain: String,
    options: AuthOptions,
    debug: bool,
    logfile: Option<PathBuf>,
}

impl ConnectionConfigBuilder {
    /// Set the tenant domain, e.g. `cybozu.com`.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the tenant subdomain.
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = subdomain.into();
        self
    }

    /// Set the login name for password auth.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.options.login = Some(login.into());
        self
    }

    /// Set the password for password auth.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.options.password = Some(password.into());
        self
    }

    /// Enable or disable API-token auth without supplying the token.
    pub fn use_api_token(mut self, enabled: bool) -> Self {
        self.options.use_api_token = Some(enabled);
        self
    }

    /// Set the API token value.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.options.token = Some(token.into());
        self
    }

    /// Switch to API-token auth with the given token.
    pub fn api_token(self, token: impl Into<String>) -> Self {
        self.use_api_token(true).token(token)
    }

    /// Enable or disable basic auth without supplying credentials.
    pub fn use_basic(mut self, enabled: bool) -> Self {
        self.options.use_basic = Some(enabled);
        self
    }

    /// Layer HTTP Basic auth on top of the primary scheme.
    pub fn basic_auth(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.options.use_basic = Some(true);
        self.options.basic_login = Some(login.into());
        self.options.basic_password = Some(password.into());
        self
    }

    /// Enable or disable the client certificate without supplying one.
    pub fn use_client_cert(mut self, enabled: bool) -> Self {
        self.options.use_client_cert = Some(enabled);
        self
    }

    /// Configure a PKCS#12 client certificate and its passphrase.
    pub fn client_cert(
        mut self,
        file: impl Into<PathBuf>,
        password: impl Into<String>,
    ) -> Self {
        self.options.use_client_cert = Some(true);
        self.options.cert_file = Some(file.into());
        self.options.cert_password = Some(password.into());
        self
    }

    /// Enable diagnostic request logging.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Write diagnostic logs to the given file instead of stderr.
    pub fn logfile(mut self, path: impl Into<PathBuf>) -> Self {
        self.logfile = Some(path.into());
        self
    }

    /// Validate the option combination and build the configuration.
    pub fn build(self) -> Result<ConnectionConfig> {
        let config = ConnectionConfig {
            domain: self.domain,
            subdomain: self.subdomain,
            use_api_token: self.options.use_api_token.unwrap_or(false),
            token: self.options.token,
            login: self.options.login,
            password: self.options.password,
            use_basic: self.options.use_basic.unwrap_or(false),
            basic_login: self.options.basic_login,
            basic_password: self.options.basic_password,
            use_client_cert: self.options.use_client_cert.unwrap_or(false),
            cert_file: self.options.cert_file,
            cert_password: self.options.cert_password,
            debug: self.debug,
            logfile: self.logfile,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Partial auth option overlay for `CybozuClient::change_auth_options`.
///
/// Unset fields keep their current value; set fields override it. The merged
/// result is re-validated as a whole before any state changes.
#[derive(Debug, Default, Clone)]
pub struct AuthOptions {
    pub use_api_token: Option<bool>,
    pub token: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub use_basic: Option<bool>,
    pub basic_login: Option<String>,
    pub basic_password: Option<String>,
    pub use_client_cert: Option<bool>,
    pub cert_file: Option<PathBuf>,
    pub cert_password: Option<String>,
}

impl AuthOptions {
    /// Overlay that switches the primary scheme to the given API token.
    pub fn api_token(token: impl Into<String>) -> Self {
        Self {
            use_api_token: Some(true),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Overlay that switches the primary scheme to login/password auth.
    pub fn password_auth(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            use_api_token: Some(false),
            login: Some(login.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }
}

/// Transport-level configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to emit request/response tracing events.
    pub enable_tracing: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for [`HttpConfig`].
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the HTTP configuration.
    pub fn build(self) -> HttpConfig {
        self.config
    }
}
