/// Host environment descriptor supplied by the extension at construction.
///
/// Every field ends up as a resource attribute on the spans this process
/// emits; none of them change for the lifetime of the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryContext {
    pub extension_id: String,
    pub extension_version: String,
    /// Deployment environment name, e.g. `production` or `dev`.
    pub env: String,
    /// Stable machine/device identifier assigned by the host.
    pub machine_id: String,
    /// OS/platform the host reports, e.g. `darwin`, `linux`, `win32`.
    pub platform: String,
    /// Identifier of the current host session.
    pub session_id: String,
    /// UI language of the host.
    pub language: String,
    pub vscode_edition: String,
    pub vscode_version: String,
    pub vscode_host: String,
}

impl TelemetryContext {
    pub fn new(extension_id: impl Into<String>, extension_version: impl Into<String>) -> Self {
        Self {
            extension_id: extension_id.into(),
            extension_version: extension_version.into(),
            env: String::new(),
            machine_id: String::new(),
            platform: String::new(),
            session_id: String::new(),
            language: String::new(),
            vscode_edition: String::new(),
            vscode_version: String::new(),
            vscode_host: String::new(),
        }
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn with_machine_id(mut self, machine_id: impl Into<String>) -> Self {
        self.machine_id = machine_id.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Edition, version, and application name of the hosting editor.
    pub fn with_host(
        mut self,
        edition: impl Into<String>,
        version: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        self.vscode_edition = edition.into();
        self.vscode_version = version.into();
        self.vscode_host = host.into();
        self
    }
}

/// Outbound proxy configuration forwarded to the exporter's HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyOptions {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Construction options for [`crate::OtelProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOptions {
    pub proxy: Option<ProxyOptions>,
    /// Debug mode: console span export, synchronous delivery, dev endpoint,
    /// and verbose diagnostic logging.
    pub debugging: bool,
}

impl ProviderOptions {
    pub fn with_proxy(mut self, proxy: ProxyOptions) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_debugging(mut self, debugging: bool) -> Self {
        self.debugging = debugging;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_new_sets_identity_only() {
        let context = TelemetryContext::new("eamodio.gitlens", "17.0.0");

        assert_eq!(context.extension_id, "eamodio.gitlens");
        assert_eq!(context.extension_version, "17.0.0");
        assert!(context.env.is_empty());
        assert!(context.session_id.is_empty());
    }

    #[test]
    fn context_with_methods_chain() {
        let context = TelemetryContext::new("eamodio.gitlens", "17.0.0")
            .with_env("production")
            .with_machine_id("machine-1")
            .with_platform("darwin")
            .with_session_id("session-1")
            .with_language("en")
            .with_host("Stable", "1.92.0", "desktop");

        assert_eq!(context.env, "production");
        assert_eq!(context.machine_id, "machine-1");
        assert_eq!(context.platform, "darwin");
        assert_eq!(context.session_id, "session-1");
        assert_eq!(context.language, "en");
        assert_eq!(context.vscode_edition, "Stable");
        assert_eq!(context.vscode_version, "1.92.0");
        assert_eq!(context.vscode_host, "desktop");
    }

    #[test]
    fn proxy_options_without_auth() {
        let proxy = ProxyOptions::new("http://proxy.internal:3128");

        assert_eq!(proxy.url, "http://proxy.internal:3128");
        assert!(proxy.username.is_none());
        assert!(proxy.password.is_none());
    }

    #[test]
    fn proxy_options_with_basic_auth() {
        let proxy = ProxyOptions::new("http://proxy.internal:3128").with_basic_auth("user", "pass");

        assert_eq!(proxy.username.as_deref(), Some("user"));
        assert_eq!(proxy.password.as_deref(), Some("pass"));
    }

    #[test]
    fn provider_options_default_is_production() {
        let options = ProviderOptions::default();

        assert!(!options.debugging);
        assert!(options.proxy.is_none());
    }

    #[test]
    fn provider_options_builder_chain() {
        let options = ProviderOptions::default()
            .with_debugging(true)
            .with_proxy(ProxyOptions::new("http://localhost:8888"));

        assert!(options.debugging);
        assert_eq!(
            options.proxy.map(|p| p.url),
            Some("http://localhost:8888".to_owned())
        );
    }
}
