//! Configuration for the URL policy and the rendered link.

#[cfg(feature = "bon")]
use bon::Builder;

/// Umbrella options struct.
#[derive(Default, Debug, Clone)]
pub struct Options {
    /// Configure the trusted-domain URL policy.
    pub policy: UrlPolicyOptions,

    /// Configure the rendered link.
    pub render: RenderOptions,
}

/// Options for [`TrustedDomains`](crate::plugins::TrustedDomains), the default URL policy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct UrlPolicyOptions {
    /// Whether locations are checked at all.  When disabled, anything which parses is accepted.
    ///
    /// ```rust
    /// # use link_group::{UrlSecurityAdapter, plugins::TrustedDomains, UrlPolicyOptions};
    /// let mut options = UrlPolicyOptions::default();
    /// let policy = TrustedDomains::new(&options).unwrap();
    /// assert!(policy.parse_to_safe_uri("https://elsewhere.example/").is_err());
    ///
    /// options.enabled = false;
    /// let policy = TrustedDomains::new(&options).unwrap();
    /// assert!(policy.parse_to_safe_uri("https://elsewhere.example/").is_ok());
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enabled: bool,

    /// Domains links may point to.  Sub-domains of a trusted domain are trusted too.
    ///
    /// ```rust
    /// # use link_group::{UrlSecurityAdapter, plugins::TrustedDomains, UrlPolicyOptions};
    /// let mut options = UrlPolicyOptions::default();
    /// options.trusted_domains = vec!["example.org".to_string()];
    /// let policy = TrustedDomains::new(&options).unwrap();
    /// assert!(policy.parse_to_safe_uri("https://docs.example.org/a").is_ok());
    /// assert!(policy.parse_to_safe_uri("https://example.org.evil.test/").is_err());
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub trusted_domains: Vec<String>,

    /// Schemes links may use.
    #[cfg_attr(feature = "bon", builder(default = default_trusted_schemes()))]
    pub trusted_schemes: Vec<String>,

    /// The URL of the wiki itself.  Relative locations are resolved against it, and its host is
    /// always trusted.
    #[cfg_attr(feature = "bon", builder(default = DEFAULT_BASE_URL.to_string()))]
    pub base_url: String,
}

/// The base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost/";

fn default_trusted_schemes() -> Vec<String> {
    vec!["http".to_string(), "https".to_string()]
}

impl Default for UrlPolicyOptions {
    fn default() -> Self {
        UrlPolicyOptions {
            enabled: true,
            trusted_domains: vec![],
            trusted_schemes: default_trusted_schemes(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Options for the rendered link.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct RenderOptions {
    /// A `rel` attribute for the anchor, e.g. `nofollow`.
    ///
    /// ```rust
    /// # use link_group::{render, RenderOptions};
    /// let mut options = RenderOptions::default();
    /// options.rel = Some("nofollow".to_string());
    /// let blocks = render::anchor("https://example.org/", vec![], true, &options);
    /// assert_eq!(
    ///     link_group::html::blocks_to_html(&blocks, link_group::Syntax::Html5),
    ///     "<a href=\"https://example.org/\" rel=\"nofollow\"></a>"
    /// );
    /// ```
    pub rel: Option<String>,
}
