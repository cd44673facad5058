//! The default URL security policy: trusted schemes and domains.

use url::{ParseError, Url};

use crate::adapters::{UrlPolicyError, UrlSecurityAdapter};
use crate::options::UrlPolicyOptions;

/// Accepts links to the wiki itself and to a list of trusted domains.
///
/// Locations are parsed as absolute URLs, or resolved against the wiki's base URL when they're
/// relative.  A protocol-relative location such as `//elsewhere.example/` therefore ends up on
/// its own host, and is checked like any absolute one.  A location with a `:` before its first
/// `/`, `?` or `#` is never resolved: it names a scheme the URL parser rejected.
#[derive(Debug, Clone)]
pub struct TrustedDomains {
    enabled: bool,
    domains: Vec<String>,
    schemes: Vec<String>,
    base: Url,
}

impl TrustedDomains {
    /// Builds the policy, failing if the configured base URL doesn't parse.
    pub fn new(options: &UrlPolicyOptions) -> Result<Self, UrlPolicyError> {
        let base = Url::parse(&options.base_url)?;

        Ok(TrustedDomains {
            enabled: options.enabled,
            domains: options
                .trusted_domains
                .iter()
                .map(|d| d.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            schemes: options
                .trusted_schemes
                .iter()
                .map(|s| s.trim().to_ascii_lowercase())
                .collect(),
            base,
        })
    }

    /// Whether `host` is the wiki's own host, a trusted domain, or a sub-domain of one.
    pub fn is_domain_trusted(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();

        if self.base.host_str().map_or(false, |base| base.eq_ignore_ascii_case(&host)) {
            return true;
        }

        self.domains.iter().any(|domain| {
            host == *domain
                || (host.len() > domain.len()
                    && host.ends_with(domain.as_str())
                    && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
        })
    }

    fn parse(&self, location: &str) -> Result<Url, UrlPolicyError> {
        match Url::parse(location) {
            Ok(url) => Ok(url),
            Err(ParseError::RelativeUrlWithoutBase) if !has_scheme_like_prefix(location) => {
                Ok(self.base.join(location)?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Whether `location` has a `:` in its first path segment, as in `my_wiki:Main.Page`.  Such a
/// location is an invalid absolute URL rather than a relative one.
fn has_scheme_like_prefix(location: &str) -> bool {
    location
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .map_or(false, |segment| segment.contains(':'))
}

impl UrlSecurityAdapter for TrustedDomains {
    fn parse_to_safe_uri(&self, location: &str) -> Result<Url, UrlPolicyError> {
        let url = self.parse(location)?;

        if !self.enabled {
            return Ok(url);
        }

        if !self.schemes.iter().any(|s| s == url.scheme()) {
            return Err(UrlPolicyError::UntrustedScheme(url.scheme().to_string()));
        }

        match url.host_str() {
            Some(host) if !self.is_domain_trusted(host) => {
                Err(UrlPolicyError::UntrustedDomain(host.to_string()))
            }
            _ => Ok(url),
        }
    }
}
