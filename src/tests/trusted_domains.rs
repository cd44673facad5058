use crate::plugins::TrustedDomains;

use super::*;

fn policy(f: impl FnOnce(&mut UrlPolicyOptions)) -> TrustedDomains {
    let mut options = UrlPolicyOptions::default();
    f(&mut options);
    TrustedDomains::new(&options).unwrap()
}

#[test]
fn defaults_trust_only_the_wiki() {
    let security = policy(|_| ());

    assert!(security.parse_to_safe_uri("http://localhost/bin/view/Main/").is_ok());
    assert!(security.parse_to_safe_uri("/bin/view/Main/").is_ok());
    assert_eq!(
        security.parse_to_safe_uri("https://example.org/"),
        Err(UrlPolicyError::UntrustedDomain("example.org".to_string()))
    );
}

#[test]
fn relative_locations_resolve_against_base() {
    let security = policy(|o| o.base_url = "https://wiki.example.net/xwiki/".to_string());

    assert_eq!(
        security.parse_to_safe_uri("bin/view/Main/").unwrap().as_str(),
        "https://wiki.example.net/xwiki/bin/view/Main/"
    );
    assert_eq!(
        security.parse_to_safe_uri("/other").unwrap().as_str(),
        "https://wiki.example.net/other"
    );
}

#[test]
fn protocol_relative_locations_are_checked() {
    let security = trusted_example_org();

    assert_eq!(
        security.parse_to_safe_uri("//evil.test/phish"),
        Err(UrlPolicyError::UntrustedDomain("evil.test".to_string()))
    );
    assert!(security.parse_to_safe_uri("//docs.example.org/").is_ok());
}

#[test]
fn sub_domains_are_trusted() {
    let security = trusted_example_org();

    assert!(security.is_domain_trusted("example.org"));
    assert!(security.is_domain_trusted("a.b.example.org"));
    assert!(security.is_domain_trusted("EXAMPLE.org."));
    assert!(!security.is_domain_trusted("badexample.org"));
    assert!(!security.is_domain_trusted("example.org.evil.test"));
    assert!(!security.is_domain_trusted("org"));
}

#[test]
fn configured_domains_are_normalized() {
    let security = policy(|o| {
        o.trusted_domains = vec![" .Example.ORG ".to_string(), "".to_string()];
    });

    assert!(security.parse_to_safe_uri("https://www.example.org/").is_ok());
    assert!(security.parse_to_safe_uri("https://elsewhere.test/").is_err());
}

#[test]
fn untrusted_schemes() {
    let security = trusted_example_org();

    for (location, scheme) in &[
        ("javascript:alert(1)", "javascript"),
        ("data:text/html,<script>alert(1)</script>", "data"),
        ("ftp://example.org/file", "ftp"),
        ("xwiki:Main.WebHome", "xwiki"),
        ("mailto:admin@example.org", "mailto"),
    ] {
        assert_eq!(
            security.parse_to_safe_uri(location),
            Err(UrlPolicyError::UntrustedScheme(scheme.to_string())),
            "{}",
            location
        );
    }
}

#[test]
fn extra_schemes_can_be_trusted() {
    let security = policy(|o| {
        o.trusted_schemes = vec!["https".to_string(), "MAILTO".to_string()];
    });

    assert!(security.parse_to_safe_uri("mailto:admin@example.org").is_ok());
    assert!(security.parse_to_safe_uri("http://localhost/").is_err());
}

#[test]
fn malformed_locations() {
    let security = trusted_example_org();

    for location in &["http://exa mple.org/", "https://[::1", "http://"] {
        let err = security.parse_to_safe_uri(location).unwrap_err();
        assert!(!err.is_security(), "{}: {}", location, err);
    }
}

#[test]
fn disabled_policy_accepts_anything_parseable() {
    let security = policy(|o| o.enabled = false);

    assert!(security.parse_to_safe_uri("https://evil.test/").is_ok());
    assert!(security.parse_to_safe_uri("javascript:alert(1)").is_ok());
    assert!(security.parse_to_safe_uri("http://exa mple.org/").is_err());
}

#[test]
fn bad_base_url() {
    let mut options = UrlPolicyOptions::default();
    options.base_url = "not a url".to_string();

    assert!(matches!(
        TrustedDomains::new(&options),
        Err(UrlPolicyError::Syntax(..))
    ));
}

#[test]
fn invalid_scheme_names_are_not_relative() {
    let security = trusted_example_org();

    for location in &["my_wiki:Main.Missing", "1wiki:Main.Missing", "a b:c/d"] {
        assert_eq!(
            security.parse_to_safe_uri(location),
            Err(UrlPolicyError::Syntax(url::ParseError::RelativeUrlWithoutBase)),
            "{}",
            location
        );
    }

    assert!(security.parse_to_safe_uri("Main/a:b").is_ok());
    assert!(security.parse_to_safe_uri("?a=b:c").is_ok());
    assert!(security.parse_to_safe_uri("#a:b").is_ok());

    let security = policy(|o| o.enabled = false);
    assert!(security.parse_to_safe_uri("my_wiki:Main.Missing").is_err());
}
