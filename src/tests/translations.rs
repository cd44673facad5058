use crate::plugins::translations::substitute;
use crate::plugins::DefaultTranslations;
use crate::{INVALID_URI_ERROR_DESCRIPTION, INVALID_URI_ERROR_HEADER};

use super::*;

#[test]
fn known_keys() {
    assert_eq!(
        DefaultTranslations.translate(INVALID_URI_ERROR_HEADER, &[]),
        "Invalid link"
    );
    assert_eq!(
        DefaultTranslations.translate(INVALID_URI_ERROR_DESCRIPTION, &["javascript:alert(1)"]),
        "The link to [javascript:alert(1)] was blocked because it is not considered safe. If it \
         is legitimate, add its domain to the trusted domains of the URL security configuration."
    );

    for key in &DefaultTranslations::KEYS {
        assert_ne!(DefaultTranslations.translate(key, &[]), *key);
    }
}

#[test]
fn keys_match_the_host_bundle() {
    assert_eq!(
        INVALID_URI_ERROR_HEADER,
        "org.xwiki.contrib.link-format.invalid-uri-error.header"
    );
    assert_eq!(
        INVALID_URI_ERROR_DESCRIPTION,
        "org.xwiki.contrib.link-format.invalid-uri-error.description"
    );
}

#[test]
fn unknown_key_translates_to_itself() {
    assert_eq!(
        DefaultTranslations.translate("no.such.key", &["x"]),
        "no.such.key"
    );
}

#[test]
fn placeholders() {
    assert_eq!(substitute("{1} {0}", &["a", "b"]), "b a");
    assert_eq!(substitute("{0}{0}", &["a"]), "aa");
    assert_eq!(substitute("{2} {x} {", &["a", "b"]), "{2} {x} {");
    assert_eq!(substitute("no placeholders", &["a"]), "no placeholders");
    assert_eq!(substitute("[{0}]", &["{1}"]), "[{1}]");
}
