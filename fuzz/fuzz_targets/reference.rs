#![no_main]
use libfuzzer_sys::fuzz_target;

use link_group::DocumentReference;

fuzz_target!(|s: &str| {
    if let Ok(reference) = DocumentReference::parse(s, "xwiki") {
        let serialized = reference.serialize();
        assert_eq!(
            DocumentReference::parse(&serialized, "other").as_ref(),
            Ok(&reference)
        );
    }
});
