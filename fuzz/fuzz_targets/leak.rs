#![no_main]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

use link_group::plugins::{
    DefaultTranslations, FixedRights, PlainTextParser, StaticDocuments, TrustedDomains,
};
use link_group::{
    html, DocumentReference, LinkGroup, MacroContext, RenderOptions, Services, Syntax,
    UrlPolicyOptions, UrlSecurityAdapter,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    location: &'a str,
    content: &'a str,
    inline: bool,
    annotated: bool,
    editor: bool,
}

fuzz_target!(|input: Input| {
    let mut options = UrlPolicyOptions::default();
    options.trusted_domains = vec!["example.org".to_string()];
    let security = TrustedDomains::new(&options).unwrap();

    let target = DocumentReference::parse("Main.Target", "xwiki").unwrap();
    let mut documents = StaticDocuments::new();
    documents.insert(target.clone(), input.location);

    let rights = if input.editor {
        FixedRights::editor()
    } else {
        FixedRights::viewer()
    };
    let macro_ = LinkGroup::new(
        Services {
            documents: &documents,
            security: &security,
            authorization: &rights,
            localization: &DefaultTranslations,
            parser: &PlainTextParser,
        },
        RenderOptions::default(),
    );

    let syntax = if input.annotated {
        Syntax::AnnotatedHtml5
    } else {
        Syntax::Html5
    };
    let context = MacroContext {
        inline: input.inline,
        target_syntax: Some(syntax),
        ..MacroContext::default()
    };

    let blocks = match macro_.execute(&target.into(), Some(input.content), &context) {
        Ok(blocks) => blocks,
        Err(_) => return,
    };

    if security.parse_to_safe_uri(input.location).is_err() {
        if input.editor {
            assert_eq!(blocks.len(), 1);
        } else {
            assert!(blocks.is_empty());
        }
        assert!(!html::blocks_to_html(&blocks, syntax).contains("<a "));
    }
});
