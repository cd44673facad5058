//! Chooses and assembles the blocks a link-group call produces.

use crate::html;
use crate::nodes::{Block, MetaData, NodeMetaData, SyntaxFamily};
use crate::options::RenderOptions;
use crate::validator::Validation;

const END_LINK: &str = "</a>";

/// The four shapes a link-group call's output can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Unsafe location, and the user may edit: a single error block describing the location.
    ErrorReport,

    /// Unsafe location, and the user may not edit: nothing at all.
    Suppressed,

    /// Safe location, rendering for an editor: the content marked as user-authored, no link.
    EditableContent,

    /// Safe location, anything else: the content wrapped in an anchor.
    Anchor,
}

/// Selects the shape of the output.  `can_edit` is only called for an unsafe location.
pub fn select<F>(validation: &Validation, family: SyntaxFamily, can_edit: F) -> Shape
where
    F: FnOnce() -> bool,
{
    match (validation, family) {
        (Validation::Unsafe, _) => {
            if can_edit() {
                Shape::ErrorReport
            } else {
                Shape::Suppressed
            }
        }
        (Validation::Safe(..), SyntaxFamily::AnnotatedEditable) => Shape::EditableContent,
        (Validation::Safe(..), SyntaxFamily::Other) => Shape::Anchor,
    }
}

/// The error report shown to editors.
pub fn error_report<T: Into<String>, D: Into<String>>(title: T, description: D) -> Vec<Block> {
    vec![Block::error(title, description)]
}

/// `content` marked as user-authored with `metadata`.  Block-level content gets an extra group.
///
/// No link is produced: an editor would turn the whole region into one big link.
pub fn editable_content(content: Vec<Block>, inline: bool, metadata: MetaData) -> Vec<Block> {
    let editable = Block::MetaData(NodeMetaData {
        children: content,
        metadata,
    });

    if inline {
        vec![editable]
    } else {
        vec![Block::Group(vec![editable])]
    }
}

/// `content` between raw `<a href="location">` and `</a>` fragments.  Inline content is
/// flattened between the two; block-level content is grouped first.
pub fn anchor(
    location: &str,
    content: Vec<Block>,
    inline: bool,
    options: &RenderOptions,
) -> Vec<Block> {
    let open = open_tag(location, options);

    if inline {
        let mut result = Vec::with_capacity(2 + content.len());
        result.push(Block::raw_html(open));
        result.extend(content);
        result.push(Block::raw_html(END_LINK));
        result
    } else {
        vec![
            Block::raw_html(open),
            Block::Group(content),
            Block::raw_html(END_LINK),
        ]
    }
}

fn open_tag(location: &str, options: &RenderOptions) -> String {
    let mut attributes = vec![("href", location)];
    if let Some(ref rel) = options.rel {
        attributes.push(("rel", rel.as_str()));
    }

    let mut tag = String::new();
    // Writing to a String can't fail.
    let _ = html::write_opening_tag(&mut tag, "a", attributes);
    tag
}
