//! Static mapping from slide kind to template layout and placeholder bindings.
//!
//! Layouts are addressed by position in the template's layout list and placeholders by their
//! `idx`, so the table below is a contract with the template's layout ordering.

use crate::{SlideDescriptor, SlideKind};
use std::fmt;

/// The semantic role a piece of slide text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderRole {
    Title,
    Subtitle,
    Body,
    LeftTitle,
    LeftBody,
    RightTitle,
    RightBody,
    Caption,
}

impl fmt::Display for PlaceholderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaceholderRole::Title => "title",
            PlaceholderRole::Subtitle => "subtitle",
            PlaceholderRole::Body => "body",
            PlaceholderRole::LeftTitle => "left title",
            PlaceholderRole::LeftBody => "left body",
            PlaceholderRole::RightTitle => "right title",
            PlaceholderRole::RightBody => "right body",
            PlaceholderRole::Caption => "caption",
        };
        f.write_str(name)
    }
}

/// Where on a slide a role's text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The slide's title placeholder (`title` or `ctrTitle`).
    Title,
    /// The placeholder with this `idx`.
    Idx(u32),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Title => f.write_str("title placeholder"),
            Slot::Idx(idx) => write!(f, "placeholder idx {idx}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub role: PlaceholderRole,
    pub slot: Slot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBinding {
    pub layout_index: usize,
    pub fields: &'static [FieldBinding],
}

const fn bind(role: PlaceholderRole, slot: Slot) -> FieldBinding {
    FieldBinding { role, slot }
}

use PlaceholderRole::*;

const TITLE: FieldBinding = bind(Title, Slot::Title);

static LAYOUTS: [LayoutBinding; 9] = [
    LayoutBinding { layout_index: 0, fields: &[TITLE, bind(Subtitle, Slot::Idx(1))] },
    LayoutBinding { layout_index: 1, fields: &[TITLE, bind(Body, Slot::Idx(1))] },
    LayoutBinding { layout_index: 2, fields: &[TITLE, bind(Subtitle, Slot::Idx(1))] },
    LayoutBinding {
        layout_index: 3,
        fields: &[TITLE, bind(LeftBody, Slot::Idx(1)), bind(RightBody, Slot::Idx(2))],
    },
    LayoutBinding {
        layout_index: 4,
        fields: &[
            TITLE,
            bind(LeftTitle, Slot::Idx(1)),
            bind(LeftBody, Slot::Idx(2)),
            bind(RightTitle, Slot::Idx(3)),
            bind(RightBody, Slot::Idx(4)),
        ],
    },
    LayoutBinding { layout_index: 5, fields: &[TITLE] },
    LayoutBinding { layout_index: 6, fields: &[] },
    LayoutBinding {
        layout_index: 7,
        fields: &[TITLE, bind(Body, Slot::Idx(1)), bind(Caption, Slot::Idx(2))],
    },
    // The caption goes to idx 1, the picture placeholder of the stock layout.
    LayoutBinding { layout_index: 8, fields: &[TITLE, bind(Caption, Slot::Idx(1))] },
];

/// Layout index and ordered placeholder bindings for a slide kind.
pub fn layout_for(kind: SlideKind) -> &'static LayoutBinding {
    let position = match kind {
        SlideKind::TitleSlide => 0,
        SlideKind::TitleAndContent => 1,
        SlideKind::SectionHeader => 2,
        SlideKind::TwoContent => 3,
        SlideKind::Comparison => 4,
        SlideKind::TitleOnly => 5,
        SlideKind::Blank => 6,
        SlideKind::ContentWithCaption => 7,
        SlideKind::PictureWithCaption => 8,
    };
    &LAYOUTS[position]
}

impl SlideDescriptor {
    /// Text for a role, with line lists joined by `\n`. `None` if the kind has no such field.
    pub fn text_for(&self, role: PlaceholderRole) -> Option<String> {
        use SlideDescriptor as D;

        let text = match (self, role) {
            (
                D::TitleSlide { title, .. }
                | D::TitleAndContent { title, .. }
                | D::SectionHeader { title, .. }
                | D::TwoContent { title, .. }
                | D::Comparison { title, .. }
                | D::TitleOnly { title }
                | D::ContentWithCaption { title, .. }
                | D::PictureWithCaption { title, .. },
                Title,
            ) => title.clone(),
            (D::TitleSlide { subtitle, .. } | D::SectionHeader { subtitle, .. }, Subtitle) => subtitle.clone(),
            (D::TitleAndContent { content, .. } | D::ContentWithCaption { content, .. }, Body) => content.join("\n"),
            (D::TwoContent { left_content, .. } | D::Comparison { left_content, .. }, LeftBody) => {
                left_content.join("\n")
            }
            (D::TwoContent { right_content, .. } | D::Comparison { right_content, .. }, RightBody) => {
                right_content.join("\n")
            }
            (D::Comparison { left_title, .. }, LeftTitle) => left_title.clone(),
            (D::Comparison { right_title, .. }, RightTitle) => right_title.clone(),
            (D::ContentWithCaption { caption, .. } | D::PictureWithCaption { caption, .. }, Caption) => {
                caption.clone()
            }
            _ => return None,
        };
        Some(text)
    }
}
