//! Showcase page exercising every component and variant

use crate::components::{Blockquote, Code, Heading, Kbd, Link, Text};
use crate::element::{div, em, strong, Element};
use crate::variant::{BlockquoteVariant, CodeVariant, HeadingLevel, LinkVariant, TextVariant};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";
const QUOTE: &str = "Perfect typography is certainly the most elusive of all arts. \
                     Sculpture in stone alone comes near it in obstinacy.";
const HELLO: &str = "console.log(\"Hello world\")";

/// The full showcase page
pub fn page() -> Element {
    div()
        .class("flow max-w-4xl mx-auto")
        .child(introduction())
        .child(prose())
        .child(
            div()
                .child(section_heading("What ").child(em("else")).child(" can we expect?"))
                .child(Blockquote::new().child(QUOTE)),
        )
        .child(shortcuts())
        .child(section("Heading", headings()))
        .child(section("Text", texts()))
        .child(section("Blockquote", blockquotes()))
        .child(section("Code", codes()))
        .child(section("Link", links()))
        .child(section("Kbd", keys()))
}

fn introduction() -> Element {
    div()
        .child(
            Heading::new()
                .child("The ")
                .child(em("principles"))
                .child(" of the typographic craft are difficult to master"),
        )
        .child(
            Text::new()
                .variant(TextVariant::Lead)
                .class("font-semibold")
                .child("The principles of the ")
                .child(Link::new("/").child("typographic craft"))
                .child(" are difficult to master"),
        )
}

fn prose() -> Text {
    Text::new()
        .child("The goal of ")
        .child(Link::new("/").child("typography"))
        .child(
            " is to relate font size, line height, and line width in a proportional way \
             that maximizes beauty and makes reading easier and more pleasant. ",
        )
        .child(strong(
            "The question is: What proportion(s) will give us the best results?",
        ))
        .child(" The golden ratio ")
        .child(Code::new().child("console.log(GOLDEN_RATIO)"))
        .child(
            " is often observed in nature where beauty and utility intersect; \
             perhaps we can use this ",
        )
        .child(em("\u{201c}divine\u{201d}"))
        .child(" proportion to enhance these attributes in our typography.")
}

fn shortcuts() -> Element {
    div()
        .child(
            Text::new()
                .child("Press ")
                .child(Kbd::new().child("⌘ C"))
                .child(" to show/hide the Theme Panel, or press ")
                .child(Kbd::new().child("⌘ D"))
                .child(" to toggle dark mode."),
        )
        .child(
            Text::new()
                .variant(TextVariant::Muted)
                .child("Some restrictions may apply"),
        )
}

fn section_heading(title: &str) -> Heading {
    Heading::new()
        .level(HeadingLevel::H2)
        .class("text-3xl")
        .child(title)
}

fn section(title: &str, samples: Element) -> Element {
    div().child(section_heading(title)).child(samples)
}

fn headings() -> Element {
    let levels = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];
    div().children(
        levels
            .into_iter()
            .zip(1..)
            .map(|(level, n)| Heading::new().level(level).child(format!("Heading {}", n))),
    )
}

fn texts() -> Element {
    div()
        .child(Text::new().child(PANGRAM))
        .children(
            [
                TextVariant::Large,
                TextVariant::Lead,
                TextVariant::Muted,
                TextVariant::Small,
            ]
            .into_iter()
            .map(|variant| Text::new().variant(variant).child(PANGRAM)),
        )
}

fn blockquotes() -> Element {
    div()
        .child(Blockquote::new().child(QUOTE))
        .child(
            Blockquote::new()
                .variant(BlockquoteVariant::Subtle)
                .child(QUOTE),
        )
}

fn codes() -> Element {
    div()
        .class("*:block")
        .child(Code::new().variant(CodeVariant::Solid).child(HELLO))
        .child(Code::new().child(HELLO))
        .child(Code::new().variant(CodeVariant::Ghost).child(HELLO))
}

fn links() -> Element {
    div()
        .class("*:block")
        .child(Link::new("/").child("Learn more"))
        .child(Link::new("/").variant(LinkVariant::Subtle).child("Learn more"))
}

fn keys() -> Element {
    div()
        .class("*:block")
        .children((0..3).map(|_| Kbd::new().child("⌘ C")))
}
