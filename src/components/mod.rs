//! Typographic components
//!
//! Each component pairs a kind's variant table with a default tag. The
//! computed class list lands on the default tag, or on a caller-supplied host
//! element set with `render_as`. Attributes and children are forwarded as given.
//!
//! ```rust
//! use typecraft::{render, Code, CodeVariant, Text};
//!
//! let html = render(
//!     Text::new()
//!         .child("Call ")
//!         .child(Code::new().variant(CodeVariant::Ghost).child("render()")),
//! );
//! assert!(html.starts_with("<p class="));
//! assert!(html.contains("<code class="));
//! ```

pub mod blockquote;
pub mod code;
pub mod heading;
pub mod kbd;
pub mod link;
pub mod text;

pub use blockquote::Blockquote;
pub use code::Code;
pub use heading::Heading;
pub use kbd::Kbd;
pub use link::Link;
pub use text::Text;

use crate::element::{Element, Node};
use crate::variant::VariantTables;

/// Configuration shared by every component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Caller classes, merged after the variant classes
    pub class: Option<String>,
    /// Attributes forwarded to the rendered element
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Element rendered in place of the default tag
    pub host: Option<Element>,
}

impl Props {
    fn set_attr(&mut self, name: String, value: String) {
        if name == "class" {
            self.class = Some(value);
            return;
        }
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}

/// Builder methods common to all components
macro_rules! forward_props {
    ($component:ident) => {
        impl $component {
            /// Extra classes; they win over conflicting variant classes
            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.props.class = Some(class.into());
                self
            }

            /// Forward an attribute to the rendered element
            pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.props.set_attr(name.into(), value.into());
                self
            }

            pub fn child(mut self, child: impl Into<$crate::element::Node>) -> Self {
                self.props.children.push(child.into());
                self
            }

            pub fn children<I, N>(mut self, children: I) -> Self
            where
                I: IntoIterator<Item = N>,
                N: Into<$crate::element::Node>,
            {
                self.props
                    .children
                    .extend(children.into_iter().map(Into::into));
                self
            }

            /// Render onto `host` instead of the default tag, keeping this
            /// component's classes
            pub fn render_as(mut self, host: $crate::element::Element) -> Self {
                self.props.host = Some(host);
                self
            }

            pub fn props(&self) -> &$crate::components::Props {
                &self.props
            }
        }

        impl From<$component> for $crate::components::Component {
            fn from(component: $component) -> Self {
                $crate::components::Component::$component(component)
            }
        }

        impl From<$component> for $crate::element::Node {
            fn from(component: $component) -> Self {
                $crate::element::Node::Component(Box::new(component.into()))
            }
        }
    };
}

pub(crate) use forward_props;

/// Any of the six typographic components
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Heading(Heading),
    Text(Text),
    Blockquote(Blockquote),
    Code(Code),
    Kbd(Kbd),
    Link(Link),
}

impl Component {
    pub fn props(&self) -> &Props {
        match self {
            Component::Heading(c) => c.props(),
            Component::Text(c) => c.props(),
            Component::Blockquote(c) => c.props(),
            Component::Code(c) => c.props(),
            Component::Kbd(c) => c.props(),
            Component::Link(c) => c.props(),
        }
    }

    /// Class descriptor of this component under `tables`
    pub fn class_name(&self, tables: &VariantTables) -> String {
        match self {
            Component::Heading(c) => c.class_name(tables),
            Component::Text(c) => c.class_name(tables),
            Component::Blockquote(c) => c.class_name(tables),
            Component::Code(c) => c.class_name(tables),
            Component::Kbd(c) => c.class_name(tables),
            Component::Link(c) => c.class_name(tables),
        }
    }

    /// Lower to a host element
    pub fn render(&self, tables: &VariantTables) -> Element {
        match self {
            Component::Heading(c) => c.render(tables),
            Component::Text(c) => c.render(tables),
            Component::Blockquote(c) => c.render(tables),
            Component::Code(c) => c.render(tables),
            Component::Kbd(c) => c.render(tables),
            Component::Link(c) => c.render(tables),
        }
    }
}

/// Build the element for a component
///
/// `leading` attributes come before the caller's forwarded attributes.
/// With a host element, the host keeps its tag, its own attributes win on
/// name clashes, its class is appended to ours as is and its children come
/// first.
pub(crate) fn lower(
    tag: &str,
    class: String,
    leading: Vec<(String, String)>,
    props: &Props,
) -> Element {
    let forwarded = leading.into_iter().chain(props.attributes.iter().cloned());

    let Some(host) = &props.host else {
        let mut element = Element::new(tag);
        if !class.is_empty() {
            element.set_attr("class", class);
        }
        for (name, value) in forwarded {
            element.set_attr(name, value);
        }
        element.children = props.children.clone();
        return element;
    };

    let mut host = host.clone();
    let host_class = host.remove_attr("class");
    let host_attributes = std::mem::take(&mut host.attributes);

    let class = [Some(class), host_class]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !class.is_empty() {
        host.set_attr("class", class);
    }
    for (name, value) in forwarded {
        host.set_attr(name, value);
    }
    for (name, value) in host_attributes {
        host.set_attr(name, value);
    }
    host.children.extend(props.children.iter().cloned());
    host
}
