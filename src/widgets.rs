// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The view tree
//!
//! These types describe a user interface without creating any toolkit
//! objects; the [shell](crate::shell) turns a finished tree into KAS widgets.

use crate::style::Pack;

/// A static text label
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    text: String,
    style: Pack,
}

impl Label {
    /// Construct with the given `text` and `style`
    pub fn new(text: impl ToString, style: Pack) -> Self {
        Label {
            text: text.to_string(),
            style,
        }
    }

    /// The displayed text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> &Pack {
        &self.style
    }
}

/// A box laying out its children along its style's direction
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    style: Pack,
    children: Vec<Node>,
}

impl Container {
    /// Construct an empty container
    pub fn new(style: Pack) -> Self {
        Container {
            style,
            children: Vec::new(),
        }
    }

    /// Append a child
    pub fn add(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append a child (inline)
    #[must_use]
    pub fn with(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    #[inline]
    pub fn style(&self) -> &Pack {
        &self.style
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of direct children
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Any node of the view tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Container(Container),
    Label(Label),
}

impl Node {
    pub fn style(&self) -> &Pack {
        match self {
            Node::Container(container) => container.style(),
            Node::Label(label) => label.style(),
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Node::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(container) => Some(container),
            _ => None,
        }
    }
}

impl From<Label> for Node {
    #[inline]
    fn from(label: Label) -> Self {
        Node::Label(label)
    }
}

impl From<Container> for Node {
    #[inline]
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Direction;

    #[test]
    fn nested_tree() {
        let inner = Container::new(Pack::new())
            .with(Label::new("a", Pack::new()))
            .with(Label::new("b", Pack::new()));
        let mut outer = Container::new(Pack::new().direction(Direction::Column));
        assert!(outer.is_empty());
        outer.add(inner);
        outer.add(Label::new(42, Pack::new().padding(1.0)));

        assert_eq!(outer.len(), 2);
        let first = outer.children()[0].as_container().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first.children()[1].as_label().unwrap().text(), "b");
        assert!(outer.children()[0].as_label().is_none());

        let second = &outer.children()[1];
        assert_eq!(second.as_label().unwrap().text(), "42");
        assert_eq!(second.style().get_padding().top, 1.0);
    }
}
