// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS integration
//!
//! Turns a [`MainWindow`] into KAS widgets and runs the event loop.

mod padded;

use crate::config::{Options, ThemeChoice};
use crate::style::{Alignment, Pack};
use crate::widgets::{Container, Node};
use crate::window::MainWindow;
use crate::{Error, Result};
use kas::layout::{Align, AlignHints};
use kas::runner::Runner;
use kas::theme::{FlatTheme, SimpleTheme};
use kas::widgets::{AdaptWidget, Column, Label, Row};
use kas::Widget;
use kas::window::Window;

pub use padded::Padded;

/// A type-erased widget over no input data
pub type BoxedWidget = Box<dyn Widget<Data = ()>>;

/// Hints passed to each child of a container with the given `style`
fn child_hints(style: &Pack) -> Option<AlignHints> {
    let align = match style.cross_alignment()? {
        Alignment::Center => Align::Center,
        Alignment::Left | Alignment::Top => Align::TL,
        Alignment::Right | Alignment::Bottom => Align::BR,
    };
    Some(if style.get_direction().is_vertical() {
        AlignHints::new(Some(align), None)
    } else {
        AlignHints::new(None, Some(align))
    })
}

fn build_container(container: &Container) -> BoxedWidget {
    let hints = child_hints(container.style());
    let children: Vec<BoxedWidget> = container
        .children()
        .iter()
        .map(|child| -> BoxedWidget {
            let widget = build_node(child);
            match hints {
                Some(hints) => Box::new(widget.align(hints)),
                None => widget,
            }
        })
        .collect();

    if container.style().get_direction().is_vertical() {
        Box::new(Column::new(children))
    } else {
        Box::new(Row::new(children))
    }
}

/// Build the KAS widget for a node and its descendants
///
/// Every node is wrapped in a [`Padded`] widget applying its style's padding.
pub fn build_node(node: &Node) -> BoxedWidget {
    let inner: BoxedWidget = match node {
        Node::Label(label) => Box::new(Label::new(label.text().to_string())),
        Node::Container(container) => build_container(container),
    };
    Box::new(Padded::new(inner, node.style().get_padding()))
}

/// Build the KAS window
///
/// Fails with [`Error::NoContent`] if no content was assigned.
pub fn build_window(window: &MainWindow) -> Result<Window<()>> {
    let Some(content) = window.content() else {
        return Err(Error::NoContent(window.title().to_string()));
    };

    let ui: BoxedWidget = Box::new(Padded::new(
        build_container(content),
        content.style().get_padding(),
    ));
    log::debug!(
        "build_window: {:?} with {} top-level widget(s)",
        window.title(),
        content.len()
    );
    Ok(Window::new(ui, window.title().to_string()))
}

/// Display `window` and run the event loop until it exits
///
/// A window which was never shown is not displayed; this returns immediately.
pub fn run(window: &MainWindow, options: &Options) -> Result<()> {
    if !window.is_visible() {
        log::warn!("run: window {:?} was never shown; exiting", window.title());
        return Ok(());
    }

    let kas_window = build_window(window)?;
    log::info!("run: using theme {:?}", options.theme);
    match options.theme {
        ThemeChoice::Flat => Runner::with_theme(FlatTheme::new())
            .build(())?
            .with(kas_window)
            .run()?,
        ThemeChoice::Simple => Runner::with_theme(SimpleTheme::new())
            .build(())?
            .with(kas_window)
            .run()?,
    }

    log::info!("run: event loop exited");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Direction;
    use crate::widgets::Label as LabelNode;

    #[test]
    fn hints_follow_direction() {
        let column = Pack::new()
            .direction(Direction::Column)
            .alignment(Alignment::Center);
        assert_eq!(
            child_hints(&column),
            Some(AlignHints::new(Some(Align::Center), None))
        );

        let row = Pack::new().alignment(Alignment::Bottom);
        assert_eq!(child_hints(&row), Some(AlignHints::new(None, Some(Align::BR))));

        let mismatched = Pack::new().alignment(Alignment::Left);
        assert_eq!(child_hints(&mismatched), None);
    }

    #[test]
    fn hello_layout_translation() {
        use crate::app::App;
        use super::padded::scaled_margins;

        let window = crate::hello::HelloWorld::new().startup();
        let content = window.content().unwrap();
        assert_eq!(
            child_hints(content.style()),
            Some(AlignHints::new(Some(Align::Center), None))
        );

        let label = &content.children()[0];
        for vertical in [false, true] {
            assert_eq!(scaled_margins(content.style().get_padding(), vertical, 1.0), (20, 20));
            assert_eq!(scaled_margins(label.style().get_padding(), vertical, 1.0), (10, 10));
            assert_eq!(scaled_margins(content.style().get_padding(), vertical, 1.25), (25, 25));
            assert_eq!(scaled_margins(label.style().get_padding(), vertical, 2.0), (20, 20));
        }
    }

    #[test]
    fn window_requires_content() {
        let window = MainWindow::new("Empty");
        assert!(matches!(build_window(&window), Err(Error::NoContent(title)) if title == "Empty"));
    }

    #[test]
    fn build_nested() {
        let row = Container::new(Pack::new().alignment(Alignment::Top))
            .with(LabelNode::new("left", Pack::new()))
            .with(LabelNode::new("right", Pack::new().padding((2.0, 4.0))));
        let content = Container::new(Pack::new().direction(Direction::Column).padding(5.0))
            .with(row)
            .with(LabelNode::new("below", Pack::new()));

        let mut window = MainWindow::new("Nested");
        window.set_content(content);
        assert!(build_window(&window).is_ok());
    }
}
