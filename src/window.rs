// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The main window

use crate::widgets::Container;

/// An application's main window
///
/// A window has at most one root content view. It is not displayed until
/// [`MainWindow::show`] is called.
#[derive(Clone, Debug, PartialEq)]
pub struct MainWindow {
    title: String,
    content: Option<Container>,
    visible: bool,
}

impl MainWindow {
    /// Construct a hidden window without content
    pub fn new(title: impl ToString) -> Self {
        MainWindow {
            title: title.to_string(),
            content: None,
            visible: false,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The root content view, if assigned
    #[inline]
    pub fn content(&self) -> Option<&Container> {
        self.content.as_ref()
    }

    /// Assign the root content view
    ///
    /// Returns the previous content, if any.
    pub fn set_content(&mut self, content: Container) -> Option<Container> {
        self.content.replace(content)
    }

    /// Request that the window be displayed
    pub fn show(&mut self) {
        if self.content.is_none() {
            log::warn!("MainWindow::show: window {:?} has no content", self.title);
        }
        self.visible = true;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
