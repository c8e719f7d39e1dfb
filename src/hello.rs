// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Hello world application

use crate::app::{App, AppInfo, Application};
use crate::style::{Alignment, Direction, Pack};
use crate::widgets::{Container, Label};
use crate::window::MainWindow;

/// The displayed greeting
pub const GREETING: &str = "Hello, Android!";
/// Application formal name, also the window title
pub const FORMAL_NAME: &str = "Hello World";
/// Reverse-domain application identifier
pub const APP_ID: &str = "com.example.helloworld";

/// A window showing a single centered label
#[derive(Debug)]
pub struct HelloWorld {
    info: AppInfo,
}

impl HelloWorld {
    /// Construct with the default metadata
    pub fn new() -> Self {
        HelloWorld {
            info: AppInfo::new(FORMAL_NAME, APP_ID),
        }
    }
}

impl Default for HelloWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl App for HelloWorld {
    fn info(&self) -> &AppInfo {
        &self.info
    }

    fn startup(&mut self) -> MainWindow {
        let mut main_box = Container::new(
            Pack::new()
                .direction(Direction::Column)
                .alignment(Alignment::Center)
                .padding(20.0),
        );

        let label = Label::new(GREETING, Pack::new().padding(10.0));
        main_box.add(label);

        let mut main_window = MainWindow::new(self.info.formal_name());
        main_window.set_content(main_box);
        main_window.show();
        main_window
    }
}

/// Construct the application
pub fn app() -> Application<HelloWorld> {
    Application::new(HelloWorld::new())
}
