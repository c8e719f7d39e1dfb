// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Applications and their lifecycle

use crate::config::Options;
use crate::window::MainWindow;
use crate::{Error, Result};

/// Application metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    formal_name: String,
    app_id: String,
    version: String,
}

impl AppInfo {
    /// Construct, using this crate's version
    pub fn new(formal_name: impl ToString, app_id: impl ToString) -> Self {
        AppInfo {
            formal_name: formal_name.to_string(),
            app_id: app_id.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Set the version (inline)
    #[must_use]
    pub fn with_version(mut self, version: impl ToString) -> Self {
        self.version = version.to_string();
        self
    }

    /// Human-readable name, used as the main window title
    #[inline]
    pub fn formal_name(&self) -> &str {
        &self.formal_name
    }

    /// Reverse-domain identifier
    #[inline]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Version string
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// An application
///
/// Implementations build their user interface in [`App::startup`]; the
/// [`Application`] host invokes this hook exactly once.
pub trait App {
    /// Application metadata
    fn info(&self) -> &AppInfo;

    /// Startup hook
    ///
    /// Builds and returns the configured main window.
    fn startup(&mut self) -> MainWindow;
}

/// Host of an [`App`], tracking its lifecycle
#[derive(Debug)]
pub struct Application<A: App> {
    app: A,
    // Set once by `start`
    main_window: Option<MainWindow>,
}

impl<A: App> Application<A> {
    /// Construct; the startup hook is not invoked yet
    pub fn new(app: A) -> Self {
        Application {
            app,
            main_window: None,
        }
    }

    #[inline]
    pub fn app(&self) -> &A {
        &self.app
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.main_window.is_some()
    }

    /// The main window, once started
    #[inline]
    pub fn main_window(&self) -> Option<&MainWindow> {
        self.main_window.as_ref()
    }

    /// Invoke the startup hook
    ///
    /// Fails with [`Error::AlreadyStarted`] when called a second time.
    pub fn start(&mut self) -> Result<&MainWindow> {
        if self.is_started() {
            return Err(Error::AlreadyStarted);
        }

        let info = self.app.info();
        log::info!(
            "Application::start: {} ({}) version {}",
            info.formal_name(),
            info.app_id(),
            info.version()
        );
        let window = self.app.startup();
        log::debug!("Application::start: main window: {window:?}");

        Ok(self.main_window.insert(window))
    }

    /// Start (if not yet started) and run the event loop until exit
    pub fn run(mut self, options: &Options) -> Result<()> {
        let window = match self.main_window.take() {
            Some(window) => window,
            None => self.start()?.clone(),
        };
        crate::shell::run(&window, options)
    }
}
