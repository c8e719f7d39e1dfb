// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Hello World
//!
//! A single window showing one centered label, built on KAS.
//!
//! The user interface is first described as a toolkit-neutral tree:
//!
//! -   [`style`] provides [`Pack`](style::Pack), the style attached to each node
//! -   [`widgets`] provides the tree itself
//! -   [`window`] provides [`MainWindow`](window::MainWindow), holding the root
//! -   [`app`] provides the [`App`](app::App) trait and its lifecycle host
//!
//! The [`shell`] module turns this tree into KAS widgets and runs the event
//! loop. The [`hello`] module holds the application.

pub mod app;
pub mod config;
mod error;
pub mod hello;
pub mod shell;
pub mod style;
pub mod widgets;
pub mod window;

pub use error::{Error, Result};
