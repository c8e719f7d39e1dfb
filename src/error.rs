// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;

/// Possible application failures
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Toolkit launch or event loop failure
    #[error("toolkit failure")]
    Runner(#[from] kas::runner::Error),

    /// The startup hook was already invoked
    #[error("application already started")]
    AlreadyStarted,

    /// A window without content was handed to the shell
    #[error("window {0:?} has no content")]
    NoContent(String),
}

/// A `Result` type representing `T` or [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;
