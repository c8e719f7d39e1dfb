// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Launch options

use std::env::var;

/// Theme used to draw the window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    /// `kas::theme::FlatTheme`
    #[default]
    Flat,
    /// `kas::theme::SimpleTheme`
    Simple,
}

/// Application launch options
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Theme. Default: flat. See `HELLO_THEME` doc.
    pub theme: ThemeChoice,
}

impl Options {
    /// Construct a new instance, reading from environment variables
    ///
    /// The following environment variables are read, in case-insensitive mode.
    ///
    /// The `HELLO_THEME` variable selects the theme:
    ///
    /// -   `Flat` (default)
    /// -   `Simple`
    ///
    /// KAS itself additionally reads `KAS_CONFIG` and `KAS_CONFIG_MODE`; see
    /// `kas::config::Options::from_env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Construct a new instance, reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Options::default();

        if let Some(mut v) = lookup("HELLO_THEME") {
            v.make_ascii_uppercase();
            options.theme = match v.as_str() {
                "FLAT" => ThemeChoice::Flat,
                "SIMPLE" => ThemeChoice::Simple,
                other => {
                    log::error!("from_env: bad var HELLO_THEME={other}");
                    log::error!("from_env: supported themes: FLAT, SIMPLE");
                    options.theme
                }
            };
        }

        options
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Options::from_lookup(lookup(&[])), Options::default());
        assert_eq!(Options::default().theme, ThemeChoice::Flat);
    }

    #[test]
    fn theme_is_case_insensitive() {
        let options = Options::from_lookup(lookup(&[("HELLO_THEME", "simple")]));
        assert_eq!(options.theme, ThemeChoice::Simple);
        let options = Options::from_lookup(lookup(&[("HELLO_THEME", "Flat")]));
        assert_eq!(options.theme, ThemeChoice::Flat);
    }

    #[test]
    fn bad_theme_keeps_default() {
        let options = Options::from_lookup(lookup(&[("HELLO_THEME", "shaded")]));
        assert_eq!(options.theme, ThemeChoice::Flat);
    }
}
