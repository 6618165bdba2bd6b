//! Terminal capabilities: whether to draw emoji and whether to emit colors.

use std::io::{self, IsTerminal};

use crossterm::style::{StyledContent, Stylize};

/// Terminals known to render Unicode glyphs without a UTF-8 locale
const UNICODE_TERMINALS: [&str; 7] = [
    "iTerm.app",
    "Apple_Terminal",
    "vscode",
    "Hyper",
    "Alacritty",
    "kitty",
    "WezTerm",
];

/// How console output is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub use_unicode: bool,
    pub use_color: bool,
}

impl Appearance {
    /// ASCII glyphs and no escape sequences
    pub fn plain() -> Self {
        Self {
            use_unicode: false,
            use_color: false,
        }
    }

    /// Inspect stdout and the environment once. `force_ascii` disables emoji.
    pub fn detect(force_ascii: bool) -> Self {
        Self {
            use_unicode: !force_ascii && unicode_supported(env_var),
            use_color: color_supported(io::stdout().is_terminal(), env_var),
        }
    }

    /// Apply `style` to `text` when colors are on, else return it unchanged.
    pub fn paint<'a, F>(&self, text: &'a str, style: F) -> String
    where
        F: FnOnce(StyledContent<&'a str>) -> StyledContent<&'a str>,
    {
        if self.use_color {
            style(text.stylize()).to_string()
        } else {
            text.to_string()
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Unicode glyphs need a UTF-8 locale or a known capable terminal, and never
/// on `TERM=dumb`.
pub fn unicode_supported<F>(env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if env("TERM").as_deref() == Some("dumb") {
        return false;
    }

    let utf8_locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| env(var))
        .any(|value| value.to_lowercase().contains("utf"));
    if utf8_locale {
        return true;
    }

    env("TERM_PROGRAM")
        .is_some_and(|program| UNICODE_TERMINALS.iter().any(|t| program.contains(t)))
}

/// Colors only go to a terminal, and `NO_COLOR` (any non-empty value) or
/// `TERM=dumb` turns them off.
pub fn color_supported<F>(is_terminal: bool, env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if !is_terminal {
        return false;
    }
    if env("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        return false;
    }
    env("TERM").as_deref() != Some("dumb")
}
