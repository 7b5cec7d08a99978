//! Colorized rendering of extracted code for terminal display. Purely a
//! presentation transform: the extracted string itself is never modified.

use anyhow::{Context, Result};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

/// Render `text` with 24-bit terminal escapes. `lang_token` is a syntect
/// token ("rs", "py", "rust", ...); unknown tokens fall back to plain text
/// rather than failing the display path.
pub fn highlight_terminal(text: &str, lang_token: &str, theme_name: &str) -> Result<String> {
    let syntaxes = SyntaxSet::load_defaults_newlines();
    let themes = ThemeSet::load_defaults();

    let syntax = syntaxes
        .find_syntax_by_token(lang_token)
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());
    let theme = themes
        .themes
        .get(theme_name)
        .with_context(|| format!("unknown theme '{theme_name}'"))?;

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut rendered = String::with_capacity(text.len() * 2);

    for line in LinesWithEndings::from(text) {
        let ranges: Vec<(Style, &str)> = highlighter
            .highlight_line(line, &syntaxes)
            .context("highlighting failed")?;
        rendered.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_snippet_gains_escape_sequences() {
        let rendered = highlight_terminal("fn main() {}", "rs", "base16-ocean.dark").unwrap();
        assert!(rendered.contains("\x1b["));
        assert!(rendered.contains("main"));
    }

    #[test]
    fn unknown_token_falls_back_to_plain_text() {
        let rendered =
            highlight_terminal("hello there", "no-such-lang", "base16-ocean.dark").unwrap();
        assert!(rendered.contains("hello there"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(highlight_terminal("x", "rs", "no-such-theme").is_err());
    }
}
