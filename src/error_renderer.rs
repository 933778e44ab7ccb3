//! Error rendering using miette's graphical report handler.

use std::io::Write;

use miette::{GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};

use crate::Error;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn handler(&self) -> GraphicalReportHandler {
        let characters = match self.charset {
            CharSet::Unicode => ThemeCharacters::unicode(),
            CharSet::Ascii => ThemeCharacters::ascii(),
        };
        let styles = if self.color {
            ThemeStyles::ansi()
        } else {
            ThemeStyles::none()
        };
        GraphicalReportHandler::new_themed(GraphicalTheme { characters, styles })
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use rsexp::{Value, ValueView, render_error};
///
/// if let Err(e) = Value::int_vector([1, 2]).as_int() {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use rsexp::{CharSet, RenderConfig, Value, ValueView, render_error_to};
///
/// let err = Value::str("abc").as_int().unwrap_err();
/// let config = RenderConfig { color: false, charset: CharSet::Ascii };
/// let mut buf = Vec::new();
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("cannot coerce"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let mut rendered = String::new();
    config
        .handler()
        .render_report(&mut rendered, error)
        .map_err(std::io::Error::other)?;
    writer.write_all(rendered.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsexp_values::traits::ValueView;
    use rsexp_values::{SexpKind, Value};

    const PLAIN: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Unicode,
    };

    const ASCII: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Ascii,
    };

    fn render(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_includes_code_message_and_help() {
        let err = Value::Na.as_int().unwrap_err();
        let output = render(&err, &PLAIN);
        assert!(output.contains("rsexp::not_available"), "{output}");
        assert!(output.contains("value is NA"), "{output}");
        assert!(output.contains("is_na()"), "{output}");
    }

    #[test]
    fn test_render_without_help() {
        let err = Error::Unsupported {
            operation: "structural mutation",
            kind: SexpKind::Null,
        };
        let output = render(&err, &ASCII);
        assert!(
            output.contains("structural mutation is not supported on NULL"),
            "{output}"
        );
        assert!(output.is_ascii(), "{output}");
        assert!(!output.contains('\u{1b}'), "no ANSI escapes expected: {output}");
    }

    #[test]
    fn test_colored_render_keeps_message() {
        let err = Error::OutOfRange { index: 5, len: 2 };
        let colored = RenderConfig {
            color: true,
            charset: CharSet::Unicode,
        };
        let output = render(&err, &colored);
        assert!(output.contains("index 5 is out of range for length 2"));
    }
}
