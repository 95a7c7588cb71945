//! Ordered command-line argument construction.
//!
//! Arguments are collected as discrete tokens and rendered as one
//! space-joined command line. Quoting is part of the serialization policy:
//! a quoted value carries literal double quotes inside its token, and
//! rendering never re-escapes anything.

/// Builder for an ordered compiler argument list.
#[derive(Debug, Clone, Default)]
pub struct ArgumentBuilder {
    args: Vec<String>,
}

impl ArgumentBuilder {
    /// Create an empty argument list.
    pub fn new() -> Self {
        ArgumentBuilder { args: Vec::new() }
    }

    /// Append a raw token.
    pub fn append(&mut self, text: impl Into<String>) {
        self.args.push(text.into());
    }

    /// Append a token wrapped in double quotes.
    pub fn append_quoted(&mut self, text: impl AsRef<str>) {
        self.args.push(format!("\"{}\"", text.as_ref()));
    }

    /// Append a switch with a separator and an unquoted value as one token.
    pub fn append_switch(&mut self, switch: &str, separator: &str, value: impl AsRef<str>) {
        self.args
            .push(format!("{switch}{separator}{}", value.as_ref()));
    }

    /// Append a switch with a separator and a quoted value as one token.
    pub fn append_switch_quoted(&mut self, switch: &str, separator: &str, value: impl AsRef<str>) {
        self.args
            .push(format!("{switch}{separator}\"{}\"", value.as_ref()));
    }

    /// Get the tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.args
    }

    /// Whether no tokens have been appended.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Render the space-joined command line.
    pub fn render(&self) -> String {
        self.args.join(" ")
    }
}

/// Join values with a delimiter, without a trailing delimiter.
pub fn join<I, S>(values: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Join values with a delimiter, wrapping each element in double quotes.
pub fn join_quoted<I, S>(values: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| format!("\"{}\"", v.as_ref()))
        .collect::<Vec<_>>()
        .join(delimiter)
}
