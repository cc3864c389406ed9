//! Rendering of accumulated error sequences for user-facing messages.

use crate::types::alloc_type;
use crate::types::Errors;
use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Trait for customizing how an error sequence is rendered.
///
/// Implementors receive the errors in accumulation order and must keep that order.
pub trait ErrorsFormatter {
    fn format_item(&self, _index: usize, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_list<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        items
            .enumerate()
            .map(|(index, item)| self.format_item(index, item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based error list formatter.
///
/// # Examples
///
/// ```
/// use outcome_rail::errors;
/// use outcome_rail::types::errors_formatter::ErrorsFormatConfig;
///
/// let errors = errors!["name is empty", "age is negative"];
///
/// assert_eq!(errors.to_string(), "name is empty; age is negative");
/// assert_eq!(
///     errors.display_with(ErrorsFormatConfig::numbered()).to_string(),
///     "1. name is empty\n2. age is negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorsFormatConfig {
    pub separator: alloc_type::String,
    pub item_prefix: Option<alloc_type::String>,
    pub item_suffix: Option<alloc_type::String>,
    pub numbered: bool,
    pub header: Option<alloc_type::String>,
}

impl Default for ErrorsFormatConfig {
    fn default() -> Self {
        Self { separator: "; ".into(), item_prefix: None, item_suffix: None, numbered: false, header: None }
    }
}

impl ErrorsFormatConfig {
    /// One error per line, each prefixed by `- `.
    #[inline]
    pub fn bulleted() -> Self {
        Self { separator: "\n".into(), item_prefix: Some("- ".into()), ..Default::default() }
    }

    /// One error per line, each prefixed by its 1-based position.
    #[inline]
    pub fn numbered() -> Self {
        Self { separator: "\n".into(), numbered: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Returns `true` when every error is rendered on its own line.
    #[inline]
    pub fn is_multiline(&self) -> bool {
        self.separator.contains('\n')
    }
}

impl ErrorsFormatter for ErrorsFormatConfig {
    fn format_item(&self, index: usize, item: &dyn Display) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }
        if self.numbered {
            result.push_str(&(index + 1).to_string());
            result.push_str(". ");
        }
        result.push_str(&item.to_string());
        if let Some(suffix) = &self.item_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_list<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        let mut result = String::new();
        if let Some(header) = &self.header {
            result.push_str(header);
            result.push_str(if self.is_multiline() { "\n" } else { " " });
        }

        for (index, item) in items.enumerate() {
            if index > 0 {
                result.push_str(&self.separator);
            }
            result.push_str(&self.format_item(index, item));
        }
        result
    }
}

/// Builder for customizing how an [`Errors`] sequence is displayed.
///
/// Created by [`Errors::display`] or [`Errors::display_with`].
pub struct ErrorsDisplay<'a, E> {
    pub(crate) errors: &'a Errors<E>,
    pub(crate) config: ErrorsFormatConfig,
}

impl<'a, E> ErrorsDisplay<'a, E> {
    pub fn new(errors: &'a Errors<E>) -> Self {
        Self { errors, config: ErrorsFormatConfig::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<alloc_type::String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_header(mut self, header: impl Into<alloc_type::String>) -> Self {
        self.config.header = Some(header.into());
        self
    }

    pub fn numbered(mut self, enabled: bool) -> Self {
        self.config.numbered = enabled;
        self
    }

    pub fn bulleted(mut self) -> Self {
        self.config = ErrorsFormatConfig::bulleted();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorsFormatConfig::compact();
        self
    }
}

impl<'a, E> Display for ErrorsDisplay<'a, E>
where
    E: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let items: Vec<&dyn Display> = self.errors.iter().map(|error| error as &dyn Display).collect();
        f.write_str(&self.config.format_list(items.into_iter()))
    }
}

impl<E> Errors<E> {
    /// Returns a display builder using the default `"; "`-separated layout.
    #[inline]
    pub fn display(&self) -> ErrorsDisplay<'_, E> {
        ErrorsDisplay::new(self)
    }

    /// Returns a display adapter rendering with `config`.
    #[inline]
    pub fn display_with(&self, config: ErrorsFormatConfig) -> ErrorsDisplay<'_, E> {
        ErrorsDisplay { errors: self, config }
    }
}

impl<E: Display> Display for Errors<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.display(), f)
    }
}
