//! Banner style selection and name resolution.

use clap::ValueEnum;

/// Supported banner templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Double-line frame sized to the longest line of text.
    #[default]
    Box,
    /// Text between two fixed-width separators.
    Line,
    /// Fixed-width branded frame with a generation timestamp.
    Ascii,
    /// Fixed-width frame with user and time placeholders.
    Simple,
}

/// Style names as accepted on the command line and in config files.
const NAMES: &[(&str, Style)] = &[
    ("box", Style::Box),
    ("line", Style::Line),
    ("ascii", Style::Ascii),
    ("simple", Style::Simple),
];

impl Style {
    /// Resolve a style by name, falling back to [`Style::Box`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        for &(known, style) in NAMES {
            if name == known {
                return style;
            }
        }
        tracing::debug!(name, "unknown style, using box");
        Self::Box
    }

    /// Canonical lowercase name of the style.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Line => "line",
            Self::Ascii => "ascii",
            Self::Simple => "simple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Style::from_name("box"), Style::Box);
        assert_eq!(Style::from_name("line"), Style::Line);
        assert_eq!(Style::from_name("ascii"), Style::Ascii);
        assert_eq!(Style::from_name("simple"), Style::Simple);
    }

    #[test]
    fn unknown_name_falls_back_to_box() {
        assert_eq!(Style::from_name("weird"), Style::Box);
        assert_eq!(Style::from_name(""), Style::Box);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Style::from_name("LINE"), Style::Box);
    }

    #[test]
    fn name_roundtrips() {
        for &(name, style) in NAMES {
            assert_eq!(style.name(), name);
            assert_eq!(Style::from_name(style.name()), style);
        }
    }

    #[test]
    fn default_is_box() {
        assert_eq!(Style::default(), Style::Box);
    }
}
