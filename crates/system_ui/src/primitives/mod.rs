//! Shared control primitives and their semantic style tokens.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::cn;

mod controls;

pub use controls::{Button, ButtonAppearance, ButtonOptions, Spinner, TextArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color treatment for a visual variant, taken from a fixed lookup table.
pub struct VariantPalette {
    /// Resting background color.
    pub background: &'static str,
    /// Text color.
    pub color: &'static str,
    /// Full CSS border declaration.
    pub border: &'static str,
    /// Background color while hovered.
    pub hover_background: &'static str,
    /// Focus ring color.
    pub focus_ring: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Box metrics for a button size, taken from a fixed lookup table.
pub struct SizeMetrics {
    /// CSS font size.
    pub font_size: &'static str,
    /// CSS padding shorthand.
    pub padding: &'static str,
    /// CSS minimum width.
    pub min_width: &'static str,
    /// CSS border radius.
    pub border_radius: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Primary emphasized action.
    Primary,
    /// Secondary, subdued action.
    Secondary,
    /// Positive/confirming action.
    Success,
    /// Destructive action.
    Danger,
    /// Plain control without emphasis.
    #[default]
    Neutral,
}

const VARIANT_PALETTES: [VariantPalette; 5] = [
    VariantPalette {
        background: "#3b82f6",
        color: "#fff",
        border: "1.5px solid #3b82f6",
        hover_background: "#2563eb",
        focus_ring: "#2563eb",
    },
    VariantPalette {
        background: "#64748b",
        color: "#fff",
        border: "1.5px solid #64748b",
        hover_background: "#475569",
        focus_ring: "#475569",
    },
    VariantPalette {
        background: "#06b6d4",
        color: "#fff",
        border: "1.5px solid #06b6d4",
        hover_background: "#0891b2",
        focus_ring: "#0891b2",
    },
    VariantPalette {
        background: "hsl(0 84% 60%)",
        color: "#fff",
        border: "1.5px solid hsl(0 84% 60%)",
        hover_background: "hsl(0 74% 54%)",
        focus_ring: "hsl(0 74% 54%)",
    },
    VariantPalette {
        background: "#f1f5f9",
        color: "#1e293b",
        border: "1.5px solid #cbd5e1",
        hover_background: "#e2e8f0",
        focus_ring: "#94a3b8",
    },
];

impl ButtonVariant {
    /// Parses a variant token, falling back to [`ButtonVariant::Neutral`] for anything unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "success" => Self::Success,
            "danger" => Self::Danger,
            _ => Self::Neutral,
        }
    }

    /// Stable lowercase token for `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }

    /// Color treatment for this variant.
    pub fn palette(self) -> &'static VariantPalette {
        &VARIANT_PALETTES[self as usize]
    }

    pub(crate) fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Secondary => "ui-button--secondary",
            Self::Success => "ui-button--success",
            Self::Danger => "ui-button--danger",
            Self::Neutral => "ui-button--neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

const SIZE_METRICS: [SizeMetrics; 3] = [
    SizeMetrics {
        font_size: "0.95rem",
        padding: "7px 14px",
        min_width: "68px",
        border_radius: "7px",
    },
    SizeMetrics {
        font_size: "1.07rem",
        padding: "12px 22px",
        min_width: "88px",
        border_radius: "8px",
    },
    SizeMetrics {
        font_size: "1.21rem",
        padding: "16px 29px",
        min_width: "110px",
        border_radius: "10px",
    },
];

impl ButtonSize {
    /// Parses a size token, falling back to [`ButtonSize::Md`] for anything unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }

    /// Stable lowercase token for `data-ui-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Box metrics for this size.
    pub fn metrics(self) -> &'static SizeMetrics {
        &SIZE_METRICS[self as usize]
    }

    pub(crate) fn class_name(self) -> &'static str {
        match self {
            Self::Sm => "ui-button--sm",
            Self::Md => "ui-button--md",
            Self::Lg => "ui-button--lg",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variant_tokens_round_trip_and_unknown_falls_back() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Success,
            ButtonVariant::Danger,
            ButtonVariant::Neutral,
        ] {
            assert_eq!(ButtonVariant::from_token(variant.token()), variant);
        }
        assert_eq!(ButtonVariant::from_token("unknown-value"), ButtonVariant::Neutral);
        assert_eq!(ButtonVariant::default(), ButtonVariant::Neutral);
    }

    #[test]
    fn size_unknown_falls_back_to_md() {
        assert_eq!(ButtonSize::from_token("xl"), ButtonSize::Md);
        assert_eq!(ButtonSize::from_token("lg"), ButtonSize::Lg);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn lookup_tables_line_up_with_enums() {
        assert_eq!(ButtonVariant::Primary.palette().background, "#3b82f6");
        assert_eq!(ButtonVariant::Danger.palette().hover_background, "hsl(0 74% 54%)");
        assert_eq!(ButtonVariant::Neutral.palette().color, "#1e293b");
        assert_eq!(ButtonSize::Sm.metrics().min_width, "68px");
        assert_eq!(ButtonSize::Lg.metrics().padding, "16px 29px");
    }
}
