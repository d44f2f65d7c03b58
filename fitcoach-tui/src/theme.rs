//! Fresh theme and color utilities.

use fitcoach_core::{EventKind, Intensity, Role};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct FreshTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl FreshTheme {
    pub fn fresh() -> Self {
        Self {
            bg: Color::Rgb(12, 20, 16),
            bg_highlight: Color::Rgb(30, 52, 40),
            primary: Color::Rgb(22, 163, 74),
            primary_dim: Color::Rgb(20, 83, 45),
            secondary: Color::Rgb(59, 130, 246),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(96, 165, 250),
            text: Color::Rgb(244, 244, 245),
            text_dim: Color::Rgb(161, 161, 170),
            text_muted: Color::Rgb(82, 82, 91),
            border: Color::Rgb(63, 63, 70),
            border_focus: Color::Rgb(22, 163, 74),
        }
    }
}

impl Default for FreshTheme {
    fn default() -> Self {
        Self::fresh()
    }
}

pub fn role_color(role: Role, theme: &FreshTheme) -> Color {
    match role {
        Role::User => theme.secondary,
        Role::Assistant => theme.primary,
    }
}

pub fn event_kind_color(kind: EventKind, theme: &FreshTheme) -> Color {
    match kind {
        EventKind::Message => theme.text,
        EventKind::Handoff => theme.secondary,
        EventKind::ToolCall => theme.warning,
        EventKind::ToolOutput => theme.success,
        EventKind::ContextUpdate => theme.info,
        EventKind::Unknown => theme.text_dim,
    }
}

pub fn guardrail_color(passed: bool, theme: &FreshTheme) -> Color {
    if passed {
        theme.success
    } else {
        theme.error
    }
}

pub fn intensity_color(intensity: Intensity, theme: &FreshTheme) -> Color {
    match intensity {
        Intensity::Low => theme.success,
        Intensity::Medium => theme.warning,
        Intensity::High => theme.error,
    }
}
