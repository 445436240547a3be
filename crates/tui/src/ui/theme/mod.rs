//! Theme roles and style helpers for the Trailhead UI.

pub mod helpers;

use ratatui::style::{Color, Modifier, Style};
use trailhead_types::Accent;

/// Semantic color roles used across all components.
///
/// Components never hard-code colors; they ask the theme for a role or an
/// accent so the palette stays consistent page-wide.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRoles {
    pub bg: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_dim: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    roles: ThemeRoles,
}

impl Default for Theme {
    fn default() -> Self {
        // Dark zinc palette matching the published roadmap pages.
        Self {
            roles: ThemeRoles {
                bg: Color::Rgb(0x09, 0x09, 0x0b),
                surface: Color::Rgb(0x18, 0x18, 0x1b),
                surface_muted: Color::Rgb(0x27, 0x27, 0x2a),
                border: Color::Rgb(0x3f, 0x3f, 0x46),
                border_focused: Color::Rgb(0x71, 0x71, 0x7a),
                text: Color::Rgb(0xf4, 0xf4, 0xf5),
                text_secondary: Color::Rgb(0xa1, 0xa1, 0xaa),
                text_muted: Color::Rgb(0x71, 0x71, 0x7a),
                text_dim: Color::Rgb(0x52, 0x52, 0x5b),
            },
        }
    }
}

impl Theme {
    pub fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    /// Concrete color for a named accent.
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Cyan => Color::Rgb(0x22, 0xd3, 0xee),
            Accent::Amber => Color::Rgb(0xf5, 0x9e, 0x0b),
            Accent::Green => Color::Rgb(0x34, 0xd3, 0x99),
            Accent::Violet => Color::Rgb(0xa7, 0x8b, 0xfa),
            Accent::Orange => Color::Rgb(0xfb, 0x92, 0x3c),
            Accent::Blue => Color::Rgb(0x60, 0xa5, 0xfa),
            Accent::Red => Color::Rgb(0xf8, 0x71, 0x71),
            Accent::Yellow => Color::Rgb(0xfb, 0xbf, 0x24),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles.text_secondary)
    }

    pub fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn text_dim_style(&self) -> Style {
        Style::default().fg(self.roles.text_dim)
    }

    pub fn accent_style(&self, accent: Accent) -> Style {
        Style::default().fg(self.accent(accent))
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.roles.border_focused)
        } else {
            Style::default().fg(self.roles.border)
        }
    }

    /// Style for the selected/cursor row in interactive lists.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.roles.surface_muted)
            .fg(self.roles.text)
            .add_modifier(Modifier::BOLD)
    }
}
