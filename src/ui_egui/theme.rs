//! Theme module for the dragging overlay
//!
//! Defines the OverlayTheme structure, the style override layers the overlay
//! accepts, and conversions between egui::Color32 and hex strings.

use egui::Color32;

use crate::models::settings::OverlaySettings;

/// Optional overrides for the overlay's box. Unset fields fall through to
/// the layer underneath.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerStyle {
    pub fill: Option<Color32>,
    pub border_color: Option<Color32>,
    pub border_width: Option<f32>,
    pub corner_radius: Option<f32>,
}

impl ContainerStyle {
    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merged(&self, over: &ContainerStyle) -> ContainerStyle {
        ContainerStyle {
            fill: over.fill.or(self.fill),
            border_color: over.border_color.or(self.border_color),
            border_width: over.border_width.or(self.border_width),
            corner_radius: over.corner_radius.or(self.corner_radius),
        }
    }
}

/// Optional overrides for the default title text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TitleStyle {
    pub color: Option<Color32>,
    pub font_size: Option<f32>,
    pub padding: Option<f32>,
}

impl TitleStyle {
    pub fn merged(&self, over: &TitleStyle) -> TitleStyle {
        TitleStyle {
            color: over.color.or(self.color),
            font_size: over.font_size.or(self.font_size),
            padding: over.padding.or(self.padding),
        }
    }
}

/// Fully resolved box style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub fill: Color32,
    pub border_color: Color32,
    pub border_width: f32,
    pub corner_radius: f32,
}

/// Fully resolved title style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTitleStyle {
    pub color: Color32,
    pub font_size: f32,
    pub padding: f32,
}

/// Colors and style overrides used while dragging
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Border of the dragged box and default drag dots
    pub primary: Color32,

    /// Time grid background
    pub grid_background: Color32,

    /// Hour and day separator lines
    pub grid_line: Color32,

    /// Primary text color (event titles)
    pub text_primary: Color32,

    /// Secondary text color (hour labels)
    pub text_secondary: Color32,

    /// Theme-level override for the event box
    pub event_container_style: Option<ContainerStyle>,

    /// Theme-level override for the event title
    pub event_title_style: Option<TitleStyle>,
}

impl OverlayTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            primary: Color32::from_rgb(100, 150, 255),
            grid_background: Color32::from_rgb(255, 255, 255),
            grid_line: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            event_container_style: None,
            event_title_style: None,
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            primary: Color32::from_rgb(100, 150, 255),
            grid_background: Color32::from_rgb(40, 40, 40),
            grid_line: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            event_container_style: None,
            event_title_style: None,
        }
    }

    /// Theme for a settings name; "system" follows `system_dark`.
    pub fn from_name(name: &str, system_dark: bool) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ if system_dark => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Resolve the event box style: defaults, then the theme override,
    /// then the caller's override.
    pub fn box_style(
        &self,
        event_color: Option<&str>,
        settings: &OverlaySettings,
        caller: Option<&ContainerStyle>,
    ) -> BoxStyle {
        let base = ContainerStyle {
            fill: Some(
                event_color
                    .and_then(|hex| Self::hex_to_color(hex).ok())
                    .unwrap_or(Color32::TRANSPARENT),
            ),
            border_color: Some(self.primary),
            border_width: Some(settings.border_width),
            corner_radius: Some(settings.corner_radius),
        };
        let layered = [self.event_container_style.as_ref(), caller]
            .into_iter()
            .flatten()
            .fold(base, |acc, layer| acc.merged(layer));

        BoxStyle {
            fill: layered.fill.unwrap_or(Color32::TRANSPARENT),
            border_color: layered.border_color.unwrap_or(self.primary),
            border_width: layered.border_width.unwrap_or(settings.border_width),
            corner_radius: layered.corner_radius.unwrap_or(settings.corner_radius),
        }
    }

    pub fn title_style(&self, settings: &OverlaySettings) -> ResolvedTitleStyle {
        let base = TitleStyle {
            color: Some(self.text_primary),
            font_size: Some(settings.title_font_size),
            padding: Some(settings.title_padding),
        };
        let layered = match self.event_title_style.as_ref() {
            Some(over) => base.merged(over),
            None => base,
        };

        ResolvedTitleStyle {
            color: layered.color.unwrap_or(self.text_primary),
            font_size: layered.font_size.unwrap_or(settings.title_font_size),
            padding: layered.padding.unwrap_or(settings.title_padding),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.grid_background;
        visuals.selection.stroke.color = self.primary;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Parse "#RRGGBB" or "#RGB" to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", hex));
        }
        // All ASCII from here, so byte ranges are char ranges
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| format!("Invalid hex color: {}", hex));

        match digits.len() {
            6 => Ok(Color32::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err("Hex color must be 3 or 6 characters".to_string()),
        }
    }
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self::light()
    }
}
