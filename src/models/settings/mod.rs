// Settings module
// Layout and styling knobs for the drag overlay, persisted as TOML

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::date::MINUTES_PER_DAY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Pixels per minute in the time grid
    pub minute_height: f32,
    pub hour_axis_width: f32,
    /// First minute of the day shown at the top of the grid
    pub day_start_minutes: f32,
    pub day_end_minutes: f32,
    pub visible_days: usize,
    pub offset_animation_ms: u64,
    pub handle_size: f32,
    /// How far default handles sit outside the box corners
    pub handle_outset: f32,
    pub border_width: f32,
    pub corner_radius: f32,
    pub title_font_size: f32,
    pub title_padding: f32,
    /// "light", "dark" or "system"
    pub theme: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            minute_height: 1.0,
            hour_axis_width: 50.0,
            day_start_minutes: 0.0,
            day_end_minutes: MINUTES_PER_DAY,
            visible_days: 7,
            offset_animation_ms: 100,
            handle_size: 24.0,
            handle_outset: 12.0,
            border_width: 3.0,
            corner_radius: 4.0,
            title_font_size: 12.0,
            title_padding: 2.0,
            theme: "system".to_string(),
        }
    }
}

impl OverlaySettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.minute_height > 0.0) {
            return Err("Minute height must be positive".to_string());
        }

        if self.visible_days == 0 {
            return Err("At least one day must be visible".to_string());
        }

        if self.day_start_minutes < 0.0 || self.day_end_minutes > MINUTES_PER_DAY {
            return Err("Day boundaries must lie within 00:00-24:00".to_string());
        }

        if self.day_end_minutes <= self.day_start_minutes {
            return Err("Day end must be after day start".to_string());
        }

        let widths = [
            self.hour_axis_width,
            self.handle_size,
            self.handle_outset,
            self.border_width,
            self.corner_radius,
            self.title_padding,
        ];
        if widths.iter().any(|w| *w < 0.0) {
            return Err("Sizes cannot be negative".to_string());
        }

        if !(self.title_font_size > 0.0) {
            return Err("Title font size must be positive".to_string());
        }

        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        Ok(())
    }

    pub fn offset_animation(&self) -> Duration {
        Duration::from_millis(self.offset_animation_ms)
    }

    /// Height of the whole grid from day start to day end
    pub fn grid_height(&self) -> f32 {
        (self.day_end_minutes - self.day_start_minutes) * self.minute_height
    }
}
