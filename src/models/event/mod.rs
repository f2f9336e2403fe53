// Event module
// The event carried by a drag gesture: its label, colour and the time range being moved

use chrono::{DateTime, Duration, Local};

/// Event as seen by the drag overlay.
///
/// The title may be blank; the overlay then draws an empty box.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>, // "#RRGGBB" or "#RGB"
}

/// True for "#RRGGBB" and "#RGB" with ASCII hex digits only.
pub fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

impl Event {
    /// Create an event with the given title and time range
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_drag::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("Team Meeting", start, end).unwrap();
    /// assert!(event.has_title());
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let event = Self {
            title: title.into(),
            start,
            end,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Same event with `color` set, rejected unless it is a hex colour
    pub fn with_color(mut self, color: impl Into<String>) -> Result<Self, String> {
        self.color = Some(color.into());
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        if let Some(color) = self.color.as_deref() {
            if !is_hex_color(color) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// True when the title has visible text
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Same length, starting at `start`
    pub fn moved_to(mut self, start: DateTime<Local>) -> Self {
        let duration = self.duration();
        self.start = start;
        self.end = start + duration;
        self
    }
}
