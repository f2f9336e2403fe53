//! Whether and how the dragging overlay is mounted.

/// Outcome of gating the overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayVisibility {
    /// No drag in progress, nothing is drawn
    Hidden,
    /// The caller's full overlay renderer draws everything
    Delegated,
    /// The built-in overlay is drawn
    BuiltIn,
}

impl OverlayVisibility {
    pub fn decide(drag_active: bool, has_full_override: bool) -> Self {
        match (drag_active, has_full_override) {
            (false, _) => Self::Hidden,
            (true, true) => Self::Delegated,
            (true, false) => Self::BuiltIn,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
