use crate::config::GuiConfig;
use glam::Vec2;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { min: position, max: position + size }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn is_zero(&self) -> bool {
        self.min == Vec2::ZERO && self.max == Vec2::ZERO
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn grow_to_include(&mut self, other: Bounds) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

/// Per-caller window layout state carried from frame to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiSettings {
    pub window_pos: Vec2,
    pub window_size: Vec2,
    pub margin: f32,
    /// Set when the pointer was inside any window ended this frame.
    pub mouse_over_gui: bool,
    /// Union of every window ended since the last [`GuiSettings::begin_frame`].
    pub total_bounds: Bounds,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self::from_config(&GuiConfig::default())
    }
}

impl GuiSettings {
    pub fn from_config(config: &GuiConfig) -> Self {
        Self {
            window_pos: Vec2::splat(config.window_margin),
            window_size: Vec2::ZERO,
            margin: config.window_margin,
            mouse_over_gui: false,
            total_bounds: Bounds::default(),
        }
    }

    /// Clears the per-frame accumulators. Call once at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.mouse_over_gui = false;
        self.total_bounds = Bounds::default();
    }

    /// Moves the placement below the last window so the next one stacks under it.
    pub fn set_next_window(&mut self) {
        self.window_size.x = 0.0;
        self.window_pos.y += self.window_size.y + self.margin;
    }

    pub(crate) fn record_window(&mut self, position: Vec2, size: Vec2, pointer: Option<Vec2>) {
        self.window_pos = position;
        self.window_size = size;
        let bounds = Bounds::from_position_size(position, size);
        if let Some(pointer) = pointer {
            self.mouse_over_gui |= bounds.contains(pointer);
        }
        if self.total_bounds.is_zero() {
            self.total_bounds = bounds;
        } else {
            self.total_bounds.grow_to_include(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_window_stacks_below_previous() {
        let mut settings = GuiSettings::default();
        settings.window_pos = Vec2::new(10.0, 10.0);
        settings.window_size = Vec2::new(200.0, 150.0);
        settings.set_next_window();
        assert_eq!(settings.window_pos, Vec2::new(10.0, 170.0));
        assert_eq!(settings.window_size.x, 0.0);
    }

    #[test]
    fn recorded_windows_accumulate_bounds_until_frame_reset() {
        let mut settings = GuiSettings::default();
        settings.record_window(Vec2::new(10.0, 10.0), Vec2::new(100.0, 50.0), Some(Vec2::new(500.0, 500.0)));
        assert_eq!(settings.total_bounds, Bounds { min: Vec2::new(10.0, 10.0), max: Vec2::new(110.0, 60.0) });
        assert!(!settings.mouse_over_gui);

        settings.record_window(Vec2::new(10.0, 70.0), Vec2::new(300.0, 40.0), Some(Vec2::new(20.0, 80.0)));
        assert_eq!(settings.total_bounds.max, Vec2::new(310.0, 110.0));
        assert!(settings.mouse_over_gui);

        settings.begin_frame();
        assert!(settings.total_bounds.is_zero());
        assert!(!settings.mouse_over_gui);
    }
}
