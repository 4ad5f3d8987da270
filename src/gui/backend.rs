use glam::Vec2;

/// Toolkit texture handle passed through to [`UiBackend::image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Where a window should appear the first time it is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlacement {
    pub position: Vec2,
    /// Zero components mean "fit to content".
    pub size: Vec2,
    pub collapsed: bool,
    pub collapsible: bool,
}

/// Screen rectangle of a window as it was drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowFrame {
    pub position: Vec2,
    pub size: Vec2,
}

/// Immediate-mode drawing context the GUI helpers draw into.
///
/// Every widget is keyed by its label, which the caller guarantees to be
/// unique within the current container. Widgets return true when the user
/// changed the value this frame.
pub trait UiBackend {
    /// Returns whether the window is expanded. `end_window` must follow either way.
    fn begin_window(&mut self, title: &str, placement: WindowPlacement, open: Option<&mut bool>) -> bool;
    fn end_window(&mut self) -> WindowFrame;

    /// Top-level collapsible region. When it returns true, `tree_pop` must follow.
    fn collapsing_header(&mut self, label: &str) -> bool;
    /// Nested collapsible region. When it returns true, `tree_pop` must follow.
    fn tree_node(&mut self, label: &str) -> bool;
    fn tree_pop(&mut self);

    /// Lays the following widgets out side by side until `end_row`.
    fn begin_row(&mut self);
    fn end_row(&mut self);

    fn slider_float(&mut self, label: &str, values: &mut [f32], min: f32, max: f32) -> bool;
    fn slider_int(&mut self, label: &str, values: &mut [i32], min: i32, max: i32) -> bool;
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    /// `rgba` always has four channels; alpha is only editable when `alpha` is set.
    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], alpha: bool) -> bool;
    fn radio_button(&mut self, label: &str, current: &mut i32, value: i32) -> bool;
    fn input_int(&mut self, label: &str, value: &mut i32, step: i32, step_fast: i32) -> bool;
    fn drag_float_range(
        &mut self,
        label: &str,
        lower: &mut f32,
        upper: &mut f32,
        speed: f32,
        min: f32,
        max: f32,
    ) -> bool;
    fn text(&mut self, text: &str);
    fn image(&mut self, texture: TextureId, size: Vec2);

    fn pointer_position(&self) -> Option<Vec2>;
}
