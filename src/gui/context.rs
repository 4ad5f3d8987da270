use super::{GuiError, GuiSettings, NameScopes, TextureId, UiBackend, Widget, WindowPlacement};
use crate::config::GuiConfig;
use crate::group::ParameterGroup;
use crate::param::{Param, ParamKind, Parameter};
use crate::traverse::{self, VisitorMut};
use crate::value::Color;
use glam::Vec2;
use tracing::warn;

/// State for one GUI pass: at most one open window, nested tree regions, and
/// the label scopes that keep widget identities unique per container.
pub struct GuiContext<B: UiBackend> {
    backend: B,
    config: GuiConfig,
    names: NameScopes,
    window_open: bool,
    tree_level: u32,
}

impl<B: UiBackend> GuiContext<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, GuiConfig::default())
    }

    pub fn with_config(backend: B, config: GuiConfig) -> Self {
        let names = NameScopes::new(config.name_padding);
        Self { backend, config, names, window_open: false, tree_level: 0 }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    pub fn is_window_open(&self) -> bool {
        self.window_open
    }

    pub fn tree_level(&self) -> u32 {
        self.tree_level
    }

    pub fn scope_depth(&self) -> usize {
        self.names.depth()
    }

    /// Label for a widget in the current container, padded until unique.
    pub fn unique_name(&mut self, candidate: &str) -> Result<String, GuiError> {
        self.names.unique_name(candidate)
    }

    fn label(&mut self, candidate: &str) -> String {
        match self.names.unique_name(candidate) {
            Ok(name) => name,
            Err(err) => {
                warn!(name = candidate, error = %err, "widget drawn outside a window");
                candidate.to_string()
            }
        }
    }

    pub fn begin_window(&mut self, name: &str, settings: &GuiSettings, collapse: bool) -> bool {
        self.begin_window_impl(name, settings, collapse, None)
    }

    /// Like [`GuiContext::begin_window`], with `open` bound to the window's close button.
    pub fn begin_window_toggle(
        &mut self,
        open: &mut Parameter<bool>,
        settings: &GuiSettings,
        collapse: bool,
    ) -> bool {
        if self.window_open {
            warn!(window = open.name(), "already inside a window block");
            return false;
        }
        let mut value = open.get();
        let expanded = self.begin_window_impl(open.name(), settings, collapse, Some(&mut value));
        open.set(value);
        expanded
    }

    fn begin_window_impl(
        &mut self,
        name: &str,
        settings: &GuiSettings,
        collapse: bool,
        open: Option<&mut bool>,
    ) -> bool {
        if self.window_open {
            warn!(window = name, "already inside a window block");
            return false;
        }
        self.window_open = true;
        self.names.push_scope();
        let placement = WindowPlacement {
            position: settings.window_pos,
            size: settings.window_size,
            collapsed: collapse,
            collapsible: collapse,
        };
        self.backend.begin_window(name, placement, open)
    }

    /// Closes the open window, storing its rectangle in `settings`.
    pub fn end_window(&mut self, settings: &mut GuiSettings) {
        if !self.window_open {
            warn!("not inside a window block");
            return;
        }
        self.window_open = false;
        let frame = self.backend.end_window();
        let pointer = self.backend.pointer_position();
        settings.record_window(frame.position, frame.size, pointer);
        if let Err(err) = self.names.pop_scope() {
            warn!(error = %err, "window scope already gone");
        }
    }

    /// Opens a collapsible region. `end_tree` must follow only when this returns true.
    pub fn begin_tree(&mut self, name: &str) -> bool {
        let label = self.label(name);
        let expanded = if self.tree_level == 0 {
            self.backend.collapsing_header(&label)
        } else {
            self.backend.tree_node(&label)
        };
        if expanded {
            self.tree_level += 1;
            self.names.push_scope();
        }
        expanded
    }

    pub fn end_tree(&mut self) {
        if self.tree_level == 0 {
            warn!("not inside a tree block");
            return;
        }
        self.tree_level -= 1;
        if let Err(err) = self.names.pop_scope() {
            warn!(error = %err, "tree scope already gone");
        }
        self.backend.tree_pop();
    }

    /// Draws a whole group: a window when none is open, a tree region otherwise.
    /// Returns whether any parameter was edited.
    pub fn add_group(&mut self, group: &mut ParameterGroup, settings: &mut GuiSettings) -> bool {
        let mut builder = GroupBuilder { ctx: self, settings, opened_window: Vec::new() };
        traverse::walk_mut(group, &mut builder)
    }

    /// Draws the default control for a single parameter.
    pub fn add_param(&mut self, param: &mut Param) -> bool {
        match param {
            Param::Bool(p) => self.add_parameter(p),
            Param::Int(p) => self.add_parameter(p),
            Param::Float(p) => self.add_parameter(p),
            Param::Vec2(p) => self.add_parameter(p),
            Param::Vec3(p) => self.add_parameter(p),
            Param::Vec4(p) => self.add_parameter(p),
            Param::IVec2(p) => self.add_parameter(p),
            Param::IVec3(p) => self.add_parameter(p),
            Param::IVec4(p) => self.add_parameter(p),
            Param::Color(p) => {
                let alpha = self.config.color_alpha;
                self.add_color(p, alpha)
            }
            Param::Text(p) => {
                warn!(parameter = p.name(), kind = %ParamKind::Text, "could not create GUI element for parameter");
                false
            }
        }
    }

    pub fn add_parameter<T: Widget>(&mut self, parameter: &mut Parameter<T>) -> bool {
        let label = self.label(parameter.name());
        let mut value = parameter.get();
        if T::draw(&mut self.backend, &label, &mut value, parameter.min(), parameter.max(), &self.config) {
            parameter.set(value);
            return true;
        }
        false
    }

    pub fn add_color(&mut self, parameter: &mut Parameter<Color>, alpha: bool) -> bool {
        let label = self.label(parameter.name());
        let mut rgba = parameter.get().to_array();
        if self.backend.color_edit(&label, &mut rgba, alpha) {
            parameter.set(Color::from_array(rgba));
            return true;
        }
        false
    }

    /// One radio button per label, `columns` buttons per row.
    pub fn add_radio<S: AsRef<str>>(&mut self, parameter: &mut Parameter<i32>, labels: &[S], columns: usize) -> bool {
        self.backend.text(parameter.name());
        let columns = columns.max(1);
        let mut current = parameter.get();
        let mut changed = false;
        for (index, text) in labels.iter().enumerate() {
            if columns > 1 && index % columns == 0 {
                if index > 0 {
                    self.backend.end_row();
                }
                self.backend.begin_row();
            }
            let label = self.label(text.as_ref());
            changed |= self.backend.radio_button(&label, &mut current, index as i32);
        }
        if columns > 1 && !labels.is_empty() {
            self.backend.end_row();
        }
        if changed {
            parameter.set(current);
        }
        changed
    }

    /// Integer input with +/- buttons using the configured step sizes.
    pub fn add_stepper(&mut self, parameter: &mut Parameter<i32>) -> bool {
        let steps = self.config.stepper;
        self.add_stepper_with(parameter, steps.step, steps.step_fast)
    }

    pub fn add_stepper_with(&mut self, parameter: &mut Parameter<i32>, step: i32, step_fast: i32) -> bool {
        let label = self.label(parameter.name());
        let mut value = parameter.get();
        if self.backend.input_int(&label, &mut value, step, step_fast) {
            parameter.set(value);
            return true;
        }
        false
    }

    /// Two-handled drag bounded by `lower.min()` and `upper.max()`, at the configured speed.
    pub fn add_range(&mut self, name: &str, lower: &mut Parameter<f32>, upper: &mut Parameter<f32>) -> bool {
        let speed = self.config.range_speed;
        self.add_range_with(name, lower, upper, speed)
    }

    pub fn add_range_with(
        &mut self,
        name: &str,
        lower: &mut Parameter<f32>,
        upper: &mut Parameter<f32>,
        speed: f32,
    ) -> bool {
        let label = self.label(name);
        let (mut lo, mut hi) = (lower.get(), upper.get());
        if self.backend.drag_float_range(&label, &mut lo, &mut hi, speed, *lower.min(), *upper.max()) {
            lower.set(lo);
            upper.set(hi);
            return true;
        }
        false
    }

    /// One control per element, labelled `"{name} {index}"`.
    pub fn add_values<T: Widget>(&mut self, name: &str, values: &mut [T], min: &T, max: &T) -> bool {
        let mut changed = false;
        for (index, value) in values.iter_mut().enumerate() {
            let label = self.label(&format!("{name} {index}"));
            changed |= T::draw(&mut self.backend, &label, value, min, max, &self.config);
        }
        changed
    }

    pub fn add_image(&mut self, texture: TextureId, size: Vec2) {
        self.backend.image(texture, size);
    }

    /// Checks that every window and tree opened this pass was closed, then
    /// resets the nesting state so the next pass starts clean.
    pub fn finish_frame(&mut self) -> Result<(), GuiError> {
        let open = self.names.clear();
        let balanced = open == 0 && !self.window_open && self.tree_level == 0;
        self.window_open = false;
        self.tree_level = 0;
        if balanced {
            Ok(())
        } else {
            Err(GuiError::UnbalancedScopes { open })
        }
    }
}

impl<B: UiBackend> Drop for GuiContext<B> {
    fn drop(&mut self) {
        if self.names.depth() > 0 {
            warn!(open = self.names.depth(), "GUI context dropped with open scopes");
        }
    }
}

struct GroupBuilder<'a, B: UiBackend> {
    ctx: &'a mut GuiContext<B>,
    settings: &'a mut GuiSettings,
    /// One entry per entered group: whether it opened the window.
    opened_window: Vec<bool>,
}

impl<B: UiBackend> VisitorMut for GroupBuilder<'_, B> {
    fn enter_group(&mut self, group: &mut ParameterGroup) -> bool {
        if self.ctx.is_window_open() {
            if !self.ctx.begin_tree(group.name()) {
                return false;
            }
            self.opened_window.push(false);
        } else {
            let collapse = self.ctx.config.collapse_windows;
            if !self.ctx.begin_window(group.name(), &*self.settings, collapse) {
                self.ctx.end_window(&mut *self.settings);
                return false;
            }
            self.opened_window.push(true);
        }
        true
    }

    fn leave_group(&mut self, _group: &mut ParameterGroup) {
        match self.opened_window.pop() {
            Some(true) => self.ctx.end_window(&mut *self.settings),
            Some(false) => self.ctx.end_tree(),
            None => warn!("group closed without being opened"),
        }
    }

    fn visit_param(&mut self, param: &mut Param) -> bool {
        self.ctx.add_param(param)
    }
}
