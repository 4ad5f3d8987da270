//! Backend that draws nothing, records every call, and replays scripted
//! user edits. Useful for exercising GUI code without a window.

use super::{TextureId, UiBackend, WindowFrame, WindowPlacement};
use glam::Vec2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    BeginWindow(String),
    EndWindow,
    CollapsingHeader(String),
    TreeNode(String),
    TreePop,
    BeginRow,
    EndRow,
    Widget(String),
    Text(String),
    Image(TextureId),
}

/// A pending user interaction, consumed by the first widget with a matching label.
#[derive(Debug, Clone, PartialEq)]
enum Edit {
    Floats(Vec<f32>),
    Ints(Vec<i32>),
    Bool(bool),
    Color([f32; 4]),
    Radio(i32),
    Range(f32, f32),
}

#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    calls: Vec<UiCall>,
    edits: HashMap<String, Edit>,
    collapsed: HashSet<String>,
    close_requests: HashSet<String>,
    window_size: Vec2,
    pointer: Option<Vec2>,
    placements: Vec<WindowPlacement>,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            edits: HashMap::new(),
            collapsed: HashSet::new(),
            close_requests: HashSet::new(),
            window_size: Vec2::new(240.0, 120.0),
            pointer: None,
            placements: Vec::new(),
        }
    }
}

impl HeadlessBackend {
    pub fn calls(&self) -> &[UiCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Labels of every value widget drawn, in order.
    pub fn widget_labels(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                UiCall::Widget(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Treats the window, header or tree node with this label as collapsed.
    pub fn collapse(&mut self, label: impl Into<String>) {
        self.collapsed.insert(label.into());
    }

    pub fn close_window(&mut self, title: impl Into<String>) {
        self.close_requests.insert(title.into());
    }

    pub fn set_window_size(&mut self, size: Vec2) {
        self.window_size = size;
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn edit_floats(&mut self, label: impl Into<String>, values: &[f32]) {
        self.edits.insert(label.into(), Edit::Floats(values.to_vec()));
    }

    pub fn edit_ints(&mut self, label: impl Into<String>, values: &[i32]) {
        self.edits.insert(label.into(), Edit::Ints(values.to_vec()));
    }

    pub fn edit_bool(&mut self, label: impl Into<String>, value: bool) {
        self.edits.insert(label.into(), Edit::Bool(value));
    }

    pub fn edit_color(&mut self, label: impl Into<String>, rgba: [f32; 4]) {
        self.edits.insert(label.into(), Edit::Color(rgba));
    }

    pub fn edit_radio(&mut self, label: impl Into<String>, value: i32) {
        self.edits.insert(label.into(), Edit::Radio(value));
    }

    pub fn edit_range(&mut self, label: impl Into<String>, lower: f32, upper: f32) {
        self.edits.insert(label.into(), Edit::Range(lower, upper));
    }

    fn widget(&mut self, label: &str) -> Option<Edit> {
        self.calls.push(UiCall::Widget(label.to_string()));
        self.edits.remove(label)
    }

    fn region(&mut self, label: &str) -> bool {
        !self.collapsed.contains(label)
    }
}

fn copy_into<T: Copy>(target: &mut [T], source: &[T]) -> bool {
    if target.len() != source.len() {
        return false;
    }
    target.copy_from_slice(source);
    true
}

impl UiBackend for HeadlessBackend {
    fn begin_window(&mut self, title: &str, placement: WindowPlacement, open: Option<&mut bool>) -> bool {
        self.calls.push(UiCall::BeginWindow(title.to_string()));
        self.placements.push(placement);
        if let Some(open) = open {
            if self.close_requests.remove(title) {
                *open = false;
            }
        }
        self.region(title)
    }

    fn end_window(&mut self) -> WindowFrame {
        self.calls.push(UiCall::EndWindow);
        let position = self.placements.pop().map(|placement| placement.position).unwrap_or_default();
        WindowFrame { position, size: self.window_size }
    }

    fn collapsing_header(&mut self, label: &str) -> bool {
        self.calls.push(UiCall::CollapsingHeader(label.to_string()));
        self.region(label)
    }

    fn tree_node(&mut self, label: &str) -> bool {
        self.calls.push(UiCall::TreeNode(label.to_string()));
        self.region(label)
    }

    fn tree_pop(&mut self) {
        self.calls.push(UiCall::TreePop);
    }

    fn begin_row(&mut self) {
        self.calls.push(UiCall::BeginRow);
    }

    fn end_row(&mut self) {
        self.calls.push(UiCall::EndRow);
    }

    fn slider_float(&mut self, label: &str, values: &mut [f32], _min: f32, _max: f32) -> bool {
        match self.widget(label) {
            Some(Edit::Floats(edit)) => copy_into(values, &edit),
            _ => false,
        }
    }

    fn slider_int(&mut self, label: &str, values: &mut [i32], _min: i32, _max: i32) -> bool {
        match self.widget(label) {
            Some(Edit::Ints(edit)) => copy_into(values, &edit),
            _ => false,
        }
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        match self.widget(label) {
            Some(Edit::Bool(edit)) => {
                *value = edit;
                true
            }
            _ => false,
        }
    }

    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], alpha: bool) -> bool {
        match self.widget(label) {
            Some(Edit::Color(mut edit)) => {
                if !alpha {
                    edit[3] = rgba[3];
                }
                *rgba = edit;
                true
            }
            _ => false,
        }
    }

    fn radio_button(&mut self, label: &str, current: &mut i32, value: i32) -> bool {
        match self.widget(label) {
            Some(Edit::Radio(edit)) if edit == value && *current != value => {
                *current = value;
                true
            }
            _ => false,
        }
    }

    fn input_int(&mut self, label: &str, value: &mut i32, _step: i32, _step_fast: i32) -> bool {
        match self.widget(label) {
            Some(Edit::Ints(edit)) => copy_into(std::slice::from_mut(value), &edit),
            _ => false,
        }
    }

    fn drag_float_range(
        &mut self,
        label: &str,
        lower: &mut f32,
        upper: &mut f32,
        _speed: f32,
        min: f32,
        max: f32,
    ) -> bool {
        match self.widget(label) {
            Some(Edit::Range(lo, hi)) => {
                *lower = lo.clamp(min, max);
                *upper = hi.clamp(*lower, max);
                true
            }
            _ => false,
        }
    }

    fn text(&mut self, text: &str) {
        self.calls.push(UiCall::Text(text.to_string()));
    }

    fn image(&mut self, texture: TextureId, _size: Vec2) {
        self.calls.push(UiCall::Image(texture));
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer
    }
}
