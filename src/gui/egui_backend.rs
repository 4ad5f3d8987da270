use super::{TextureId, UiBackend, WindowFrame, WindowPlacement};
use egui::collapsing_header::{paint_default_icon, CollapsingState};
use egui::layers::ShapeIdx;
use glam::Vec2;

const WINDOW_PADDING: f32 = 6.0;
const DEFAULT_WINDOW_WIDTH: f32 = 320.0;

enum RegionKind {
    Window { background: ShapeIdx },
    Child,
}

struct Region {
    ui: egui::Ui,
    kind: RegionKind,
}

/// [`UiBackend`] drawing into an [`egui::Context`].
///
/// Windows are root `Ui`s on their own layer, tree regions and rows are child
/// `Ui`s; both are kept on a stack so begin/end calls can be issued from
/// anywhere in a traversal. Must be used between the context's begin and end
/// of pass.
pub struct EguiBackend {
    ctx: egui::Context,
    stack: Vec<Region>,
}

impl EguiBackend {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, stack: Vec::new() }
    }

    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }

    fn current(&mut self) -> Option<&mut egui::Ui> {
        self.stack.last_mut().map(|region| &mut region.ui)
    }

    fn begin_child(&mut self, layout: Option<egui::Layout>) {
        let Some(parent) = self.current() else {
            return;
        };
        let mut rect = parent.available_rect_before_wrap();
        let layout = match layout {
            Some(layout) => layout,
            None => {
                rect.min.x += parent.spacing().indent;
                *parent.layout()
            }
        };
        let child = parent.new_child(egui::UiBuilder::new().max_rect(rect).layout(layout));
        self.stack.push(Region { ui: child, kind: RegionKind::Child });
    }

    fn end_child(&mut self) {
        if !matches!(self.stack.last(), Some(Region { kind: RegionKind::Child, .. })) {
            return;
        }
        if let Some(region) = self.stack.pop() {
            let used = region.ui.min_rect();
            if let Some(parent) = self.current() {
                parent.advance_cursor_after_rect(used);
            }
        }
    }

    fn begin_region(&mut self, label: &str, header: bool) -> bool {
        let Some(parent) = self.current() else {
            return false;
        };
        let id = parent.make_persistent_id(label);
        let mut state = CollapsingState::load_with_default_open(parent.ctx(), id, true);
        parent.horizontal(|ui| {
            state.show_toggle_button(ui, paint_default_icon);
            if header {
                ui.strong(label);
            } else {
                ui.label(label);
            }
        });
        state.store(parent.ctx());
        if !state.is_open() {
            return false;
        }
        self.begin_child(None);
        true
    }
}

fn to_glam(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

impl UiBackend for EguiBackend {
    fn begin_window(&mut self, title: &str, placement: WindowPlacement, open: Option<&mut bool>) -> bool {
        let id = egui::Id::new(("kestrel_preset_window", title));
        let screen = self.ctx.content_rect();
        let min = egui::pos2(placement.position.x, placement.position.y);
        let width = if placement.size.x > 0.0 { placement.size.x } else { DEFAULT_WINDOW_WIDTH };
        let height = if placement.size.y > 0.0 { placement.size.y } else { (screen.max.y - min.y).max(0.0) };
        let rect = egui::Rect::from_min_size(min, egui::vec2(width, height)).shrink(WINDOW_PADDING);
        let layer = egui::LayerId::new(egui::Order::Middle, id);
        let mut ui = egui::Ui::new(self.ctx.clone(), id, egui::UiBuilder::new().layer_id(layer).max_rect(rect));
        let background = ui.painter().add(egui::Shape::Noop);

        let mut state = CollapsingState::load_with_default_open(&self.ctx, id.with("collapsed"), !placement.collapsed);
        ui.horizontal(|ui| {
            if placement.collapsible {
                state.show_toggle_button(ui, paint_default_icon);
            }
            ui.strong(title);
            if let Some(open) = open {
                if ui.small_button("x").clicked() {
                    *open = false;
                }
            }
        });
        state.store(&self.ctx);

        self.stack.push(Region { ui, kind: RegionKind::Window { background } });
        !placement.collapsible || state.is_open()
    }

    fn end_window(&mut self) -> WindowFrame {
        while let Some(region) = self.stack.pop() {
            if let RegionKind::Window { background } = region.kind {
                let used = region.ui.min_rect();
                let frame = used.expand(WINDOW_PADDING);
                let fill = region.ui.visuals().window_fill;
                region.ui.painter().set(background, egui::Shape::rect_filled(frame, egui::CornerRadius::same(4), fill));
                return WindowFrame { position: to_glam(frame.min.to_vec2()), size: to_glam(frame.size()) };
            }
        }
        WindowFrame::default()
    }

    fn collapsing_header(&mut self, label: &str) -> bool {
        self.begin_region(label, true)
    }

    fn tree_node(&mut self, label: &str) -> bool {
        self.begin_region(label, false)
    }

    fn tree_pop(&mut self) {
        self.end_child();
    }

    fn begin_row(&mut self) {
        self.begin_child(Some(egui::Layout::left_to_right(egui::Align::Center)));
    }

    fn end_row(&mut self) {
        self.end_child();
    }

    fn slider_float(&mut self, label: &str, values: &mut [f32], min: f32, max: f32) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| {
            ui.horizontal(|ui| {
                let mut changed = false;
                for value in values.iter_mut() {
                    changed |= ui.add(egui::Slider::new(value, min..=max)).changed();
                }
                ui.label(label);
                changed
            })
            .inner
        })
        .inner
    }

    fn slider_int(&mut self, label: &str, values: &mut [i32], min: i32, max: i32) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| {
            ui.horizontal(|ui| {
                let mut changed = false;
                for value in values.iter_mut() {
                    changed |= ui.add(egui::Slider::new(value, min..=max)).changed();
                }
                ui.label(label);
                changed
            })
            .inner
        })
        .inner
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| ui.checkbox(value, label).changed()).inner
    }

    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4], alpha: bool) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| {
            ui.horizontal(|ui| {
                let changed = if alpha {
                    ui.color_edit_button_rgba_unmultiplied(rgba).changed()
                } else {
                    let mut rgb = [rgba[0], rgba[1], rgba[2]];
                    let changed = ui.color_edit_button_rgb(&mut rgb).changed();
                    rgba[..3].copy_from_slice(&rgb);
                    changed
                };
                ui.label(label);
                changed
            })
            .inner
        })
        .inner
    }

    fn radio_button(&mut self, label: &str, current: &mut i32, value: i32) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| ui.radio_value(current, value, label).changed()).inner
    }

    fn input_int(&mut self, label: &str, value: &mut i32, step: i32, step_fast: i32) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| {
            ui.horizontal(|ui| {
                let step = if ui.input(|input| input.modifiers.ctrl) { step_fast } else { step };
                let mut changed = false;
                if ui.small_button("-").clicked() {
                    *value = value.saturating_sub(step);
                    changed = true;
                }
                changed |= ui.add(egui::DragValue::new(value).speed(step)).changed();
                if ui.small_button("+").clicked() {
                    *value = value.saturating_add(step);
                    changed = true;
                }
                ui.label(label);
                changed
            })
            .inner
        })
        .inner
    }

    fn drag_float_range(
        &mut self,
        label: &str,
        lower: &mut f32,
        upper: &mut f32,
        speed: f32,
        min: f32,
        max: f32,
    ) -> bool {
        let Some(ui) = self.current() else {
            return false;
        };
        ui.push_id(label, |ui| {
            ui.horizontal(|ui| {
                let upper_now = *upper;
                let mut changed = ui.add(egui::DragValue::new(lower).speed(speed).range(min..=upper_now)).changed();
                let lower_now = *lower;
                changed |= ui.add(egui::DragValue::new(upper).speed(speed).range(lower_now..=max)).changed();
                ui.label(label);
                changed
            })
            .inner
        })
        .inner
    }

    fn text(&mut self, text: &str) {
        if let Some(ui) = self.current() {
            ui.label(text);
        }
    }

    fn image(&mut self, texture: TextureId, size: Vec2) {
        if let Some(ui) = self.current() {
            let sized = egui::load::SizedTexture::new(egui::TextureId::User(texture.0), egui::vec2(size.x, size.y));
            ui.add(egui::Image::from_texture(sized));
        }
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.ctx.pointer_latest_pos().map(|pos| Vec2::new(pos.x, pos.y))
    }
}
