use super::UiBackend;
use crate::config::GuiConfig;
use crate::param::ParamValue;
use crate::value::Color;
use glam::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};
use std::slice;

/// Value types with a default editing control.
///
/// Vector sliders share one range taken from the x components of the bounds.
/// Colors show an alpha channel when `config.color_alpha` is set.
pub trait Widget: ParamValue {
    fn draw<B: UiBackend + ?Sized>(
        ui: &mut B,
        label: &str,
        value: &mut Self,
        min: &Self,
        max: &Self,
        config: &GuiConfig,
    ) -> bool;
}

impl Widget for bool {
    fn draw<B: UiBackend + ?Sized>(
        ui: &mut B,
        label: &str,
        value: &mut Self,
        _min: &Self,
        _max: &Self,
        _config: &GuiConfig,
    ) -> bool {
        ui.checkbox(label, value)
    }
}

impl Widget for i32 {
    fn draw<B: UiBackend + ?Sized>(
        ui: &mut B,
        label: &str,
        value: &mut Self,
        min: &Self,
        max: &Self,
        _config: &GuiConfig,
    ) -> bool {
        ui.slider_int(label, slice::from_mut(value), *min, *max)
    }
}

impl Widget for f32 {
    fn draw<B: UiBackend + ?Sized>(
        ui: &mut B,
        label: &str,
        value: &mut Self,
        min: &Self,
        max: &Self,
        _config: &GuiConfig,
    ) -> bool {
        ui.slider_float(label, slice::from_mut(value), *min, *max)
    }
}

impl Widget for Color {
    fn draw<B: UiBackend + ?Sized>(
        ui: &mut B,
        label: &str,
        value: &mut Self,
        _min: &Self,
        _max: &Self,
        config: &GuiConfig,
    ) -> bool {
        let mut rgba = value.to_array();
        if ui.color_edit(label, &mut rgba, config.color_alpha) {
            *value = Color::from_array(rgba);
            return true;
        }
        false
    }
}

macro_rules! vector_widget {
    ($ty:ty, $slider:ident) => {
        impl Widget for $ty {
            fn draw<B: UiBackend + ?Sized>(
                ui: &mut B,
                label: &str,
                value: &mut Self,
                min: &Self,
                max: &Self,
                _config: &GuiConfig,
            ) -> bool {
                let mut components = value.to_array();
                if ui.$slider(label, &mut components, min.x, max.x) {
                    *value = <$ty>::from_array(components);
                    return true;
                }
                false
            }
        }
    };
}

vector_widget!(Vec2, slider_float);
vector_widget!(Vec3, slider_float);
vector_widget!(Vec4, slider_float);
vector_widget!(IVec2, slider_int);
vector_widget!(IVec3, slider_int);
vector_widget!(IVec4, slider_int);
