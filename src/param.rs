use crate::value::{Color, ValueError, ValueText};
use glam::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};
use std::fmt;

/// Named, typed value cell with slider bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<T> {
    name: String,
    value: T,
    min: T,
    max: T,
    serializable: bool,
}

impl<T: ParamValue> Parameter<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        let (min, max) = T::default_range();
        Self { name: name.into(), value, min, max, serializable: true }
    }

    pub fn with_range(name: impl Into<String>, value: T, min: T, max: T) -> Self {
        Self { name: name.into(), value, min, max, serializable: true }
    }

    pub fn serializable(mut self, serializable: bool) -> Self {
        self.serializable = serializable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> T {
        self.value.clone()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn set_range(&mut self, min: T, max: T) {
        self.min = min;
        self.max = max;
    }

    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    pub fn set_serializable(&mut self, serializable: bool) {
        self.serializable = serializable;
    }

    pub fn to_text(&self) -> String {
        self.value.to_text()
    }

    /// Parses `text` and stores it; on error the current value is kept.
    pub fn set_from_text(&mut self, text: &str) -> Result<(), ValueError> {
        self.value = T::from_text(text)?;
        Ok(())
    }
}

/// Discriminant of [`Param`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    IVec2,
    IVec3,
    IVec4,
    Color,
    Text,
}

impl ParamKind {
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Bool => "bool",
            ParamKind::Int => "int",
            ParamKind::Float => "float",
            ParamKind::Vec2 => "vec2",
            ParamKind::Vec3 => "vec3",
            ParamKind::Vec4 => "vec4",
            ParamKind::IVec2 => "ivec2",
            ParamKind::IVec3 => "ivec3",
            ParamKind::IVec4 => "ivec4",
            ParamKind::Color => "color",
            ParamKind::Text => "text",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A leaf of a parameter tree. The variant is fixed when the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Bool(Parameter<bool>),
    Int(Parameter<i32>),
    Float(Parameter<f32>),
    Vec2(Parameter<Vec2>),
    Vec3(Parameter<Vec3>),
    Vec4(Parameter<Vec4>),
    IVec2(Parameter<IVec2>),
    IVec3(Parameter<IVec3>),
    IVec4(Parameter<IVec4>),
    Color(Parameter<Color>),
    Text(Parameter<String>),
}

macro_rules! each_param {
    ($param:expr, $p:ident => $body:expr) => {
        match $param {
            Param::Bool($p) => $body,
            Param::Int($p) => $body,
            Param::Float($p) => $body,
            Param::Vec2($p) => $body,
            Param::Vec3($p) => $body,
            Param::Vec4($p) => $body,
            Param::IVec2($p) => $body,
            Param::IVec3($p) => $body,
            Param::IVec4($p) => $body,
            Param::Color($p) => $body,
            Param::Text($p) => $body,
        }
    };
}

impl Param {
    pub fn name(&self) -> &str {
        each_param!(self, p => p.name())
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Bool(_) => ParamKind::Bool,
            Param::Int(_) => ParamKind::Int,
            Param::Float(_) => ParamKind::Float,
            Param::Vec2(_) => ParamKind::Vec2,
            Param::Vec3(_) => ParamKind::Vec3,
            Param::Vec4(_) => ParamKind::Vec4,
            Param::IVec2(_) => ParamKind::IVec2,
            Param::IVec3(_) => ParamKind::IVec3,
            Param::IVec4(_) => ParamKind::IVec4,
            Param::Color(_) => ParamKind::Color,
            Param::Text(_) => ParamKind::Text,
        }
    }

    pub fn is_serializable(&self) -> bool {
        each_param!(self, p => p.is_serializable())
    }

    pub fn to_text(&self) -> String {
        each_param!(self, p => p.to_text())
    }

    pub fn set_from_text(&mut self, text: &str) -> Result<(), ValueError> {
        each_param!(self, p => p.set_from_text(text))
    }
}

/// Value types that can live in a [`Param`].
pub trait ParamValue: ValueText + Clone + PartialEq + fmt::Debug {
    fn default_range() -> (Self, Self);
    fn into_param(parameter: Parameter<Self>) -> Param;
    fn from_param(param: &Param) -> Option<&Parameter<Self>>;
    fn from_param_mut(param: &mut Param) -> Option<&mut Parameter<Self>>;
}

macro_rules! param_value {
    ($ty:ty, $variant:ident, $min:expr, $max:expr) => {
        impl ParamValue for $ty {
            fn default_range() -> (Self, Self) {
                ($min, $max)
            }

            fn into_param(parameter: Parameter<Self>) -> Param {
                Param::$variant(parameter)
            }

            fn from_param(param: &Param) -> Option<&Parameter<Self>> {
                match param {
                    Param::$variant(p) => Some(p),
                    _ => None,
                }
            }

            fn from_param_mut(param: &mut Param) -> Option<&mut Parameter<Self>> {
                match param {
                    Param::$variant(p) => Some(p),
                    _ => None,
                }
            }
        }

        impl From<Parameter<$ty>> for Param {
            fn from(parameter: Parameter<$ty>) -> Self {
                Param::$variant(parameter)
            }
        }
    };
}

param_value!(bool, Bool, false, true);
param_value!(i32, Int, 0, 100);
param_value!(f32, Float, 0.0, 1.0);
param_value!(Vec2, Vec2, Vec2::ZERO, Vec2::ONE);
param_value!(Vec3, Vec3, Vec3::ZERO, Vec3::ONE);
param_value!(Vec4, Vec4, Vec4::ZERO, Vec4::ONE);
param_value!(IVec2, IVec2, IVec2::ZERO, IVec2::splat(100));
param_value!(IVec3, IVec3, IVec3::ZERO, IVec3::splat(100));
param_value!(IVec4, IVec4, IVec4::ZERO, IVec4::splat(100));
param_value!(Color, Color, Color::new(0.0, 0.0, 0.0, 0.0), Color::new(1.0, 1.0, 1.0, 1.0));
param_value!(String, Text, String::new(), String::new());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_parameter_uses_type_default_range() {
        let p = Parameter::new("speed", 0.5_f32);
        assert_eq!((*p.min(), *p.max()), (0.0, 1.0));
        assert!(p.is_serializable());
        let v = Parameter::new("cells", IVec2::new(3, 4));
        assert_eq!(*v.max(), IVec2::splat(100));
    }

    #[test]
    fn failed_text_parse_keeps_value() {
        let mut p = Parameter::new("offset", Vec2::new(1.0, 2.0));
        assert!(p.set_from_text("nope").is_err());
        assert_eq!(p.get(), Vec2::new(1.0, 2.0));
        p.set_from_text("3, 4").expect("valid vec2");
        assert_eq!(p.get(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn param_downcasts_only_to_its_own_type() {
        let mut param: Param = Parameter::new("count", 7_i32).into();
        assert_eq!(param.kind(), ParamKind::Int);
        assert!(f32::from_param(&param).is_none());
        i32::from_param_mut(&mut param).expect("int param").set(9);
        assert_eq!(param.to_text(), "9");
        assert_eq!(param.name(), "count");
    }
}
