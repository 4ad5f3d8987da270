use glam::{IVec2, IVec3, IVec4, Mat4, Vec2, Vec3, Vec4};
use std::fmt;

/// Failure to turn a stored string back into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("expected {expected} components, found {found} in '{text}'")]
    Arity { expected: usize, found: usize, text: String },
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("invalid boolean '{0}'")]
    Bool(String),
}

/// RGBA color with floating point channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}

/// String form used inside preset documents.
///
/// Vector-like values are written as comma separated components
/// (`"1, -2.5, 0"`); parsing also accepts whitespace as a separator.
pub trait ValueText: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Result<Self, ValueError>;
}

fn components(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace()).filter(|part| !part.is_empty()).collect()
}

fn parse_f32(part: &str) -> Result<f32, ValueError> {
    part.parse::<f32>().map_err(|_| ValueError::Number(part.to_string()))
}

fn parse_i32(part: &str) -> Result<i32, ValueError> {
    part.parse::<i32>().map_err(|_| ValueError::Number(part.to_string()))
}

fn parse_array<const N: usize, T: Copy + Default>(
    text: &str,
    parse: fn(&str) -> Result<T, ValueError>,
) -> Result<[T; N], ValueError> {
    let parts = components(text);
    if parts.len() != N {
        return Err(ValueError::Arity { expected: N, found: parts.len(), text: text.to_string() });
    }
    let mut out = [T::default(); N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse(part)?;
    }
    Ok(out)
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl ValueText for bool {
    fn to_text(&self) -> String {
        let text = if *self { "1" } else { "0" };
        text.to_string()
    }

    fn from_text(text: &str) -> Result<Self, ValueError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(true),
            "0" | "false" | "off" | "no" => Ok(false),
            other => Err(ValueError::Bool(other.to_string())),
        }
    }
}

impl ValueText for i32 {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, ValueError> {
        parse_i32(text.trim())
    }
}

impl ValueText for f32 {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, ValueError> {
        parse_f32(text.trim())
    }
}

impl ValueText for String {
    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.to_string())
    }
}

macro_rules! vector_text {
    ($ty:ty, $n:literal, $parse:ident) => {
        impl ValueText for $ty {
            fn to_text(&self) -> String {
                join(&self.to_array())
            }

            fn from_text(text: &str) -> Result<Self, ValueError> {
                parse_array::<$n, _>(text, $parse).map(<$ty>::from_array)
            }
        }
    };
}

vector_text!(Vec2, 2, parse_f32);
vector_text!(Vec3, 3, parse_f32);
vector_text!(Vec4, 4, parse_f32);
vector_text!(IVec2, 2, parse_i32);
vector_text!(IVec3, 3, parse_i32);
vector_text!(IVec4, 4, parse_i32);
vector_text!(Color, 4, parse_f32);

/// Matrices are written one row per line so the text reads like the matrix.
impl ValueText for Mat4 {
    fn to_text(&self) -> String {
        (0..4).map(|row| join(&self.row(row).to_array())).collect::<Vec<_>>().join("\n")
    }

    fn from_text(text: &str) -> Result<Self, ValueError> {
        let rows = parse_array::<16, _>(text, parse_f32)?;
        Ok(Mat4::from_cols_array(&rows).transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_use_comma_separated_components() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_text(), "1, -2.5, 0");
        assert_eq!(IVec2::new(-4, 7).to_text(), "-4, 7");
        assert_eq!(Vec3::from_text("1, -2.5, 0").unwrap(), Vec3::new(1.0, -2.5, 0.0));
        assert_eq!(Vec2::from_text("  3 4 ").unwrap(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn float_text_round_trips_exactly() {
        for value in [0.0_f32, -0.1, 1.0 / 3.0, f32::MAX, f32::MIN_POSITIVE] {
            assert_eq!(f32::from_text(&value.to_text()).unwrap(), value);
        }
    }

    #[test]
    fn bool_accepts_common_spellings() {
        assert_eq!(true.to_text(), "1");
        assert!(bool::from_text("true").unwrap());
        assert!(!bool::from_text("Off").unwrap());
        assert_eq!(bool::from_text("maybe"), Err(ValueError::Bool("maybe".to_string())));
    }

    #[test]
    fn wrong_component_count_is_reported() {
        let err = Vec4::from_text("1, 2").unwrap_err();
        assert!(matches!(err, ValueError::Arity { expected: 4, found: 2, .. }));
        assert_eq!(IVec3::from_text("1, x, 3"), Err(ValueError::Number("x".to_string())));
    }

    #[test]
    fn matrix_text_is_row_major() {
        let m = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
        let text = m.to_text();
        let first_row = text.lines().next().unwrap();
        assert_eq!(first_row, "1, 0, 0, 5");
        assert_eq!(Mat4::from_text(&text).unwrap(), m);
    }

    #[test]
    fn color_round_trips() {
        let color = Color::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(color.to_text(), "0.25, 0.5, 0.75, 1");
        assert_eq!(Color::from_text(&color.to_text()).unwrap(), color);
    }
}
