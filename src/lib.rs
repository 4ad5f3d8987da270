pub mod camera3d;
pub mod config;
pub mod group;
pub mod gui;
pub mod param;
pub mod preset;
pub mod serializer;
pub mod traverse;
pub mod value;

pub use camera3d::{Camera3D, EasyCam, SceneNode};
pub use config::GuiConfig;
pub use group::{Node, ParameterGroup};
pub use gui::{GuiContext, GuiSettings, UiBackend};
pub use param::{Param, ParamKind, ParamValue, Parameter};
pub use preset::{load_preset, load_preset_or_keep, save_preset};
pub use value::{Color, ValueError, ValueText};
