use glam::{Mat4, Quat, Vec2, Vec3};

const DEFAULT_UP: Vec3 = Vec3::Y;
/// Key code that switches an [`EasyCam`] drag from orbiting to panning (`'m'`).
pub const DEFAULT_TRANSLATION_KEY: i32 = b'm' as i32;

/// Anything placed in the scene by a local transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub transform: Mat4,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self { transform: Mat4::IDENTITY }
    }
}

impl SceneNode {
    pub fn from_position(position: Vec3) -> Self {
        Self { transform: Mat4::from_translation(position) }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.w_axis = position.extend(1.0);
    }

    pub fn orientation(&self) -> Quat {
        let (_, rotation, _) = self.transform.to_scale_rotation_translation();
        rotation
    }

    /// Keeps the position and turns the node so -Z points at `target`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let position = self.position();
        if position.distance_squared(target) <= f32::EPSILON {
            return;
        }
        self.transform = Mat4::look_at_rh(position, target, up).inverse();
    }
}

/// Perspective or orthographic camera carried by a [`SceneNode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub node: SceneNode,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub lens_offset: Vec2,
    pub aspect_ratio: f32,
    /// Use `aspect_ratio` instead of the viewport's.
    pub force_aspect_ratio: bool,
    pub ortho: bool,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            node: SceneNode::default(),
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 10_000.0,
            lens_offset: Vec2::ZERO,
            aspect_ratio: 4.0 / 3.0,
            force_aspect_ratio: false,
            ortho: false,
        }
    }
}

impl Camera3D {
    pub fn new(position: Vec3, target: Vec3, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        let mut node = SceneNode::from_position(position);
        node.look_at(target, DEFAULT_UP);
        Self { node, fov_y_degrees, near, far, ..Self::default() }
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.node.transform.inverse()
    }

    pub fn effective_aspect(&self, viewport_aspect: f32) -> f32 {
        if self.force_aspect_ratio {
            self.aspect_ratio
        } else {
            viewport_aspect
        }
    }

    /// Orthographic cameras map one world unit to one pixel of `viewport`.
    pub fn projection_matrix(&self, viewport: Vec2) -> Mat4 {
        let viewport_aspect = if viewport.y > 0.0 { viewport.x / viewport.y } else { 1.0 };
        let aspect = self.effective_aspect(viewport_aspect).max(0.0001);
        let projection = if self.ortho {
            let half = Vec2::new(viewport.y * aspect, viewport.y) * 0.5;
            Mat4::orthographic_rh_gl(-half.x, half.x, -half.y, half.y, self.near, self.far)
        } else {
            Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
        };
        Mat4::from_translation(self.lens_offset.extend(0.0)) * projection
    }

    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        self.projection_matrix(viewport) * self.view_matrix()
    }
}

/// Mouse-driven camera orbiting a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct EasyCam {
    pub camera: Camera3D,
    target: Vec3,
    distance: f32,
    /// Inertia damping, 0 stops immediately and 1 never stops.
    pub drag: f32,
    pub mouse_input: bool,
    pub mouse_middle_button: bool,
    pub translation_key: i32,
    pub relative_y_axis: bool,
    pub up_axis: Vec3,
    pub inertia: bool,
    /// Recompute the distance from the viewport each frame.
    pub auto_distance: bool,
}

impl Default for EasyCam {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 10.0)
    }
}

impl EasyCam {
    pub fn new(target: Vec3, distance: f32) -> Self {
        let distance = distance.max(0.01);
        let camera = Camera3D {
            node: SceneNode::from_position(target + Vec3::Z * distance),
            ..Camera3D::default()
        };
        Self {
            camera,
            target,
            distance,
            drag: 0.9,
            mouse_input: true,
            mouse_middle_button: true,
            translation_key: DEFAULT_TRANSLATION_KEY,
            relative_y_axis: false,
            up_axis: DEFAULT_UP,
            inertia: true,
            auto_distance: true,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.camera.node.look_at(target, self.up_axis);
    }

    /// Moves the camera along its current line of sight to `distance` from the target.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(0.01);
        let offset = self.camera.node.position() - self.target;
        let direction = offset.try_normalize().unwrap_or(Vec3::Z);
        self.camera.node.set_position(self.target + direction * self.distance);
        self.camera.node.look_at(self.target, self.up_axis);
    }

    /// Rotates around the target by yaw (`delta.x`) and pitch (`delta.y`) radians.
    pub fn orbit(&mut self, delta: Vec2) {
        let offset = self.camera.node.position() - self.target;
        let yaw = Quat::from_axis_angle(self.up_axis, delta.x);
        let right = offset.cross(self.up_axis).try_normalize().unwrap_or(Vec3::X);
        let pitched = Quat::from_axis_angle(right, delta.y) * (yaw * offset);
        let limit = 0.999;
        let offset = if pitched.normalize().dot(self.up_axis).abs() < limit { pitched } else { yaw * offset };
        self.camera.node.set_position(self.target + offset);
        self.camera.node.look_at(self.target, self.up_axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_view_projection_is_finite() {
        let camera = Camera3D::new(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO, 60.0, 0.1, 1000.0);
        let vp = camera.view_projection(Vec2::new(1280.0, 720.0));
        assert!(!vp.to_cols_array().iter().any(|v| v.is_nan() || v.is_infinite()));
    }

    #[test]
    fn forced_aspect_overrides_viewport() {
        let mut camera = Camera3D::default();
        assert_eq!(camera.effective_aspect(2.0), 2.0);
        camera.force_aspect_ratio = true;
        camera.aspect_ratio = 1.5;
        assert_eq!(camera.effective_aspect(2.0), 1.5);
    }

    #[test]
    fn set_distance_keeps_direction_to_target() {
        let mut cam = EasyCam::new(Vec3::ZERO, 5.0);
        cam.set_distance(12.0);
        assert!((cam.camera.node.position() - Vec3::new(0.0, 0.0, 12.0)).length() < 1e-4);
    }

    #[test]
    fn easy_cam_orbits_at_constant_distance() {
        let mut cam = EasyCam::new(Vec3::new(1.0, 0.0, 0.0), 5.0);
        cam.orbit(Vec2::new(0.5, 0.25));
        let distance = cam.camera.node.position().distance(cam.target());
        assert!((distance - 5.0).abs() < 1e-3);
    }

    #[test]
    fn look_at_points_negative_z_at_target() {
        let mut node = SceneNode::from_position(Vec3::new(0.0, 0.0, 5.0));
        node.look_at(Vec3::ZERO, Vec3::Y);
        let forward = node.orientation() * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }
}
