use glam::{Mat4, Vec3};

/// Default orientation faces -Z (yaw is measured from +X toward +Z).
const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_PITCH: f32 = 0.0;
const DEFAULT_SPEED: f32 = 2.5;
const DEFAULT_SENSITIVITY: f32 = 0.1;
const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is kept strictly inside (-90, 90) so the up vector never flips.
const PITCH_LIMIT: f32 = 89.0;

/// Zoom (vertical field of view) bounds, in degrees.
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Movement directions relative to the camera basis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Fly camera: an accumulator over discrete input deltas.
///
/// Orientation is stored as yaw/pitch in degrees; the orthonormal
/// front/right/up basis is recomputed against a fixed world up whenever the
/// angles change, so it is always normalized and mutually orthogonal.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub speed: f32,
    pub sensitivity: f32,

    yaw: f32,
    pitch: f32,
    zoom: f32,

    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        let mut cam = Self {
            position,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
        };
        cam.update_basis();
        cam
    }

    /// Moves the camera along its front/right basis, scaled by `speed * dt`.
    pub fn process_keyboard(&mut self, movement: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a mouse-look delta in pixels (+y = up).
    ///
    /// Offsets are scaled by sensitivity; pitch is clamped to avoid the
    /// gimbal-lock flip at straight up/down.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Applies a scroll delta in lines; scrolling up narrows the fov.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Look-at transform from `position` toward `position + front`.
    ///
    /// Pure function of current state; callable any number of times per frame.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection from the current zoom and the given aspect.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current vertical field of view, in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    // ── basis ─────────────────────────────────────────────────────────────

    #[test]
    fn basis_is_orthonormal_over_the_angle_range() {
        let mut cam = FlyCamera::default();
        for yaw_step in 0..12 {
            for pitch_step in -8..=8 {
                // Drive angles through mouse movement so clamping applies.
                let yaw = yaw_step as f32 * 30.0;
                let pitch = pitch_step as f32 * 10.0;
                cam.process_mouse_movement(
                    (yaw - cam.yaw()) / cam.sensitivity,
                    (pitch - cam.pitch()) / cam.sensitivity,
                );

                assert!((cam.front().length() - 1.0).abs() < EPS);
                assert!(cam.front().dot(cam.right()).abs() < EPS);
                assert!(cam.front().dot(cam.up()).abs() < EPS);
                assert!(cam.right().dot(cam.up()).abs() < EPS);
            }
        }
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let cam = FlyCamera::default();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn pitch_is_clamped_inside_ninety_degrees() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 100000.0);
        assert!(cam.pitch() <= 89.0);
        cam.process_mouse_movement(0.0, -200000.0);
        assert!(cam.pitch() >= -89.0);
        // Up never flips below the horizon.
        assert!(cam.up().y > 0.0);
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn forward_moves_by_speed_times_dt_along_front() {
        let mut cam = FlyCamera::default();
        cam.speed = 2.5;
        let before = cam.position;
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        let expected = before + cam.front() * 2.5;
        assert!(cam.position.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn left_and_right_cancel() {
        let mut cam = FlyCamera::default();
        let before = cam.position;
        cam.process_keyboard(CameraMovement::Left, 0.5);
        cam.process_keyboard(CameraMovement::Right, 0.5);
        assert!(cam.position.abs_diff_eq(before, EPS));
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_never_leaves_its_bounds() {
        let mut cam = FlyCamera::default();
        for _ in 0..100 {
            cam.process_mouse_scroll(3.0);
        }
        assert_eq!(cam.zoom(), 1.0);
        for _ in 0..100 {
            cam.process_mouse_scroll(-3.0);
        }
        assert_eq!(cam.zoom(), 45.0);
    }

    // ── matrices ──────────────────────────────────────────────────────────

    #[test]
    fn view_matrix_matches_look_at_from_origin() {
        // yaw -90, pitch 0 at the origin looks down -Z with +Y up.
        let cam = FlyCamera::default();
        let expected = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn projection_uses_current_zoom() {
        let mut cam = FlyCamera::default();
        let wide = cam.projection_matrix(800.0 / 600.0);
        cam.process_mouse_scroll(20.0); // zoom in to 25 degrees
        let narrow = cam.projection_matrix(800.0 / 600.0);
        // Narrower fov means larger focal scale on the y axis.
        assert!(narrow.col(1).y > wide.col(1).y);
    }
}
