//! Orbit camera
//!
//! The camera orbits a fixed look-at target on a sphere described by yaw,
//! pitch and radius (azimuth/altitude coordinates). Mouse deltas accumulate
//! into raw yaw/pitch counters that are converted to radians on use; the
//! effective pitch is clamped short of the poles so the view never flips
//! over the top. Scroll adjusts the field of view inside a fixed range, the
//! focus key restores the default view, and the arrow keys step the yaw in
//! 45-degree increments.
//!
//! Whether the camera is orbiting is re-evaluated once per frame from the
//! pressed-input state rather than inside the cursor handler, so a mode
//! change takes effect on the following frame.

use glfw::{Key, MouseButton};

use crate::foundation::math::{constants, utils, Mat4, Mat4Ext, Vec3};
use crate::input::InputState;

/// Lower field-of-view bound in degrees
pub const FOV_MIN_DEG: f32 = 1.0;

/// Upper field-of-view bound in degrees
pub const FOV_MAX_DEG: f32 = 55.0;

/// Near clipping plane
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane
pub const FAR_PLANE: f32 = 100.0;

// Keep the effective pitch this many radians away from straight up/down
const PITCH_EPSILON: f32 = 0.1;

// Degrees of field of view removed per scroll unit
const ZOOM_RATE: f32 = 0.01;

// Raw-yaw units applied by one arrow-key rotation step
const ROTATION_STEP: f32 = 45.0;

/// Direction of a discrete yaw step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Step the camera 45 degrees counterclockwise (as seen from above)
    Left,
    /// Step the camera 45 degrees clockwise
    Right,
}

/// Camera state for orbiting a fixed target.
///
/// Constructed once at startup with the default view and mutated by input
/// for the life of the process. The right/up axes are re-derived orthonormal
/// to the viewing direction and world-up whenever the position changes.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Orbit center and look-at point
    pub target: Vec3,
    world_up: Vec3,
    direction: Vec3,
    right: Vec3,
    up: Vec3,
    front: Vec3,
    fov_deg: f32,
    radius: f32,
    raw_yaw: f32,
    raw_pitch: f32,
    orbiting: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Create the default view: three units back along +Z, looking at the
    /// origin
    pub fn new() -> Self {
        let position = Vec3::new(0.0, 0.0, 3.0);
        let target = Vec3::zeros();
        let world_up = Vec3::new(0.0, 1.0, 0.0);
        let direction = (position - target).normalize();
        let right = world_up.cross(&direction).normalize();
        let up = direction.cross(&right).normalize();
        Self {
            position,
            target,
            world_up,
            direction,
            right,
            up,
            front: Vec3::new(0.0, 0.0, -1.0),
            fov_deg: 45.0,
            radius: 3.0,
            raw_yaw: 0.0,
            raw_pitch: 0.0,
            orbiting: false,
        }
    }

    /// Apply a cursor delta while orbiting; a no-op otherwise.
    ///
    /// Deltas accumulate in raw mouse units. The raw pitch accumulator is
    /// unbounded; only its radian conversion is clamped, matching the
    /// accumulate-then-clamp behavior the controls were tuned against.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        if !self.orbiting {
            return;
        }
        self.raw_yaw += dx;
        self.raw_pitch += dy;
        self.reposition_on_sphere();
    }

    /// Adjust the field of view from a scroll offset, staying in
    /// `[FOV_MIN_DEG, FOV_MAX_DEG]`
    pub fn zoom(&mut self, yoffset: f32) {
        if (FOV_MIN_DEG..=FOV_MAX_DEG).contains(&self.fov_deg) {
            self.fov_deg -= yoffset * ZOOM_RATE;
        }
        self.fov_deg = utils::clamp(self.fov_deg, FOV_MIN_DEG, FOV_MAX_DEG);
    }

    /// Restore the default view.
    ///
    /// Position returns to (0, 0, 3) and the axes are re-derived from
    /// world-up. The raw yaw/pitch accumulators are left alone: the next
    /// orbit drag resumes from the accumulated angles.
    pub fn reset(&mut self) {
        self.position = Vec3::new(0.0, 0.0, 3.0);
        self.rederive_axes();
        self.front = Vec3::new(0.0, 0.0, -1.0);
    }

    /// Apply one discrete 45-degree yaw step and recompute the position
    pub fn step_rotation(&mut self, step: StepDirection) {
        match step {
            StepDirection::Left => self.raw_yaw -= ROTATION_STEP,
            StepDirection::Right => self.raw_yaw += ROTATION_STEP,
        }
        self.reposition_on_sphere();
    }

    /// Re-evaluate orbit/focus/step state from the pressed-input snapshot.
    ///
    /// Called once per loop iteration, after event processing, so the mode
    /// chosen here governs the next frame.
    pub fn transform_camera(&mut self, input: &InputState) {
        let orbiting =
            input.key_held(Key::LeftAlt) && input.button_held(MouseButton::Button1);
        if orbiting != self.orbiting {
            log::trace!(
                "camera {} orbit mode",
                if orbiting { "entered" } else { "left" }
            );
        }
        self.orbiting = orbiting;

        if input.key_held(Key::F) {
            self.reset();
        } else if input.key_held(Key::Right) {
            self.step_rotation(StepDirection::Right);
        } else if input.key_held(Key::Left) {
            self.step_rotation(StepDirection::Left);
        }
    }

    /// Look-at matrix from the current position to the target.
    ///
    /// Pure function of the current state; callable any number of times per
    /// frame.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.world_up)
    }

    /// Perspective projection from the current field of view and the given
    /// aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(utils::deg_to_rad(self.fov_deg), aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Current field of view in degrees
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    /// Orbit sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulated yaw in raw mouse units
    pub fn raw_yaw(&self) -> f32 {
        self.raw_yaw
    }

    /// Accumulated pitch in raw mouse units
    pub fn raw_pitch(&self) -> f32 {
        self.raw_pitch
    }

    /// Effective (clamped) pitch in radians
    pub fn pitch(&self) -> f32 {
        utils::clamp(
            utils::deg_to_rad(self.raw_pitch),
            -constants::HALF_PI + PITCH_EPSILON,
            constants::HALF_PI - PITCH_EPSILON,
        )
    }

    /// Yaw in radians
    pub fn yaw(&self) -> f32 {
        utils::deg_to_rad(self.raw_yaw)
    }

    /// Whether orbit mode was active at the last [`Self::transform_camera`]
    pub fn is_orbiting(&self) -> bool {
        self.orbiting
    }

    /// Normalized direction from the target to the camera
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Camera-space right axis, orthonormal to direction and world-up
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Camera-space up axis
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Front vector (fixed -Z default view direction)
    pub fn front(&self) -> Vec3 {
        self.front
    }

    // Azimuth/altitude formula: place the camera on the orbit sphere from
    // the current yaw/pitch, then re-derive the orientation axes.
    fn reposition_on_sphere(&mut self) {
        let yaw = self.yaw();
        let pitch = self.pitch();
        self.position = Vec3::new(
            self.target.x + self.radius * pitch.cos() * yaw.sin(),
            self.target.y + self.radius * pitch.sin(),
            self.target.z + self.radius * pitch.cos() * yaw.cos(),
        );
        self.rederive_axes();
    }

    fn rederive_axes(&mut self) {
        self.direction = (self.position - self.target).normalize();
        self.right = self.world_up.cross(&self.direction).normalize();
        self.up = self.direction.cross(&self.right).normalize();
    }
}
