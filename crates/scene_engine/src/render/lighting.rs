//! Fixed lighting rig
//!
//! Two positioned lights plus a base object color, uploaded to the model
//! shader as `lightPos[2]` / `lightColor[2]` array uniforms along with
//! `objectColor` and the camera's `viewPos`.

use crate::foundation::math::Vec3;
use crate::render::shader::ShaderProgram;

/// A single positional light
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// World-space position
    pub position: Vec3,
    /// Emitted color
    pub color: Vec3,
}

/// The scene's two-light rig and base material color
#[derive(Debug, Clone)]
pub struct LightingRig {
    /// Base color the textures modulate
    pub object_color: Vec3,
    /// Key light first; the lamp marker is drawn at its position
    pub lights: [Light; 2],
}

impl LightingRig {
    /// The chair scene's rig: warm wood-toned object color, a white key
    /// light above and in front, and a dim fill light from the left
    pub fn chair_default() -> Self {
        Self {
            object_color: Vec3::new(0.46, 0.36, 0.25),
            lights: [
                Light {
                    position: Vec3::new(0.0, 1.0, 1.0),
                    color: Vec3::new(1.0, 1.0, 1.0),
                },
                Light {
                    position: Vec3::new(-1.0, 0.0, 0.0),
                    color: Vec3::new(0.25, 0.25, 0.3),
                },
            ],
        }
    }

    /// Position of the key light (where the lamp markers are drawn)
    pub fn key_light_position(&self) -> Vec3 {
        self.lights[0].position
    }

    /// Push the rig into the model shader's uniforms
    pub fn apply(&self, gl: &glow::Context, shader: &mut ShaderProgram, view_position: Vec3) {
        let positions = [self.lights[0].position, self.lights[1].position];
        let colors = [self.lights[0].color, self.lights[1].color];
        shader.set_vec3(gl, "objectColor", self.object_color);
        shader.set_vec3_array(gl, "lightColor", &colors);
        shader.set_vec3_array(gl, "lightPos", &positions);
        shader.set_vec3(gl, "viewPos", view_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chair_rig_places_the_key_light_above_and_in_front() {
        let rig = LightingRig::chair_default();
        assert_eq!(rig.key_light_position(), Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(rig.lights[1].position, Vec3::new(-1.0, 0.0, 0.0));
    }
}
