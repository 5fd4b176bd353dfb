//! The hierarchical body tree behind the solar system study.
//!
//! Each body carries a local transform relative to its parent plus two
//! animation angles: a spin about its own Y axis and a revolution about the
//! parent's Z axis. World transforms are recomputed top-down each frame, so
//! a child revolves around wherever its parent currently sits.

use instant::Duration;

use cgmath::{Deg, Quaternion, Rotation3};

use crate::data_structures::transform::Transform;

/// The shrink every body gets at draw time, applied about its own origin.
const DRAW_SCALE: f32 = 0.5;

/// A celestial body in the orbit hierarchy.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub fill_colour: [f32; 4],
    pub local: Transform,
    /// Self-rotation about the body's own Y axis, in degrees per second.
    pub spin_rate: Deg<f32>,
    /// Revolution about the parent's Z axis, in degrees per second.
    pub orbit_rate: Deg<f32>,
    spin: Deg<f32>,
    orbit: Deg<f32>,
    world: Transform,
    pub children: Vec<Body>,
}

impl Body {
    pub fn new(name: &str, fill_colour: [f32; 4], local: Transform) -> Self {
        Self {
            name: name.to_string(),
            fill_colour,
            world: local.clone(),
            local,
            spin_rate: Deg(0.0),
            orbit_rate: Deg(0.0),
            spin: Deg(0.0),
            orbit: Deg(0.0),
            children: Vec::new(),
        }
    }

    pub fn with_rates(mut self, spin_rate: Deg<f32>, orbit_rate: Deg<f32>) -> Self {
        self.spin_rate = spin_rate;
        self.orbit_rate = orbit_rate;
        self
    }

    pub fn add_child(&mut self, child: Body) {
        self.children.push(child);
    }

    /// Advance the spin and revolution angles of the whole subtree.
    pub fn advance(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.spin += Deg(self.spin_rate.0 * secs);
        self.orbit += Deg(self.orbit_rate.0 * secs);
        for child in &mut self.children {
            child.advance(dt);
        }
    }

    /// Recompute the cached world transforms top-down.
    ///
    /// The revolution rotates the local offset around the parent's origin,
    /// so the propagated world transform already contains it; children of a
    /// revolving body follow it around. Spin and the draw-time shrink are
    /// cosmetic and stay out of the propagated transform.
    pub fn update_world_transforms(&mut self, parent_world: &Transform) {
        let revolution = Transform {
            rotation: Quaternion::from_angle_z(self.orbit),
            ..Transform::new()
        };
        self.world = parent_world * &(revolution * self.local.clone());
        for child in &mut self.children {
            child.update_world_transforms(&self.world);
        }
    }

    pub fn world_transform(&self) -> &Transform {
        &self.world
    }

    /// The transform the body is actually drawn with: its world transform
    /// with the current spin and the uniform shrink applied about its own
    /// origin.
    pub fn draw_transform(&self) -> Transform {
        let spin = Transform {
            rotation: Quaternion::from_angle_y(self.spin),
            ..Transform::new()
        }
        .with_uniform_scale(DRAW_SCALE);
        &self.world * &spin
    }

    /// Visit the body and all descendants depth-first.
    pub fn visit(&self, f: &mut dyn FnMut(&Body)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Number of bodies in the subtree, the root included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Body::count).sum::<usize>()
    }
}

/// The sun/earth/mars setup of the solar system study.
///
/// The sun carries the overall 0.125 scale so the children inherit it; earth
/// and mars sit at increasing offsets with earth revolving four times as
/// fast as mars.
pub fn solar_system() -> Body {
    let mut sun = Body::new(
        "sun",
        [1.0, 1.0, 0.0, 1.0],
        Transform::new().with_uniform_scale(0.125),
    );
    sun.add_child(
        Body::new(
            "earth",
            [0.0, 0.0, 1.0, 1.0],
            Transform::from_position(2.0, 0.0, 0.0),
        )
        .with_rates(Deg(60.0), Deg(60.0)),
    );
    sun.add_child(
        Body::new(
            "mars",
            [1.0, 0.0, 0.0, 1.0],
            Transform::from_position(5.0, 0.0, 0.0),
        )
        .with_rates(Deg(60.0), Deg(15.0)),
    );
    sun
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn assert_vec3_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
        let delta = actual - expected;
        assert!(
            delta.x.abs() < 1e-4 && delta.y.abs() < 1e-4 && delta.z.abs() < 1e-4,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn solar_system_has_three_bodies() {
        let sun = solar_system();
        assert_eq!(sun.count(), 3);
        let mut names = Vec::new();
        sun.visit(&mut |body| names.push(body.name.clone()));
        assert_eq!(names, ["sun", "earth", "mars"]);
    }

    #[test]
    fn children_inherit_the_suns_scale() {
        let mut sun = solar_system();
        sun.update_world_transforms(&Transform::new());

        let earth = &sun.children[0];
        assert_vec3_eq(earth.world_transform().position, Vector3::new(0.25, 0.0, 0.0));
        let mars = &sun.children[1];
        assert_vec3_eq(mars.world_transform().position, Vector3::new(0.625, 0.0, 0.0));
    }

    #[test]
    fn revolution_moves_a_body_around_its_parent() {
        let mut sun = solar_system();
        // Earth revolves at 60 deg/s, so 1.5 seconds puts it at 90 degrees.
        sun.advance(Duration::from_millis(1500));
        sun.update_world_transforms(&Transform::new());

        let earth = &sun.children[0];
        assert_vec3_eq(earth.world_transform().position, Vector3::new(0.0, 0.25, 0.0));
        // Mars at 15 deg/s has only covered 22.5 degrees and stays ahead on x.
        let mars = &sun.children[1];
        assert!(mars.world_transform().position.x > 0.5);
        assert!(mars.world_transform().position.y > 0.0);
    }

    #[test]
    fn spin_does_not_move_the_body() {
        let mut sun = solar_system();
        sun.children[0].orbit_rate = Deg(0.0);
        sun.advance(Duration::from_secs(3));
        sun.update_world_transforms(&Transform::new());

        let earth = &sun.children[0];
        let drawn = earth.draw_transform();
        assert_vec3_eq(drawn.position, earth.world_transform().position);
    }

    #[test]
    fn draw_transform_applies_the_half_shrink() {
        let mut sun = solar_system();
        sun.update_world_transforms(&Transform::new());

        let drawn = sun.draw_transform();
        assert_vec3_eq(drawn.scale, Vector3::new(0.0625, 0.0625, 0.0625));
    }

    #[test]
    fn a_moon_follows_its_revolving_parent() {
        let mut sun = Body::new("sun", [1.0, 1.0, 0.0, 1.0], Transform::new());
        let mut earth = Body::new(
            "earth",
            [0.0, 0.0, 1.0, 1.0],
            Transform::from_position(2.0, 0.0, 0.0),
        )
        .with_rates(Deg(0.0), Deg(90.0));
        earth.add_child(Body::new(
            "moon",
            [0.8, 0.8, 0.8, 1.0],
            Transform::from_position(1.0, 0.0, 0.0),
        ));
        sun.add_child(earth);

        sun.advance(Duration::from_secs(1));
        sun.update_world_transforms(&Transform::new());

        // After a quarter revolution the earth sits on +Y and the moon's
        // offset is rotated along with the earth's frame, so it ends up on
        // the far side of the earth from the sun.
        let earth = &sun.children[0];
        assert_vec3_eq(earth.world_transform().position, Vector3::new(0.0, 2.0, 0.0));
        let moon = &earth.children[0];
        assert_vec3_eq(moon.world_transform().position, Vector3::new(0.0, 3.0, 0.0));
    }
}
