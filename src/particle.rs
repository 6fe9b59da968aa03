// Simple particle struct to keep track of individual position, velocity, radius, and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniform over the surface, velocity in [-max_speed/2, max_speed/2] per axis,
    // coin flip between the two palette entries
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * config.max_speed;
        let radius = rng.gen::<f64>() * config.radius_spread + config.min_radius;
        let color = if rng.gen::<f64>() > 0.5 {
            config.palette[0]
        } else {
            config.palette[1]
        };
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // One frame of travel, unscaled by elapsed time. The bounds check runs after
    // the move and only flips the velocity, so an escaped particle overshoots by
    // up to one step and is carried back by the following frames.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(&glm::vec2(self.pos[0], self.pos[1]), &glm::vec2(other.pos[0], other.pos[1]))
    }
}
