//! Ambient particle field.
//!
//! A fixed population of slow drifting dots bouncing inside the surface, with
//! faint lines between every pair closer than the link distance. Motion is one
//! velocity step per frame, so speed follows the host's refresh rate.
//!
//! Links are found by testing every unordered pair each frame (n·(n-1)/2
//! distance checks, 3160 at the default 80 particles). That is fine for a
//! population this small; raising `particle_count` much past
//! [`PAIRWISE_COMFORT_LIMIT`] needs a spatial index instead.

use crate::config::{FieldConfig, PAIRWISE_COMFORT_LIMIT};
use crate::error::FieldError;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use tracing::{debug, trace};

/// A line to draw between particles `a` and `b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

/// Stroke alpha for a link of the given length, `None` at or past the cutoff.
pub fn link_opacity(distance: f64, config: &FieldConfig) -> Option<f64> {
    if distance < config.link_distance {
        Some(config.link_opacity * (1.0 - distance / config.link_distance))
    } else {
        None
    }
}

/// Every unordered pair within link distance, each pair tested once.
pub fn links<'a>(particles: &'a [Particle], config: &'a FieldConfig) -> impl Iterator<Item = Link> + 'a {
    particles.iter().enumerate().flat_map(move |(i, p)| {
        particles[i + 1..].iter().enumerate().filter_map(move |(offset, other)| {
            link_opacity(p.distance_to(other), config).map(|opacity| Link {
                a: i,
                b: i + 1 + offset,
                opacity,
            })
        })
    })
}

pub struct ParticleField<S: Surface> {
    config: FieldConfig,
    surface: Option<S>,
    particles: Vec<Particle>,
}

impl<S: Surface> ParticleField<S> {
    pub fn new(config: FieldConfig) -> Self {
        if config.particle_count > PAIRWISE_COMFORT_LIMIT {
            debug!(
                particle_count = config.particle_count,
                "particle count above pairwise comfort limit, link pass is O(n^2)"
            );
        }
        ParticleField {
            config,
            surface: None,
            particles: Vec::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Sizes the surface to the viewport and seeds the population once.
    /// Without a surface nothing is initialized and the field stays empty.
    pub fn attach<R: Rng + ?Sized>(
        &mut self,
        surface: Option<S>,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<(), FieldError> {
        let mut surface = surface.ok_or(FieldError::SurfaceUnavailable)?;
        self.detach();
        surface.set_size(width, height);

        self.particles.reserve(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            self.particles.push(Particle::random(rng, width, height, &self.config));
        }
        self.surface = Some(surface);
        debug!(width, height, particles = self.particles.len(), "particle field attached");
        Ok(())
    }

    /// Attach with a population chosen by the caller instead of a random one.
    pub fn attach_with(&mut self, mut surface: S, width: f64, height: f64, particles: Vec<Particle>) {
        self.detach();
        surface.set_size(width, height);
        self.particles = particles;
        self.surface = Some(surface);
    }

    /// Drops the population and hands the surface back.
    pub fn detach(&mut self) -> Option<S> {
        self.particles.clear();
        let surface = self.surface.take();
        if surface.is_some() {
            debug!("particle field detached");
        }
        surface
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// New viewport size. Particles are left where they are, even if that is
    /// now outside the surface; their own motion brings them back.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(width, height);
            debug!(width, height, "particle field resized");
        }
    }

    /// One animation step: clear, move, draw dots, draw links.
    pub fn frame(&mut self) -> FrameStats {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return FrameStats::default(),
        };
        let width = surface.width();
        let height = surface.height();

        surface.clear();
        for particle in &mut self.particles {
            particle.advance(width, height);
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.radius, particle.color);
        }

        let mut link_count = 0;
        for link in links(&self.particles, &self.config) {
            let from = self.particles[link.a].pos;
            let to = self.particles[link.b].pos;
            surface.stroke_line(
                from,
                to,
                self.config.link_color.with_alpha(link.opacity),
                self.config.link_width,
            );
            link_count += 1;
        }

        let stats = FrameStats {
            particles: self.particles.len(),
            links: link_count,
        };
        trace!(particles = stats.particles, links = stats.links, "frame");
        stats
    }
}
