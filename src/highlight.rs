//! Pointer-proximity highlighting for a short block of display text.
//!
//! The text is one or more stacked lines sharing a single horizontal axis:
//! line `n` starts one slot after line `n - 1` ends, as if the lines were
//! joined with a space. Every slot is assumed equally wide, so a glyph's
//! center depends only on its slot and the container width. A glyph is near
//! when its center is within `radius` percent of the pointer's horizontal
//! position; the vertical position is recorded but never consulted.

use crate::color::Color;
use crate::config::HighlightConfig;
use crate::error::HighlightError;

/// Container box in client coordinates, as returned by the layout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Last pointer sample in percent of the container box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlyphTone {
    Default,
    Near,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub line: usize,
    /// Position on the shared horizontal axis
    pub slot: usize,
}

pub struct ProximityText {
    config: HighlightConfig,
    glyphs: Vec<Glyph>,
    line_count: usize,
    slots: usize,
    hover: HoverState,
    tones: Vec<GlyphTone>,
}

impl ProximityText {
    pub fn new<I, T>(lines: I, config: HighlightConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut glyphs = Vec::new();
        let mut next_slot = 0;
        let mut line_count = 0;
        for (line, text) in lines.into_iter().enumerate() {
            if line > 0 {
                // separator between lines
                next_slot += 1;
            }
            for ch in text.as_ref().chars() {
                glyphs.push(Glyph {
                    ch,
                    line,
                    slot: next_slot,
                });
                next_slot += 1;
            }
            line_count = line + 1;
        }

        let tones = vec![GlyphTone::Default; glyphs.len()];
        ProximityText {
            config,
            glyphs,
            line_count,
            slots: next_slot,
            hover: HoverState::default(),
            tones,
        }
    }

    /// Lines separated by `'\n'`.
    pub fn from_text(text: &str, config: HighlightConfig) -> Self {
        ProximityText::new(text.split('\n'), config)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Width of the shared axis in glyph slots, separators included.
    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn tones(&self) -> &[GlyphTone] {
        &self.tones
    }

    pub fn near_count(&self) -> usize {
        self.tones.iter().filter(|t| **t == GlyphTone::Near).count()
    }

    pub fn color_of(&self, index: usize) -> Color {
        match self.tones.get(index) {
            Some(GlyphTone::Near) => self.config.near_color,
            _ => self.config.default_color,
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Horizontal center of the glyph in `slot`, in percent of the container width.
    pub fn glyph_center(&self, slot: usize, container_width: f64) -> f64 {
        let glyph_width = container_width / self.slots as f64;
        let center = slot as f64 * glyph_width + glyph_width / 2.0;
        center / container_width * 100.0
    }

    /// Recomputes every glyph from one pointer sample. If the container cannot
    /// be measured the sample is dropped and the previous tones stay.
    pub fn pointer_move(
        &mut self,
        bounds: Option<BoundingBox>,
        client_x: f64,
        client_y: f64,
    ) -> Result<&[GlyphTone], HighlightError> {
        let bounds = match bounds {
            Some(bounds) if bounds.is_measurable() => bounds,
            _ => return Err(HighlightError::MeasurementUnavailable),
        };

        self.hover = HoverState {
            x: (client_x - bounds.left) / bounds.width * 100.0,
            y: (client_y - bounds.top) / bounds.height * 100.0,
            hovering: true,
        };

        let pointer = self.hover.x;
        let radius = self.config.radius;
        for i in 0..self.glyphs.len() {
            let distance = (self.glyph_center(self.glyphs[i].slot, bounds.width) - pointer).abs();
            self.tones[i] = if distance < radius {
                GlyphTone::Near
            } else {
                GlyphTone::Default
            };
        }
        Ok(self.tones.as_slice())
    }

    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::default();
        for tone in &mut self.tones {
            *tone = GlyphTone::Default;
        }
    }
}
