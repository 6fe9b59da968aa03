// Pointer and scroll driven drift of the two background gradient orbs, plus
// the hero title's scroll lift. The pointer is tracked across the whole
// viewport in percent; each orb moves a small fraction of that, and rises as
// the page scrolls down.

use crate::config::{OrbAnchor, ParallaxConfig};
use crate::error::HighlightError;

/// Orb offset in percent of the viewport, measured from the orb's anchoring edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbPlacement {
    pub horizontal: f64,
    pub vertical: f64,
}

pub struct Parallax {
    config: ParallaxConfig,
    pointer: [f64; 2],
    scroll_y: f64,
}

impl Parallax {
    pub fn new(config: ParallaxConfig) -> Self {
        Parallax {
            config,
            pointer: [0.0, 0.0],
            scroll_y: 0.0,
        }
    }

    pub fn pointer(&self) -> [f64; 2] {
        self.pointer
    }

    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<(), HighlightError> {
        if !(viewport_width > 0.0 && viewport_height > 0.0) {
            return Err(HighlightError::MeasurementUnavailable);
        }
        self.pointer = [
            client_x / viewport_width * 100.0,
            client_y / viewport_height * 100.0,
        ];
        Ok(())
    }

    pub fn scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    fn place(&self, anchor: &OrbAnchor) -> OrbPlacement {
        OrbPlacement {
            horizontal: anchor.horizontal + self.pointer[0] * anchor.pointer_gain,
            vertical: anchor.vertical + self.pointer[1] * anchor.pointer_gain - self.scroll_y * anchor.scroll_gain,
        }
    }

    /// Offset from the left and top edges.
    pub fn leading(&self) -> OrbPlacement {
        self.place(&self.config.leading)
    }

    /// Offset from the right and top edges.
    pub fn trailing(&self) -> OrbPlacement {
        self.place(&self.config.trailing)
    }

    /// Vertical translation of the hero title, in pixels.
    pub fn title_offset(&self) -> f64 {
        self.scroll_y * self.config.title_scroll_gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: OrbPlacement, horizontal: f64, vertical: f64) -> bool {
        (a.horizontal - horizontal).abs() < 1e-9 && (a.vertical - vertical).abs() < 1e-9
    }

    #[test]
    fn resting_placement() {
        let parallax = Parallax::new(ParallaxConfig::default());
        assert!(close(parallax.leading(), 20.0, 10.0));
        assert!(close(parallax.trailing(), 15.0, 30.0));
    }

    #[test]
    fn follows_pointer_and_scroll() {
        let mut parallax = Parallax::new(ParallaxConfig::default());
        parallax.pointer_move(960.0, 270.0, 1920.0, 1080.0).unwrap();
        assert_eq!(parallax.pointer(), [50.0, 25.0]);
        parallax.scroll(200.0);

        // 20 + 50*0.03, 10 + 25*0.03 - 200*0.05
        assert!(close(parallax.leading(), 21.5, 0.75));
        // 15 + 50*0.02, 30 + 25*0.02 - 200*0.03
        assert!(close(parallax.trailing(), 16.0, 24.5));
    }

    #[test]
    fn title_lifts_with_scroll_only() {
        let mut parallax = Parallax::new(ParallaxConfig::default());
        assert_eq!(parallax.title_offset(), 0.0);
        parallax.pointer_move(300.0, 300.0, 600.0, 600.0).unwrap();
        assert_eq!(parallax.title_offset(), 0.0);
        parallax.scroll(250.0);
        assert!((parallax.title_offset() + 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_viewport_drops_the_sample() {
        let mut parallax = Parallax::new(ParallaxConfig::default());
        parallax.pointer_move(100.0, 100.0, 200.0, 400.0).unwrap();
        assert!(parallax.pointer_move(5.0, 5.0, 0.0, 400.0).is_err());
        assert_eq!(parallax.pointer(), [50.0, 25.0]);
    }
}
