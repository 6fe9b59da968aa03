// The drawing primitives the particle field needs from whatever it renders onto.
// The surface owns its pixel dimensions; the field reads them back every frame.

use crate::color::Color;

pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_size(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, width: f64);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;
    use crate::color::Color;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCommand {
        Clear,
        Circle { x: f64, y: f64, radius: f64, color: Color },
        Line { from: [f64; 2], to: [f64; 2], color: Color, width: f64 },
    }

    // Keeps every call so tests can inspect what one frame produced
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            RecordingSurface::default()
        }

        pub fn circles(&self) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Circle { .. }))
                .count()
        }

        pub fn lines(&self) -> Vec<&DrawCommand> {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn set_size(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn clear(&mut self) {
            self.commands.clear();
            self.commands.push(DrawCommand::Clear);
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
            self.commands.push(DrawCommand::Circle { x, y, radius, color });
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, width: f64) {
            self.commands.push(DrawCommand::Line { from, to, color, width });
        }
    }
}
