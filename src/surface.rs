//! Drawing surface seam.
//!
//! The simulation never rasterizes anything itself. It issues line and sine
//! strokes against a [`DrawSurface`]; [`CommandBuffer`] records them so a
//! browser host can replay them on a canvas.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A CSS colour string, passed through to the host untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Default for Color {
    fn default() -> Self {
        Color("black".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// A sine curve starting at `origin`, swept over `theta_extent` radians.
/// One full period spans `period` horizontal units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SineCurve {
    pub origin: Point,
    pub amplitude: f64,
    pub period: f64,
    pub theta_extent: f64,
}

pub trait DrawSurface {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn stroke_sine(&mut self, curve: SineCurve, stroke: &Stroke);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Sine {
        curve: SineCurve,
        stroke: Stroke,
    },
}

/// Records draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl DrawSurface for CommandBuffer {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn stroke_sine(&mut self, curve: SineCurve, stroke: &Stroke) {
        self.commands.push(DrawCommand::Sine {
            curve,
            stroke: stroke.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> Stroke {
        Stroke {
            color: Color::default(),
            width: 2.0,
        }
    }

    #[test]
    fn records_in_order() {
        let mut buf = CommandBuffer::new();
        buf.stroke_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &stroke());
        buf.stroke_sine(
            SineCurve {
                origin: Point::new(0.0, 5.0),
                amplitude: 3.0,
                period: 80.0,
                theta_extent: std::f64::consts::TAU,
            },
            &stroke(),
        );
        assert_eq!(buf.commands().len(), 2);
        assert!(matches!(buf.commands()[0], DrawCommand::Line { .. }));
        assert!(matches!(buf.commands()[1], DrawCommand::Sine { .. }));

        buf.clear();
        assert!(buf.commands().is_empty());
    }

    #[test]
    fn json_is_tagged_by_kind() {
        let mut buf = CommandBuffer::new();
        buf.stroke_line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), &stroke());
        let value: serde_json::Value = serde_json::from_str(&buf.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["kind"], "line");
        assert_eq!(value[0]["from"]["x"], 1.0);
        assert_eq!(value[0]["stroke"]["color"], "black");
    }

    #[test]
    fn empty_and_non_finite_frames_serialize() {
        let mut buf = CommandBuffer::new();
        assert_eq!(buf.to_json().unwrap(), "[]");
        buf.stroke_line(Point::new(f64::NAN, 0.0), Point::new(1.0, 0.0), &stroke());
        let json = buf.to_json().unwrap();
        assert!(json.contains("null"), "serde_json writes NaN as null: {json}");
    }
}
