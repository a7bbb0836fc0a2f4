//! Primitive draw operations
//!
//! One [`DrawOperation`] variant per interceptable primitive. Operations are
//! plain values built per call; the only place they outlive the call is the
//! textual trace, which [`DrawOperation`]'s `Display` and `FromStr`
//! implementations write and read back.
//!
//! # Trace line format
//!
//! ```text
//! fillRectangle x1=0 y1=0 x2=10 y2=20 area=200
//! drawCircleArc x=4 y=4 diameter=30 startAngle=90 arcAngle=45
//! ```
//!
//! The tag is the camelCase primitive name, followed by the geometric
//! parameters in call order. Fill primitives carry a trailing `area=` field
//! appended by the recorder; parsing ignores it.

use core::fmt;
use core::str::FromStr;

/// Maximum number of geometric parameters carried by one primitive
pub const MAX_PARAMS: usize = 7;

/// A single primitive draw call and its geometric parameters
///
/// Coordinates and dimensions are signed, as issued by the rendering
/// pipeline; angles are in degrees, counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "camelCase"))]
pub enum DrawOperation {
    /// Single pixel write
    WritePixel { x: i32, y: i32 },
    /// Arbitrary line between two points
    DrawLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Horizontal line from `x1` to `x2` on row `y`
    DrawHorizontalLine { x1: i32, x2: i32, y: i32 },
    /// Vertical line from `y1` to `y2` on column `x`
    DrawVerticalLine { x: i32, y1: i32, y2: i32 },
    /// Rectangle outline between two corners
    DrawRectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Rounded rectangle outline
    DrawRoundedRectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    },
    /// Filled rounded rectangle
    FillRoundedRectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        arc_width: i32,
        arc_height: i32,
    },
    /// Circle outline inside a `diameter` square at `(x, y)`
    DrawCircle { x: i32, y: i32, diameter: i32 },
    /// Filled circle
    FillCircle { x: i32, y: i32, diameter: i32 },
    /// Ellipse outline inside a `width × height` box at `(x, y)`
    DrawEllipse { x: i32, y: i32, width: i32, height: i32 },
    /// Filled ellipse
    FillEllipse { x: i32, y: i32, width: i32, height: i32 },
    /// Circle arc outline
    DrawCircleArc {
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    },
    /// Filled circle arc (pie slice)
    FillCircleArc {
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: f32,
        arc_angle: f32,
    },
    /// Ellipse arc outline
    DrawEllipseArc {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    },
    /// Filled ellipse arc
    FillEllipseArc {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        start_angle: f32,
        arc_angle: f32,
    },
    /// Blit of an image region to `(x, y)`
    DrawImage {
        region_x: i32,
        region_y: i32,
        width: i32,
        height: i32,
        x: i32,
        y: i32,
        alpha: u8,
    },
    /// Filled rectangle between two corners
    FillRectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// Value of one traced parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Coordinate or dimension
    Int(i32),
    /// Angle in degrees
    Angle(f32),
    /// Opacity, 0 (transparent) to 255 (opaque)
    Alpha(u8),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Angle(v) => write!(f, "{v}"),
            Self::Alpha(v) => write!(f, "{v}"),
        }
    }
}

/// Named parameter of a draw operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Key as written in the trace (camelCase)
    pub key: &'static str,
    /// Parameter value
    pub value: ParamValue,
}

/// Ordered parameter list of one operation
pub type ParamList = heapless::Vec<Param, MAX_PARAMS>;

impl DrawOperation {
    /// Trace tag of this primitive
    pub fn name(&self) -> &'static str {
        match self {
            Self::WritePixel { .. } => "writePixel",
            Self::DrawLine { .. } => "drawLine",
            Self::DrawHorizontalLine { .. } => "drawHorizontalLine",
            Self::DrawVerticalLine { .. } => "drawVerticalLine",
            Self::DrawRectangle { .. } => "drawRectangle",
            Self::DrawRoundedRectangle { .. } => "drawRoundedRectangle",
            Self::FillRoundedRectangle { .. } => "fillRoundedRectangle",
            Self::DrawCircle { .. } => "drawCircle",
            Self::FillCircle { .. } => "fillCircle",
            Self::DrawEllipse { .. } => "drawEllipse",
            Self::FillEllipse { .. } => "fillEllipse",
            Self::DrawCircleArc { .. } => "drawCircleArc",
            Self::FillCircleArc { .. } => "fillCircleArc",
            Self::DrawEllipseArc { .. } => "drawEllipseArc",
            Self::FillEllipseArc { .. } => "fillEllipseArc",
            Self::DrawImage { .. } => "drawImage",
            Self::FillRectangle { .. } => "fillRectangle",
        }
    }

    /// Geometric parameters in call order
    pub fn params(&self) -> ParamList {
        use ParamValue::{Alpha, Angle, Int};

        match *self {
            Self::WritePixel { x, y } => list(&[("x", Int(x)), ("y", Int(y))]),
            Self::DrawLine { x1, y1, x2, y2 }
            | Self::DrawRectangle { x1, y1, x2, y2 }
            | Self::FillRectangle { x1, y1, x2, y2 } => list(&[
                ("x1", Int(x1)),
                ("y1", Int(y1)),
                ("x2", Int(x2)),
                ("y2", Int(y2)),
            ]),
            Self::DrawHorizontalLine { x1, x2, y } => {
                list(&[("x1", Int(x1)), ("x2", Int(x2)), ("y", Int(y))])
            }
            Self::DrawVerticalLine { x, y1, y2 } => {
                list(&[("x", Int(x)), ("y1", Int(y1)), ("y2", Int(y2))])
            }
            Self::DrawRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            }
            | Self::FillRoundedRectangle {
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            } => list(&[
                ("x", Int(x)),
                ("y", Int(y)),
                ("width", Int(width)),
                ("height", Int(height)),
                ("arcWidth", Int(arc_width)),
                ("arcHeight", Int(arc_height)),
            ]),
            Self::DrawCircle { x, y, diameter } | Self::FillCircle { x, y, diameter } => {
                list(&[("x", Int(x)), ("y", Int(y)), ("diameter", Int(diameter))])
            }
            Self::DrawEllipse {
                x,
                y,
                width,
                height,
            }
            | Self::FillEllipse {
                x,
                y,
                width,
                height,
            } => list(&[
                ("x", Int(x)),
                ("y", Int(y)),
                ("width", Int(width)),
                ("height", Int(height)),
            ]),
            Self::DrawCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            }
            | Self::FillCircleArc {
                x,
                y,
                diameter,
                start_angle,
                arc_angle,
            } => list(&[
                ("x", Int(x)),
                ("y", Int(y)),
                ("diameter", Int(diameter)),
                ("startAngle", Angle(start_angle)),
                ("arcAngle", Angle(arc_angle)),
            ]),
            Self::DrawEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            }
            | Self::FillEllipseArc {
                x,
                y,
                width,
                height,
                start_angle,
                arc_angle,
            } => list(&[
                ("x", Int(x)),
                ("y", Int(y)),
                ("width", Int(width)),
                ("height", Int(height)),
                ("startAngle", Angle(start_angle)),
                ("arcAngle", Angle(arc_angle)),
            ]),
            Self::DrawImage {
                region_x,
                region_y,
                width,
                height,
                x,
                y,
                alpha,
            } => list(&[
                ("regionX", Int(region_x)),
                ("regionY", Int(region_y)),
                ("width", Int(width)),
                ("height", Int(height)),
                ("x", Int(x)),
                ("y", Int(y)),
                ("alpha", Alpha(alpha)),
            ]),
        }
    }
}

fn list(pairs: &[(&'static str, ParamValue)]) -> ParamList {
    pairs
        .iter()
        .map(|&(key, value)| Param { key, value })
        .collect()
}

impl fmt::Display for DrawOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        for param in self.params() {
            write!(f, " {}={}", param.key, param.value)?;
        }
        Ok(())
    }
}

/// Errors reading a trace line back into a [`DrawOperation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line
    Empty,
    /// Tag does not name a known primitive
    UnknownOperation(String),
    /// Token is not of the form `key=value`
    MalformedField(String),
    /// A parameter the primitive needs is absent
    MissingField {
        /// Primitive tag
        operation: &'static str,
        /// Absent key
        key: &'static str,
    },
    /// A parameter value does not parse
    InvalidValue {
        /// Offending key
        key: &'static str,
        /// Raw value text
        value: String,
    },
    /// More fields than any primitive carries
    TooManyFields {
        /// Primitive tag
        operation: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty trace line"),
            Self::UnknownOperation(tag) => write!(f, "unknown draw operation `{tag}`"),
            Self::MalformedField(token) => write!(f, "malformed field `{token}`, expected key=value"),
            Self::MissingField { operation, key } => {
                write!(f, "`{operation}` is missing field `{key}`")
            }
            Self::InvalidValue { key, value } => write!(f, "invalid value `{value}` for `{key}`"),
            Self::TooManyFields { operation } => {
                write!(f, "`{operation}` has more than {} fields", MAX_FIELDS)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parameters plus the trailing `area=` of an accounted record
const MAX_FIELDS: usize = MAX_PARAMS + 1;

/// `key=value` tokens of one line, looked up by key
struct Fields<'a> {
    operation: &'static str,
    pairs: heapless::Vec<(&'a str, &'a str), MAX_FIELDS>,
}

impl<'a> Fields<'a> {
    fn parse(operation: &'static str, tokens: core::str::SplitWhitespace<'a>) -> Result<Self, ParseError> {
        let mut pairs = heapless::Vec::new();
        for token in tokens {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| ParseError::MalformedField(token.to_string()))?;
            pairs
                .push((key, value))
                .map_err(|_| ParseError::TooManyFields { operation })?;
        }
        Ok(Self { operation, pairs })
    }

    fn raw(&self, key: &'static str) -> Result<&'a str, ParseError> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or(ParseError::MissingField {
                operation: self.operation,
                key,
            })
    }

    fn value<T: FromStr>(&self, key: &'static str) -> Result<T, ParseError> {
        let raw = self.raw(key)?;
        raw.parse().map_err(|_| ParseError::InvalidValue {
            key,
            value: raw.to_string(),
        })
    }
}

/// Every tag, used to map parsed text onto a `'static` name
const TAGS: [&str; 17] = [
    "writePixel",
    "drawLine",
    "drawHorizontalLine",
    "drawVerticalLine",
    "drawRectangle",
    "drawRoundedRectangle",
    "fillRoundedRectangle",
    "drawCircle",
    "fillCircle",
    "drawEllipse",
    "fillEllipse",
    "drawCircleArc",
    "fillCircleArc",
    "drawEllipseArc",
    "fillEllipseArc",
    "drawImage",
    "fillRectangle",
];

impl FromStr for DrawOperation {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let tag = tokens.next().ok_or(ParseError::Empty)?;
        let operation = TAGS
            .iter()
            .copied()
            .find(|t| *t == tag)
            .ok_or_else(|| ParseError::UnknownOperation(tag.to_string()))?;
        let f = Fields::parse(operation, tokens)?;

        let op = match operation {
            "writePixel" => Self::WritePixel {
                x: f.value("x")?,
                y: f.value("y")?,
            },
            "drawLine" => Self::DrawLine {
                x1: f.value("x1")?,
                y1: f.value("y1")?,
                x2: f.value("x2")?,
                y2: f.value("y2")?,
            },
            "drawHorizontalLine" => Self::DrawHorizontalLine {
                x1: f.value("x1")?,
                x2: f.value("x2")?,
                y: f.value("y")?,
            },
            "drawVerticalLine" => Self::DrawVerticalLine {
                x: f.value("x")?,
                y1: f.value("y1")?,
                y2: f.value("y2")?,
            },
            "drawRectangle" => Self::DrawRectangle {
                x1: f.value("x1")?,
                y1: f.value("y1")?,
                x2: f.value("x2")?,
                y2: f.value("y2")?,
            },
            "drawRoundedRectangle" => Self::DrawRoundedRectangle {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
                arc_width: f.value("arcWidth")?,
                arc_height: f.value("arcHeight")?,
            },
            "fillRoundedRectangle" => Self::FillRoundedRectangle {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
                arc_width: f.value("arcWidth")?,
                arc_height: f.value("arcHeight")?,
            },
            "drawCircle" => Self::DrawCircle {
                x: f.value("x")?,
                y: f.value("y")?,
                diameter: f.value("diameter")?,
            },
            "fillCircle" => Self::FillCircle {
                x: f.value("x")?,
                y: f.value("y")?,
                diameter: f.value("diameter")?,
            },
            "drawEllipse" => Self::DrawEllipse {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
            },
            "fillEllipse" => Self::FillEllipse {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
            },
            "drawCircleArc" => Self::DrawCircleArc {
                x: f.value("x")?,
                y: f.value("y")?,
                diameter: f.value("diameter")?,
                start_angle: f.value("startAngle")?,
                arc_angle: f.value("arcAngle")?,
            },
            "fillCircleArc" => Self::FillCircleArc {
                x: f.value("x")?,
                y: f.value("y")?,
                diameter: f.value("diameter")?,
                start_angle: f.value("startAngle")?,
                arc_angle: f.value("arcAngle")?,
            },
            "drawEllipseArc" => Self::DrawEllipseArc {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
                start_angle: f.value("startAngle")?,
                arc_angle: f.value("arcAngle")?,
            },
            "fillEllipseArc" => Self::FillEllipseArc {
                x: f.value("x")?,
                y: f.value("y")?,
                width: f.value("width")?,
                height: f.value("height")?,
                start_angle: f.value("startAngle")?,
                arc_angle: f.value("arcAngle")?,
            },
            "drawImage" => Self::DrawImage {
                region_x: f.value("regionX")?,
                region_y: f.value("regionY")?,
                width: f.value("width")?,
                height: f.value("height")?,
                x: f.value("x")?,
                y: f.value("y")?,
                alpha: f.value("alpha")?,
            },
            _ => Self::FillRectangle {
                x1: f.value("x1")?,
                y1: f.value("y1")?,
                x2: f.value("x2")?,
                y2: f.value("y2")?,
            },
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_params_in_call_order() {
        let op = DrawOperation::FillRectangle {
            x1: 0,
            y1: 0,
            x2: 10,
            y2: 20,
        };
        assert_eq!(op.to_string(), "fillRectangle x1=0 y1=0 x2=10 y2=20");

        let op = DrawOperation::DrawImage {
            region_x: 1,
            region_y: 2,
            width: 3,
            height: 4,
            x: 5,
            y: 6,
            alpha: 255,
        };
        assert_eq!(
            op.to_string(),
            "drawImage regionX=1 regionY=2 width=3 height=4 x=5 y=6 alpha=255"
        );
    }

    #[test]
    fn test_display_angles() {
        let op = DrawOperation::DrawCircleArc {
            x: 4,
            y: 5,
            diameter: 30,
            start_angle: 90.0,
            arc_angle: 22.5,
        };
        assert_eq!(
            op.to_string(),
            "drawCircleArc x=4 y=5 diameter=30 startAngle=90 arcAngle=22.5"
        );
    }

    #[test]
    fn test_parse_ignores_area_field() {
        let op: DrawOperation = "fillCircle x=1 y=2 diameter=30 area=706".parse().unwrap();
        assert_eq!(
            op,
            DrawOperation::FillCircle {
                x: 1,
                y: 2,
                diameter: 30
            }
        );
    }

    #[test]
    fn test_parse_rounded_rectangle_keys() {
        let op: DrawOperation = "drawRoundedRectangle x=0 y=0 width=40 height=20 arcWidth=8 arcHeight=6"
            .parse()
            .unwrap();
        assert_eq!(
            op,
            DrawOperation::DrawRoundedRectangle {
                x: 0,
                y: 0,
                width: 40,
                height: 20,
                arc_width: 8,
                arc_height: 6
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<DrawOperation>(), Err(ParseError::Empty));
        assert_eq!(
            "drawTriangle a=1".parse::<DrawOperation>(),
            Err(ParseError::UnknownOperation("drawTriangle".to_string()))
        );
        assert_eq!(
            "writePixel x=1".parse::<DrawOperation>(),
            Err(ParseError::MissingField {
                operation: "writePixel",
                key: "y"
            })
        );
        assert_eq!(
            "writePixel x=1 y=two".parse::<DrawOperation>(),
            Err(ParseError::InvalidValue {
                key: "y",
                value: "two".to_string()
            })
        );
        assert_eq!(
            "writePixel x=1 y".parse::<DrawOperation>(),
            Err(ParseError::MalformedField("y".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_fields_past_capacity() {
        // Largest primitive plus area= still fits.
        let full = "drawImage regionX=0 regionY=0 width=4 height=4 x=0 y=0 alpha=255 area=16";
        assert!(full.parse::<DrawOperation>().is_ok());

        let line = format!("{full} extra=1");
        assert_eq!(
            line.parse::<DrawOperation>(),
            Err(ParseError::TooManyFields { operation: "drawImage" })
        );
        assert_eq!(
            "writePixel x=1 y=2 a=0 b=0 c=0 d=0 e=0 f=0 g=0".parse::<DrawOperation>(),
            Err(ParseError::TooManyFields { operation: "writePixel" })
        );
    }

    #[test]
    fn test_parse_requires_canonical_keys() {
        // Misspelled keys are not aliased.
        assert_eq!(
            "fillEllipseArc x=0 y=0 widht=10 height=10 startAngle=0 arcAngle=90 area=0".parse::<DrawOperation>(),
            Err(ParseError::MissingField {
                operation: "fillEllipseArc",
                key: "width"
            })
        );
        assert_eq!(
            "drawCircleArc x=0 y= diameter=10 startAngle=0 arcAngle=90".parse::<DrawOperation>(),
            Err(ParseError::InvalidValue {
                key: "y",
                value: String::new()
            })
        );
    }

    #[test]
    fn test_every_tag_has_a_variant() {
        // Each tag must parse once its keys are supplied.
        let samples = [
            "writePixel x=0 y=0",
            "drawLine x1=0 y1=0 x2=1 y2=1",
            "drawHorizontalLine x1=0 x2=1 y=0",
            "drawVerticalLine x=0 y1=0 y2=1",
            "drawRectangle x1=0 y1=0 x2=1 y2=1",
            "drawRoundedRectangle x=0 y=0 width=1 height=1 arcWidth=0 arcHeight=0",
            "fillRoundedRectangle x=0 y=0 width=1 height=1 arcWidth=0 arcHeight=0",
            "drawCircle x=0 y=0 diameter=1",
            "fillCircle x=0 y=0 diameter=1",
            "drawEllipse x=0 y=0 width=1 height=1",
            "fillEllipse x=0 y=0 width=1 height=1",
            "drawCircleArc x=0 y=0 diameter=1 startAngle=0 arcAngle=90",
            "fillCircleArc x=0 y=0 diameter=1 startAngle=0 arcAngle=90",
            "drawEllipseArc x=0 y=0 width=1 height=1 startAngle=0 arcAngle=90",
            "fillEllipseArc x=0 y=0 width=1 height=1 startAngle=0 arcAngle=90",
            "drawImage regionX=0 regionY=0 width=1 height=1 x=0 y=0 alpha=255",
            "fillRectangle x1=0 y1=0 x2=1 y2=1",
        ];
        for (tag, sample) in TAGS.iter().zip(samples) {
            let op: DrawOperation = sample.parse().unwrap();
            assert_eq!(op.name(), *tag);
            assert_eq!(op.to_string(), sample);
        }
    }
}
