//! Card attribute domains.
//!
//! Each card carries exactly one value from each of three closed domains of
//! four values: `Shape`, `Color` and `Number`. Values outside a domain
//! cannot be constructed; parsing rejects them with `CardError`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::CardError;

/// Card shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Cross,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Cross];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Cross => "cross",
        }
    }

    /// Glyph used by text front-ends.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::Square => '■',
            Shape::Triangle => '▲',
            Shape::Cross => '✚',
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = CardError;

    /// Accepts the lowercase name or the glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| {
                s.eq_ignore_ascii_case(shape.name())
                    || s.chars().eq(std::iter::once(shape.glyph()))
            })
            .ok_or_else(|| CardError::UnknownShape(s.to_string()))
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| s.eq_ignore_ascii_case(color.name()))
            .ok_or_else(|| CardError::UnknownColor(s.to_string()))
    }
}

/// Card number, always in `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Number(u8);

impl Number {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Create a number, rejecting values outside `1..=4`.
    pub fn new(value: u8) -> Result<Self, CardError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CardError::NumberOutOfRange(value))
        }
    }

    /// All four numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Number> {
        (Self::MIN..=Self::MAX).map(Number)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Number {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Number::new(value)
    }
}

impl From<Number> for u8 {
    fn from(n: Number) -> u8 {
        n.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three attribute axes a line is checked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Shape,
    Color,
    Number,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Shape, Attribute::Color, Attribute::Number];
}
