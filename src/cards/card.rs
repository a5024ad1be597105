//! The card value type.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Number, Shape};
use crate::core::CardError;

/// An immutable card: one shape, one color, one number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: Color,
    pub number: Number,
}

impl Card {
    #[must_use]
    pub const fn new(shape: Shape, color: Color, number: Number) -> Self {
        Self {
            shape,
            color,
            number,
        }
    }

    /// Build a card from loosely-typed parts, validating each domain.
    ///
    /// ```
    /// use triad_tiles::cards::{Card, Shape};
    ///
    /// let card = Card::parse("▲", "blue", 2).unwrap();
    /// assert_eq!(card.shape, Shape::Triangle);
    /// assert!(Card::parse("circle", "red", 7).is_err());
    /// ```
    pub fn parse(shape: &str, color: &str, number: u8) -> Result<Self, CardError> {
        Ok(Self {
            shape: shape.parse()?,
            color: color.parse()?,
            number: Number::new(number)?,
        })
    }

    /// Small integer key for one attribute, used for equality checks.
    #[must_use]
    pub fn key(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Shape => self.shape as u8,
            Attribute::Color => self.color as u8,
            Attribute::Number => self.number.get(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.color, self.shape, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_each_domain() {
        assert!(matches!(
            Card::parse("blob", "red", 1),
            Err(CardError::UnknownShape(_))
        ));
        assert!(matches!(
            Card::parse("circle", "pink", 1),
            Err(CardError::UnknownColor(_))
        ));
        assert_eq!(
            Card::parse("circle", "red", 0),
            Err(CardError::NumberOutOfRange(0))
        );
    }

    #[test]
    fn test_keys_distinguish_values() {
        let a = Card::parse("circle", "red", 1).unwrap();
        let b = Card::parse("square", "red", 2).unwrap();

        assert_ne!(a.key(Attribute::Shape), b.key(Attribute::Shape));
        assert_eq!(a.key(Attribute::Color), b.key(Attribute::Color));
        assert_ne!(a.key(Attribute::Number), b.key(Attribute::Number));
    }

    #[test]
    fn test_wire_format() {
        let card = Card::parse("cross", "yellow", 4).unwrap();
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "shape": "cross", "color": "yellow", "number": 4 })
        );
        assert_eq!(card.to_string(), "yellow cross 4");
    }
}
