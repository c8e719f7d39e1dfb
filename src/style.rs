// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Pack style: direction, alignment and padding
//!
//! A [`Pack`] is attached to every node of the view tree. It is purely
//! descriptive; the [shell](crate::shell) decides how each property maps onto
//! toolkit layout.

/// Main axis of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Children are laid out left to right
    #[default]
    Row,
    /// Children are laid out top to bottom
    Column,
}

impl Direction {
    /// True for [`Direction::Column`]
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Direction::Column
    }
}

/// Alignment of children on a container's cross axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Whether this alignment has meaning on the cross axis of `direction`
    ///
    /// `Left` and `Right` apply to columns, `Top` and `Bottom` to rows.
    pub fn applies_to(self, direction: Direction) -> bool {
        match self {
            Alignment::Center => true,
            Alignment::Left | Alignment::Right => direction == Direction::Column,
            Alignment::Top | Alignment::Bottom => direction == Direction::Row,
        }
    }
}

/// Space around a node, in logical pixels
///
/// Values are never negative: construction clamps negative and non-finite
/// input to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        if value != 0.0 {
            log::warn!("Padding: clamping invalid value {value} to 0");
        }
        0.0
    }
}

impl Padding {
    /// No padding
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Construct from each side, clockwise from the top
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Padding {
            top: sanitize(top),
            right: sanitize(right),
            bottom: sanitize(bottom),
            left: sanitize(left),
        }
    }

    /// The same padding on all four sides
    #[inline]
    pub fn uniform(value: f32) -> Self {
        Padding::new(value, value, value, value)
    }

    /// Padding before and after the content along one axis
    ///
    /// Returns `(top, bottom)` when `vertical`, otherwise `(left, right)`.
    #[inline]
    pub fn along(&self, vertical: bool) -> (f32, f32) {
        if vertical {
            (self.top, self.bottom)
        } else {
            (self.left, self.right)
        }
    }
}

impl From<f32> for Padding {
    #[inline]
    fn from(value: f32) -> Self {
        Padding::uniform(value)
    }
}

impl From<(f32, f32)> for Padding {
    /// `(vertical, horizontal)`
    fn from((vert, horiz): (f32, f32)) -> Self {
        Padding::new(vert, horiz, vert, horiz)
    }
}

impl From<(f32, f32, f32)> for Padding {
    /// `(top, horizontal, bottom)`
    fn from((top, horiz, bottom): (f32, f32, f32)) -> Self {
        Padding::new(top, horiz, bottom, horiz)
    }
}

impl From<(f32, f32, f32, f32)> for Padding {
    /// `(top, right, bottom, left)`
    fn from((top, right, bottom, left): (f32, f32, f32, f32)) -> Self {
        Padding::new(top, right, bottom, left)
    }
}

/// Style of a node in the view tree
///
/// Built inline:
/// ```
/// use hello_world::style::{Alignment, Direction, Pack};
///
/// let style = Pack::new()
///     .direction(Direction::Column)
///     .alignment(Alignment::Center)
///     .padding(20.0);
/// assert_eq!(style.get_padding().left, 20.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pack {
    direction: Direction,
    alignment: Option<Alignment>,
    padding: Padding,
}

impl Pack {
    /// Construct the default style: row direction, no alignment, no padding
    #[inline]
    pub fn new() -> Self {
        Pack::default()
    }

    /// Set the direction (inline)
    #[inline]
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the cross-axis alignment (inline)
    #[inline]
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the padding (inline)
    ///
    /// Accepts the shorthand forms supported by [`Padding`]'s `From` impls.
    #[inline]
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    #[inline]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// The alignment as set, whether or not it applies
    #[inline]
    pub fn get_alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[inline]
    pub fn get_padding(&self) -> Padding {
        self.padding
    }

    /// The alignment, if meaningful for this style's direction
    pub fn cross_alignment(&self) -> Option<Alignment> {
        self.alignment
            .filter(|alignment| alignment.applies_to(self.direction))
    }
}
