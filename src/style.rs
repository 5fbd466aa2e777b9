use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use thiserror::Error;

use crate::render::{ImageOptions, Renderer};

/// 8-bit RGBA color, not premultiplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::gray(255);
    pub const BLACK: Color = Color::gray(0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digits in color {0:?}")]
    BadDigit(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ParseColorError::BadLength(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseColorError::BadDigit(s.to_string()))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Display options for a globe.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub graticule_color: Color,
    pub line_color: Color,
    pub dot_color: Color,
    pub background: Color,
    pub line_width: f64,
    pub scale: f64,
}

impl Style {
    pub fn image_options(&self) -> ImageOptions {
        ImageOptions {
            background: self.background,
            line_width: self.line_width,
            scale: self.scale,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            graticule_color: Color::gray(192),
            line_color: Color::gray(32),
            dot_color: Color::rgb(255, 0, 0),
            background: Color::WHITE,
            line_width: 0.1,
            scale: 0.7,
        }
    }
}

/// A per-call style override.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOption {
    Color(Color),
}

/// Draw with the given color instead of the default.
pub fn color(c: Color) -> StyleOption {
    StyleOption::Color(c)
}

impl StyleOption {
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match *self {
            StyleOption::Color(c) => renderer.set_color(c),
        }
    }
}

/// Renderer access inside a `begin`/`end` bracket.
///
/// Opening applies the base option and then each override in order, so later
/// options win. Dropping the scope closes the bracket.
pub struct StyleScope<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer + ?Sized> StyleScope<'a, R> {
    pub fn open(renderer: &'a mut R, base: StyleOption, overrides: &[StyleOption]) -> Self {
        renderer.begin();
        base.apply(renderer);
        for option in overrides {
            option.apply(renderer);
        }
        Self { renderer }
    }
}

impl<R: Renderer + ?Sized> Deref for StyleScope<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for StyleScope<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for StyleScope<'_, R> {
    fn drop(&mut self) {
        self.renderer.end();
    }
}
