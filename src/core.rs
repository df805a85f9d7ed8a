//!
//! Value model for the wheel input.
//!
//! Everything here works against the [EditableText] capability, so it
//! can be used with any single-line text field that exposes its text
//! and cursor. [WheelInputState](crate::wheel_input::WheelInputState)
//! uses it on top of rat-text's TextInputState.
//!
use crate::NumberError;
use rat_text::text_input::TextInputState;
use rat_text::upos_type;
use std::cmp::min;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Access to the text and cursor of a single-line text field.
pub trait EditableText {
    /// Current text.
    fn text(&self) -> &str;

    /// Replace the text.
    fn set_text(&mut self, text: String);

    /// Cursor as grapheme position.
    fn cursor(&self) -> upos_type;

    /// Set the cursor. Resets any selection.
    fn set_cursor(&mut self, cursor: upos_type);
}

impl EditableText for TextInputState {
    #[inline]
    fn text(&self) -> &str {
        TextInputState::text(self)
    }

    #[inline]
    fn set_text(&mut self, text: String) {
        TextInputState::set_text(self, text);
    }

    #[inline]
    fn cursor(&self) -> upos_type {
        TextInputState::cursor(self)
    }

    #[inline]
    fn set_cursor(&mut self, cursor: upos_type) {
        TextInputState::set_cursor(self, cursor, false);
    }
}

/// Direction of a wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Wheel turned away from the user. Increments.
    Up,
    /// Wheel turned towards the user. Decrements.
    Down,
}

/// A number as it's written into the text field.
///
/// Integers and floats are kept apart, they print differently.
/// `Int(5)` prints as `5`, `Float(5.0)` as `5.0`.
///
/// Floats are never written with an exponent, `1e16` prints as
/// `10000000000000000.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Numeric value.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => {
                let s = v.to_string();
                if v.is_finite() && !s.contains('.') {
                    write!(f, "{}.0", s)
                } else {
                    write!(f, "{}", s)
                }
            }
        }
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if !t.contains('.') {
            if let Ok(v) = t.parse::<i128>() {
                return Ok(Number::Int(v));
            }
        }
        t.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| NumberError::NotANumber(s.to_string()))
    }
}

macro_rules! number_from {
    ($variant:ident, $conv:ty; $($t:ty),*) => {
        $(
        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::$variant(<$conv>::from(value))
            }
        }
        )*
    };
}

number_from!(Int, i128; i8, i16, i32, i64, i128, u8, u16, u32, u64);
number_from!(Float, f64; f32, f64);

/// Value range for the input.
///
/// Defaults to unbounded. Minimum is never greater than maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    minimum: f64,
    maximum: f64,
}

impl Default for NumberRange {
    fn default() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
        }
    }
}

impl NumberRange {
    /// New range. Swaps the bounds if necessary.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        let mut s = Self::default();
        s.set(minimum, maximum);
        s
    }

    /// No limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    #[inline]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Any bound set?
    pub fn is_bounded(&self) -> bool {
        self.minimum != f64::NEG_INFINITY || self.maximum != f64::INFINITY
    }

    /// Set both bounds. Swaps them if necessary.
    pub fn set(&mut self, minimum: f64, maximum: f64) {
        if minimum > maximum {
            self.minimum = maximum;
            self.maximum = minimum;
        } else {
            self.minimum = minimum;
            self.maximum = maximum;
        }
    }

    /// Remove both bounds.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Value within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Replaces a value outside the range with the bound.
    /// The bound is always returned as float.
    pub fn clamp(&self, value: Number) -> Number {
        let v = value.as_f64();
        if v < self.minimum {
            Number::Float(self.minimum)
        } else if v > self.maximum {
            Number::Float(self.maximum)
        } else {
            value
        }
    }
}

/// Does the text match `-?[0-9]*\.?[0-9]*`?
///
/// Every prefix of a valid number matches too, so `-`, `.`,
/// `-.` and the empty string are ok.
pub fn is_number_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !dot => {
            dot = true;
            true
        }
        _ => false,
    })
}

/// Numeric value of the text. Empty or broken text is 0.
pub fn text_value(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Completes unfinished input.
///
/// * `-` becomes `0`
/// * `-.` becomes `-0.0`
/// * a trailing `.` gets a `0`
///
/// Returns None if nothing needs to change.
pub fn normalize_text(text: &str) -> Option<String> {
    let normalized = match text {
        "" => return None,
        "-" => "0".to_string(),
        "-." => "-0.0".to_string(),
        t if t.ends_with('.') => format!("{}0", t),
        _ => return None,
    };
    if normalized.parse::<f64>().is_ok() {
        Some(normalized)
    } else {
        Some("0".to_string())
    }
}

/// Calculates the text after one wheel step.
///
/// The digit left of the cursor is changed. With the cursor at
/// position 0 the digit right of it is used, but the place value
/// still counts from the cursor.
///
/// Returns None if the text is not a number or the glyph at the
/// cursor is neither a digit nor the decimal point.
pub fn step_text(
    text: &str,
    cursor: upos_type,
    range: &NumberRange,
    direction: WheelDirection,
) -> Option<String> {
    let glyphs = text.graphemes(true).collect::<Vec<_>>();
    let cursor = cursor as usize;

    match glyphs.get(cursor.saturating_sub(1)) {
        Some(g) if *g == "." || g.chars().all(|c| c.is_ascii_digit()) => {}
        _ => return None,
    }

    match glyphs.iter().position(|g| *g == ".") {
        None => {
            let num = text.parse::<i128>().ok()?;
            let exp = u32::try_from(glyphs.len().checked_sub(cursor)?).ok()?;
            let v = 10i128.checked_pow(exp)?;
            let num = match direction {
                WheelDirection::Up => num.checked_add(v)?,
                WheelDirection::Down => num.checked_sub(v)?,
            };
            Some(range.clamp(Number::Int(num)).to_string())
        }
        Some(decimal_pos) => {
            let num = text.parse::<f64>().ok()?;
            let decimal_pos = i32::try_from(decimal_pos).ok()?;
            let cursor_pos = i32::try_from(cursor).ok()?;
            let exp = if cursor_pos <= decimal_pos {
                decimal_pos - cursor_pos
            } else {
                decimal_pos - cursor_pos + 1
            };
            let v = 10f64.powi(exp);
            let num = match direction {
                WheelDirection::Up => num + v,
                WheelDirection::Down => num - v,
            };
            let num = range.clamp(Number::Float(num)).as_f64();

            let decimals = glyphs.len() - decimal_pos as usize - 1;
            Some(format!("{:.*}", decimals, num))
        }
    }
}

/// Applies one wheel step to the field.
///
/// The cursor stays where it is, as long as the new text is long enough.
/// Returns true if the text changed.
pub fn wheel_step(
    field: &mut impl EditableText,
    range: &NumberRange,
    direction: WheelDirection,
) -> bool {
    let cursor = field.cursor();
    let Some(new_text) = step_text(field.text(), cursor, range, direction) else {
        return false;
    };
    if new_text == field.text() {
        return false;
    }

    log::debug!("wheel {:?}: {:?} -> {:?}", direction, field.text(), new_text);

    let len = new_text.graphemes(true).count() as upos_type;
    field.set_text(new_text);
    field.set_cursor(min(cursor, len));
    true
}

/// Completes unfinished input when the field loses the focus.
///
/// Returns true if the text changed.
pub fn focus_lost(field: &mut impl EditableText) -> bool {
    match normalize_text(field.text()) {
        Some(text) => {
            log::debug!("normalize {:?} -> {:?}", field.text(), text);
            field.set_text(text);
            true
        }
        None => false,
    }
}

/// Numeric value of the field. Empty or broken text is 0.
pub fn value(field: &impl EditableText) -> f64 {
    text_value(field.text())
}

/// Writes the number to the field.
pub fn set_value(field: &mut impl EditableText, value: impl Into<Number>) {
    field.set_text(value.into().to_string());
}
