//!
//! Number input that changes single digits with the mouse wheel.
//!
//! * Accepts signed decimal numbers only. Edits that would produce
//!   anything else are rejected.
//! * Scrolling the wheel over the focused input adds/subtracts
//!   the place value of the digit left of the cursor.
//! * Keeps the number of decimal places.
//! * Optional value range.
//! * Completes unfinished input like `3.` or `-` when the focus leaves.
//!
//! The visual cursor must be set separately after rendering.
//! It is accessible as [WheelInputState::screen_cursor()] after rendering.
//!
//! Event handling by calling the freestanding fn [handle_events].
//! There's [handle_mouse_events] if you want to override the default key bindings but keep
//! the mouse behaviour.
//!
use crate::_private::NonExhaustive;
use crate::core::{is_number_text, EditableText, Number, NumberRange, WheelDirection};
use crate::NumberError;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::RelocatableState;
use rat_text::event::TextOutcome;
use rat_text::text_input::{TextInput, TextInputState};
use rat_text::{upos_type, HasScreenCursor, TextStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Number input widget.
///
/// # Stateful
/// This widget implements [`StatefulWidget`], you can use it with
/// [`WheelInputState`] to handle common actions.
#[derive(Debug, Default, Clone)]
pub struct WheelInput<'a> {
    widget: TextInput<'a>,
    placeholder: &'a str,
    placeholder_style: Style,
}

/// State & event handling.
#[derive(Debug, Clone)]
pub struct WheelInputState {
    /// Base text input.
    pub widget: TextInputState,

    /// Value range.
    range: NumberRange,
    /// Maximum text length in graphemes.
    max_len: Option<upos_type>,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> WheelInput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the combined style.
    #[inline]
    pub fn styles(mut self, style: TextStyle) -> Self {
        self.widget = self.widget.styles(style);
        self
    }

    /// Base text style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.style(style);
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.focus_style(style);
        self
    }

    /// Style for selection
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.select_style(style);
        self
    }

    /// Style for the invalid indicator.
    #[inline]
    pub fn invalid_style(mut self, style: impl Into<Style>) -> Self {
        self.widget = self.widget.invalid_style(style);
        self
    }

    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.widget = self.widget.block(block);
        self
    }

    /// Text shown while the input is empty.
    #[inline]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Style for the placeholder.
    #[inline]
    pub fn placeholder_style(mut self, style: impl Into<Style>) -> Self {
        self.placeholder_style = style.into();
        self
    }
}

impl StatefulWidget for WheelInput<'_> {
    type State = WheelInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.widget.render(area, buf, &mut state.widget);

        if !self.placeholder.is_empty() && state.is_empty() {
            Span::styled(self.placeholder, self.placeholder_style).render(state.widget.inner, buf);
        }
    }
}

impl Default for WheelInputState {
    fn default() -> Self {
        Self {
            widget: Default::default(),
            range: Default::default(),
            max_len: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for WheelInputState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.widget.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.widget.area
    }
}

impl EditableText for WheelInputState {
    #[inline]
    fn text(&self) -> &str {
        self.widget.text()
    }

    #[inline]
    fn set_text(&mut self, text: String) {
        self.widget.set_text(text);
    }

    #[inline]
    fn cursor(&self) -> upos_type {
        self.widget.cursor()
    }

    #[inline]
    fn set_cursor(&mut self, cursor: upos_type) {
        self.widget.set_cursor(cursor, false);
    }
}

impl WheelInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            widget: TextInputState::named(name),
            ..Default::default()
        }
    }

    /// Set the value range.
    pub fn with_range(mut self, minimum: impl Into<Number>, maximum: impl Into<Number>) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    /// Limit the text length.
    pub fn with_max_len(mut self, max_len: upos_type) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Maximum text length in graphemes.
    #[inline]
    pub fn max_len(&self) -> Option<upos_type> {
        self.max_len
    }

    /// Limit the text length. This applies to new edits only,
    /// the current text is left as is.
    #[inline]
    pub fn set_max_len(&mut self, max_len: Option<upos_type>) {
        self.max_len = max_len;
    }

    /// Renders the widget in invalid style.
    #[inline]
    pub fn set_invalid(&mut self, invalid: bool) {
        self.widget.invalid = invalid;
    }

    /// Renders the widget in invalid style.
    #[inline]
    pub fn invalid(&self) -> bool {
        self.widget.invalid
    }
}

impl WheelInputState {
    /// Value range.
    #[inline]
    pub fn range(&self) -> NumberRange {
        self.range
    }

    #[inline]
    pub fn minimum(&self) -> f64 {
        self.range.minimum()
    }

    #[inline]
    pub fn maximum(&self) -> f64 {
        self.range.maximum()
    }

    /// Set the value range. The bounds are swapped if necessary.
    ///
    /// If the current value is outside the new range, it's replaced
    /// with the nearest bound.
    pub fn set_range(&mut self, minimum: impl Into<Number>, maximum: impl Into<Number>) {
        let mut minimum = minimum.into();
        let mut maximum = maximum.into();
        if minimum.as_f64() > maximum.as_f64() {
            std::mem::swap(&mut minimum, &mut maximum);
        }
        self.range.set(minimum.as_f64(), maximum.as_f64());

        let current = self.value();
        if current < minimum.as_f64() {
            self.set_value(minimum);
        } else if current > maximum.as_f64() {
            self.set_value(maximum);
        }
    }

    /// Remove the value range.
    #[inline]
    pub fn clear_range(&mut self) {
        self.range.clear();
    }
}

impl WheelInputState {
    /// Empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widget.is_empty()
    }

    /// Text content.
    #[inline]
    pub fn text(&self) -> &str {
        self.widget.text()
    }

    /// Set the text. This is not checked against the number pattern.
    #[inline]
    pub fn set_text<S: Into<String>>(&mut self, s: S) {
        self.widget.set_text(s);
    }

    /// Reset to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.widget.clear();
    }

    /// Numeric value. Empty or unparseable text gives 0.
    #[inline]
    pub fn value(&self) -> f64 {
        crate::core::value(self)
    }

    /// Set the numeric value.
    ///
    /// Integers are written as integers, floats always with a
    /// decimal point.
    #[inline]
    pub fn set_value(&mut self, value: impl Into<Number>) {
        crate::core::set_value(self, value);
    }

    /// Parse the text as a number and set it as value.
    pub fn try_set_value_str(&mut self, value: &str) -> Result<(), NumberError> {
        let number = Number::from_str(value)?;
        self.set_value(number);
        Ok(())
    }

    /// Cursor position
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.widget.cursor()
    }

    /// Set the cursor position, reset selection.
    #[inline]
    pub fn set_cursor(&mut self, cursor: upos_type, extend_selection: bool) -> bool {
        self.widget.set_cursor(cursor, extend_selection)
    }

    /// Completes unfinished input. This is called by the event-handler
    /// when the focus is lost.
    ///
    /// Returns true if the text changed.
    pub fn focus_lost(&mut self) -> bool {
        crate::core::focus_lost(self)
    }

    /// Change the digit left of the cursor by one.
    ///
    /// Returns true if the text changed.
    pub fn wheel(&mut self, direction: WheelDirection) -> bool {
        let range = self.range;
        crate::core::wheel_step(self, &range, direction)
    }

    /// Is the text acceptable as content?
    fn accepts(&self, text: &str) -> bool {
        is_number_text(text)
            && self
                .max_len
                .map_or(true, |max| text.graphemes(true).count() as upos_type <= max)
    }
}

impl HasScreenCursor for WheelInputState {
    /// The current text cursor as an absolute screen position.
    #[inline]
    fn screen_cursor(&self) -> Option<(u16, u16)> {
        self.widget.screen_cursor()
    }
}

impl RelocatableState for WheelInputState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.widget.relocate(shift, clip);
    }
}

impl WheelInputState {
    fn handle_wheel(&mut self, event: &crossterm::event::Event) -> TextOutcome {
        let direction = match event {
            ct_event!(scroll up for x, y) => {
                if self.widget.area.contains(Position::new(*x, *y)) {
                    WheelDirection::Up
                } else {
                    return TextOutcome::Continue;
                }
            }
            ct_event!(scroll down for x, y) => {
                if self.widget.area.contains(Position::new(*x, *y)) {
                    WheelDirection::Down
                } else {
                    return TextOutcome::Continue;
                }
            }
            _ => return TextOutcome::Continue,
        };

        if !self.is_focused() {
            return TextOutcome::Continue;
        }

        // the wheel is always consumed over a focused input.
        if self.wheel(direction) {
            TextOutcome::TextChanged
        } else {
            TextOutcome::Unchanged
        }
    }

    /// Text after replacing the selection with `insert`.
    fn edited_text(&self, insert: &str) -> String {
        let selection = self.widget.selection();
        let mut text = String::new();
        let mut inserted = false;
        for (pos, g) in self.widget.text().graphemes(true).enumerate() {
            let pos = pos as upos_type;
            if pos == selection.start {
                text.push_str(insert);
                inserted = true;
            }
            if !selection.contains(&pos) {
                text.push_str(g);
            }
        }
        if !inserted {
            text.push_str(insert);
        }
        text
    }

    /// Insertions are checked before they reach the base input.
    /// Removing glyphs never breaks the number pattern, and undo/redo
    /// only return to earlier content.
    fn handle_edit(&mut self, event: &crossterm::event::Event) -> TextOutcome {
        if !self.is_focused() {
            return self.widget.handle(event, Regular);
        }

        let insert = match event {
            ct_event!(key press c)
            | ct_event!(key press SHIFT-c)
            | ct_event!(key press CONTROL_ALT-c) => Some(c.to_string()),
            ct_event!(key press CONTROL-'v') => self
                .widget
                .clipboard()
                .and_then(|clip| clip.get_string().ok()),
            _ => None,
        };

        if let Some(insert) = insert {
            let text = self.edited_text(&insert);
            if !self.accepts(&text) {
                log::debug!("reject {:?}", text);
                return TextOutcome::Unchanged;
            }
        }

        self.widget.handle(event, Regular)
    }
}

impl HandleEvent<crossterm::event::Event, Regular, TextOutcome> for WheelInputState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: Regular) -> TextOutcome {
        let normalized = self.lost_focus() && self.focus_lost();

        let mut r = self.handle_wheel(event);
        if !r.is_consumed() {
            r = self.handle_edit(event);
        }

        if normalized {
            TextOutcome::TextChanged
        } else {
            r
        }
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, TextOutcome> for WheelInputState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: MouseOnly) -> TextOutcome {
        let r = self.handle_wheel(event);
        if r.is_consumed() {
            r
        } else {
            self.widget.handle(event, MouseOnly)
        }
    }
}

/// Handle all events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut WheelInputState,
    focus: bool,
    event: &crossterm::event::Event,
) -> TextOutcome {
    state.widget.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut WheelInputState,
    event: &crossterm::event::Event,
) -> TextOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
