//!
//! Two number inputs. Tab/BackTab or a click switches the focus, Esc quits.
//!
//! Place the cursor behind a digit and use the mouse wheel.
//!
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::ExecutableCommand;
use rat_event::{ct_event, HandleEvent, Regular};
use rat_focus::{Focus, FocusBuilder};
use rat_text::event::TextOutcome;
use rat_text::HasScreenCursor;
use rat_wheel_input::{WheelInput, WheelInputState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::{DefaultTerminal, Frame};
use std::cmp::min;
use std::fs;
use std::io::stdout;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        amount: WheelInputState::named("amount").with_max_len(15),
        percent: WheelInputState::named("percent")
            .with_range(0, 100)
            .with_max_len(6),
        status: String::new(),
    };
    state.percent.set_value(12.5);
    focus(&state).first();

    let mut terminal = ratatui::init();
    stdout().execute(EnableMouseCapture)?;

    let r = run_ui(&mut terminal, &mut state);

    stdout().execute(DisableMouseCapture)?;
    ratatui::restore();

    r
}

struct State {
    amount: WheelInputState,
    percent: WheelInputState,
    status: String,
}

fn run_ui(terminal: &mut DefaultTerminal, state: &mut State) -> Result<(), anyhow::Error> {
    loop {
        terminal.draw(|frame| render(frame, state))?;

        let event = crossterm::event::read()?;
        if let ct_event!(keycode press Esc) = &event {
            return Ok(());
        }

        handle(&event, state);
    }
}

fn render(frame: &mut Frame<'_>, state: &mut State) {
    let l = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(2)
    .split(frame.area());

    let input = |area: Rect| Rect::new(area.x, area.y, min(17, area.width), 1);

    Line::from("Enter a number:").render(l[0], frame.buffer_mut());
    WheelInput::new()
        .style(Style::new().black().on_gray())
        .focus_style(Style::new().black().on_cyan())
        .select_style(Style::new().black().on_yellow())
        .placeholder("number")
        .placeholder_style(Style::new().dark_gray().on_gray())
        .render(input(l[1]), frame.buffer_mut(), &mut state.amount);

    Line::from("Percent (0..100):").render(l[3], frame.buffer_mut());
    WheelInput::new()
        .style(Style::new().black().on_gray())
        .focus_style(Style::new().black().on_cyan())
        .select_style(Style::new().black().on_yellow())
        .render(input(l[4]), frame.buffer_mut(), &mut state.percent);

    if let Some(cursor) = state
        .amount
        .screen_cursor()
        .or_else(|| state.percent.screen_cursor())
    {
        frame.set_cursor_position(cursor);
    }

    Line::from(state.status.as_str())
        .style(Style::new().dark_gray())
        .render(l[6], frame.buffer_mut());
}

fn focus(state: &State) -> Focus {
    let mut builder = FocusBuilder::new(None);
    builder.widget(&state.amount);
    builder.widget(&state.percent);
    builder.build()
}

fn handle(event: &Event, state: &mut State) {
    let mut focus = focus(state);
    _ = focus.handle(event, Regular);

    let r1 = state.amount.handle(event, Regular);
    let r2 = state.percent.handle(event, Regular);

    if r1 == TextOutcome::TextChanged || r2 == TextOutcome::TextChanged {
        state.status = format!(
            "amount {}  percent {}",
            state.amount.value(),
            state.percent.value()
        );
        log::debug!("{}", state.status);
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("log.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
