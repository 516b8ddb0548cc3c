use std::{
    io,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use crossterm::event::{self, Event::Key, KeyCode, KeyEventKind};
use ratatui::{prelude::*, widgets::*};

use crate::algo::tabular::Outcome;

use super::{tui, Update};

// Bar heights for the categorical outcome axis
const SUCCESS_BAR: u64 = 2;
const FAILURE_BAR: u64 = 1;

#[derive(Default)]
pub enum State {
    #[default]
    Train,
    Error(&'static str),
    Quit,
}

/// The root TUI component which holds the outcome history and runs the render loop
pub struct App {
    state: State,
    episode: u16,
    total_episodes: u16,
    outcomes: Vec<u64>,
}

impl App {
    pub fn new(episodes: u16) -> Self {
        Self {
            state: Default::default(),
            episode: 0,
            total_episodes: episodes,
            outcomes: Vec::with_capacity(episodes.into()),
        }
    }

    /// Initialize the terminal and run the main loop
    ///
    /// Restores the terminal on exit
    pub fn run(&mut self, rx: Receiver<Update>) -> io::Result<()> {
        let mut terminal = tui::init()?;

        loop {
            match self.state {
                State::Train => loop {
                    match rx.try_recv() {
                        Ok(Update { episode, outcome }) => {
                            self.episode = episode;
                            self.outcomes.push(match outcome {
                                Outcome::Success => SUCCESS_BAR,
                                Outcome::Failure => FAILURE_BAR,
                            });
                        }
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => {
                            self.state = State::Error("Channel disconnected.");
                            break;
                        }
                    }
                },
                State::Error(_) => {}
                State::Quit => break,
            }

            terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;

            if event::poll(Duration::from_millis(16))? {
                if let Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') {
                        self.state = State::Quit;
                    }
                }
            }
        }

        tui::restore()
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(3)])
            .split(area);

        // One bar per episode, most recent window that fits the chart
        let window = usize::from(vert[0].width.saturating_sub(2));
        let start = self.outcomes.len().saturating_sub(window);
        let bars = self.outcomes[start..]
            .iter()
            .map(|&v| Bar::default().value(v).text_value(String::new()))
            .collect::<Vec<_>>();

        BarChart::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Outcome per episode (tall = Success, short = Failure)"),
            )
            .bar_width(1)
            .bar_gap(0)
            .max(SUCCESS_BAR)
            .bar_style(Style::default().cyan())
            .data(BarGroup::default().bars(&bars))
            .render(vert[0], buf);

        if let State::Error(msg) = self.state {
            Paragraph::new(msg)
                .red()
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .title("Error"),
                )
                .render(vert[1], buf);
        } else {
            Gauge::default()
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .title("Progress (q to quit)"),
                )
                .gauge_style(Color::Cyan)
                .ratio(f64::from(self.episode + 1) / f64::from(self.total_episodes.max(1)))
                .render(vert[1], buf);
        }
    }
}
