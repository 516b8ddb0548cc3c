use std::{
    io,
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

use crate::algo::tabular::Outcome;

mod app;
mod tui;

pub use app::App;

/// Format for updating the outcome chart
pub struct Update {
    pub episode: u16,
    pub outcome: Outcome,
}

/// Spawn the visualization app on its own thread
///
/// The app renders a categorical bar chart of episode outcomes as updates arrive
/// and stays open until `q` is pressed.
///
/// **Returns** the app's join handle and the sending half of the update channel
pub fn init(episodes: u16) -> (JoinHandle<io::Result<()>>, Sender<Update>) {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(episodes);
    let handle = thread::spawn(move || app.run(rx));
    (handle, tx)
}
