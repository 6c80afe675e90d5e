//! Searcher core logic

pub mod command;
pub mod debounce;
pub mod presentation;
pub mod selection;
pub mod sequence;
pub mod state;

pub use command::parse_line;
pub use debounce::Debouncer;
pub use presentation::{build_toolbar, build_view, render, SearchView, ToolbarView};
pub use selection::Selection;
pub use sequence::{fizz_buzz, SequenceItem};
pub use state::SearchState;
