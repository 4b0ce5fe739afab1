//! `hunt-output` — presentation adapters for the geohunt framework.
//!
//! Both adapters implement `hunt_session::HuntObserver`:
//!
//! | Type                 | Output                                             |
//! |----------------------|----------------------------------------------------|
//! | [`ConsolePresenter`] | One text line per presentation change, to any `Write` |
//! | [`Recorder`]         | Every outbound call, kept in memory for assertions |
//!
//! The line formats live in [`text`] so other front-ends can reuse them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hunt_output::ConsolePresenter;
//!
//! let mut presenter = ConsolePresenter::new(std::io::stdout());
//! session.run(&mut feed, &mut presenter)?;
//! presenter.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod error;
pub mod recorder;
pub mod text;

#[cfg(test)]
mod tests;

pub use console::ConsolePresenter;
pub use error::{OutputError, OutputResult};
pub use recorder::{OutboundCall, Recorder};
