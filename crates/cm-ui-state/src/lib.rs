//! Clearmetrics Marketing UI State
//!
//! This crate holds the stateful pieces of the marketing site that are
//! worth testing in isolation: the testimonial carousel, the FAQ
//! accordion, and the mobile navigation menu. Everything here is plain
//! Rust with no framework dependency; the Leptos components in
//! `cm-marketing` keep these state machines inside signals and translate
//! DOM events into the operations below.

pub mod accordion;
pub mod carousel;
pub mod menu;

use thiserror::Error;

pub use accordion::Accordion;
pub use carousel::{Carousel, Ticker, ROTATION_PERIOD};
pub use menu::MobileMenu;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiStateError {
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("carousel requires at least one item")]
    Empty,
}

pub type UiStateResult<T> = Result<T, UiStateError>;
