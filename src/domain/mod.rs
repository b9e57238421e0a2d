//! Domain layer: the persisted quiz entities.
//!
//! A [`Question`] exclusively owns its [`Choice`] rows. The two are only
//! ever created together, from a [`NewQuestion`], so storage never holds
//! a choice without its parent question.

pub mod question;

pub use question::{Choice, NewChoice, NewQuestion, Question, is_storable_text};
