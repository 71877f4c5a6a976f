//! Spelling correction and request handling for tapefix.
//!
//! - [`lexicon`] -- word-frequency table, loaded from text or built in
//! - [`speller`] -- the `Speller` trait and its lexicon adapter
//! - [`suggestion`] -- edit generators, cost tracking and the search strategy
//! - [`corrector`] -- the `Corrector` capability and the dictionary policy
//! - [`render`] -- the `Renderer` capability and the Graphviz renderer
//! - [`checker`] -- text in, status message and diagram artifact out

pub mod checker;
pub mod corrector;
pub mod lexicon;
pub mod render;
pub mod speller;
pub mod suggestion;

pub use checker::{Assessment, CheckError, CheckResponse, Checker, CheckerOptions};
pub use corrector::{Corrector, DictionaryCorrector};
pub use lexicon::{Lexicon, LexiconError};
pub use render::{GraphvizRenderer, ImageFormat, RenderError, Renderer};
