//! UI layer: the step progress widget, themes, and the interactive demo.

pub mod app;
pub mod main;
pub mod runtime;
pub mod theme;
pub mod widgets;
