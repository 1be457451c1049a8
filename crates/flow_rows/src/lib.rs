//! Reference row-wrapping engine.
//!
//! Items of each section are packed into lines like words into a paragraph. Lines with several
//! items are justified across the content width, a lone item is centered, and every item is
//! vertically centered on its line. [`FlowRows`] exposes the result as a
//! [`flow_alignment::LayoutProvider`], the default layout the aligned positioner starts from.

mod config;
mod engine;
mod line_breaking;
mod rows;

pub use config::FlowRowsConfig;
pub use engine::FlowRows;
pub use line_breaking::{LineRange, break_into_lines};
pub use rows::{LineContext, justify_params, place_line};
