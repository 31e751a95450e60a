//! TUI widgets for the analytics browser.

pub mod chart;
pub mod header;
pub mod question_list;
pub mod status_bar;
pub mod summary_table;
pub mod text_answers;
