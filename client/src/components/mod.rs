//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard surfaces from state handed down by the page.

pub mod property_selector;
pub mod revenue_summary;
