//! Page-owned state structs.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by their owning
//! component. Keeping them free of Leptos types makes the transition rules
//! testable without a reactive runtime.

pub mod properties;
pub mod revenue;
