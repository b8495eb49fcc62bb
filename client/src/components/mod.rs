//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the home screen from props; the page owns the
//! store and wires their callbacks to `store::ops`.

pub mod details_modal;
pub mod geo_details;
pub mod history_list;
pub mod map_view;
