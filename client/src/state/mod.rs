//! Client state modules.
//!
//! DESIGN
//! ======
//! The shared `AppState` lives in one signal (`store`). Page-local state such
//! as the history selection stays in plain signals owned by the page.

pub mod store;
