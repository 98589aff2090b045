//! Schema-driven debug panel layer.
//!
//! The panel surface itself (widgets, layout) lives outside this crate;
//! here we own its state machine and the JSON bridge it talks through.

mod panel;

pub use panel::{
    schema_json, stats_json, DebugPanel, PanelAction, PanelController,
};
