//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard pieces and report user actions back to the
//! page through callbacks.

pub mod canvas_card;
pub mod fatal_notice;
pub mod share_panel;
