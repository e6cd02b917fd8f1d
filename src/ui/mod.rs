//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the outlet viewer:
//! - Header panel (dataset controls, cart count)
//! - Tag bar (section chips)
//! - Outlet page (outlet header, sticky section headers, cells)
//! - Status bar (load and scroll state)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod tag_bar;
pub mod outlet_header;
pub mod outlet_page;
pub mod status_bar;
pub mod panel_manager;
