//! Core type definitions for the window-manager core
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by the stable string id they were opened
/// under (typically an application id such as `"about"`). Ids are
/// unique among currently-open windows.
pub type WindowId = String;
