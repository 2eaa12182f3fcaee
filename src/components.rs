//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! types (home, repositories, articles). Components handle specific UI
//! elements with consistent styling and behavior.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod pager;
pub mod repo_table;
pub mod snippet;
