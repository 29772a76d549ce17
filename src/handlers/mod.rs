//! Menu action handlers for the task tracker
//!
//! This module contains the implementation of every menu action.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod complete;
pub mod completed;
pub mod list;
pub mod urgent;
