//! Wraith CLI library.
//!
//! This crate provides the command implementations behind the `wraithcfg`
//! binary: settings file checking and repair, value inspection and editing,
//! and environment diagnostics.

pub mod commands;
