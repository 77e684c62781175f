//! The amdm library.
//!
//! A command-line client for the Android Management API: it manages
//! enterprises, policies, enrollment tokens, devices and device operations,
//! and keeps its settings in a small JSON configuration file.
//!
//! # Modules
//!
//! - `actions`: Command handlers, one submodule per command group
//! - `android_management`: reqwest client for the Android Management API
//! - `api`: The `ManagementApi` trait the handlers are written against
//! - `auth`: Service account and static access tokens
//! - `cli`: Dispatch from the parsed command line to a handler
//! - `commands`: CLI command and argument definitions
//! - `configuration`: Configuration file loading and saving
//! - `format`: Tables, detail dumps and saved JSON responses
//! - `model`: Data models for the API resources
//! - `resolution`: Enterprise scope resolution and resource names
//! - `setup`: First-run setup and credential check
//! - `validation`: Validators shared by prompts and flags

pub mod actions;
pub mod android_management;
pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod error_utils;
pub mod exit_codes;
pub mod format;
pub mod model;
pub mod resolution;
pub mod setup;
pub mod validation;
