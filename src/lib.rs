//! Moltdex - directory of projects built on the Moltbook platform
//!
//! The catalog query engine lives in [`catalog`]; [`rest`] exposes it
//! over HTTP alongside the submission intake in [`submit`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod rest;
pub mod submit;
