//! Newsletter Dispatch - Composition and Delivery Orchestration Core
//!
//! This crate implements newsletter issue composition (slot allocation
//! of editorial content), the issue lifecycle state machine, and
//! batch-send delivery orchestration against an external campaign
//! provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
