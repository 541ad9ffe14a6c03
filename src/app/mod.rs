//! Application core — pure loop logic, zero I/O.
//!
//! This module contains the rules for the doorbell loop: the heartbeat
//! cadence and the alarm branch.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
pub mod state;
