//! Training ROI - Return-on-investment calculator for training programs
//!
//! This crate implements the computational core of a training ROI calculator:
//! cost and benefit arithmetic, payback period, chart projections, and the
//! display formatting consumed by a rendering layer. Report export and email
//! delivery sit behind ports so the core stays free of I/O.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
