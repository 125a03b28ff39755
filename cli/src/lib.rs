// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front end for the weiqi rules engine.

pub mod bot;
pub mod config;
pub mod input;
pub mod render;
