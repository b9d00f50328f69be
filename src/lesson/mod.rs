// SPDX-License-Identifier: MIT

pub mod catalog;
pub mod condition;
pub mod loader;
pub mod runner;
pub mod scope;
pub mod types;
