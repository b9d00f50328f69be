// SPDX-License-Identifier: MIT

//! Conditional branching demonstrations
//!
//! Example blocks bind a few literal variables, pick a branch by evaluating
//! a condition, and print the chosen line followed by a separator.

pub mod error;
pub mod lesson;
