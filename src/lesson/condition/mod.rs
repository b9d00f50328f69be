// SPDX-License-Identifier: MIT

//! Condition evaluation for lesson branches
//!
//! This module provides parsing and evaluation of `when` conditions.
//! Conditions are simple expressions like:
//! - `age < 18`
//! - `is_student`
//! - `score > 80 and attendance > 75`

mod ast;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Expression, Literal};
pub use evaluator::evaluate;
pub use parser::parse;
