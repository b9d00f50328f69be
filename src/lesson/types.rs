// SPDX-License-Identifier: MIT

//! YAML schema types for lessons
//!
//! A lesson is an ordered list of example blocks. Each block binds a few
//! literal variables and runs a body of print and branch statements.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::condition::{self, Expression};
use crate::error::{ConditionError, LessonError};

/// Top-level lesson definition
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Lesson {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub blocks: Vec<Block>,
}

/// One example block
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Block {
    pub title: String,
    /// Literal values bound before the body runs
    #[serde(default)]
    pub bindings: BTreeMap<String, Value>,
    pub body: Vec<Statement>,
}

/// A statement inside a block body (`print: ...` or `if: ...`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Statement {
    /// Print one line
    Print { print: String },
    /// if / elif chain with an optional else
    If {
        #[serde(rename = "if")]
        chain: IfChain,
    },
}

/// Body of an `if:` statement
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IfChain {
    /// First entry is the `if`, the rest are `elif`s
    pub branches: Vec<Branch>,
    #[serde(rename = "else", default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Vec<Statement>>,
}

/// A guarded arm of an if / elif chain
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Branch {
    /// Condition source, e.g. `age < 18`
    pub when: String,
    pub then: Vec<Statement>,
    #[serde(skip)]
    parsed: OnceCell<Expression>,
}

impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.when == other.when && self.then == other.then
    }
}

impl Statement {
    pub fn print(line: impl Into<String>) -> Self {
        Statement::Print { print: line.into() }
    }

    pub fn if_chain(branches: Vec<Branch>, otherwise: Option<Vec<Statement>>) -> Self {
        Statement::If {
            chain: IfChain {
                branches,
                otherwise,
            },
        }
    }
}

impl Branch {
    pub fn new(when: impl Into<String>, then: Vec<Statement>) -> Self {
        Self {
            when: when.into(),
            then,
            parsed: OnceCell::new(),
        }
    }

    /// The parsed `when` condition, parsed once and then reused
    pub fn condition(&self) -> Result<&Expression, ConditionError> {
        self.parsed.get_or_try_init(|| condition::parse(&self.when))
    }
}

impl Lesson {
    /// Look up a block by its title
    pub fn block(&self, title: &str) -> Result<&Block, LessonError> {
        self.blocks
            .iter()
            .find(|b| b.title == title)
            .ok_or_else(|| LessonError::UnknownBlock(title.to_string()))
    }
}

impl Block {
    /// Copy of this block with one binding replaced
    pub fn rebind(&self, name: &str, value: impl Into<Value>) -> Block {
        let mut block = self.clone();
        block.bindings.insert(name.to_string(), value.into());
        block
    }

    /// Every branch in the body, including nested ones
    pub fn branches(&self) -> Vec<&Branch> {
        let mut out = Vec::new();
        collect_branches(&self.body, &mut out);
        out
    }
}

fn collect_branches<'a>(statements: &'a [Statement], out: &mut Vec<&'a Branch>) {
    for statement in statements {
        if let Statement::If { chain } = statement {
            for branch in &chain.branches {
                out.push(branch);
                collect_branches(&branch.then, out);
            }
            if let Some(otherwise) = &chain.otherwise {
                collect_branches(otherwise, out);
            }
        }
    }
}
