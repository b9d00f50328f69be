// SPDX-License-Identifier: MIT

//! Sequential lesson runner
//!
//! Runs each block in order against a fresh scope and writes the printed
//! lines, followed by a separator, to any `io::Write` sink.

use std::io::Write;

use super::condition;
use super::scope::Scope;
use super::types::{Block, Branch, Lesson, Statement};
use crate::error::LessonError;

/// Separator printed after each block unless configured otherwise
pub const DEFAULT_SEPARATOR: &str = "---";

/// Output settings for a [`Runner`]
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Line written after every block
    pub separator: String,
    /// Whether the last block is also followed by the separator
    pub trailing_separator: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            trailing_separator: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run every block of the lesson in order
    pub fn run<W: Write>(&self, lesson: &Lesson, out: &mut W) -> Result<(), LessonError> {
        let last = lesson.blocks.len().saturating_sub(1);
        for (i, block) in lesson.blocks.iter().enumerate() {
            self.execute_block(block, out)?;
            if i < last || self.config.trailing_separator {
                writeln!(out, "{}", self.config.separator)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Run a single block as the last block of a lesson
    pub fn run_block<W: Write>(&self, block: &Block, out: &mut W) -> Result<(), LessonError> {
        self.execute_block(block, out)?;
        if self.config.trailing_separator {
            writeln!(out, "{}", self.config.separator)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Lines the lesson prints, separators included
    pub fn transcript(&self, lesson: &Lesson) -> Result<Vec<String>, LessonError> {
        let mut buf = Vec::new();
        self.run(lesson, &mut buf)?;
        Ok(into_lines(buf))
    }

    /// Lines a single block prints
    pub fn block_transcript(&self, block: &Block) -> Result<Vec<String>, LessonError> {
        let mut buf = Vec::new();
        self.run_block(block, &mut buf)?;
        Ok(into_lines(buf))
    }

    fn execute_block<W: Write>(&self, block: &Block, out: &mut W) -> Result<(), LessonError> {
        let scope = Scope::from_bindings(&block.bindings);
        log::debug!("Running block '{}' with {}", block.title, scope.to_json());
        self.execute(&block.title, &block.body, &scope, out)
    }

    fn execute<W: Write>(
        &self,
        title: &str,
        statements: &[Statement],
        scope: &Scope,
        out: &mut W,
    ) -> Result<(), LessonError> {
        for statement in statements {
            match statement {
                Statement::Print { print } => writeln!(out, "{}", print)?,
                Statement::If { chain } => match select(title, &chain.branches, scope)? {
                    Some(then) => self.execute(title, then, scope, out)?,
                    None => {
                        if let Some(otherwise) = &chain.otherwise {
                            log::trace!("{}: else taken", title);
                            self.execute(title, otherwise, scope, out)?;
                        } else {
                            log::trace!("{}: no branch taken", title);
                        }
                    }
                },
            }
        }
        Ok(())
    }
}

/// Body of the first branch whose condition holds
fn select<'a>(
    title: &str,
    branches: &'a [Branch],
    scope: &Scope,
) -> Result<Option<&'a [Statement]>, LessonError> {
    for branch in branches {
        let expr = branch
            .condition()
            .map_err(|e| LessonError::condition(title, e))?;
        if condition::evaluate(expr, scope) {
            log::trace!("{}: '{}' taken", title, branch.when);
            return Ok(Some(&branch.then));
        }
    }
    Ok(None)
}

fn into_lines(buf: Vec<u8>) -> Vec<String> {
    String::from_utf8_lossy(&buf)
        .lines()
        .map(str::to_string)
        .collect()
}
