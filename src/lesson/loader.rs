//! Lesson loader - YAML parsing and validation
//!
//! Deserializes a lesson document and checks that every branch condition
//! parses and only reads variables its block binds.

use super::types::Lesson;
use crate::error::LessonError;

/// Loads lesson definitions from YAML documents
pub struct LessonLoader;

impl LessonLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate a lesson from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Lesson, LessonError> {
        let lesson: Lesson = serde_yaml::from_str(content)?;
        Self::validate(&lesson)?;
        log::debug!(
            "Parsed lesson '{}' with {} blocks",
            lesson.name,
            lesson.blocks.len()
        );
        Ok(lesson)
    }

    /// Check every condition in the lesson against its block's bindings
    pub fn validate(lesson: &Lesson) -> Result<(), LessonError> {
        for block in &lesson.blocks {
            for branch in block.branches() {
                let expr = branch
                    .condition()
                    .map_err(|e| LessonError::condition(&block.title, e))?;
                if let Some(name) = expr
                    .variables()
                    .into_iter()
                    .find(|name| !block.bindings.contains_key(*name))
                {
                    return Err(LessonError::unbound(&block.title, name));
                }
            }
        }
        Ok(())
    }
}

impl Default for LessonLoader {
    fn default() -> Self {
        Self::new()
    }
}
