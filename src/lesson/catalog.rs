// SPDX-License-Identifier: MIT

//! Lessons compiled into the binary

use once_cell::sync::OnceCell;

use super::loader::LessonLoader;
use super::types::Lesson;
use crate::error::LessonError;

const CONDITIONALS_YAML: &str = include_str!("../../lessons/conditionals.yaml");

static BUILTIN: OnceCell<Lesson> = OnceCell::new();

/// The built-in conditionals lesson, parsed and validated on first use
pub fn builtin() -> Result<&'static Lesson, LessonError> {
    BUILTIN.get_or_try_init(|| LessonLoader::parse_yaml(CONDITIONALS_YAML))
}
