//! Input validation for allocation problems.
//!
//! Checks structural integrity of tasks and resources before an engine
//! run. Detects:
//! - Duplicate IDs
//! - Non-positive task lengths, processing rates, or cost rates
//! - Empty task or resource lists
//! - Datasets too small for the requested group/batch coverage
//!
//! The engines themselves trust these contracts and perform no bounds
//! checking of their own.

use std::collections::HashSet;

use crate::models::{Resource, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A numeric property must be positive but is not.
    NonPositiveValue,
    /// A required list is empty.
    EmptyInput,
    /// The dataset cannot cover the requested group/batch layout.
    InsufficientCoverage,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for an allocation problem.
///
/// Checks:
/// 1. Task and resource lists are non-empty
/// 2. No duplicate task IDs
/// 3. No duplicate resource IDs
/// 4. Every task length is positive
/// 5. Every resource processing rate and cost rate is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Task list is empty",
        ));
    }
    if resources.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Resource list is empty",
        ));
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if task.length <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Task {} has non-positive length {}", task.id, task.length),
            ));
        }
    }

    let mut resource_ids = HashSet::new();
    for resource in resources {
        if !resource_ids.insert(resource.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", resource.id),
            ));
        }
        if resource.mips <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!(
                    "Resource {} has non-positive processing rate {}",
                    resource.id, resource.mips
                ),
            ));
        }
        if resource.cost_per_mips <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!(
                    "Resource {} has non-positive cost rate {}",
                    resource.id, resource.cost_per_mips
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that the dataset is large enough for a group/batch layout.
///
/// The fitness evaluator reads task slot `(group - 1) * slots + batch *
/// resources.len() + i` for `i < slots`, so every (group, batch) pair the
/// driver intends to run must stay within the task list, and the resource
/// list must cover the per-group slot count.
pub fn validate_coverage(
    tasks: &[Task],
    resources: &[Resource],
    groups: usize,
    batches: usize,
    slots: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if resources.len() < slots {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCoverage,
            format!(
                "{} resources cannot cover {slots} slots per group",
                resources.len()
            ),
        ));
    }

    let required_tasks = groups * slots + batches.saturating_sub(1) * resources.len();
    if tasks.len() < required_tasks {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCoverage,
            format!(
                "{} tasks cannot cover {groups} groups x {batches} batches of {slots} slots \
                 ({required_tasks} required)",
                tasks.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
