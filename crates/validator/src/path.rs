//! Nested lookup with an optional post-processing step
//!
//! [`extract_path`] walks a [`Value`] tree one [`PathSegment`] at a time and
//! stops early when it reaches a value it cannot descend into. The value at
//! the stop point is handed to the post-processor, usually a
//! [`Coercion`](crate::pipeline::Coercion).

use std::fmt;

use crate::foundation::{PathError, PostProcess};
use crate::value::Value;

/// One step of a path: a map key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    /// Negative indices count from the end of the list.
    Index(i64),
}

impl PathSegment {
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key:?}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<i32> for PathSegment {
    fn from(index: i32) -> Self {
        PathSegment::Index(i64::from(index))
    }
}

impl From<i64> for PathSegment {
    fn from(index: i64) -> Self {
        PathSegment::Index(index)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<isize> for PathSegment {
    fn from(index: isize) -> Self {
        PathSegment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Looks up `path` in `source` and post-processes the value reached.
///
/// Descent continues only while segments remain and the value just looked
/// up is a map or list; any segments left after a scalar are ignored. An
/// empty path selects `source` itself.
///
/// # Errors
///
/// Returns a [`PathError`] for a missing key, an out-of-range index, or a
/// segment that cannot address the current node.
///
/// # Examples
///
/// ```
/// use strata_validator::path;
/// use strata_validator::path::extract_path;
/// use strata_validator::value::Value;
///
/// let source: Value = [("second", Value::strings(["blah"]))].into_iter().collect();
/// assert_eq!(extract_path(&source, &path!["second", 0], None), Ok(Value::from("blah")));
/// ```
pub fn extract_path(
    source: &Value,
    path: &[PathSegment],
    post_processor: Option<&dyn PostProcess>,
) -> Result<Value, PathError> {
    let mut current = source;
    let mut segments = path.iter().enumerate().peekable();

    while let Some((depth, segment)) = segments.next() {
        current = lookup(current, segment, depth)?;
        if segments.peek().is_none() || !current.is_container() {
            break;
        }
    }

    let reached = current.clone();
    Ok(match post_processor {
        Some(post) => post.process(reached),
        None => reached,
    })
}

fn lookup<'a>(node: &'a Value, segment: &PathSegment, depth: usize) -> Result<&'a Value, PathError> {
    match (node, segment) {
        (Value::Map(map), PathSegment::Key(key)) => map.get(key).ok_or_else(|| PathError::MissingKey {
            key: key.clone(),
            depth,
        }),
        (Value::Map(map), PathSegment::Index(index)) => {
            let key = index.to_string();
            map.get(&key)
                .ok_or(PathError::MissingKey { key, depth })
        }
        (Value::List(items), PathSegment::Index(index)) => resolve_index(*index, items.len())
            .and_then(|i| items.get(i))
            .ok_or(PathError::IndexOutOfRange {
                index: *index,
                len: items.len(),
                depth,
            }),
        (node, segment) => Err(PathError::InvalidSegment {
            segment: segment.to_string(),
            found: node.kind(),
            depth,
        }),
    }
}

fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index >= 0 {
        usize::try_from(index).ok()?
    } else {
        len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    };
    (resolved < len).then_some(resolved)
}
