//! Element identity.
//!
//! An id is how an element is found again after the canvas around it has
//! changed: history snapshots are independent copies, so after an undo the
//! "same" element is a different value carrying the same id. Ids are
//! interned strings, which keeps them `Copy` and makes the id-by-id scans
//! in the canvas layer integer comparisons. Template-authored ids like
//! `"fiesta-title"` and generated ones like `"text_7"` share one
//! namespace.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide interner backing every element id.
static IDS: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Suffix counter for generated ids. Shared across all kind prefixes, so
/// a generated id cannot collide with one handed out earlier in the
/// session, whatever its prefix was.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier of a canvas element.
///
/// Assigned at creation and never reused. On the wire (templates,
/// exported snapshots) an id is a plain string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Id for a known string, e.g. one authored in a template.
    pub fn intern(s: &str) -> Self {
        ElementId(IDS.get_or_intern(s))
    }

    /// Allocate an id for a newly created element: the kind prefix plus
    /// the next counter value (`text_4`, `sticker_5`, ...).
    pub fn fresh(prefix: &str) -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }

    /// The string form of this id.
    pub fn as_str(&self) -> &str {
        IDS.resolve(&self.0)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::intern(&s))
    }
}
