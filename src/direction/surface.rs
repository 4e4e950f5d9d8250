//! The active UI root and the one write this crate performs on it.
//!
//! Pure helpers never touch this module. `apply_dir_to` works on any
//! [`DirectionSurface`]; `apply_document_dir` targets the process-wide root.

use super::language::{get_dir, Direction};
use serde::Serialize;
use std::sync::{Mutex, OnceLock};
use tracing::info;

/// Language written to the root when no tag is given.
pub const DEFAULT_LANG: &str = "en";

/// Something that carries `dir` and `lang` attributes.
pub trait DirectionSurface {
    fn set_direction(&mut self, dir: Direction, lang: &str);
}

/// The root element's direction and language attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootAttributes {
    pub dir: Direction,
    pub lang: String,
}

impl Default for RootAttributes {
    fn default() -> Self {
        Self {
            dir: Direction::Ltr,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl DirectionSurface for RootAttributes {
    fn set_direction(&mut self, dir: Direction, lang: &str) {
        self.dir = dir;
        self.lang = lang.to_string();
    }
}

static DOCUMENT_ROOT: OnceLock<Mutex<RootAttributes>> = OnceLock::new();

fn document_root_cell() -> &'static Mutex<RootAttributes> {
    DOCUMENT_ROOT.get_or_init(|| Mutex::new(RootAttributes::default()))
}

/// Resolve the direction for `tag` and write it to `surface`.
pub fn apply_dir_to<S: DirectionSurface + ?Sized>(surface: &mut S, tag: Option<&str>) -> Direction {
    let dir = get_dir(tag);
    let lang = tag
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_LANG);
    surface.set_direction(dir, lang);
    dir
}

/// Apply the direction for `tag` to the process-wide document root.
///
/// Intended to be called from the UI thread on each language switch.
pub fn apply_document_dir(tag: Option<&str>) -> Direction {
    // Poisoning is ignored: the guarded data is two plain attributes.
    let mut root = document_root_cell()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let previous = root.dir;
    let dir = apply_dir_to(&mut *root, tag);
    if previous != dir {
        info!("Document direction changed: {} -> {} (lang={})", previous, dir, root.lang);
    }
    dir
}

/// Snapshot of the document root's current attributes.
pub fn document_root() -> RootAttributes {
    document_root_cell()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
