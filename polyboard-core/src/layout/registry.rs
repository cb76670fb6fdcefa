//! The immutable set of layouts available to a keyboard.

use std::path::Path;
use std::sync::Arc;

use crate::types::KeyboardLayout;
use super::error::{LayoutError, Result};
use super::loader::LayoutLoader;

/// Locale selected when nothing else is requested
pub const DEFAULT_LOCALE: &str = "en_US";

/// Layout assets compiled into the crate
const BUILTIN_LAYOUTS: &[(&str, &str)] = &[
    ("de_de.json", include_str!("../../layouts/de_de.json")),
    ("en_us.json", include_str!("../../layouts/en_us.json")),
    ("fr_fr.json", include_str!("../../layouts/fr_fr.json")),
];

/// Loaded layouts in picker order. Layouts are shared read-only, so any
/// number of sessions may hold the same `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LayoutSet {
    layouts: Vec<Arc<KeyboardLayout>>,
}

impl LayoutSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layouts shipped with the crate
    pub fn builtin() -> Result<Self> {
        let mut set = Self::new();
        for (name, json) in BUILTIN_LAYOUTS {
            let layout = LayoutLoader::from_json(json).map_err(|e| {
                log::warn!("Built-in layout {} is invalid: {}", name, e);
                e
            })?;
            set.insert(layout)?;
        }
        Ok(set)
    }

    /// Load every `*.json` asset in a directory, in file name order
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let io_error = |source| LayoutError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            set.insert(LayoutLoader::from_file(&path)?)?;
        }
        log::debug!("Loaded {} layouts from {}", set.len(), dir.display());
        Ok(set)
    }

    /// Add a validated layout; locales must be unique within a set
    pub fn insert(&mut self, layout: KeyboardLayout) -> Result<Arc<KeyboardLayout>> {
        if self.get(&layout.locale_name).is_some() {
            return Err(LayoutError::DuplicateLocale(layout.locale_name));
        }
        let layout = Arc::new(layout);
        self.layouts.push(Arc::clone(&layout));
        Ok(layout)
    }

    /// Find a layout by locale name, e.g. "de_DE"
    pub fn get(&self, locale_name: &str) -> Option<Arc<KeyboardLayout>> {
        self.layouts
            .iter()
            .find(|layout| layout.locale_name == locale_name)
            .cloned()
    }

    /// Like [`LayoutSet::get`], but a missing locale is an error
    pub fn require(&self, locale_name: &str) -> Result<Arc<KeyboardLayout>> {
        self.get(locale_name)
            .ok_or_else(|| LayoutError::UnknownLocale(locale_name.to_string()))
    }

    /// The default layout, falling back to the first one loaded
    pub fn default_layout(&self) -> Option<Arc<KeyboardLayout>> {
        self.get(DEFAULT_LOCALE).or_else(|| self.layouts.first().cloned())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<KeyboardLayout>> {
        self.layouts.iter()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
