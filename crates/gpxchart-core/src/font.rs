// File: crates/gpxchart-core/src/font.rs
// Summary: One-time resolution of the font directory and the serif label font inside it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::{ChartError, Result};

/// File looked up inside the font directory.
pub const FONT_FILE: &str = "luxisr.ttf";
/// Family name the loaded font is registered under.
pub const FONT_FAMILY: &str = "luxi";

static RESOLVED: OnceLock<Mutex<HashMap<PathBuf, Arc<FontSource>>>> = OnceLock::new();

/// A resolved font directory and, when present, the bytes of its label font.
pub struct FontSource {
    dir: PathBuf,
    data: Option<Arc<[u8]>>,
}

impl FontSource {
    /// Resolve the first existing directory in `dirs`.
    ///
    /// Resolution happens once per directory for the whole process; later
    /// calls (from any thread) get the same handle back.
    pub fn resolve<P: AsRef<Path>>(dirs: &[P]) -> Result<Arc<FontSource>> {
        let Some(dir) = dirs.iter().map(AsRef::as_ref).find(|d| d.is_dir()) else {
            return Err(ChartError::NoFontDir(dirs.iter().map(|d| d.as_ref().to_path_buf()).collect()));
        };

        let cache = RESOLVED.get_or_init(|| Mutex::new(HashMap::new()));
        let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = cache.get(dir) {
            return Ok(Arc::clone(found));
        }

        let source = Arc::new(Self::load(dir)?);
        cache.insert(dir.to_path_buf(), Arc::clone(&source));
        Ok(source)
    }

    fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(FONT_FILE);
        let data = if path.is_file() {
            let bytes = std::fs::read(&path).map_err(|source| ChartError::FontRead { path: path.clone(), source })?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded label font");
            Some(Arc::from(bytes))
        } else {
            tracing::debug!(dir = %dir.display(), "{FONT_FILE} not found, using system serif font");
            None
        };
        Ok(Self { dir: dir.to_path_buf(), data })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Raw bytes of the label font, if the directory had one.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("dir", &self.dir)
            .field("font_bytes", &self.data.as_ref().map(|d| d.len()))
            .finish()
    }
}
