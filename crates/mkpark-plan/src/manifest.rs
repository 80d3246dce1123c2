//! The fixed list of makefile paths
//!
//! [`Manifest`] is the ordered path list a rename pass walks. The built-in
//! list names every `Android.mk` the emulator build reads.

use serde::{Deserialize, Serialize};

use crate::entry::PathEntry;
use crate::token::TokenPair;

/// Relative paths of every makefile in the emulator source tree
///
/// Order is load-bearing: plans and emitted command lines follow it.
const EMULATOR_MAKEFILES: [&str; 16] = [
    "./Android.mk",
    "./distrib/googletest/Android.mk",
    "./distrib/jpeg-6b/Android.mk",
    "./distrib/ext4_utils/src/Android.mk",
    "./distrib/android-emugl/Android.mk",
    "./distrib/android-emugl/shared/OpenglCodecCommon/Android.mk",
    "./distrib/android-emugl/shared/emugl/common/Android.mk",
    "./distrib/android-emugl/host/libs/Translator/EGL/Android.mk",
    "./distrib/android-emugl/host/libs/Translator/GLES_CM/Android.mk",
    "./distrib/android-emugl/host/libs/Translator/GLES_V2/Android.mk",
    "./distrib/android-emugl/host/libs/Translator/GLcommon/Android.mk",
    "./distrib/android-emugl/host/libs/libOpenglRender/Android.mk",
    "./distrib/android-emugl/host/libs/GLESv1_dec/Android.mk",
    "./distrib/android-emugl/host/libs/GLESv2_dec/Android.mk",
    "./distrib/android-emugl/host/libs/renderControl_dec/Android.mk",
    "./distrib/android-emugl/host/tools/emugen/Android.mk",
];

/// Ordered list of paths for one rename pass
///
/// Preserves construction order and duplicates. Nothing in this crate ever
/// sorts, dedups, or filters a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    entries: Vec<PathEntry>,
}

impl Manifest {
    /// Create a manifest from entries, keeping their order
    #[inline]
    #[must_use]
    pub fn new(entries: Vec<PathEntry>) -> Self {
        Self { entries }
    }

    /// Built-in manifest covering the emulator source tree
    #[must_use]
    pub fn emulator() -> Self {
        EMULATOR_MAKEFILES.iter().copied().map(PathEntry::new).collect()
    }

    /// Built-in manifest as it stands after a park pass
    ///
    /// The same sixteen paths as [`Manifest::emulator`], in the same
    /// order, with the filename token already renamed. Restore plans walk
    /// this list.
    #[must_use]
    pub fn parked() -> Self {
        let park = TokenPair::park();
        EMULATOR_MAKEFILES
            .iter()
            .copied()
            .map(|path| PathEntry::new(park.apply(path)))
            .collect()
    }

    /// Entries in construction order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over entries in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }
}

impl FromIterator<PathEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = PathEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Manifest {
    type Item = PathEntry;
    type IntoIter = std::vec::IntoIter<PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
