//! The root-anchored relative path type.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::path::normalize::{is_absolute_path, join_lexically, to_unix_style, to_windows_style};
use crate::path::relationship::relative_path_from;
use crate::path::types::RootFolder;
use crate::path::working_dir::current_working_directory;

/// A partial path that is relative to a logical [`RootFolder`].
///
/// The path is stored with forward slashes. Every operation is purely
/// lexical and returns a new value; nothing here touches the filesystem or
/// fails. Empty and malformed strings simply flow through the algebra.
///
/// A `RelativePath` may hold an absolute string when the caller already
/// resolved it (see [`is_absolute`](Self::is_absolute)). Such paths are kept
/// verbatim by [`child_file`](Self::child_file) and [`rebased`](Self::rebased).
///
/// # Examples
///
/// ```
/// use projpath::{RelativePath, RootFolder};
///
/// let path = RelativePath::new("Source\\PluginProcessor.cpp", RootFolder::ProjectFolder);
/// assert_eq!(path.to_unix_style(), "Source/PluginProcessor.cpp");
/// assert_eq!(path.to_windows_style(), "Source\\PluginProcessor.cpp");
/// assert_eq!(path.file_name(), "PluginProcessor.cpp");
/// assert!(path.has_file_extension("cpp;mm"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SerializedRelativePath")]
pub struct RelativePath {
    path: String,
    root: RootFolder,
}

/// Wire form, normalized on the way in.
#[derive(Deserialize)]
struct SerializedRelativePath {
    path: String,
    #[serde(default)]
    root: RootFolder,
}

impl From<SerializedRelativePath> for RelativePath {
    fn from(raw: SerializedRelativePath) -> Self {
        Self::new(&raw.path, raw.root)
    }
}

impl RelativePath {
    /// Create a path from a string, converting backslashes to forward
    /// slashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("JuceLibraryCode\\JuceHeader.h", RootFolder::ProjectFolder);
    /// assert_eq!(path.as_str(), "JuceLibraryCode/JuceHeader.h");
    /// assert_eq!(path.root(), RootFolder::ProjectFolder);
    /// ```
    #[must_use]
    pub fn new(path: &str, root: RootFolder) -> Self {
        Self {
            path: to_unix_style(path),
            root,
        }
    }

    /// Create a path to `file` relative to the absolute directory
    /// `root_folder`.
    ///
    /// When the two locations share nothing but the filesystem root, the
    /// absolute location of `file` is stored instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    /// use std::path::Path;
    ///
    /// let path = RelativePath::from_file(
    ///     Path::new("/work/app/Source/main.cpp"),
    ///     Path::new("/work/app/Builds/MacOSX"),
    ///     RootFolder::BuildTargetFolder,
    /// );
    /// assert_eq!(path.to_unix_style(), "../../Source/main.cpp");
    /// ```
    #[must_use]
    pub fn from_file(file: &Path, root_folder: &Path, root: RootFolder) -> Self {
        Self::new(&relative_path_from(file, root_folder), root)
    }

    /// The root this path is relative to.
    #[must_use]
    pub fn root(&self) -> RootFolder {
        self.root
    }

    /// The stored forward-slash path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether the path string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The path with forward slashes.
    #[must_use]
    pub fn to_unix_style(&self) -> String {
        to_unix_style(&self.path)
    }

    /// The path with Windows separators.
    #[must_use]
    pub fn to_windows_style(&self) -> String {
        to_windows_style(&self.path)
    }

    /// The last segment of the path. Empty for an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("Source/gui/", RootFolder::ProjectFolder);
    /// assert_eq!(path.file_name(), "gui");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        if self.path.is_empty() {
            return String::new();
        }
        self.fake_file()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The last segment without its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("src/main.cpp", RootFolder::ProjectFolder);
    /// assert_eq!(path.file_stem(), "main");
    /// ```
    #[must_use]
    pub fn file_stem(&self) -> String {
        let name = self.file_name();
        match name.rfind('.') {
            Some(dot) => name[..dot].to_string(),
            None => name,
        }
    }

    /// The text after the last `.` of the last segment, without the dot.
    /// Empty when the segment has no dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("lib/archive.tar.gz", RootFolder::ProjectFolder);
    /// assert_eq!(path.file_extension(), "gz");
    /// ```
    #[must_use]
    pub fn file_extension(&self) -> String {
        let name = self.file_name();
        match name.rfind('.') {
            Some(dot) => name[dot + 1..].to_string(),
            None => String::new(),
        }
    }

    /// Check the extension of the last segment.
    ///
    /// `extensions` is a `;`-separated list of alternatives. Each alternative
    /// may be given with or without its leading dot and is compared without
    /// ASCII case, against the end of the file name, so multi-part
    /// extensions such as `tar.gz` work. An empty list matches files without
    /// any extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("Source/View.MM", RootFolder::ProjectFolder);
    /// assert!(path.has_file_extension("mm"));
    /// assert!(path.has_file_extension(".cpp; .mm"));
    /// assert!(!path.has_file_extension("m"));
    /// assert!(!path.has_file_extension(""));
    /// ```
    #[must_use]
    pub fn has_file_extension(&self, extensions: &str) -> bool {
        let name = self.file_name().to_ascii_lowercase();

        extensions.split(';').map(str::trim).any(|extension| {
            let extension = extension.strip_prefix('.').unwrap_or(extension);
            if extension.is_empty() {
                return !name.contains('.');
            }
            let suffix = format!(".{}", extension.to_ascii_lowercase());
            name.ends_with(&suffix)
        })
    }

    /// Whether the stored string already denotes an absolute location.
    ///
    /// See [`is_absolute_path`](crate::path::normalize::is_absolute_path)
    /// for the accepted forms.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute_path(&self.path)
    }

    /// Replace the extension.
    ///
    /// Everything from the last `.` of the path is dropped, then `extension`
    /// is appended with exactly one dot in front of it. An empty `extension`
    /// strips the extension. A path without any dot keeps its full text.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("src/main.cpp", RootFolder::ProjectFolder);
    /// assert_eq!(path.with_file_extension("h").as_str(), "src/main.h");
    /// assert_eq!(path.with_file_extension(".mm").as_str(), "src/main.mm");
    /// assert_eq!(path.with_file_extension("").as_str(), "src/main");
    ///
    /// let bare = RelativePath::new("Makefile", RootFolder::ProjectFolder);
    /// assert_eq!(bare.with_file_extension("txt").as_str(), "Makefile.txt");
    /// ```
    #[must_use]
    pub fn with_file_extension(&self, extension: &str) -> Self {
        let mut path = match self.path.rfind('.') {
            Some(dot) => self.path[..dot].to_string(),
            None => self.path.clone(),
        };
        if !extension.is_empty() && !extension.starts_with('.') {
            path.push('.');
        }
        path.push_str(extension);

        Self::new(&path, self.root)
    }

    /// The path one level up.
    ///
    /// A single trailing `/` is ignored, then everything before the last
    /// remaining `/` is kept. A path with a single segment has an empty
    /// parent, with or without a trailing slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let path = RelativePath::new("Source/gui/Window.cpp", RootFolder::ProjectFolder);
    /// assert_eq!(path.parent_directory().as_str(), "Source/gui");
    ///
    /// let single = RelativePath::new("src/", RootFolder::ProjectFolder);
    /// assert_eq!(single.parent_directory().as_str(), "");
    /// ```
    #[must_use]
    pub fn parent_directory(&self) -> Self {
        let path = self.path.strip_suffix('/').unwrap_or(&self.path);
        let parent = path.rfind('/').map_or("", |slash| &path[..slash]);

        Self::new(parent, self.root)
    }

    /// Append `subpath` below this path.
    ///
    /// An absolute `subpath` replaces the path entirely, keeping the root tag.
    /// Otherwise a `/` is added unless the path already ends with one, so a
    /// child of the empty path starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    ///
    /// let dir = RelativePath::new("src", RootFolder::ProjectFolder);
    /// assert_eq!(dir.child_file("util/helpers.cpp").as_str(), "src/util/helpers.cpp");
    /// assert_eq!(dir.child_file("/usr/include").as_str(), "/usr/include");
    /// ```
    #[must_use]
    pub fn child_file(&self, subpath: &str) -> Self {
        if is_absolute_path(subpath) {
            return Self::new(subpath, self.root);
        }

        let mut path = self.to_unix_style();
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(subpath);

        Self::new(&path, self.root)
    }

    /// Re-express this path relative to another root.
    ///
    /// The path is resolved against `original_root`, then made relative to
    /// `new_root` and tagged `new_root_type`. Absolute paths are only
    /// re-tagged.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::{RelativePath, RootFolder};
    /// use std::path::Path;
    ///
    /// let source = RelativePath::new("Source/main.cpp", RootFolder::ProjectFolder);
    /// let rebased = source.rebased(
    ///     Path::new("/work/app"),
    ///     Path::new("/work/app/Builds/VisualStudio2022"),
    ///     RootFolder::BuildTargetFolder,
    /// );
    /// assert_eq!(rebased.as_str(), "../../Source/main.cpp");
    /// assert_eq!(rebased.root(), RootFolder::BuildTargetFolder);
    /// ```
    #[must_use]
    pub fn rebased(&self, original_root: &Path, new_root: &Path, new_root_type: RootFolder) -> Self {
        if self.is_absolute() {
            log::trace!("{} is absolute, re-tagging as {new_root_type}", self.path);
            return Self::new(&self.path, new_root_type);
        }

        let location = join_lexically(original_root, &self.to_unix_style());
        Self::new(&relative_path_from(&location, new_root), new_root_type)
    }

    /// Resolve the path against an explicit directory.
    ///
    /// This is only a view for splitting the path into segments; it is not
    /// the real location of the file.
    #[must_use]
    pub fn fake_file_in(&self, working_dir: &Path) -> PathBuf {
        join_lexically(working_dir, &self.path)
    }

    fn fake_file(&self) -> PathBuf {
        self.fake_file_in(current_working_directory())
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for RelativePath {
    fn from(path: &str) -> Self {
        Self::new(path, RootFolder::Unknown)
    }
}

impl From<String> for RelativePath {
    fn from(path: String) -> Self {
        Self::new(&path, RootFolder::Unknown)
    }
}
