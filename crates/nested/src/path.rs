//! Dotted key paths.
//!
//! A [`Path`] is an ordered sequence of string segments identifying a nested
//! location in a graph. Paths parse eagerly from `.`-separated strings with
//! no escaping; segments that themselves contain dots can only be expressed
//! through the pre-split constructors.

use std::fmt;

/// An ordered sequence of key segments.
///
/// # Example
///
/// ```
/// use nested::Path;
///
/// let path = Path::from("user.name");
/// assert_eq!(path.segments(), ["user", "name"]);
/// assert_eq!(path.to_string(), "user.name");
///
/// // Keys containing literal dots are supplied pre-split.
/// let path = Path::new(vec!["by_price".to_string(), "0.99".to_string()]);
/// assert_eq!(path.segments(), ["by_price", "0.99"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new(segments: Vec<String>) -> Self {
        Path { segments }
    }

    /// Parse a dotted path string. Splitting is eager and unescaped, so
    /// `"a..b"` yields an empty middle segment and `""` yields a single
    /// empty segment.
    pub fn parse(dotted: &str) -> Self {
        Path {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path with its final segment removed. `None` when there is no
    /// parent (zero or one segment).
    ///
    /// # Example
    ///
    /// ```
    /// use nested::Path;
    ///
    /// assert_eq!(Path::from("a.b.c").parent(), Some(Path::from("a.b")));
    /// assert_eq!(Path::from("a").parent(), None);
    /// ```
    pub fn parent(&self) -> Option<Path> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Path {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Whether `self` begins with every segment of `prefix`.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Whether `self` is strictly below `ancestor`.
    ///
    /// # Example
    ///
    /// ```
    /// use nested::Path;
    ///
    /// let parent = Path::from("a");
    /// let child = Path::from("a.b");
    /// assert!(child.is_child_of(&parent));
    /// assert!(!parent.is_child_of(&child));
    /// assert!(!parent.is_child_of(&parent));
    /// ```
    pub fn is_child_of(&self, ancestor: &Path) -> bool {
        self.segments.len() > ancestor.segments.len() && self.starts_with(ancestor)
    }

    /// A new path with `segment` appended.
    pub fn join(&self, segment: &str) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Path { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Path::parse(dotted)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path::new(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::new(segments.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_eagerly() {
        assert_eq!(Path::from("a.b.c").segments(), ["a", "b", "c"]);
        assert_eq!(Path::from("a..b").segments(), ["a", "", "b"]);
        assert_eq!(Path::from("").segments(), [""]);
        assert_eq!(Path::from("single").segments(), ["single"]);
    }

    #[test]
    fn display_round_trips_dot_free_segments() {
        for dotted in ["a", "a.b", "a.b.c", "a..b"] {
            assert_eq!(Path::from(dotted).to_string(), dotted);
        }
    }

    #[test]
    fn parent_algebra() {
        assert_eq!(Path::from("a.b.c").parent(), Some(Path::from("a.b")));
        assert_eq!(Path::from("a.b").parent(), Some(Path::from("a")));
        assert_eq!(Path::from("a").parent(), None);
        assert_eq!(Path::new(vec![]).parent(), None);
    }

    #[test]
    fn child_relation() {
        let root = Path::from("a");
        let leaf = Path::from("a.b.c");
        assert!(leaf.is_child_of(&root));
        assert!(leaf.starts_with(&root));
        assert!(!root.is_child_of(&leaf));
        assert!(!Path::from("ab").is_child_of(&root));
    }

    #[test]
    fn join_appends_one_segment() {
        assert_eq!(Path::from("a").join("b"), Path::from("a.b"));
        // Joined segments are not re-split.
        assert_eq!(Path::from("a").join("b.c").segments(), ["a", "b.c"]);
    }
}
