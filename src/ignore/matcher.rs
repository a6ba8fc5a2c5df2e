use glob::{MatchOptions, Pattern};

use super::config::{IgnorePolicy, Nesting};
use crate::error::PatternSyntaxError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct CompiledPattern {
    source: String,
    direct: Pattern,
    nested: Option<Pattern>,
    dir_only: bool,
}

impl CompiledPattern {
    fn compile(source: &str, nesting: Nesting) -> Result<Self, PatternSyntaxError> {
        let syntax_error = |e: glob::PatternError| PatternSyntaxError {
            pattern: source.to_string(),
            reason: e.to_string(),
        };

        // A leading "/" anchors the pattern at the root: no nested form
        let (body, anchored) = match source.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (source, false),
        };
        // A trailing "/" restricts the pattern to directories
        let (body, dir_only) = match body.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (body, false),
        };

        let direct = Pattern::new(body).map_err(syntax_error)?;
        let nested = if anchored {
            None
        } else {
            let prefix = match nesting {
                Nesting::OneLevel => "*/",
                Nesting::AnyDepth => "**/",
            };
            Some(Pattern::new(&format!("{}{}", prefix, body)).map_err(syntax_error)?)
        };

        Ok(Self {
            source: source.to_string(),
            direct,
            nested,
            dir_only,
        })
    }

    fn matches(&self, path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.direct.matches_with(path, MATCH_OPTIONS)
            || self
                .nested
                .as_ref()
                .is_some_and(|nested| nested.matches_with(path, MATCH_OPTIONS))
    }
}

/// Precompiled ignore patterns.
///
/// `*` never crosses a "/". Unanchored patterns additionally match one
/// directory level down (or any depth with [`Nesting::AnyDepth`]); this is
/// not gitignore semantics, `vendor` does not match `a/b/vendor` by default.
/// A trailing "/" (`vendor/`) makes a pattern apply to directories only.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<CompiledPattern>,
    rejected: Vec<PatternSyntaxError>,
}

impl IgnoreMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self::with_nesting(patterns, Nesting::OneLevel)
    }

    pub fn with_nesting<S: AsRef<str>>(patterns: &[S], nesting: Nesting) -> Self {
        let mut matcher = Self::default();
        for pattern in patterns {
            match CompiledPattern::compile(pattern.as_ref(), nesting) {
                Ok(compiled) => matcher.patterns.push(compiled),
                Err(e) => {
                    tracing::warn!("{}; it will never match", e);
                    matcher.rejected.push(e);
                }
            }
        }
        matcher
    }

    /// Patterns that failed to compile
    pub fn rejected(&self) -> &[PatternSyntaxError] {
        &self.rejected
    }

    /// Whether `path` is ignored when its kind is unknown.
    ///
    /// The path may name a directory, so directory-only patterns apply too.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.is_ignored_entry(path, true)
    }

    /// Whether the entry at `path` is ignored, knowing if it is a directory.
    pub fn is_ignored_entry(&self, path: &str, is_dir: bool) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        let (path, is_dir) = match path.strip_suffix('/') {
            Some(dir) => (dir, true),
            None => (path, is_dir),
        };
        self.patterns.iter().any(|pattern| {
            let hit = pattern.matches(path, is_dir);
            if hit {
                tracing::trace!("{} ignored by '{}'", path, pattern.source);
            }
            hit
        })
    }
}

/// One-shot form of [`IgnoreMatcher::is_ignored`] with default nesting.
pub fn should_ignore<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    IgnoreMatcher::new(patterns).is_ignored(path)
}

/// An [`IgnorePolicy`] ready to be applied to walked entries.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    matcher: IgnoreMatcher,
    skip_hidden_dirs: bool,
    skip_root_files: bool,
}

impl IgnoreRules {
    /// Whether the entry at `rel_path` (relative to the root, "/"-separated)
    /// is left out. For directories this prunes the whole subtree.
    pub fn skips(&self, rel_path: &str, is_dir: bool) -> bool {
        if is_dir {
            if self.skip_hidden_dirs {
                let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
                if name.starts_with('.') {
                    return true;
                }
            }
        } else if self.skip_root_files && !rel_path.contains('/') {
            return true;
        }
        self.matcher.is_ignored_entry(rel_path, is_dir)
    }
}

impl IgnorePolicy {
    pub fn compile(&self) -> IgnoreRules {
        IgnoreRules {
            matcher: IgnoreMatcher::with_nesting(&self.patterns, self.nesting),
            skip_hidden_dirs: self.skip_hidden_dirs,
            skip_root_files: self.skip_root_files,
        }
    }
}
