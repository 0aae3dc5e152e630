//! Route patterns: literal segments plus whole-segment `{name}` placeholders.
//!
//! A pattern is compiled once, at registration, into a list of segments.
//! Matching a canonical path compares the segment counts first and then
//! walks both lists side by side, so a placeholder always binds exactly one
//! non-empty segment.
//!
//! Any segment may be a placeholder, the first one included: `{lang}/docs`
//! captures `lang` from `/en/docs`. Routers that only translate placeholders
//! following a slash would treat that leading `{lang}` as literal text.

use crate::path;
use crate::router::{Params, RouterError};

use std::fmt;

use smallvec::SmallVec;

const OPEN: char = '{';
const CLOSE: char = '}';

pub(crate) type CaptureBuf<'a> = SmallVec<[(&'a str, &'a str); 8]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(Box<str>),
    Capture(Box<str>),
}

#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    segments: Vec<Segment>,
}

impl Segment {
    fn parse(part: &str) -> Self {
        match placeholder_name(part) {
            Some(name) => Self::Capture(name.into()),
            None => Self::Static(part.into()),
        }
    }
}

/// Returns the name of a `{name}` segment.
///
/// `{}` and text around braces (`a{b}`) are literals.
fn placeholder_name(part: &str) -> Option<&str> {
    let name = part.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    if name.is_empty() || name.contains(|c: char| c == OPEN || c == CLOSE) {
        return None;
    }
    Some(name)
}

impl Pattern {
    /// Compiles a pattern. The input is normalized first.
    ///
    /// Fails when two placeholders share a name.
    pub fn compile(pattern: &str) -> Result<Self, RouterError> {
        let source = path::normalize(pattern);
        let segments: Vec<Segment> = path::segments(&source).map(Segment::parse).collect();

        if let Some(name) = Self::duplicate_capture(&segments) {
            return Err(RouterError::DuplicateCapture {
                name: name.into(),
                pattern: source.into(),
            });
        }

        Ok(Self {
            source: source.into(),
            segments,
        })
    }

    fn duplicate_capture(segments: &[Segment]) -> Option<&str> {
        let mut seen: SmallVec<[&str; 8]> = SmallVec::new();
        for seg in segments {
            if let Segment::Capture(name) = seg {
                if seen.contains(&&**name) {
                    return Some(&**name);
                }
                seen.push(&**name);
            }
        }
        None
    }

    /// The canonical pattern text, e.g. `users/{id}`.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in pattern order.
    pub fn captures(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Capture(name) => Some(&**name),
            Segment::Static(_) => None,
        })
    }

    pub fn is_static(&self) -> bool {
        self.captures().next().is_none()
    }

    /// Matches a raw path, normalizing it first.
    pub fn find(&self, path: &str) -> Option<Params> {
        let path = path::normalize(path);
        let mut buf = CaptureBuf::new();
        if self.match_path(&path, &mut buf) {
            Some(Params::from_captures(&buf))
        } else {
            None
        }
    }

    /// Matches a canonical path and appends the captures to `buf`.
    ///
    /// `buf` is left untouched when the path does not match.
    pub(crate) fn match_path<'p>(&'p self, path: &'p str, buf: &mut CaptureBuf<'p>) -> bool {
        let parts: SmallVec<[&str; 8]> = path::segments(path).collect();
        if parts.len() != self.segments.len() {
            return false;
        }

        let base = buf.len();
        for (seg, &part) in self.segments.iter().zip(parts.iter()) {
            match seg {
                Segment::Static(text) => {
                    if **text != *part {
                        buf.truncate(base);
                        return false;
                    }
                }
                Segment::Capture(name) => buf.push((&**name, part)),
            }
        }
        true
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.source)
    }
}

#[test]
fn pattern_tokenize() {
    let p = Pattern::compile("/users/{id}/posts/{post_id}").unwrap();
    assert_eq!(p.as_str(), "users/{id}/posts/{post_id}");
    assert_eq!(
        p.segments(),
        &[
            Segment::Static("users".into()),
            Segment::Capture("id".into()),
            Segment::Static("posts".into()),
            Segment::Capture("post_id".into()),
        ]
    );
    assert_eq!(p.captures().collect::<Vec<_>>(), ["id", "post_id"]);
    assert!(!p.is_static());
}

#[test]
fn pattern_literal_braces() {
    let p = Pattern::compile("/files/{}/a{b}").unwrap();
    assert!(p.is_static());
    assert!(p.find("/files/{}/a{b}").is_some());
    assert!(p.find("/files/x/ay").is_none());
}

#[test]
fn pattern_match_exact_segments() {
    let p = Pattern::compile("/a/{b}").unwrap();

    let params = p.find("/a/1").unwrap();
    assert_eq!(params.get("b"), Some("1"));

    assert!(p.find("/a/1/2").is_none());
    assert!(p.find("/a/").is_none());
    assert!(p.find("/a").is_none());
    assert!(p.find("/b/1").is_none());
}

#[test]
fn pattern_root() {
    let root = Pattern::compile("/").unwrap();
    assert_eq!(root.as_str(), "");
    assert!(root.find("").is_some());
    assert!(root.find("///").is_some());
    assert!(root.find("/a").is_none());
}

#[test]
fn pattern_leading_placeholder() {
    let p = Pattern::compile("{lang}/docs").unwrap();
    assert_eq!(p.find("/en/docs").unwrap().get("lang"), Some("en"));

    let p = Pattern::compile("/{slug}").unwrap();
    assert_eq!(p.find("/hello").unwrap().get("slug"), Some("hello"));
    assert!(p.find("/").is_none());
}

#[test]
fn pattern_failed_match_keeps_buffer() {
    let p = Pattern::compile("x/{a}/y").unwrap();
    let mut buf = CaptureBuf::new();
    buf.push(("outer", "1"));
    assert!(!p.match_path("x/2/z", &mut buf));
    assert_eq!(&buf[..], &[("outer", "1")]);
}

#[test]
fn pattern_duplicate_capture() {
    match Pattern::compile("/u/{id}/p/{id}") {
        Err(RouterError::DuplicateCapture { name, pattern }) => {
            assert_eq!(&*name, "id");
            assert_eq!(&*pattern, "u/{id}/p/{id}");
        }
        other => panic!("unexpected: {:?}", other),
    }
}
