use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Placeholder values captured by a matched route, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if **k == *name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    /// Captured values as a positional argument list.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.buf.iter().map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.buf.push((name.into(), value.to_owned()))
    }

    pub(crate) fn from_captures(caps: &[(&str, &str)]) -> Self {
        let mut params = Self::new();
        for &(name, value) in caps {
            params.push(name, value);
        }
        params
    }
}

impl Deref for Params {
    type Target = [(Box<str>, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, String);
    type IntoIter = smallvec::IntoIter<[(Box<str>, String); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

#[test]
fn params_lookup() {
    let params: Params = vec![("id", "42"), ("slug", "hello")].into_iter().collect();

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.get("missing"), None);
    assert_eq!(params.parse::<u32>("id").unwrap().unwrap(), 42);
    assert!(params.parse::<u32>("slug").unwrap().is_err());
    assert_eq!(params.values().collect::<Vec<_>>(), ["42", "hello"]);
    assert_eq!(
        params.iter().collect::<Vec<_>>(),
        [("id", "42"), ("slug", "hello")]
    );
}
