//! [`CborValue`] — the value tree produced and consumed by the codec.

/// A decoded or to-be-encoded value.
///
/// Composite values own their children, so a tree is always acyclic. Map
/// entries keep their insertion order through encode and decode; duplicate
/// keys are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CborValue {
    UInt(u64),
    Text(String),
    Array(Vec<CborValue>),
    Map(Vec<(String, CborValue)>),
}

impl CborValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CborValue::UInt(_) => "uint",
            CborValue::Text(_) => "text",
            CborValue::Array(_) => "array",
            CborValue::Map(_) => "map",
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CborValue::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CborValue]> {
        match self {
            CborValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, CborValue)]> {
        match self {
            CborValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up the first entry with the given key. `None` for non-maps.
    pub fn get(&self, key: &str) -> Option<&CborValue> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl From<u64> for CborValue {
    fn from(n: u64) -> Self {
        CborValue::UInt(n)
    }
}

impl From<u32> for CborValue {
    fn from(n: u32) -> Self {
        CborValue::UInt(u64::from(n))
    }
}

impl From<u16> for CborValue {
    fn from(n: u16) -> Self {
        CborValue::UInt(u64::from(n))
    }
}

impl From<u8> for CborValue {
    fn from(n: u8) -> Self {
        CborValue::UInt(u64::from(n))
    }
}

impl From<&str> for CborValue {
    fn from(s: &str) -> Self {
        CborValue::Text(s.to_owned())
    }
}

impl From<String> for CborValue {
    fn from(s: String) -> Self {
        CborValue::Text(s)
    }
}

impl From<Vec<CborValue>> for CborValue {
    fn from(items: Vec<CborValue>) -> Self {
        CborValue::Array(items)
    }
}

impl From<Vec<(String, CborValue)>> for CborValue {
    fn from(entries: Vec<(String, CborValue)>) -> Self {
        CborValue::Map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let v = CborValue::from(7u8);
        assert_eq!(v.as_u64(), Some(7));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.kind(), "uint");

        let v = CborValue::from("hi");
        assert_eq!(v.as_str(), Some("hi"));
        assert_eq!(v.as_array(), None);
    }

    #[test]
    fn get_returns_first_duplicate() {
        let v = CborValue::Map(vec![
            ("k".to_owned(), CborValue::UInt(1)),
            ("k".to_owned(), CborValue::UInt(2)),
        ]);
        assert_eq!(v.get("k"), Some(&CborValue::UInt(1)));
        assert_eq!(v.get("missing"), None);
        assert_eq!(CborValue::UInt(0).get("k"), None);
    }
}
