use std::collections::BTreeMap;

use serde::Serialize;

/// Item name → ISO date string (`YYYY-MM-DD`), as supplied by the caller.
pub type ExpiryDates = BTreeMap<String, String>;

/// Item name → signed days until expiry. Negative values are already expired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DaysToExpiry(BTreeMap<String, i64>);

impl DaysToExpiry {
    pub fn get(&self, item: &str) -> Option<i64> {
        self.0.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &i64)> {
        self.0.iter()
    }
}

impl FromIterator<(String, i64)> for DaysToExpiry {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
