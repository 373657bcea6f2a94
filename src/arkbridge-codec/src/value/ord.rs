use std::cmp::Ordering;

use super::Value;

fn cmp_doubles(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int32(a), Self::Int32(b)) => a.cmp(b),
            (Self::Int64(a), Self::Int64(b)) => a.cmp(b),
            (Self::Double(a), Self::Double(b)) => a.total_cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::ListUInt8(a), Self::ListUInt8(b)) => a.cmp(b),
            (Self::ListBool(a), Self::ListBool(b)) => a.cmp(b),
            (Self::ListInt32(a), Self::ListInt32(b)) => a.cmp(b),
            (Self::ListInt64(a), Self::ListInt64(b)) => a.cmp(b),
            (Self::ListDouble(a), Self::ListDouble(b)) => cmp_doubles(a, b),
            (Self::ListString(a), Self::ListString(b)) => a.cmp(b),
            (Self::Map(a), Self::Map(b)) => a.cmp(b),
            (Self::CompositeList(a), Self::CompositeList(b)) => a.cmp(b),

            // Differing variants order by their tag.
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Value {}
