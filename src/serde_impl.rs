//! Serde support: a set travels as its ascending sequence of elements.

use alloc::vec::Vec;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::compare::Comparator;
use crate::set::AvlSet;

impl<T: Serialize, C> Serialize for AvlSet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Accepts any sequence: input is sorted and deduplicated (first occurrence
/// kept) under `C::default()`.
impl<'de, T, C> Deserialize<'de> for AvlSet<T, C>
where
    T: Clone + Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(AvlSet::of_list_by(items, C::default()))
    }
}
