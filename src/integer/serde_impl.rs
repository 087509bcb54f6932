// ============================================================================
// Serde Support
// Integers travel as decimal strings so any width survives JSON and friends
// ============================================================================

use super::store::SegmentStore;
use super::value::ArbitraryInteger;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<S: SegmentStore> Serialize for ArbitraryInteger<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, S: SegmentStore> Deserialize<'de> for ArbitraryInteger<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
