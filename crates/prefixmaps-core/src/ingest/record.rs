use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// One entry of GO's `db-xrefs.yaml`. Only the keys the ingester needs are
/// decoded; `name`, `generic_urls`, `entity_types` and the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct XrefRecord {
    /// Kept untyped: it only has to be a string when the record carries a prefix.
    #[serde(default)]
    pub database: Option<Value>,
    /// `None` when the key is absent, `Some(None)` when it is present but null.
    #[serde(default, deserialize_with = "present")]
    pub rdf_uri_prefix: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl XrefRecord {
    /// `database` as a string, if it is one.
    pub fn database_str(&self) -> Option<&str> {
        self.database.as_ref().and_then(Value::as_str)
    }
}
