use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// A typed view of a JSON document that keeps the document as it was received.
///
/// `T` only decides whether the document is accepted; `raw` is never normalized.
#[derive(Debug, Clone)]
pub struct WithRaw<T> {
    pub raw: Value,
    pub typed: T,
}

impl<'de, T> Deserialize<'de> for WithRaw<T>
where
    T: for<'a> Deserialize<'a>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let typed = T::deserialize(&raw).map_err(D::Error::custom)?;

        Ok(WithRaw { raw, typed })
    }
}

impl<T: JsonSchema> JsonSchema for WithRaw<T> {
    fn schema_name() -> String {
        T::schema_name()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        T::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: Value,
    }

    #[test]
    fn keeps_the_document_untouched() {
        let document = json!({ "name": null, "unknown": [1, 2] });

        let with_raw: WithRaw<Named> =
            serde_json::from_value(document.clone()).expect("Document has a name");

        assert_eq!(with_raw.raw, document);
    }

    #[test]
    fn rejects_what_the_typed_view_rejects() {
        let result = serde_json::from_value::<WithRaw<Named>>(json!({ "unknown": 1 }));

        let err = result.expect_err("Name is missing");
        assert!(err.to_string().contains("missing field `name`"));
    }
}
