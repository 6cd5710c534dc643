use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub mod app;
pub mod submit_outfit;

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent member is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Any value, but the member has to be there.
fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Value::deserialize(deserializer)
}

/// One clothing item of an outfit.
///
/// Members are not interpreted. `style` and `size` are carried and echoed but not
/// read. Members we do not know about are kept in `extra` so the echo matches the
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GarmentDescriptor {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub image_url: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub style: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub size: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An outfit selected by a user.
///
/// The only shape enforced is that `userId`, `top` and `bottom` are present and
/// that both garments are objects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSubmission {
    #[serde(deserialize_with = "required")]
    #[schemars(with = "Value")]
    pub user_id: Value,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub outfit_name: Option<Value>,
    pub top: GarmentDescriptor,
    pub bottom: GarmentDescriptor,
}

impl OutfitSubmission {
    /// `userId` as passed to the upload script: strings verbatim, anything else as JSON.
    pub fn user_id_argument(&self) -> String {
        match &self.user_id {
            Value::String(user_id) => user_id.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn garment(value: Value) -> GarmentDescriptor {
        serde_json::from_value(value).expect("Garment is an object")
    }

    #[test]
    fn explicit_null_is_not_absent() {
        let garment = garment(json!({ "imageUrl": "a.png", "style": null }));

        assert_eq!(garment.style, Some(Value::Null));
        assert_eq!(garment.size, None);
        assert_eq!(
            serde_json::to_value(&garment).expect("Garment serializes"),
            json!({ "imageUrl": "a.png", "style": null })
        );
    }

    #[test]
    fn garment_members_are_not_interpreted() {
        let garment = garment(json!({ "imageUrl": 7, "size": 32, "fit": "slim" }));

        assert_eq!(garment.image_url, Some(json!(7)));
        assert_eq!(garment.size, Some(json!(32)));
        assert_eq!(garment.extra.get("fit"), Some(&json!("slim")));
    }

    #[test]
    fn user_id_is_required() {
        let result = serde_json::from_value::<OutfitSubmission>(json!({
            "top": {},
            "bottom": {}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn user_id_argument_is_stringified() {
        let outfit = |user_id: Value| -> OutfitSubmission {
            serde_json::from_value(json!({ "userId": user_id, "top": {}, "bottom": {} }))
                .expect("Outfit has the required members")
        };

        assert_eq!(outfit(json!("user-1")).user_id_argument(), "user-1");
        assert_eq!(outfit(json!(42)).user_id_argument(), "42");
        assert_eq!(outfit(json!(null)).user_id_argument(), "null");
    }
}
