use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_SUCCESS: &str = "success";

/// Raw response body `{status, type?, info?, content?}` shared by every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// The concrete shape of an envelope's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Absent,
    Text(&'a str),
    Record(&'a Map<String, Value>),
    Records(&'a [Value]),
    /// Numbers and booleans; never meaningful for this protocol.
    Other,
}

impl Envelope {
    /// A successful envelope carrying `info`.
    pub fn success(info: Value) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            info: Some(info),
            ..Self::default()
        }
    }

    /// A failed envelope with a server side explanation.
    pub fn failure(info: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            info: Some(Value::String(info.into())),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The content, taken from `info` and falling back to `content`.
    pub fn payload(&self) -> Payload<'_> {
        let value = match (&self.info, &self.content) {
            (Some(info), _) if !info.is_null() => Some(info),
            (_, Some(content)) if !content.is_null() => Some(content),
            _ => None,
        };
        Self::shape_of(value)
    }

    /// The content, taken from `content` and falling back to `info`.
    ///
    /// Send replies put their record under `content`.
    pub fn content_payload(&self) -> Payload<'_> {
        let value = match (&self.content, &self.info) {
            (Some(content), _) if !content.is_null() => Some(content),
            (_, Some(info)) if !info.is_null() => Some(info),
            _ => None,
        };
        Self::shape_of(value)
    }

    /// Text explanation of a failed envelope, if it carries one.
    pub fn failure_reason(&self) -> Option<&str> {
        match self.payload() {
            Payload::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    fn shape_of(value: Option<&Value>) -> Payload<'_> {
        match value {
            None | Some(Value::Null) => Payload::Absent,
            Some(Value::String(text)) => Payload::Text(text),
            Some(Value::Object(record)) => Payload::Record(record),
            Some(Value::Array(records)) => Payload::Records(records),
            Some(_) => Payload::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_prefers_info() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "success",
            "info": "S1",
            "content": {"info": "ignored"}
        }))
        .unwrap();
        assert_eq!(envelope.payload(), Payload::Text("S1"));
        assert!(matches!(envelope.content_payload(), Payload::Record(_)));
    }

    #[test]
    fn test_null_info_falls_back_to_content() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "success",
            "info": null,
            "content": [1, 2]
        }))
        .unwrap();
        assert!(matches!(envelope.payload(), Payload::Records(items) if items.len() == 2));
    }

    #[test]
    fn test_missing_fields_decode_as_absent() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.payload(), Payload::Absent);
        assert_eq!(envelope.failure_reason(), None);
    }

    #[test]
    fn test_failure_reason() {
        let envelope = Envelope::failure("backend processing failed");
        assert_eq!(envelope.failure_reason(), Some("backend processing failed"));
        assert_eq!(Envelope::success(json!(3)).payload(), Payload::Other);
    }
}
