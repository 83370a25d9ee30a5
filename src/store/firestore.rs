use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use crate::configuration::FirestoreSettings;
use crate::store::{DocumentStore, StoreError};

/// Firestore REST client. Documents come back in Firestore's typed-value
/// JSON; [`decode_fields`] flattens them to plain JSON before they reach the
/// rest of the crate.
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(settings: &FirestoreSettings) -> Self {
        FirestoreStore {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            project_id: settings.project_id.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    fn with_key(&self, url: String) -> String {
        match &self.api_key {
            Some(key) => format!("{}?key={}", url, key),
            None => url,
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreStore {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Value>, StoreError> {
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": field },
                        "op": "EQUAL",
                        "value": encode_value(&value),
                    }
                }
            }
        });
        let url = self.with_key(format!("{}:runQuery", self.documents_url()));
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let entries: Vec<Value> = response.json().await?;

        let mut documents = Vec::new();
        for entry in &entries {
            // entries without a `document` key carry query metadata only
            let fields = match entry.pointer("/document/fields") {
                Some(Value::Object(fields)) => fields,
                _ => continue,
            };
            documents.push(decode_fields(fields));
        }
        Ok(documents)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let url = self.with_key(format!("{}/{}/{}", self.documents_url(), collection, id));
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: Value = response.error_for_status()?.json().await?;
        match document.get("fields") {
            Some(Value::Object(fields)) => Ok(Some(decode_fields(fields))),
            _ => Ok(Some(json!({}))),
        }
    }
}

/// Firestore wraps every field in a type tag (`{"stringValue": "x"}`).
/// Decodes one typed value into its plain JSON equivalent.
fn decode_value(value: &Value) -> Value {
    if let Some(s) = value.get("stringValue") {
        return s.clone();
    }
    if let Some(s) = value.get("integerValue") {
        // integers arrive as decimal strings
        if let Some(n) = s.as_str().and_then(|raw| raw.parse::<i64>().ok()) {
            return json!(n);
        }
        return s.clone();
    }
    if let Some(n) = value.get("doubleValue") {
        return n.clone();
    }
    if let Some(b) = value.get("booleanValue") {
        return b.clone();
    }
    if value.get("nullValue").is_some() {
        return Value::Null;
    }
    if let Some(t) = value.get("timestampValue") {
        return t.clone();
    }
    if let Some(array) = value.pointer("/arrayValue/values") {
        if let Some(values) = array.as_array() {
            return Value::Array(values.iter().map(decode_value).collect());
        }
        return Value::Array(Vec::new());
    }
    if let Some(Value::Object(fields)) = value.pointer("/mapValue/fields") {
        return decode_fields(fields);
    }
    if value.pointer("/mapValue").is_some() || value.pointer("/arrayValue").is_some() {
        // empty maps and arrays omit their inner key
        return if value.get("mapValue").is_some() {
            json!({})
        } else {
            json!([])
        };
    }
    Value::Null
}

pub(crate) fn decode_fields(fields: &Map<String, Value>) -> Value {
    let decoded: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), decode_value(value)))
        .collect();
    Value::Object(decoded)
}

/// The reverse direction, for the equality filter operand. Only the scalar
/// types the crate actually queries with.
fn encode_value(value: &Value) -> Value {
    match value {
        Value::String(s) => json!({ "stringValue": s }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) if n.is_i64() => json!({ "integerValue": n.to_string() }),
        Value::Number(n) => json!({ "doubleValue": n }),
        _ => json!({ "nullValue": null }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_values_decode() {
        assert_eq!(decode_value(&json!({"stringValue": "Lola"})), json!("Lola"));
        assert_eq!(decode_value(&json!({"integerValue": "1964"})), json!(1964));
        assert_eq!(decode_value(&json!({"doubleValue": 19.5})), json!(19.5));
        assert_eq!(decode_value(&json!({"booleanValue": true})), json!(true));
        assert_eq!(decode_value(&json!({"nullValue": null})), Value::Null);
    }

    #[test]
    fn nested_arrays_and_maps_decode() {
        let typed = json!({
            "mapValue": {
                "fields": {
                    "title": {"stringValue": "Lola"},
                    "screenings": {
                        "arrayValue": {
                            "values": [
                                {"mapValue": {"fields": {"time": {"doubleValue": 19.5}}}},
                                {"mapValue": {"fields": {"time": {"doubleValue": 21.0}}}}
                            ]
                        }
                    }
                }
            }
        });
        assert_eq!(
            decode_value(&typed),
            json!({
                "title": "Lola",
                "screenings": [{"time": 19.5}, {"time": 21.0}]
            })
        );
    }

    #[test]
    fn empty_containers_decode() {
        assert_eq!(decode_value(&json!({"mapValue": {}})), json!({}));
        assert_eq!(decode_value(&json!({"arrayValue": {}})), json!([]));
    }

    #[test]
    fn filter_operands_encode() {
        assert_eq!(
            encode_value(&json!("2024-06-12")),
            json!({"stringValue": "2024-06-12"})
        );
        assert_eq!(encode_value(&json!(true)), json!({"booleanValue": true}));
        assert_eq!(encode_value(&json!(3)), json!({"integerValue": "3"}));
    }
}
