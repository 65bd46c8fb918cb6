//! Typed read-only views over loosely-structured Label Studio export JSON.
//!
//! Exports are untrusted: any field may be missing, null, or of the wrong
//! type. Rather than deserializing into strict structs (where one bad task
//! would reject the whole file), each view wraps a borrowed
//! [`serde_json::Value`] and exposes optional accessors that fall back to
//! `None` or an empty iterator when the shape is not what we expect.

use serde_json::Value;

/// Get a string field, or `None` if missing or not a string.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Get a string field, treating an empty string as absent.
pub fn non_empty_str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|s| !s.is_empty())
}

/// Get an array field as a slice; missing or non-array fields yield `&[]`.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// One task record: `{ id, data: { image, .. }, annotations: [..] }`
#[derive(Debug, Clone, Copy)]
pub struct RawTask<'a>(&'a Value);

impl<'a> RawTask<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn image(&self) -> Option<&'a str> {
        self.0.get("data").and_then(|data| non_empty_str_field(data, "image"))
    }

    pub fn annotations(&self) -> impl Iterator<Item = RawAnnotation<'a>> {
        array_field(self.0, "annotations")
            .iter()
            .filter(|annotation| annotation.is_object())
            .map(RawAnnotation)
    }
}

/// One submitted labeling pass over a task
#[derive(Debug, Clone, Copy)]
pub struct RawAnnotation<'a>(&'a Value);

impl<'a> RawAnnotation<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn created_at(&self) -> Option<&'a str> {
        non_empty_str_field(self.0, "created_at")
    }

    pub fn updated_at(&self) -> Option<&'a str> {
        non_empty_str_field(self.0, "updated_at")
    }

    /// `updated_at` when present, otherwise `created_at`.
    pub fn effective_timestamp(&self) -> Option<&'a str> {
        self.updated_at().or_else(|| self.created_at())
    }

    pub fn completed_by(&self) -> Option<RawAnnotator<'a>> {
        self.0
            .get("completed_by")
            .filter(|user| user.is_object())
            .map(RawAnnotator)
    }

    pub fn results(&self) -> impl Iterator<Item = RawResult<'a>> {
        array_field(self.0, "result")
            .iter()
            .filter(|result| result.is_object())
            .map(RawResult)
    }
}

/// The `completed_by` user attached to an annotation
#[derive(Debug, Clone, Copy)]
pub struct RawAnnotator<'a>(&'a Value);

impl<'a> RawAnnotator<'a> {
    pub fn email(&self) -> Option<&'a str> {
        str_field(self.0, "email")
    }

    pub fn first_name(&self) -> Option<&'a str> {
        str_field(self.0, "first_name")
    }

    pub fn last_name(&self) -> Option<&'a str> {
        str_field(self.0, "last_name")
    }

    /// `"first last"` trimmed, falling back to the email when both names
    /// are blank.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default()
        );
        match full.trim() {
            "" => self.email().unwrap_or_default().to_string(),
            name => name.to_string(),
        }
    }
}

/// A single field contribution, tagged by `from_name`
#[derive(Debug, Clone, Copy)]
pub struct RawResult<'a>(&'a Value);

impl<'a> RawResult<'a> {
    pub fn from_name(&self) -> Option<&'a str> {
        str_field(self.0, "from_name")
    }

    fn value_array(&self, key: &str) -> &'a [Value] {
        self.0
            .get("value")
            .map(|value| array_field(value, key))
            .unwrap_or(&[])
    }

    /// First entry of `value.choices`, if it is a string.
    pub fn first_choice(&self) -> Option<&'a str> {
        self.value_array("choices").first().and_then(Value::as_str)
    }

    /// String entries of `value.rectanglelabels`; other entries are skipped.
    pub fn rectangle_labels(&self) -> impl Iterator<Item = &'a str> {
        self.value_array("rectanglelabels")
            .iter()
            .filter_map(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_mistyped_fields_degrade_to_none() {
        let task = json!({ "id": "seven", "data": { "image": 42 }, "annotations": {} });
        let view = RawTask::new(&task);

        assert_eq!(view.id(), None);
        assert_eq!(view.image(), None);
        assert_eq!(view.annotations().count(), 0);
    }

    #[test]
    fn effective_timestamp_prefers_updated_at() {
        let both = json!({ "created_at": "2024-01-01", "updated_at": "2024-02-01" });
        let created_only = json!({ "created_at": "2024-01-01", "updated_at": "" });

        assert_eq!(
            RawAnnotation::new(&both).effective_timestamp(),
            Some("2024-02-01")
        );
        assert_eq!(
            RawAnnotation::new(&created_only).effective_timestamp(),
            Some("2024-01-01")
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let named = json!({ "completed_by": { "email": "a@b.c", "first_name": "Ada", "last_name": "" } });
        let blank = json!({ "completed_by": { "email": "a@b.c", "first_name": " ", "last_name": null } });

        let name = |v: &Value| {
            RawAnnotation::new(v)
                .completed_by()
                .map(|user| user.display_name())
        };
        assert_eq!(name(&named).as_deref(), Some("Ada"));
        assert_eq!(name(&blank).as_deref(), Some("a@b.c"));
    }

    #[test]
    fn result_accessors_skip_non_string_entries() {
        let result = json!({
            "from_name": "dent_boxes",
            "value": { "choices": [1, "YES"], "rectanglelabels": ["dime", 3, "Quarter"] }
        });
        let annotation = json!({ "result": [result, "garbage"] });
        let results: Vec<_> = RawAnnotation::new(&annotation).results().collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].from_name(), Some("dent_boxes"));
        assert_eq!(results[0].first_choice(), None);
        assert_eq!(
            results[0].rectangle_labels().collect::<Vec<_>>(),
            vec!["dime", "Quarter"]
        );
    }
}
