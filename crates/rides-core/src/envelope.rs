use serde::{Serialize, Serializer};

use crate::params::last_page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform response body: `{status, data, message}`, plus `page`,
/// `itemsCount` and `lastPage` for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub data: Option<T>,
    pub message: String,
    #[serde(flatten)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    pub fn new(data: Option<T>, status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            data,
            message: message.into(),
            pagination: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(Some(data), Status::Success, "")
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(data)
        }
    }
}

impl Envelope<()> {
    /// Error bodies never carry data.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(None, Status::Error, message)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: PageNumber,
    pub items_count: i64,
    pub last_page: i64,
}

impl Pagination {
    /// `page` is echoed as requested; `lastPage` derives from `items_count`.
    pub fn new(page: f64, items_count: i64) -> Self {
        Self {
            page: PageNumber(page),
            items_count,
            last_page: last_page(items_count),
        }
    }
}

/// The requested page as the client will see it: whole numbers are written
/// as integers, fractions as floats, and NaN or infinities as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageNumber(pub f64);

impl Serialize for PageNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let n = self.0;
        if !n.is_finite() {
            serializer.serialize_none()
        } else if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
            serializer.serialize_i64(n as i64)
        } else {
            serializer.serialize_f64(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(Envelope::success(vec![1, 2])).unwrap();
        assert_eq!(
            body,
            json!({ "status": "success", "data": [1, 2], "message": "" })
        );
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let body = serde_json::to_value(Envelope::error("Could not find any rides")).unwrap();
        assert_eq!(
            body,
            json!({ "status": "error", "data": null, "message": "Could not find any rides" })
        );
    }

    #[test]
    fn test_paginated_envelope_adds_metadata() {
        let env = Envelope::paginated(Vec::<i32>::new(), Pagination::new(3.0, 21));
        let body = serde_json::to_value(env).unwrap();
        assert_eq!(body["page"], json!(3));
        assert_eq!(body["itemsCount"], json!(21));
        assert_eq!(body["lastPage"], json!(3));
        assert_eq!(body["data"], json!([]));
    }

    #[test]
    fn test_non_numeric_page_serializes_as_null() {
        let body = serde_json::to_value(Pagination::new(f64::NAN, 5)).unwrap();
        assert_eq!(body, json!({ "page": null, "itemsCount": 5, "lastPage": 1 }));
    }
}
