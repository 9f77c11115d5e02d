use serde::{Deserialize, Serialize};

use catalog_core::ProductId;
use catalog_products::Prices;

// -------------------------
// Operation names
// -------------------------

pub const OP_CREATE: &str = "create";
pub const OP_LIST: &str = "list";
pub const OP_DETAILS: &str = "details";
pub const OP_UPDATE: &str = "update";
pub const OP_SET_PRICES: &str = "setprices";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /setprices`. Any other product fields in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SetPricesRequest {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub prices: Prices,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdData {
    pub id: ProductId,
}

impl From<ProductId> for IdData {
    fn from(id: ProductId) -> Self {
        Self { id }
    }
}

/// Envelope wrapping every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Operation (name of the API call).
    pub op: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn ok(op: &str, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                op: op.to_string(),
                success: true,
                error: None,
                data: Some(data),
            },
            Err(e) => {
                tracing::error!(op, error = %e, "failed to encode response data");
                Self::error(op, "Failed to encode response")
            }
        }
    }

    pub fn error(op: &str, message: impl Into<String>) -> Self {
        Self {
            op: op.to_string(),
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::error(OP_UPDATE, "Invalid ID!")).unwrap();
        assert_eq!(json, json!({"op": "update", "success": false, "error": "Invalid ID!"}));
    }

    #[test]
    fn ok_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::ok(OP_CREATE, IdData::from(ProductId::new(3)))).unwrap();
        assert_eq!(json, json!({"op": "create", "success": true, "data": {"id": 3}}));
    }

    #[test]
    fn set_prices_request_ignores_other_product_fields() {
        let req: SetPricesRequest = serde_json::from_value(json!({
            "id": 2,
            "name": "ignored",
            "prices": {"HUF": {"value": 7717, "multiplier": 1}}
        }))
        .unwrap();
        assert_eq!(req.id, ProductId::new(2));
        assert_eq!(req.prices.len(), 1);
    }
}
