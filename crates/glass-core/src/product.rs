//! Product details shown by catalog pages and the detail modal.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog backend.
///
/// Field names follow the backend's JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub product_id: u64,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    pub category: String,
    pub product_type: String,
    pub product_price: f64,
    pub product_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
}

impl ProductDetails {
    pub fn in_stock(&self) -> bool {
        self.product_stock > 0
    }

    /// Price with two decimals and thousands separators (e.g. "12,500.00").
    pub fn price_label(&self) -> String {
        let cents = (self.product_price * 100.0).round() as i64;
        let (whole, frac) = (cents.unsigned_abs() / 100, cents.unsigned_abs() % 100);

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if cents < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> ProductDetails {
        ProductDetails {
            product_id: 1,
            product_name: "Door A".to_string(),
            product_image: None,
            category: "doors".to_string(),
            product_type: "standard".to_string(),
            product_price: 100.0,
            product_stock: 5,
            product_description: None,
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(door().price_label(), "100.00");
        let pricey = ProductDetails {
            product_price: 1234567.891,
            ..door()
        };
        assert_eq!(pricey.price_label(), "1,234,567.89");
        let cheap = ProductDetails {
            product_price: 0.5,
            ..door()
        };
        assert_eq!(cheap.price_label(), "0.50");
    }

    #[test]
    fn test_price_label_out_of_range_prices() {
        let negative = ProductDetails {
            product_price: -1e30,
            ..door()
        };
        assert_eq!(negative.price_label(), "-92,233,720,368,547,758.08");
        let refund = ProductDetails {
            product_price: -12.5,
            ..door()
        };
        assert_eq!(refund.price_label(), "-12.50");
    }

    #[test]
    fn test_in_stock() {
        assert!(door().in_stock());
        let sold_out = ProductDetails {
            product_stock: 0,
            ..door()
        };
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "product_id": 1,
            "product_name": "Door A",
            "category": "doors",
            "product_type": "standard",
            "product_price": 100,
            "product_stock": 5
        }"#;
        let product: ProductDetails = serde_json::from_str(json).unwrap();
        assert_eq!(product, door());
    }
}
