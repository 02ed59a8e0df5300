//! Data assembled for order emails.
//!
//! The serialized form is what templates see: every order column at the top
//! level plus `grand_total_text`, `items`, `shipping_address` and
//! `billing_address` (with `country_name` / `province_name`).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use larder_core::locale;

use crate::models::{Order, OrderAddress, OrderItem};

/// An address with display names for its country and province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedAddress {
    #[serde(flatten)]
    pub address: OrderAddress,
    /// Country display name, empty when the code is unknown.
    pub country_name: String,
    /// Province display name, empty when unset or unknown.
    pub province_name: String,
}

impl From<OrderAddress> for EnrichedAddress {
    fn from(address: OrderAddress) -> Self {
        let country_name = locale::country_name(&address.country)
            .unwrap_or_default()
            .to_string();
        let province_name = address
            .province
            .as_deref()
            .and_then(locale::province_name)
            .unwrap_or_default()
            .to_string();

        Self {
            address,
            country_name,
            province_name,
        }
    }
}

/// Everything an order email template can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEmailData {
    #[serde(flatten)]
    pub order: Order,
    /// Grand total formatted in the order currency.
    pub grand_total_text: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: Option<EnrichedAddress>,
    pub billing_address: Option<EnrichedAddress>,
}

impl OrderEmailData {
    /// Assemble email data from loaded records.
    #[must_use]
    pub fn new(
        order: Order,
        items: Vec<OrderItem>,
        shipping_address: Option<OrderAddress>,
        billing_address: Option<OrderAddress>,
    ) -> Self {
        let grand_total_text = order.format_amount(order.grand_total);
        Self {
            order,
            grand_total_text,
            items,
            shipping_address: shipping_address.map(EnrichedAddress::from),
            billing_address: billing_address.map(EnrichedAddress::from),
        }
    }
}

/// Plain text body of the internal new-order notice.
#[must_use]
pub fn diagnostic_email_text(data: &OrderEmailData) -> String {
    let order = &data.order;
    let shipping = data.shipping_address.as_ref();
    let full_name = shipping
        .and_then(|a| a.address.full_name.as_deref())
        .unwrap_or_default();
    let address_1 = shipping
        .and_then(|a| a.address.address_1.as_deref())
        .unwrap_or_default();
    let city = shipping
        .and_then(|a| a.address.city.as_deref())
        .unwrap_or_default();
    let postcode = shipping
        .and_then(|a| a.address.postcode.as_deref())
        .unwrap_or_default();
    let province_name = shipping.map_or("", |a| a.province_name.as_str());
    let country_name = shipping.map_or("", |a| a.country_name.as_str());

    let mut body = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(body, "A new order has been placed. Order details:");
    let _ = writeln!(body, "Order ID: {}", order.order_id);
    let _ = writeln!(
        body,
        "Order Date: {}",
        order.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(body, "Customer Email: {}", order.customer_email);
    let _ = writeln!(body, "Order Number: {}", order.order_number);
    let _ = writeln!(body, "Shipping to: {full_name}");
    let _ = writeln!(body);
    let _ = writeln!(body, "Shipping Address:");
    let _ = writeln!(body, "Address: {address_1}");
    let _ = writeln!(body, "City: {city}");
    let _ = writeln!(body, "Province: {province_name}");
    let _ = writeln!(body, "Country: {country_name}");
    let _ = writeln!(body, "Post Code: {postcode}");
    let _ = writeln!(body);
    let _ = writeln!(body, "Order Items:");
    for item in &data.items {
        let _ = writeln!(
            body,
            "- {} x {} = {}",
            item.product_name,
            item.qty,
            order.format_amount(item.final_price)
        );
    }
    let _ = writeln!(body);
    let _ = writeln!(body, "Total Price:");
    let _ = write!(body, "{}", data.grand_total_text);

    body
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use larder_core::{AddressId, OrderId, OrderItemId};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn order() -> Order {
        Order {
            order_id: OrderId::new(12),
            uuid: Uuid::nil(),
            order_number: "10012".to_string(),
            customer_email: "ada@example.com".to_string(),
            customer_full_name: Some("Ada Lovelace".to_string()),
            shipping_address_id: Some(AddressId::new(1)),
            billing_address_id: None,
            currency: "USD".to_string(),
            sub_total: d("30"),
            tax_amount: d("0"),
            shipping_fee_excl_tax: d("5"),
            grand_total: d("35"),
            total_weight: d("1.2"),
            created_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
        }
    }

    fn item(id: i32, name: &str, qty: i32, price: &str) -> OrderItem {
        OrderItem {
            order_item_id: OrderItemId::new(id),
            order_item_order_id: OrderId::new(12),
            product_id: None,
            product_sku: format!("SKU-{id}"),
            product_name: name.to_string(),
            qty,
            product_price: d(price),
            final_price: d(price),
            total: d(price),
            product_weight: d("0.5"),
        }
    }

    fn address(country: &str, province: Option<&str>) -> OrderAddress {
        OrderAddress {
            order_address_id: AddressId::new(1),
            full_name: Some("Ada Lovelace".to_string()),
            postcode: Some("94107".to_string()),
            telephone: None,
            country: country.to_string(),
            province: province.map(str::to_string),
            city: Some("San Francisco".to_string()),
            address_1: Some("1 Market St".to_string()),
            address_2: None,
        }
    }

    #[test]
    fn test_enriched_address_known_codes() {
        let enriched = EnrichedAddress::from(address("US", Some("US-CA")));
        assert_eq!(enriched.country_name, "United States");
        assert_eq!(enriched.province_name, "California");
    }

    #[test]
    fn test_enriched_address_unknown_codes_are_empty() {
        let enriched = EnrichedAddress::from(address("ZZ", None));
        assert_eq!(enriched.country_name, "");
        assert_eq!(enriched.province_name, "");
    }

    #[test]
    fn test_serialized_shape_for_templates() {
        let data = OrderEmailData::new(
            order(),
            vec![item(1, "Tea", 2, "10")],
            Some(address("US", None)),
            None,
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["order_number"], "10012");
        assert_eq!(json["grand_total_text"], "$35.00");
        assert_eq!(json["items"][0]["product_name"], "Tea");
        assert_eq!(json["shipping_address"]["country_name"], "United States");
        assert_eq!(json["shipping_address"]["city"], "San Francisco");
        assert!(json["billing_address"].is_null());

        let back: OrderEmailData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_diagnostic_text_lists_items_and_address() {
        let data = OrderEmailData::new(
            order(),
            vec![item(1, "Tea", 2, "10"), item(2, "Jam", 1, "15")],
            Some(address("US", Some("US-CA"))),
            None,
        );
        let text = diagnostic_email_text(&data);

        assert!(text.contains("Order Number: 10012"));
        assert!(text.contains("Order Date: 2026-03-04 05:06:07 UTC"));
        assert!(text.contains("- Tea x 2 = $10.00"));
        assert!(text.contains("- Jam x 1 = $15.00"));
        assert!(text.contains("Country: United States"));
        assert!(text.contains("Province: California"));
        assert!(text.ends_with("$35.00"));
    }

    #[test]
    fn test_diagnostic_text_without_shipping_address() {
        let data = OrderEmailData::new(order(), vec![], None, None);
        let text = diagnostic_email_text(&data);
        assert!(text.contains("Shipping to: \n"));
        assert!(text.contains("Country: \n"));
    }
}
