//! Basket View Model
//!
//! Turns basket rows and the caller's total into what the basket
//! component paints. The total is displayed as given, never recomputed.

use wasm_bindgen::JsValue;

use crate::error::Result;
use crate::models::BasketRow;
use crate::pricing::format_price;

#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    pub item_id: i64,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    /// Quantity input bounds are `0..=max_quantity`
    pub max_quantity: i64,
    pub quantity: i64,
}

impl BasketLine {
    /// Id of the per-row quantity form
    pub fn form_id(&self) -> String {
        format!("quantityForm{}", self.item_id)
    }
}

impl From<BasketRow> for BasketLine {
    fn from(row: BasketRow) -> Self {
        Self {
            item_id: row.item_id,
            unit_price: format_price(row.unit_price),
            name: row.name,
            image: row.image,
            max_quantity: row.max_quantity,
            quantity: row.quantity,
        }
    }
}

/// What follows the line items
#[derive(Debug, Clone, PartialEq)]
pub enum BasketFooter {
    /// Empty-state message with a link back to the catalogue
    Empty,
    /// Subtotal with a checkout link
    Summary { subtotal: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasketView {
    pub lines: Vec<BasketLine>,
    pub footer: BasketFooter,
}

impl BasketView {
    pub fn new(rows: Vec<BasketRow>, total: i64) -> Self {
        let lines: Vec<BasketLine> = rows.into_iter().map(BasketLine::from).collect();
        let footer = if lines.is_empty() {
            BasketFooter::Empty
        } else {
            BasketFooter::Summary { subtotal: format_price(total) }
        };
        Self { lines, footer }
    }
}

/// Rows embedded in the page as JSON text
pub fn parse_basket_rows(json: &str) -> Result<Vec<BasketRow>> {
    Ok(serde_json::from_str(json)?)
}

/// Rows passed from page script
pub fn decode_basket_rows(value: JsValue) -> Result<Vec<BasketRow>> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_basket() {
        let view = BasketView::new(Vec::new(), 0);
        assert!(view.lines.is_empty());
        assert_eq!(view.footer, BasketFooter::Empty);
    }

    #[test]
    fn test_empty_basket_ignores_total() {
        let view = BasketView::new(Vec::new(), 1234);
        assert_eq!(view.footer, BasketFooter::Empty);
    }

    #[test]
    fn test_single_row() {
        let rows = parse_basket_rows(r#"[["Mug", 999, "mug.png", 1, 5, 2]]"#).unwrap();
        let view = BasketView::new(rows, 1998);

        assert_eq!(view.lines.len(), 1);
        let line = &view.lines[0];
        assert_eq!(line.name, "Mug");
        assert_eq!(line.unit_price, "£9.99");
        assert_eq!(line.max_quantity, 5);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.form_id(), "quantityForm1");
        assert_eq!(view.footer, BasketFooter::Summary { subtotal: "£19.98".to_string() });
    }

    #[test]
    fn test_total_trusted_as_given() {
        let rows = parse_basket_rows(r#"[["Mug", 999, "mug.png", 1, 5, 2], ["Lamp", 100, "l.png", 2, 1, 1]]"#)
            .unwrap();
        let view = BasketView::new(rows, 1);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.footer, BasketFooter::Summary { subtotal: "£0.01".to_string() });
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = parse_basket_rows(r#"[["B", 1, "b", 8, 1, 1], ["A", 1, "a", 3, 1, 1]]"#).unwrap();
        let view = BasketView::new(rows, 2);
        let ids: Vec<i64> = view.lines.iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![8, 3]);
    }

    #[test]
    fn test_oversold_row_still_rendered() {
        let rows = parse_basket_rows(r#"[["Mug", 999, "mug.png", 1, 5, 2], ["Lamp", 100, "l.png", 2, -1, -1]]"#)
            .unwrap();
        let view = BasketView::new(rows, 1998);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[1].max_quantity, -1);
        assert_eq!(view.footer, BasketFooter::Summary { subtotal: "£19.98".to_string() });
    }

    #[test]
    fn test_malformed_rows_rejected() {
        assert!(parse_basket_rows(r#"{"Mug": 1}"#).is_err());
        assert!(parse_basket_rows(r#"[["Mug", "999", "mug.png", 1, 5, 2]]"#).is_err());
    }
}
