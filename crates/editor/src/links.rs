//! Messaging deep links for product inquiries.

use catalogo_core::{Product, format_price};

/// Base URL of the messaging deep-link service.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://wa.me";

/// Pre-filled inquiry text for a product, quoting its final price.
#[must_use]
pub fn inquiry_message(product: &Product) -> String {
    format!(
        "Hola! Me interesa este producto: {} que tiene un precio de {}. ¿Tienen disponibilidad?",
        product.name,
        format_price(product.final_price().amount())
    )
}

/// Deep link that opens a chat with `contact_number` and the inquiry text.
///
/// Everything but digits is dropped from the contact number, so
/// `"+51 999 888 777"` and `"51999888777"` give the same link.
///
/// ```
/// use catalogo_core::CatalogDocument;
/// use catalogo_editor::inquiry_link;
///
/// let doc = CatalogDocument::default();
/// let product = doc.active()[0].products[0].clone();
/// let link = inquiry_link("https://wa.me", &doc.contact_number, &product);
/// assert!(link.starts_with("https://wa.me/51999888777?text=Hola%21%20Me%20interesa"));
/// ```
#[must_use]
pub fn inquiry_link(base_url: &str, contact_number: &str, product: &Product) -> String {
    let number: String = contact_number.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{}/{number}?text={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&inquiry_message(product))
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalogo_core::{CatalogDocument, CategoryId, ProductId};

    use super::*;

    fn premium_king() -> Product {
        CatalogDocument::default()
            .find_product(&CategoryId::new("w1"), &ProductId::new("p1"))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_inquiry_message_quotes_final_price() {
        assert_eq!(
            inquiry_message(&premium_king()),
            "Hola! Me interesa este producto: Edredón Premium King que tiene un precio de S/ 212.5. ¿Tienen disponibilidad?"
        );
    }

    #[test]
    fn test_inquiry_link_encodes_message() {
        let link = inquiry_link("https://wa.me/", "+51 999 888 777", &premium_king());
        let (prefix, query) = link.split_once("?text=").unwrap();
        assert_eq!(prefix, "https://wa.me/51999888777");
        assert!(!query.contains(' '));
        assert!(query.contains("Edred%C3%B3n%20Premium%20King"));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            inquiry_message(&premium_king())
        );
    }
}
