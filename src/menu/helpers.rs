//! Menu Business Logic Helpers

use super::models::MenuItem;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Finds a menu item by name, ignoring case.
pub fn find_item<'a>(menu: &'a [MenuItem], name: &str) -> Option<&'a MenuItem> {
    let wanted = name.to_lowercase();
    menu.iter().find(|item| item.name.to_lowercase() == wanted)
}

/// Creates an order identifier of the form `order_<unix-millis>_<12 hex>`.
pub fn generate_order_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let entropy = Uuid::new_v4().simple().to_string();
    format!("order_{}_{}", millis, &entropy[..12])
}

/// Example output: `"Successfully ordered 2x Latte."`.
pub fn format_order_confirmation(quantity: u32, item_name: &str) -> String {
    format!("Successfully ordered {}x {}.", quantity, item_name)
}

/// Example output: `"Sorry, 'Unicorn Brew' is not available on the menu."`.
pub fn format_unavailable(item_name: &str) -> String {
    format!("Sorry, '{}' is not available on the menu.", item_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("1", "Espresso", 2.5),
            MenuItem::new("2", "Latte", 3.5),
        ]
    }

    #[test]
    fn find_item_ignores_case() {
        let menu = menu();
        assert_eq!(find_item(&menu, "latte").map(|i| i.id.as_str()), Some("2"));
        assert_eq!(find_item(&menu, "ESPRESSO").map(|i| i.id.as_str()), Some("1"));
        assert!(find_item(&menu, "Unicorn Brew").is_none());
    }

    #[test]
    fn order_ids_are_prefixed_and_unique() {
        let a = generate_order_id();
        let b = generate_order_id();
        assert!(a.starts_with("order_"));
        assert_eq!(a.rsplit('_').next().map(str::len), Some(12));
        assert_ne!(a, b);
    }

    #[test]
    fn messages_mention_item_and_quantity() {
        assert_eq!(
            format_order_confirmation(2, "Latte"),
            "Successfully ordered 2x Latte."
        );
        assert!(format_unavailable("Unicorn Brew").contains("not available"));
    }
}
