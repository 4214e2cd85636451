//! Role-based navigation gating
//!
//! Access here only decides whether a link's target is worth eagerly
//! loading; a denied path still navigates normally, and the backend remains
//! the actual authorization boundary.

use souk_core::Role;

/// Decide whether `role` may use the page at `path`
pub fn can_access(path: &str, role: Role) -> bool {
    match first_segment(path) {
        // The landing metrics page is open to every signed-in role
        "" | "dashboard" => true,
        // Listing management is a seller surface
        "listings" | "products" | "services" => role.is_seller(),
        // Payouts accrue to sellers
        "wallet" => role.is_seller(),
        // Unknown paths degrade to accessible; the backend decides anyway
        _ => true,
    }
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_is_open_to_all_roles() {
        for role in [Role::Buyer, Role::Seller, Role::Both, Role::Admin] {
            assert!(can_access("/dashboard", role));
            assert!(can_access("/", role));
        }
    }

    #[test]
    fn listings_and_wallet_are_seller_surfaces() {
        for path in ["/listings", "/products/42", "/services", "/wallet"] {
            assert!(!can_access(path, Role::Buyer), "{path} open to buyer");
            assert!(can_access(path, Role::Seller), "{path} closed to seller");
            assert!(can_access(path, Role::Both), "{path} closed to both");
            assert!(can_access(path, Role::Admin), "{path} closed to admin");
        }
    }

    #[test]
    fn unknown_paths_degrade_to_accessible() {
        assert!(can_access("/help", Role::Buyer));
        assert!(can_access("/login", Role::Buyer));
    }
}
