//! # Fixture Seeds
//!
//! The dataset every fresh installation starts from. Each collection is
//! seeded on its first access (see [`crate::collections::load_or_seed`]);
//! an installation that has already persisted state never sees these
//! again.
//!
//! ## Accounts
//! All three seeded accounts use the password `password`, hashed at seed
//! time. Change them on first login in any real deployment.

use nexus_core::{Client, Product, Provider, Role, User, WALK_IN_CLIENT_ID};

use crate::credentials::hash_password;
use crate::error::StoreResult;

/// Seed users: one per role.
pub fn users() -> StoreResult<Vec<User>> {
    Ok(vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@nexus.com".to_string(),
            username: "admin".to_string(),
            password_hash: Some(hash_password("password")?),
            role: Role::Admin,
            is_active: true,
            image_url: None,
        },
        User {
            id: "2".to_string(),
            name: "Juan Vendedor".to_string(),
            email: "juan@nexus.com".to_string(),
            username: "juan".to_string(),
            password_hash: Some(hash_password("password")?),
            role: Role::Seller,
            is_active: true,
            image_url: None,
        },
        User {
            id: "3".to_string(),
            name: "Maria Almacen".to_string(),
            email: "maria@nexus.com".to_string(),
            username: "maria".to_string(),
            password_hash: Some(hash_password("password")?),
            role: Role::Warehouse,
            is_active: true,
            image_url: None,
        },
    ])
}

/// Seed clients. The first entry is the walk-in sentinel; it must exist
/// in every installation and is never a valid deletion target.
pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: WALK_IN_CLIENT_ID.to_string(),
            name: "Consumidor Final".to_string(),
            tax_id: "00000000".to_string(),
            email: "N/A".to_string(),
            phone: "N/A".to_string(),
            address: "N/A".to_string(),
            total_spent_cents: 0,
            image_url: None,
        },
        Client {
            id: "c1".to_string(),
            name: "Corporación Alpha".to_string(),
            tax_id: "12345678-9".to_string(),
            email: "contacto@alpha.com".to_string(),
            phone: "555-0101".to_string(),
            address: "Av. Industrial 123".to_string(),
            total_spent_cents: 150_000,
            image_url: None,
        },
        Client {
            id: "c2".to_string(),
            name: "Juan Pérez".to_string(),
            tax_id: "98765432-1".to_string(),
            email: "juan.perez@email.com".to_string(),
            phone: "555-0202".to_string(),
            address: "Calle Falsa 456".to_string(),
            total_spent_cents: 45_000,
            image_url: None,
        },
    ]
}

/// Seed products.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            code: "PROD-001".to_string(),
            name: "Laptop Pro 15\"".to_string(),
            description: "High performance laptop".to_string(),
            price_cents: 120_000,
            cost_cents: 80_000,
            stock: 15,
            min_stock: 5,
            category_id: "tech".to_string(),
            image_url: None,
        },
        Product {
            id: "p2".to_string(),
            code: "PROD-002".to_string(),
            name: "Monitor 4K 27\"".to_string(),
            description: "Ultra HD Monitor".to_string(),
            price_cents: 35_000,
            cost_cents: 22_000,
            stock: 8,
            min_stock: 10,
            category_id: "tech".to_string(),
            image_url: None,
        },
        Product {
            id: "p3".to_string(),
            code: "PROD-003".to_string(),
            name: "Teclado Mecánico".to_string(),
            description: "RGB Mechanical Keyboard".to_string(),
            price_cents: 8_000,
            cost_cents: 4_500,
            stock: 45,
            min_stock: 15,
            category_id: "peripherals".to_string(),
            image_url: None,
        },
        Product {
            id: "p4".to_string(),
            code: "PROD-004".to_string(),
            name: "Mouse Gamer".to_string(),
            description: "Precision mouse".to_string(),
            price_cents: 5_000,
            cost_cents: 2_500,
            stock: 3,
            min_stock: 10,
            category_id: "peripherals".to_string(),
            image_url: None,
        },
    ]
}

/// Seed providers.
pub fn providers() -> Vec<Provider> {
    vec![
        Provider {
            id: "pr1".to_string(),
            name: "TechSupply Inc".to_string(),
            contact_name: "Robert Smith".to_string(),
            email: "sales@techsupply.com".to_string(),
            phone: "555-9000".to_string(),
            category: "Technology".to_string(),
            image_url: None,
        },
        Provider {
            id: "pr2".to_string(),
            name: "Global Logistics".to_string(),
            contact_name: "Elena G.".to_string(),
            email: "logistics@global.com".to_string(),
            phone: "555-8000".to_string(),
            category: "Services".to_string(),
            image_url: None,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::verify_password;

    #[test]
    fn test_seed_users_authenticate_with_default_password() {
        let users = users().unwrap();
        assert_eq!(users.len(), 3);
        for user in &users {
            let hash = user.password_hash.as_deref().unwrap();
            assert!(verify_password(hash, "password"));
        }
    }

    #[test]
    fn test_walk_in_sentinel_is_first_seed_client() {
        let clients = clients();
        assert_eq!(clients[0].id, WALK_IN_CLIENT_ID);
        assert_eq!(clients[0].total_spent_cents, 0);
    }

    #[test]
    fn test_seed_products_carry_cent_prices() {
        let products = products();
        assert_eq!(products.len(), 4);
        // "Laptop Pro 15" sells for $1200.00
        assert_eq!(products[0].price_cents, 120_000);
        // "Mouse Gamer" is below its reorder threshold from day one
        assert!(products[3].is_low_stock());
    }
}
