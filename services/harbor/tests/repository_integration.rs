//! Repository integration tests against a live PostgreSQL instance.
//!
//! These exercise the entity services end to end: creation, ordering,
//! uniqueness, the delete-returns-the-document contract, and the credential
//! handling rules. Run them with `cargo test -- --ignored` and a reachable
//! `DATABASE_URL`.

use common::database::{self, DatabaseConfig};
use harbor::AppState;
use harbor::models::{
    CreateCatwayRequest, CreateUserRequest, ReservationDetails, UpdateCatwayRequest,
    UpdateUserRequest,
};
use harbor::repositories::user::verify_password;

use chrono::{Duration, Utc};
use uuid::Uuid;

async fn test_state() -> AppState {
    let db_config = DatabaseConfig::from_env().expect("database config");
    let pool = database::init_pool(&db_config).await.expect("database pool");
    harbor::MIGRATOR.run(&pool).await.expect("migrations");
    AppState::new(pool)
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn catway_lifecycle_and_uniqueness() {
    let state = test_state().await;
    let number = unique("T");

    let created = state
        .catways
        .create(&CreateCatwayRequest {
            catway_number: number.clone(),
            kind: None,
            catway_state: None,
        })
        .await
        .expect("create catway");

    // Defaults applied by the schema contract.
    assert_eq!(created.kind.as_str(), "long");
    assert_eq!(created.catway_state, "Bon état");

    // Retrievable by id immediately after creation.
    let fetched = state
        .catways
        .find_by_id(created.id)
        .await
        .expect("fetch catway")
        .expect("catway present");
    assert_eq!(fetched.catway_number, number);

    // A second catway with the same number must be rejected.
    let duplicate = state
        .catways
        .create(&CreateCatwayRequest {
            catway_number: number.clone(),
            kind: None,
            catway_state: None,
        })
        .await;
    assert!(duplicate.is_err(), "duplicate catway number must fail");

    // Partial update leaves the untouched fields alone.
    let patched = state
        .catways
        .patch(
            created.id,
            &UpdateCatwayRequest {
                catway_state: Some("En maintenance".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("patch catway")
        .expect("catway present");
    assert_eq!(patched.catway_number, number);
    assert_eq!(patched.catway_state, "En maintenance");

    // Delete returns the pre-deletion document; a repeat finds nothing.
    let deleted = state
        .catways
        .delete(created.id)
        .await
        .expect("delete catway")
        .expect("catway present");
    assert_eq!(deleted.id, created.id);
    assert!(
        state
            .catways
            .find_by_id(created.id)
            .await
            .expect("fetch catway")
            .is_none()
    );
    assert!(
        state
            .catways
            .delete(created.id)
            .await
            .expect("delete catway")
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn user_credentials_are_transformed_and_never_returned() {
    let state = test_state().await;
    let email = format!("{}@Example.com", unique("user"));

    let created = state
        .users
        .create(&CreateUserRequest {
            name: "Test User".to_string(),
            email: email.clone(),
            password: "password123".to_string(),
        })
        .await
        .expect("create user");

    // Stored lowercase regardless of input casing.
    assert_eq!(created.email, email.to_lowercase());

    // The login-flow lookup is case-insensitive and carries the hash.
    let full = state
        .users
        .find_by_email(&email.to_uppercase())
        .await
        .expect("find by email")
        .expect("user present");
    assert_ne!(full.password_hash, "password123");
    assert!(verify_password("password123", &full.password_hash).unwrap());
    assert!(!verify_password("password124", &full.password_hash).unwrap());

    // A password change on update goes through the transform as well.
    state
        .users
        .update(
            created.id,
            &UpdateUserRequest {
                password: Some("changed456".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update user")
        .expect("user present");
    let updated = state
        .users
        .find_by_email(&email)
        .await
        .expect("find by email")
        .expect("user present");
    assert_ne!(updated.password_hash, "changed456");
    assert!(verify_password("changed456", &updated.password_hash).unwrap());
    assert!(!verify_password("password123", &updated.password_hash).unwrap());

    // Duplicate email must be rejected.
    let duplicate = state
        .users
        .create(&CreateUserRequest {
            name: "Other".to_string(),
            email: email.to_uppercase(),
            password: "whatever".to_string(),
        })
        .await;
    assert!(duplicate.is_err(), "duplicate email must fail");

    state
        .users
        .delete(created.id)
        .await
        .expect("delete user")
        .expect("user present");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn reservations_sort_and_filter_by_catway() {
    let state = test_state().await;
    let number_a = unique("RA");
    let number_b = unique("RB");
    let base = Utc::now();

    let mut created_ids = Vec::new();
    for (number, client, offset_days) in [
        (&number_a, "Early Bird", 1),
        (&number_a, "Late Arrival", 10),
        (&number_b, "Other Catway", 5),
    ] {
        let reservation = state
            .reservations
            .create(
                number,
                &ReservationDetails {
                    client_name: client.to_string(),
                    boat_name: "Boat".to_string(),
                    check_in: base + Duration::days(offset_days),
                    check_out: base + Duration::days(offset_days + 7),
                },
            )
            .await
            .expect("create reservation");
        created_ids.push(reservation.id);
    }

    // get_all is ordered by check-in, descending.
    let all = state.reservations.get_all().await.expect("list reservations");
    let positions: Vec<usize> = created_ids
        .iter()
        .map(|id| all.iter().position(|r| r.id == *id).expect("listed"))
        .collect();
    // "Late Arrival" (day 10) before "Other Catway" (day 5) before
    // "Early Bird" (day 1).
    assert!(positions[1] < positions[2]);
    assert!(positions[2] < positions[0]);

    // find_by_catway filters to exactly the matching number.
    let for_a = state
        .reservations
        .find_by_catway(&number_a)
        .await
        .expect("filter reservations");
    assert_eq!(for_a.len(), 2);
    assert!(for_a.iter().all(|r| r.catway_number == number_a));
    assert!(for_a[0].check_in > for_a[1].check_in);

    for id in created_ids {
        state
            .reservations
            .delete(id)
            .await
            .expect("delete reservation")
            .expect("reservation present");
    }
}
