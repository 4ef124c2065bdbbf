//! Seed data for the in-memory store.
//!
//! Mirrors the data set the service has always shipped with: eleven users
//! sharing the password `P@ssword1`, a mix of active and inactive accounts,
//! and one admin (`ploew@example.com`). Every seeded user also gets an
//! initial "Add User" audit log entry via [`super::DataStore::seeded`].

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::UserRecord;
use crate::modules::users::model::UserRole;

pub const SEED_PASSWORD: &str = "P@ssword1";

struct SeedUser {
    forename: &'static str,
    surname: &'static str,
    email: &'static str,
    is_active: bool,
    date_of_birth: Option<(i32, u32, u32)>,
    roles: &'static [UserRole],
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        forename: "Peter",
        surname: "Loew",
        email: "ploew@example.com",
        is_active: true,
        date_of_birth: Some((2002, 1, 1)),
        roles: &[UserRole::Admin],
    },
    SeedUser {
        forename: "Benjamin Franklin",
        surname: "Gates",
        email: "bfgates@example.com",
        is_active: true,
        date_of_birth: Some((1992, 2, 20)),
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Castor",
        surname: "Troy",
        email: "ctroy@example.com",
        is_active: false,
        date_of_birth: Some((1998, 12, 10)),
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Memphis",
        surname: "Raines",
        email: "mraines@example.com",
        is_active: true,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Stanley",
        surname: "Goodspeed",
        email: "sgoodspeed@example.com",
        is_active: true,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "H.I.",
        surname: "McDunnough",
        email: "himcdunnough@example.com",
        is_active: true,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Cameron",
        surname: "Poe",
        email: "cpoe@example.com",
        is_active: false,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Edward",
        surname: "Malus",
        email: "emalus@example.com",
        is_active: false,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Damon",
        surname: "Macready",
        email: "dmacready@example.com",
        is_active: false,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Johnny",
        surname: "Blaze",
        email: "jblaze@example.com",
        is_active: true,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
    SeedUser {
        forename: "Robin",
        surname: "Feld",
        email: "rfeld@example.com",
        is_active: true,
        date_of_birth: None,
        roles: &[UserRole::User],
    },
];

/// Builds the seed user records. The shared password is hashed once and
/// reused, so seeding costs a single bcrypt round regardless of user count.
pub fn seed_users(cost: u32) -> Vec<UserRecord> {
    let password = bcrypt::hash(SEED_PASSWORD, cost).expect("Failed to hash seed password");
    let now = Utc::now();

    SEED_USERS
        .iter()
        .map(|seed| UserRecord {
            id: Uuid::new_v4(),
            forename: seed.forename.to_string(),
            surname: seed.surname.to_string(),
            email: seed.email.to_string(),
            password: password.clone(),
            is_active: seed.is_active,
            date_of_birth: seed
                .date_of_birth
                .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            roles: seed.roles.to_vec(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
