//! Authorized key builders

use base64::{engine::general_purpose::STANDARD, Engine as _};
use lockbox_core::AuthorizedKey;
use rand::Rng;
use uuid::Uuid;

/// A key fully determined by `id`; equal ids give equal keys
pub fn key(id: &str) -> AuthorizedKey {
    AuthorizedKey::new(id, format!("sa-{}", id)).with_key_material(
        "RSA_2048",
        format!("public-{}", id),
        format!("private-{}", id),
    )
}

/// A key unequal to every other key in the test run
pub fn random_key() -> AuthorizedKey {
    let id = format!("aje{}", &Uuid::new_v4().simple().to_string()[..17]);
    let service_account_id = format!("aje{}", &Uuid::new_v4().simple().to_string()[..17]);
    let material: [u8; 32] = rand::thread_rng().gen();

    AuthorizedKey::new(id, service_account_id).with_key_material(
        "RSA_2048",
        STANDARD.encode(&material[..16]),
        STANDARD.encode(&material[16..]),
    )
}
