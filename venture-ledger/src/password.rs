//! Password hashing (PBKDF2-HMAC-SHA256, RFC 8018)
//!
//! Credential hashes are stored as
//! `pbkdf2-sha256$<iterations>$<salt hex>$<key hex>` so the parameters
//! travel with the hash and can be raised without invalidating
//! existing accounts.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// PBKDF2 iteration count for new hashes.
const ITERATIONS: u32 = 210_000;

/// Random salt length in bytes.
const SALT_LEN: usize = 16;

/// Derived key length in bytes.
const KEY_LEN: usize = 32;

/// SHA-256 block size for HMAC key padding.
const BLOCK_SIZE: usize = 64;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let key = pbkdf2_sha256(password.as_bytes(), &salt, ITERATIONS, KEY_LEN);
    format!(
        "pbkdf2-sha256${}${}${}",
        ITERATIONS,
        hex::encode(salt),
        hex::encode(key)
    )
}

/// Verify a password against a stored hash string.
///
/// Malformed hashes verify as false rather than erroring; a corrupt
/// credential row must never let a login through.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parts: Vec<&str> = stored.split('$').collect();
    if parts.len() != 4 || parts[0] != "pbkdf2-sha256" {
        return false;
    }

    let Ok(iterations) = parts[1].parse::<u32>() else {
        return false;
    };
    let Ok(salt) = hex::decode(parts[2]) else {
        return false;
    };
    let Ok(expected) = hex::decode(parts[3]) else {
        return false;
    };
    if iterations == 0 || expected.is_empty() {
        return false;
    }

    let derived = pbkdf2_sha256(password.as_bytes(), &salt, iterations, expected.len());
    constant_time_eq(&derived, &expected)
}

/// PBKDF2 with HMAC-SHA256 (RFC 8018).
fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32, output_len: usize) -> Vec<u8> {
    let hash_len = Sha256::output_size();
    let blocks = (output_len + hash_len - 1) / hash_len;

    let mut dk = Vec::with_capacity(blocks * hash_len);
    for block_num in 1..=blocks as u32 {
        // U1 = PRF(Password, Salt || INT(i))
        let mut salt_i = salt.to_vec();
        salt_i.extend_from_slice(&block_num.to_be_bytes());

        let mut u = hmac_sha256(password, &salt_i);
        let mut block = u.clone();

        // Uj = PRF(Password, U_{j-1})
        for _ in 1..iterations {
            u = hmac_sha256(password, &u);
            for (b, u_byte) in block.iter_mut().zip(u.iter()) {
                *b ^= u_byte;
            }
        }

        dk.extend_from_slice(&block);
    }

    dk.truncate(output_len);
    dk
}

/// HMAC-SHA256 (RFC 2104).
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = if key.len() > BLOCK_SIZE {
        Sha256::digest(key).to_vec()
    } else {
        key.to_vec()
    };

    let mut key_pad = key;
    key_pad.resize(BLOCK_SIZE, 0);

    let mut ipad = vec![0x36u8; BLOCK_SIZE];
    for (i, k) in ipad.iter_mut().zip(key_pad.iter()) {
        *i ^= k;
    }

    let mut opad = vec![0x5cu8; BLOCK_SIZE];
    for (o, k) in opad.iter_mut().zip(key_pad.iter()) {
        *o ^= k;
    }

    let mut inner = Sha256::new();
    inner.update(&ipad);
    inner.update(data);
    let inner_hash = inner.finalize();

    let mut outer = Sha256::new();
    outer.update(&opad);
    outer.update(inner_hash);
    outer.finalize().to_vec()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
