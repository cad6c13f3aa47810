use aes::Aes256;
use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cfb_mode::Decryptor;

use crate::error::{Error, Result};

type Aes256CfbDec = Decryptor<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Decrypt a base64 blob laid out as `iv (16 bytes) || ciphertext` using AES-256-CFB
pub fn decrypt_cookie(encrypted: &str, key: &[u8]) -> Result<String> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }

    let data = STANDARD
        .decode(encrypted.trim())
        .map_err(|e| Error::Decryption(format!("invalid base64: {}", e)))?;

    if data.len() < IV_LEN {
        return Err(Error::Decryption(format!(
            "payload too short: expected at least {} bytes, got {}",
            IV_LEN,
            data.len()
        )));
    }

    let (iv, ciphertext) = data.split_at(IV_LEN);
    let cipher = Aes256CfbDec::new_from_slices(key, iv)
        .map_err(|e| Error::Decryption(format!("failed to create cipher: {:?}", e)))?;

    let mut buffer = ciphertext.to_vec();
    cipher.decrypt(&mut buffer);

    String::from_utf8(buffer).map_err(|e| Error::Decryption(format!("plaintext is not utf-8: {}", e)))
}
