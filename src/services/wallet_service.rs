use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

use crate::models::{
    KeyMaterial, KeyPair, WalletError, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SEED_LENGTH,
    SIGNATURE_LENGTH,
};
use crate::utils::encoding::decode_hex;

/// Derive a wallet keypair from explicit key material.
///
/// Fresh generation draws the seed from the operating system RNG. Seed
/// expansion is the standard Ed25519 construction and is deterministic.
pub fn derive(material: KeyMaterial) -> KeyPair {
    match &material {
        KeyMaterial::Fresh => {
            let signing_key = SigningKey::generate(&mut OsRng);
            keypair_from_signing_key(&signing_key)
        }
        KeyMaterial::Seed(seed) => {
            let signing_key = SigningKey::from_bytes(seed);
            keypair_from_signing_key(&signing_key)
        }
        KeyMaterial::Expanded(secret_key) => adopt_expanded_unchecked(*secret_key),
    }
}

/// Derive from optional raw bytes: absent or empty input generates a fresh
/// keypair, 32 bytes are treated as a seed, 64 bytes as a full secret key.
pub fn derive_from_bytes(input: Option<&[u8]>) -> Result<KeyPair, WalletError> {
    let material = KeyMaterial::from_bytes(input.unwrap_or_default())?;
    Ok(derive(material))
}

/// Import a wallet from user-supplied hex, optionally "0x"-prefixed and in
/// either case, holding a 32-byte seed or a 64-byte secret key.
pub fn import(input: &str) -> Result<KeyPair, WalletError> {
    let bytes = Zeroizing::new(decode_hex(input)?);
    derive_from_bytes(Some(&bytes))
}

fn keypair_from_signing_key(signing_key: &SigningKey) -> KeyPair {
    KeyPair {
        public_key: signing_key.verifying_key().to_bytes(),
        secret_key: signing_key.to_keypair_bytes(),
    }
}

/// Adopt a caller-supplied 64-byte secret key unchanged. The public key is
/// read from the trailing 32 bytes without checking that it matches the
/// seed half, so an internally inconsistent key is accepted silently.
fn adopt_expanded_unchecked(secret_key: [u8; SECRET_KEY_LENGTH]) -> KeyPair {
    let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
    public_key.copy_from_slice(&secret_key[SEED_LENGTH..]);
    KeyPair {
        public_key,
        secret_key,
    }
}

/// Produce a detached Ed25519 signature over the message. Signing is
/// deterministic: the same key and message always yield the same bytes.
pub fn sign(secret_key: &[u8; SECRET_KEY_LENGTH], message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    let mut seed = [0u8; SEED_LENGTH];
    seed.copy_from_slice(&secret_key[..SEED_LENGTH]);
    let signing_key = SigningKey::from_bytes(&seed);
    seed.zeroize();
    signing_key.sign(message).to_bytes()
}

/// Verify a detached signature against a 32-byte public key.
pub fn verify(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    message: &[u8],
    signature: &[u8; SIGNATURE_LENGTH],
) -> Result<bool, WalletError> {
    let verifying_key = VerifyingKey::from_bytes(public_key)
        .map_err(|e| WalletError::InvalidKeyMaterial(format!("invalid public key: {}", e)))?;
    let signature = Signature::from_bytes(signature);
    Ok(verifying_key.verify(message, &signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::encoding::encode_hex;

    // Public key expanded from the all-zero seed.
    const ZERO_SEED_PUBLIC_HEX: &str =
        "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29";

    #[test]
    fn fresh_wallets_differ() {
        let a = derive(KeyMaterial::Fresh);
        let b = derive(KeyMaterial::Fresh);
        assert_ne!(a.public_key, b.public_key);
        assert_ne!(a.secret_key, b.secret_key);
    }

    #[test]
    fn derive_from_bytes_treats_absent_and_empty_as_fresh() {
        let a = derive_from_bytes(None).unwrap();
        let b = derive_from_bytes(Some(&[])).unwrap();
        assert_ne!(a.public_key, b.public_key);
    }

    #[test]
    fn seed_derivation_is_deterministic() {
        let seed = [42u8; SEED_LENGTH];
        let a = derive_from_bytes(Some(&seed)).unwrap();
        let b = derive_from_bytes(Some(&seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seed_derivation_embeds_seed_and_public_key() {
        let seed = [7u8; SEED_LENGTH];
        let wallet = derive_from_bytes(Some(&seed)).unwrap();
        assert_eq!(wallet.secret_key[..SEED_LENGTH], seed);
        assert_eq!(wallet.secret_key[SEED_LENGTH..], wallet.public_key);
    }

    #[test]
    fn expanded_secret_key_is_adopted_unchanged() {
        let mut raw = [0u8; SECRET_KEY_LENGTH];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let wallet = derive_from_bytes(Some(&raw)).unwrap();
        assert_eq!(wallet.secret_key, raw);
        assert_eq!(wallet.public_key, raw[SEED_LENGTH..]);
    }

    #[test]
    fn inconsistent_expanded_key_is_accepted_silently() {
        // Public half deliberately does not match the seed half.
        let seed = [1u8; SEED_LENGTH];
        let real = derive_from_bytes(Some(&seed)).unwrap();
        let mut raw = real.secret_key;
        raw[SEED_LENGTH] ^= 0xff;
        let wallet = derive_from_bytes(Some(&raw)).unwrap();
        assert_eq!(wallet.secret_key, raw);
        assert_ne!(wallet.public_key, real.public_key);
    }

    #[test]
    fn rejects_invalid_input_lengths() {
        for len in [1usize, 17, 31, 33, 63, 65] {
            let result = derive_from_bytes(Some(&vec![0u8; len]));
            assert!(
                matches!(result, Err(WalletError::InvalidKeyMaterial(_))),
                "length {} should be rejected",
                len
            );
        }
    }

    #[test]
    fn import_accepts_prefixed_mixed_case_hex() {
        let seed = [9u8; SEED_LENGTH];
        let expected = derive_from_bytes(Some(&seed)).unwrap();
        let plain = import(&encode_hex(&seed)).unwrap();
        let prefixed = import(&format!("0x{}", encode_hex(&seed))).unwrap();
        let shouting = import(&encode_hex(&seed).to_uppercase()).unwrap();
        assert_eq!(plain, expected);
        assert_eq!(prefixed, expected);
        assert_eq!(shouting, expected);
    }

    #[test]
    fn import_rejects_bad_input() {
        assert!(matches!(
            import("0xabcd"),
            Err(WalletError::InvalidKeyMaterial(_))
        ));
        assert!(matches!(
            import("not hex at all"),
            Err(WalletError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn signing_is_deterministic() {
        let wallet = derive_from_bytes(Some(&[3u8; SEED_LENGTH])).unwrap();
        let a = sign(&wallet.secret_key, b"hello lumina");
        let b = sign(&wallet.secret_key, b"hello lumina");
        assert_eq!(a, b);
        assert_eq!(a.len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn signature_verifies_and_rejects_tampering() {
        let wallet = derive(KeyMaterial::Fresh);
        let message = b"transfer 100 to 0xabc".to_vec();
        let signature = sign(&wallet.secret_key, &message);

        assert!(verify(&wallet.public_key, &message, &signature).unwrap());

        let mut altered = message.clone();
        altered[0] ^= 0x01;
        assert!(!verify(&wallet.public_key, &altered, &signature).unwrap());

        let other = derive(KeyMaterial::Fresh);
        assert!(!verify(&other.public_key, &message, &signature).unwrap());

        // A single flipped public key byte may land off the curve, which is
        // reported as invalid key material instead of a clean mismatch.
        let mut wrong_pk = wallet.public_key;
        wrong_pk[0] ^= 0x01;
        let verdict = verify(&wrong_pk, &message, &signature);
        assert!(matches!(
            verdict,
            Ok(false) | Err(WalletError::InvalidKeyMaterial(_))
        ));
    }

    #[test]
    fn zero_seed_golden_vector() {
        let wallet = derive_from_bytes(Some(&[0u8; SEED_LENGTH])).unwrap();
        assert_eq!(wallet.public_key_hex(), ZERO_SEED_PUBLIC_HEX);
        assert_eq!(wallet.address(), format!("0x{}", ZERO_SEED_PUBLIC_HEX));
        assert_eq!(wallet.public_key_hex().len(), 64);
    }
}
