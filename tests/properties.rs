use aescbc::{CbcCipher, Cipher, Error, Key, KeySize, pad, unpad};
use proptest::prelude::*;
use rand::Rng;

fn key_bytes() -> impl Strategy<Value = (Vec<u8>, u32)> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16).prop_map(|k| (k, 128)),
        prop::collection::vec(any::<u8>(), 24).prop_map(|k| (k, 192)),
        prop::collection::vec(any::<u8>(), 32).prop_map(|k| (k, 256)),
    ]
}

proptest! {
    #[test]
    fn block_round_trip((key, bits) in key_bytes(), block in any::<[u8; 16]>()) {
        let cipher = Cipher::with_key_size(&key, bits).unwrap();
        let ct = cipher.encrypt_block(&block).unwrap();
        prop_assert_eq!(cipher.decrypt_block(&ct).unwrap(), block);
    }

    #[test]
    fn cbc_round_trip(
        (key, bits) in key_bytes(),
        iv in any::<[u8; 16]>(),
        message in prop::collection::vec(any::<u8>(), 0..600),
    ) {
        let session = CbcCipher::new(&key, &iv, bits).unwrap();
        let ct = session.encrypt(&message);

        prop_assert_eq!(ct.len(), (message.len() / 16 + 1) * 16);
        prop_assert_eq!(session.decrypt(&ct).unwrap(), message);
    }

    #[test]
    fn pad_then_unpad(message in prop::collection::vec(any::<u8>(), 0..100)) {
        let padded = pad(&message);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > message.len());
        prop_assert_eq!(unpad(&padded).unwrap(), &message[..]);
    }

    #[test]
    fn corrupted_padding_is_rejected(
        message in prop::collection::vec(any::<u8>(), 0..64),
        offset in 0usize..16,
        flip in 1u8..=255,
    ) {
        let mut padded = pad(&message);
        let pad_len = padded.len() - message.len();
        let pos = padded.len() - 1 - offset % pad_len;
        // a low-bit flip of the final byte can land on another valid length
        let flip = if pos == padded.len() - 1 { flip | 0x80 } else { flip };
        padded[pos] ^= flip;
        prop_assert!(matches!(unpad(&padded), Err(Error::InvalidPadding)));
    }
}

#[test]
fn cbc_round_trip_empty_message_all_sizes() -> aescbc::Result<()> {
    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        let session = CbcCipher::from_key(&Key::random(size)?, &aescbc::random_iv()?)?;
        let ct = session.encrypt(b"");
        assert_eq!(ct.len(), 16);
        assert_eq!(session.decrypt(&ct)?, b"");
    }
    Ok(())
}

#[test]
fn fifteen_byte_key_is_rejected() {
    assert!(matches!(
        Key::new(&[0u8; 15], 128),
        Err(Error::InvalidKeyLength { len: 15, .. })
    ));
}

// flipping one key bit should change about half of the 128 ciphertext bits on average
#[test]
fn key_avalanche() -> aescbc::Result<()> {
    const TRIALS: u32 = 200;
    let mut rng = rand::rng();

    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        let mut total = 0u32;
        for _ in 0..TRIALS {
            let mut key = vec![0u8; size.key_len()];
            rng.fill(&mut key[..]);
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            let bit = rng.random_range(0..key.len() * 8);
            let mut flipped = key.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);

            let a = Cipher::with_key_size(&key, size.bits())?.encrypt_block(&block)?;
            let b = Cipher::with_key_size(&flipped, size.bits())?.encrypt_block(&block)?;
            total += a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum::<u32>();
        }

        let mean = total as f64 / TRIALS as f64;
        assert!(
            (54.0..=74.0).contains(&mean),
            "{size:?}: mean of {mean} differing bits"
        );
    }
    Ok(())
}
