use proptest::prelude::*;

use cardano_keys::key::{
    PaymentKeyPair, PaymentSigningKey, PaymentVerificationKey, SigningKey, StakeKeyPair,
    StakeSigningKey, TypedKey, VerificationKey,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn json_roundtrip_restores_payload_and_metadata(
        payload in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let key = PaymentSigningKey::new(payload.clone());
        let restored = PaymentSigningKey::from_json(&key.to_json(), true).unwrap();
        prop_assert_eq!(restored.payload(), payload.as_slice());
        prop_assert_eq!(restored.key_type(), PaymentSigningKey::KEY_TYPE);
        prop_assert_eq!(restored.description(), PaymentSigningKey::DESCRIPTION);
    }

    #[test]
    fn serialize_deserialize_roundtrips_payload(
        payload in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let key = PaymentVerificationKey::new(payload.clone());
        let restored = PaymentVerificationKey::deserialize(key.serialize());
        prop_assert_eq!(restored.payload(), payload.as_slice());
    }

    #[test]
    fn cbor_roundtrips_payload(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let key = StakeSigningKey::new(payload.clone());
        let restored = StakeSigningKey::from_cbor(&key.to_cbor()).unwrap();
        prop_assert_eq!(restored.payload(), payload.as_slice());
    }

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let pair = PaymentKeyPair::from_private_key(&seed).unwrap();
        let signature = pair.signing_key.sign(&message).unwrap();
        prop_assert_eq!(signature.len(), 64);
        prop_assert!(pair.verification_key.verify(&message, &signature).unwrap());
    }

    #[test]
    fn derivation_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let a = StakeKeyPair::from_private_key(&seed).unwrap();
        let b = StakeKeyPair::from_private_key(&seed).unwrap();
        prop_assert_eq!(
            a.verification_key.payload(),
            b.verification_key.payload()
        );
    }

    #[test]
    fn distinct_seeds_derive_distinct_keys(
        seed_a in prop::array::uniform32(any::<u8>()),
        seed_b in prop::array::uniform32(any::<u8>())
    ) {
        prop_assume!(seed_a != seed_b);
        let a = PaymentKeyPair::from_private_key(&seed_a).unwrap();
        let b = PaymentKeyPair::from_private_key(&seed_b).unwrap();
        prop_assert_ne!(
            a.verification_key.payload(),
            b.verification_key.payload()
        );
    }

    #[test]
    fn verification_key_hash_is_28_bytes(seed in prop::array::uniform32(any::<u8>())) {
        let pair = PaymentKeyPair::from_private_key(&seed).unwrap();
        prop_assert_eq!(pair.verification_key.hash().as_bytes().len(), 28);
    }
}
