// Ring closure, frame markers and the integrity hash.

#[cfg(test)]
mod tests {
    use ccc_core::codec::Diagnostics;
    use ccc_core::constants::RESET_MARKER;
    use ccc_core::framing::{chunk_at, chunks, insert_markers, remove_markers};
    use ccc_core::integrity::{weak_hash, DigestBuilder};
    use ccc_core::ring::{bridge_length, circular_read, next_prime, seam_slice, unwrap, wrap};
    use ccc_core::types::{Code, ErrorKind, ValidationMode};
    use proptest::prelude::*;

    fn codes_strategy() -> impl Strategy<Value = Vec<Code>> {
        proptest::collection::vec(0u32..=RESET_MARKER, 0..600)
    }

    #[test]
    fn wrap_ten_codes() {
        let codes: Vec<Code> = (1..=10).collect();
        let (ring, layout) = wrap(&codes);
        assert_eq!(layout.ring_length, 11);
        assert_eq!(layout.bridge_length, 3);
        assert_eq!(ring.len(), 14);
        assert_eq!(&ring[11..], &[1, 2, 3]);
        assert_eq!(unwrap(&ring, 10).unwrap(), codes);
    }

    #[test]
    fn chunks_give_random_access() {
        let codes: Vec<Code> = (100..200).collect();
        let (ring, layout) = wrap(&codes);
        let (framed, meta) = insert_markers(&ring, 8, &layout).unwrap();

        assert_eq!(chunk_at(&framed, &meta, 0), Some(&ring[0..8]));
        assert_eq!(chunk_at(&framed, &meta, 3), Some(&ring[24..32]));
        let all: Vec<Code> = chunks(&framed, &meta).flatten().copied().collect();
        assert_eq!(all, ring);
        assert!(chunks(&framed, &meta).all(|c| c.len() <= 8));
    }

    #[test]
    fn hash_builder_matches_one_shot() {
        let codes = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut builder = DigestBuilder::new();
        for &c in &codes {
            builder.update(c);
        }
        assert_eq!(builder.count(), 8);
        assert_eq!(builder.finalize(), weak_hash(&codes));
    }

    #[test]
    fn tampered_payload_detected() {
        let (ring, layout) = wrap(&[5, 6, 7, 8, 9]);
        let (mut framed, meta) = insert_markers(&ring, 3, &layout).unwrap();
        framed[2] += 1;
        let diag = Diagnostics::silent();

        let err = remove_markers(&framed, &meta, ValidationMode::Strict, &diag).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityMismatch);
        assert!(remove_markers(&framed, &meta, ValidationMode::Lenient, &diag).is_ok());
    }

    proptest! {
        #[test]
        fn prop_ring_shape(codes in codes_strategy()) {
            let (ring, layout) = wrap(&codes);
            let p = next_prime(codes.len() as u64);
            let b = bridge_length(p);
            prop_assert_eq!(layout.ring_length, p);
            prop_assert_eq!(ring.len() as u64, p + b);
            let (p, b) = (p as usize, b as usize);
            prop_assert_eq!(&ring[p..], &ring[..b]);
            prop_assert!(ring[codes.len()..p].iter().all(|&c| c == 0));
            prop_assert_eq!(unwrap(&ring, codes.len() as u64).unwrap(), codes);
        }

        #[test]
        fn prop_marker_not_in_ring(codes in codes_strategy(), chunk in 1u64..40) {
            let (ring, layout) = wrap(&codes);
            let (framed, meta) = insert_markers(&ring, chunk, &layout).unwrap();
            prop_assert!(!ring.contains(&meta.marker_code));
            prop_assert_ne!(meta.marker_code, RESET_MARKER);
            for &pos in &meta.marker_positions {
                prop_assert_eq!(framed[pos as usize], meta.marker_code);
            }
            let back = remove_markers(&framed, &meta, ValidationMode::Strict, &Diagnostics::silent()).unwrap();
            prop_assert_eq!(&back[..], &ring[..layout.ring_length as usize]);
        }

        #[test]
        fn prop_hash_deterministic_and_sensitive(
            codes in proptest::collection::vec(0u32..=RESET_MARKER, 1..300),
            index in any::<prop::sample::Index>(),
            delta in 1u32..1000,
        ) {
            prop_assert_eq!(weak_hash(&codes), weak_hash(&codes.clone()));
            let mut mutated = codes.clone();
            let i = index.index(mutated.len());
            mutated[i] = mutated[i].wrapping_add(delta);
            prop_assert_ne!(weak_hash(&mutated), weak_hash(&codes));
        }

        #[test]
        fn prop_seam_reads_match_bridge(codes in proptest::collection::vec(0u32..50, 4..200), offset in 0usize..10) {
            let (ring, layout) = wrap(&codes);
            let start = layout.ring_length - 1 - (offset as u64 % layout.ring_length);
            let len = layout.bridge_length as usize;
            let circular = circular_read(&ring, layout.ring_length, start, len).unwrap();
            if let Some(window) = seam_slice(&ring, layout.ring_length, start, len) {
                prop_assert_eq!(window, &circular[..]);
            }
        }
    }
}
