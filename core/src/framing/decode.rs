//! framing/decode.rs
//! Strip frame markers, verify the ring hash and give chunk-level access.

use crate::codec::Diagnostics;
use crate::framing::types::FrameMeta;
use crate::integrity::DigestVerifier;
use crate::types::{Code, CodecError, ValidationMode};

/// Drop every marker, verify the hash over what remains, then keep the first
/// `ring_length` codes (the bridge is discarded).
///
/// A hash mismatch is an error in strict mode and a warning in lenient mode.
pub fn remove_markers(
    framed: &[Code],
    meta: &FrameMeta,
    mode: ValidationMode,
    diag: &Diagnostics,
) -> Result<Vec<Code>, CodecError> {
    let mut verifier = DigestVerifier::new(meta.hash.as_str());
    let mut ring = Vec::with_capacity(framed.len().saturating_sub(meta.marker_positions.len()));
    let mut markers = 0usize;

    for &code in framed {
        if code == meta.marker_code {
            markers += 1;
            continue;
        }
        verifier.update(code);
        ring.push(code);
    }

    if markers != meta.marker_positions.len() {
        diag.warn(format!(
            "found {} frame markers, metadata records {}",
            markers,
            meta.marker_positions.len()
        ));
    }

    match verifier.finalize() {
        Ok(()) => {}
        Err(err) if mode.is_strict() => return Err(err),
        Err(err) => diag.warn(format!("{}; continuing", err)),
    }

    let keep = usize::try_from(meta.ring_length)
        .ok()
        .filter(|&n| n <= ring.len())
        .ok_or_else(|| {
            CodecError::InvalidStream(format!(
                "framed stream carries {} payload codes, ring needs {}",
                ring.len(),
                meta.ring_length
            ))
        })?;
    ring.truncate(keep);

    diag.debug(format!("removed {} frame markers, ring length {}", markers, keep));
    Ok(ring)
}

/// Payload of chunk `index`, located through `marker_positions`.
///
/// `None` when the index is out of range or the recorded position does not
/// hold the marker.
pub fn chunk_at<'a>(framed: &'a [Code], meta: &FrameMeta, index: usize) -> Option<&'a [Code]> {
    let pos = usize::try_from(*meta.marker_positions.get(index)?).ok()?;
    if *framed.get(pos)? != meta.marker_code {
        return None;
    }
    let end = match meta.marker_positions.get(index + 1) {
        Some(&next) => usize::try_from(next).ok()?,
        None => framed.len(),
    };
    framed.get(pos + 1..end)
}

/// All chunk payloads in order.
pub fn chunks<'a>(framed: &'a [Code], meta: &'a FrameMeta) -> impl Iterator<Item = &'a [Code]> + 'a {
    (0..meta.marker_positions.len()).map_while(move |i| chunk_at(framed, meta, i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::insert_markers;
    use crate::ring::wrap;
    use crate::types::ErrorKind;

    fn framed_ten() -> (Vec<Code>, Vec<Code>, FrameMeta) {
        let codes: Vec<Code> = (1..=10).collect();
        let (ring, layout) = wrap(&codes);
        let (framed, meta) = insert_markers(&ring, 5, &layout).unwrap();
        (ring, framed, meta)
    }

    #[test]
    fn strips_markers_and_bridge() {
        let (ring, framed, meta) = framed_ten();
        let out = remove_markers(&framed, &meta, ValidationMode::Strict, &Diagnostics::silent()).unwrap();
        assert_eq!(out, ring[..11].to_vec());
    }

    #[test]
    fn corruption_strict_vs_lenient() {
        let (ring, mut framed, meta) = framed_ten();
        framed[3] = 9;

        let err = remove_markers(&framed, &meta, ValidationMode::Strict, &Diagnostics::silent()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IntegrityMismatch);

        let out = remove_markers(&framed, &meta, ValidationMode::Lenient, &Diagnostics::silent()).unwrap();
        assert_eq!(out.len(), 11);
        assert_ne!(out, ring[..11].to_vec());
    }

    #[test]
    fn short_stream_is_invalid() {
        let (_, framed, meta) = framed_ten();
        let err = remove_markers(&framed[..8], &meta, ValidationMode::Lenient, &Diagnostics::silent()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStream);
    }

    #[test]
    fn chunk_random_access() {
        let (_, framed, meta) = framed_ten();
        assert_eq!(chunk_at(&framed, &meta, 0), Some(&[1, 2, 3, 4, 5][..]));
        assert_eq!(chunk_at(&framed, &meta, 2), Some(&[0, 1, 2, 3][..]));
        assert_eq!(chunk_at(&framed, &meta, 3), None);
        assert_eq!(chunks(&framed, &meta).count(), 3);
        let joined: Vec<Code> = chunks(&framed, &meta).flatten().copied().collect();
        assert_eq!(joined.len() as u64, meta.wrapped_length());
    }
}
