//! Variable-width LZW coding over the bit-packed stream.
//!
//! The code width grows with the dictionary and is never written to the
//! stream; encoder and decoder derive it independently from dictionary
//! size, so they must track dictionary growth in lockstep. The decoder
//! uses the placeholder-then-backfill trick: each newly read code is
//! tentatively inserted as a copy of its own decoded value, and the
//! *previous* iteration's entry is extended by one byte once the next
//! code reveals what that byte is. This folds the classic "code not yet
//! in the dictionary" (KwKwK) case into the ordinary path, since the
//! entry a self-referencing code points at already exists as a
//! placeholder by the time it is read.

use crate::bitstream::BitStream;

/// Number of bits needed to address `m` distinct code values `0..m-1`.
fn code_width(m: u32) -> u32 {
    if m <= 1 {
        1
    } else {
        32 - (m - 1).leading_zeros()
    }
}

/// Encode `input` into a packed bit stream. Empty input produces an
/// empty stream.
pub fn encode(input: &[u8]) -> BitStream {
    let mut dict: std::collections::HashMap<Vec<u8>, u32> =
        (0u32..256).map(|b| (vec![b as u8], b)).collect();
    let mut bits = BitStream::new();
    if input.is_empty() {
        log::debug!("lzw encode: empty input, emitting nothing");
        return bits;
    }

    let mut current_match: Vec<u8> = Vec::new();
    let mut emitted = 0u32;
    for &c in input {
        current_match.push(c);
        if !dict.contains_key(&current_match) {
            let code = dict.len() as u32;
            dict.insert(current_match.clone(), code);
            current_match.pop();
            let width = code_width(dict.len() as u32);
            let emit_code = dict[&current_match];
            log::trace!("lzw encode: emit {} ({} bits)", emit_code, width);
            bits.append_bits(emit_code, width as usize);
            emitted += 1;
            current_match.clear();
            current_match.push(c);
        }
    }
    let width = code_width(dict.len() as u32 + 1);
    let final_code = dict[&current_match];
    log::trace!("lzw encode: emit final {} ({} bits)", final_code, width);
    bits.append_bits(final_code, width as usize);
    emitted += 1;

    log::debug!(
        "lzw encoded {} input bytes into {} codes, dictionary grew to {} entries",
        input.len(),
        emitted,
        dict.len()
    );
    bits
}

/// Decode a packed bit stream back into the original bytes. Trailing
/// bits shorter than the next code's width are padding and are ignored.
pub fn decode(mut bits: BitStream) -> Vec<u8> {
    let mut dict: Vec<Vec<u8>> = (0u32..256).map(|b| vec![b as u8]).collect();
    let mut out = Vec::new();
    let mut first = true;

    loop {
        let width = code_width(dict.len() as u32 + 1);
        let code = match bits.read_bits(width as usize) {
            Some(c) => c as usize,
            None => break,
        };
        let leading_byte = dict[code][0];
        if !first {
            let prev = dict.len() - 1;
            dict[prev].push(leading_byte);
        }
        let entry = dict[code].clone();
        log::trace!("lzw decode: code {} ({} bits) -> {} bytes", code, width, entry.len());
        out.extend_from_slice(&entry);
        dict.push(entry);
        first = false;
    }

    log::debug!("lzw decoded {} output bytes, dictionary grew to {} entries", out.len(), dict.len());
    out
}

/// Encode `input` and return the packed byte buffer, as written to disk.
pub fn compress(input: &[u8]) -> Vec<u8> {
    encode(input).as_bytes()
}

/// Decode a packed byte buffer, as read from disk. The buffer's bit
/// length is taken to be `bytes.len() * 8`; any padding in the final
/// byte is recovered by the trailing-bits rule in `decode`.
pub fn expand(bytes: &[u8]) -> Vec<u8> {
    let bits = BitStream::from_bytes(bytes, bytes.len() * 8);
    decode(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_emits_nothing() {
        assert_eq!(compress(b"").len(), 0);
        assert_eq!(expand(&[]), Vec::<u8>::new());
    }

    #[test]
    fn single_byte_emits_one_nine_bit_code() {
        let packed = compress(b"a");
        assert_eq!(packed, hex::decode("3080").unwrap());
        assert_eq!(expand(&packed), b"a");
    }

    /// Byte-level trace per the worked example: codes 65 66 82 65 67 65
    /// 68 256 258, each emitted at 9 bits, since the dictionary never
    /// grows past 264 entries.
    #[test]
    fn abracadabra_matches_byte_trace() {
        let packed = compress(b"ABRACADABRA");
        assert_eq!(packed, hex::decode("20908a4412190489008100").unwrap());
        assert_eq!(expand(&packed), b"ABRACADABRA");
    }

    /// Byte-level trace covering the KwKwK decode case: the second code
    /// (256) and third code (257) each reference a dictionary entry
    /// whose tail byte is only known once the following code arrives,
    /// resolved here via the self-referencing placeholder.
    #[test]
    fn aaaaaa_matches_byte_trace_and_exercises_kwkwk() {
        let packed = compress(b"aaaaaa");
        assert_eq!(packed, hex::decode("30c02020").unwrap());
        assert_eq!(expand(&packed), b"aaaaaa");
    }

    #[test]
    fn round_trips_all_byte_values() {
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(expand(&compress(&input)), input);
    }

    #[test]
    fn round_trips_repeated_patterns() {
        let input = b"abcabcabcabcabcabcabcabcabcabc".to_vec();
        assert_eq!(expand(&compress(&input)), input);
    }

    #[test]
    fn random_inputs_round_trip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(0..4000);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(expand(&compress(&input)), input);
        }
    }

    #[test]
    fn code_width_matches_spec_formula() {
        assert_eq!(code_width(0), 1);
        assert_eq!(code_width(1), 1);
        assert_eq!(code_width(2), 1);
        assert_eq!(code_width(3), 2);
        assert_eq!(code_width(256), 8);
        assert_eq!(code_width(257), 9);
        assert_eq!(code_width(512), 9);
        assert_eq!(code_width(513), 10);
    }
}
