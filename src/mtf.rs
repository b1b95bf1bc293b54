//! Move-To-Front transform over the 256-byte alphabet.
//!
//! Naive ordered-list implementation: O(256) per byte, which the spec's
//! design notes accept as correct (if not maximally fast).

/// Encode `input` by replacing each byte with its current rank in a
/// move-to-front list, then promoting it to the front. Output has the
/// same length as the input.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut list: Vec<u8> = (0..=255).collect();
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        let pos = list.iter().position(|&x| x == b).expect("byte must be in list");
        out.push(pos as u8);
        list.remove(pos);
        list.insert(0, b);
    }
    out
}

/// Inverse of `encode`: replace each rank with the symbol at that rank
/// in the list, then promote it to the front.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut list: Vec<u8> = (0..=255).collect();
    let mut out = Vec::with_capacity(input.len());
    for &idx in input {
        let b = list[idx as usize];
        out.push(b);
        list.remove(idx as usize);
        list.insert(0, b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_preserved() {
        let input = b"banana bread";
        assert_eq!(encode(input).len(), input.len());
    }

    #[test]
    fn round_trips() {
        let input = b"ABRACADABRA";
        let encoded = encode(input);
        assert_eq!(decode(&encoded), input);
    }

    #[test]
    fn repeated_byte_gives_all_zeros_after_first() {
        let input = [5u8; 10];
        let encoded = encode(&input);
        assert_eq!(encoded[0], 5);
        assert!(encoded[1..].iter().all(|&x| x == 0));
    }

    #[test]
    fn empty_round_trips() {
        assert_eq!(decode(&encode(&[])), Vec::<u8>::new());
    }

    #[test]
    fn all_byte_values_round_trip() {
        let input: Vec<u8> = (0..=255).collect();
        let encoded = encode(&input);
        assert_eq!(decode(&encoded), input);
    }

    #[test]
    fn random_inputs_round_trip() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(0..2000);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(decode(&encode(&input)), input);
        }
    }
}
