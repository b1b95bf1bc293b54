//! Burrows-Wheeler Transform, encode and inverse (LF-mapping) decode.

use std::collections::VecDeque;

use crate::error::Error;
use crate::suffix_array;

/// Byte appended to terminate the rotation matrix; must not occur in
/// plaintext input, per spec's "unique smallest byte" strategy.
const SENTINEL: u8 = 0x00;

/// Encode `input` into `(last_column, original_index)`.
///
/// `input` must not contain the sentinel byte `0x00`; if it does,
/// `Error::InputContainsSentinel` is returned rather than attempting
/// an escape scheme.
pub fn encode(input: &[u8]) -> Result<(Vec<u8>, u32), Error> {
    if input.contains(&SENTINEL) {
        return Err(Error::InputContainsSentinel);
    }
    let mut t = Vec::with_capacity(input.len() + 1);
    t.extend_from_slice(input);
    t.push(SENTINEL);
    let n = t.len();

    let sa = suffix_array::build(&t);
    let mut last_column = vec![0u8; n];
    let mut original_index = 0u32;
    for (i, &s) in sa.iter().enumerate() {
        let j = if s > 0 { s as usize - 1 } else { n - 1 };
        last_column[i] = t[j];
        if s == 0 {
            original_index = i as u32;
        }
    }
    log::debug!("bwt encoded {} bytes, original_index={}", n, original_index);
    Ok((last_column, original_index))
}

/// Invert `(last_column, original_index)` back into the original input
/// (the trailing sentinel is stripped before returning).
pub fn decode(last_column: &[u8], original_index: u32) -> Result<Vec<u8>, Error> {
    let n = last_column.len();
    if n == 0 || original_index as usize >= n {
        return Err(Error::CorruptBwtStream);
    }

    let mut queues: [VecDeque<u32>; 256] = std::array::from_fn(|_| VecDeque::new());
    for (i, &b) in last_column.iter().enumerate() {
        queues[b as usize].push_back(i as u32);
    }

    let mut first_column = last_column.to_vec();
    first_column.sort_unstable();

    let mut left_shift = vec![0u32; n];
    for (i, &b) in first_column.iter().enumerate() {
        left_shift[i] = queues[b as usize]
            .pop_front()
            .expect("symbol counts between L and F must match");
    }

    let mut t = vec![0u8; n];
    let mut idx = original_index;
    for slot in t.iter_mut() {
        idx = left_shift[idx as usize];
        *slot = last_column[idx as usize];
    }

    if t.pop() != Some(SENTINEL) {
        return Err(Error::CorruptBwtStream);
    }
    log::debug!("bwt decoded {} bytes", t.len());
    Ok(t)
}
