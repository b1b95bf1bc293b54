//! Linear-time suffix array construction, DC3 (skew) algorithm.
//!
//! Follows the classic Kärkkäinen & Sanders construction: sample
//! suffixes at positions `i mod 3 != 0` are named by radix-sorted
//! triples and recursively ranked, then the remaining `i mod 3 == 0`
//! suffixes are derived and the two sorted streams are merged.

fn leq2(a1: u32, a2: u32, b1: u32, b2: u32) -> bool {
    a1 < b1 || (a1 == b1 && a2 <= b2)
}

fn leq3(a1: u32, a2: u32, a3: u32, b1: u32, b2: u32, b3: u32) -> bool {
    a1 < b1 || (a1 == b1 && leq2(a2, a3, b2, b3))
}

/// Stable LSD radix pass: reorder `a` by `key[x + offset]` for each `x`
/// in `a`, values of `key` assumed to lie in `0..=max_val`.
fn radix_pass(a: &[u32], key: &[u32], offset: usize, max_val: usize) -> Vec<u32> {
    let n = a.len();
    let mut count = vec![0u32; max_val + 2];
    for &x in a {
        count[key[x as usize + offset] as usize + 1] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }
    let mut b = vec![0u32; n];
    for &x in a {
        let k = key[x as usize + offset] as usize;
        b[count[k] as usize] = x;
        count[k] += 1;
    }
    b
}

/// Compute the suffix array of `s[0..n)`, values in `1..=max_val`
/// (0 reserved for the sentinel padding). Requires
/// `s.len() >= n + 3` with `s[n] == s[n + 1] == s[n + 2] == 0`.
fn dc3(s: &[u32], n: usize, max_val: usize) -> Vec<u32> {
    if n == 0 {
        return vec![];
    }
    if n == 1 {
        return vec![0];
    }

    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;

    // positions i with i mod 3 != 0; a dummy position n is appended
    // when n mod 3 == 1 so the mod-1 and mod-2 streams line up
    let mut sample_pos = Vec::with_capacity(n02);
    let limit = n + (n0 - n1);
    for i in 0..limit {
        if i % 3 != 0 {
            sample_pos.push(i as u32);
        }
    }
    debug_assert_eq!(sample_pos.len(), n02);

    // LSD radix sort the sample triples (T[i], T[i+1], T[i+2])
    let r = radix_pass(&sample_pos, s, 2, max_val);
    let r = radix_pass(&r, s, 1, max_val);
    let sorted_sample = radix_pass(&r, s, 0, max_val);

    // assign lexicographic names to the sorted triples; name 0 is
    // reserved, the mod-1 half lands in s12[0..n0), mod-2 in
    // s12[n0..n0+n2); the extra 3 slots stay zero for safe lookahead
    let mut s12 = vec![0u32; n02 + 3];
    let mut name: u32 = 0;
    let mut last = (u32::MAX, u32::MAX, u32::MAX);
    for &pos in &sorted_sample {
        let p = pos as usize;
        let triple = (s[p], s[p + 1], s[p + 2]);
        if triple != last {
            name += 1;
            last = triple;
        }
        if pos % 3 == 1 {
            s12[(pos / 3) as usize] = name;
        } else {
            s12[(pos / 3) as usize + n0] = name;
        }
    }

    let order12: Vec<u32> = if (name as usize) < n02 {
        let rec_order = dc3(&s12, n02, name as usize);
        for (i, &sample_idx) in rec_order.iter().enumerate() {
            s12[sample_idx as usize] = i as u32 + 1;
        }
        rec_order
    } else {
        let mut order = vec![0u32; n02];
        for j in 0..n02 {
            order[(s12[j] - 1) as usize] = j as u32;
        }
        order
    };
    let rank12 = s12; // now holds, per sample index, its 1-based global rank

    // stably sort the mod-0 suffixes: collect 3*j for each mod-1
    // sample j in already-sorted order, then radix sort by T[3*j]
    let mut s0 = Vec::with_capacity(n0);
    for &sample_idx in &order12 {
        if (sample_idx as usize) < n0 {
            s0.push(3 * sample_idx);
        }
    }
    let sa0 = radix_pass(&s0, s, 0, max_val);

    // merge the mod-12 stream (order12) and the mod-0 stream (sa0)
    let get_i = |t: usize| -> usize {
        if (order12[t] as usize) < n0 {
            order12[t] as usize * 3 + 1
        } else {
            (order12[t] as usize - n0) * 3 + 2
        }
    };
    let mut sa = vec![0u32; n];
    let mut t = n0 - n1;
    let mut p = 0usize;
    let mut k = 0usize;
    while k < n {
        let i = get_i(t);
        let j = sa0[p] as usize;
        let take_12 = if (order12[t] as usize) < n0 {
            leq2(s[i], rank12[order12[t] as usize + n0], s[j], rank12[j / 3])
        } else {
            leq3(
                s[i], s[i + 1], rank12[order12[t] as usize - n0 + 1],
                s[j], s[j + 1], rank12[j / 3 + n0],
            )
        };
        if take_12 {
            sa[k] = i as u32;
            t += 1;
            k += 1;
            if t == n02 {
                while p < n0 {
                    sa[k] = sa0[p];
                    p += 1;
                    k += 1;
                }
                break;
            }
        } else {
            sa[k] = j as u32;
            p += 1;
            k += 1;
            if p == n0 {
                while t < n02 {
                    sa[k] = get_i(t) as u32;
                    t += 1;
                    k += 1;
                }
                break;
            }
        }
    }
    sa
}

/// Build the suffix array of an arbitrary byte sequence in O(n) time.
/// Returns a permutation `SA[0..n)` of `0..n` such that the suffixes
/// `input[SA[i]..]` are strictly lexicographically sorted.
pub fn build(input: &[u8]) -> Vec<u32> {
    let n = input.len();
    log::debug!("building suffix array for {} bytes", n);
    // shift bytes up by one so 0 is free to serve as DC3's internal
    // end-of-string sentinel, strictly smaller than any real byte
    let mut s: Vec<u32> = Vec::with_capacity(n + 3);
    s.extend(input.iter().map(|&b| b as u32 + 1));
    s.extend([0, 0, 0]);
    dc3(&s, n, 256)
}
