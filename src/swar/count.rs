/// Repeats `pattern` once every `width` bits across a u64.
///
/// lanes(4, 0b1000) == 0x8888888888888888
pub const fn lanes(width: u32, pattern: u64) -> u64 {
    let mut mask = 0u64;
    let mut shift = 0u32;
    while shift < u64::BITS {
        mask |= pattern << shift;
        shift += width;
    }
    mask
}

/// The top bit of every W-bit field.
pub const fn msbs<const W: u32>() -> u64 {
    lanes(W, 1 << (W - 1))
}

/// Population count of every W-bit field, in place.
///
/// Classic shift-mask-add reduction: adjacent 1-bit counters are summed
/// into 2-bit counters, those into 4-bit counters, and so on until each
/// counter spans a whole field. log2(W) steps, independent of field count.
///
/// 0b0111_0001_1111_0000 as W = 4
/// 0b0011_0001_0100_0000
pub const fn popcount<const W: u32>(x: u64) -> u64 {
    const { assert!(W.is_power_of_two() && W <= u64::BITS) };
    let mut x = x;
    let mut width = 1;
    while width < W {
        let keep = lanes(width * 2, (1 << width) - 1);
        x = (x & keep) + ((x >> width) & keep);
        width *= 2;
    }
    x
}

/// Flags every W-bit field whose count is at least N.
///
/// Input fields must hold counts no larger than W (the output of
/// [`popcount`]). Adding 2^(W-1) - N to a field sets its top bit exactly
/// when the count reaches N, and never carries into the next field.
/// Output fields are either zero or hold only their top bit.
pub const fn greater_equal<const N: u64, const W: u32>(counts: u64) -> u64 {
    const { assert!(W.is_power_of_two() && W <= u64::BITS) };
    const { assert!(N >= 1 && N <= 1 << (W - 1)) };
    let bias = lanes(W, (1 << (W - 1)) - N);
    counts.wrapping_add(bias) & msbs::<W>()
}
