/// A lookup table with `true` at each byte in `bytes`, for scanning text in a single pass.
pub(crate) const fn character_set(bytes: &[u8]) -> [bool; 256] {
    let mut a = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        a[bytes[i] as usize] = true;
        i += 1;
    }
    a
}
