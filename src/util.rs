use std::slice;

/// \[T\]::as_chunks isn't available on our MSRV, so this is our own :)
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (&[[T; N]], &[T]) {
    // SAFETY: len * N is always less than or equal to slice.len()
    // len * N is also always guaranteed to be divisible by N
    // thus it is safe to create `len` arrays of length N from that slice
    let len = slice.len() / N;
    let (array_slice, remainder) = slice.split_at(len * N);
    let arrays = unsafe { slice::from_raw_parts(array_slice.as_ptr().cast(), len) };

    (arrays, remainder)
}

/// Cast a slice to a slice of arrays, panics if the slice doesn't divide evenly
pub fn cast_as_arrays<T, const N: usize>(slice: &[T]) -> &[[T; N]] {
    let (arrays, rmdr) = as_chunks(slice);
    assert!(rmdr.is_empty(), "Slice length does not evenly divide into arrays.");
    arrays
}

/// XOR `b` into `a` byte by byte
pub fn xor_in_place<const N: usize>(a: &mut [u8; N], b: &[u8; N]) {
    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x ^= y);
}
