// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for statically initializing objects in memory.

/// Places a value in a dedicated static buffer and returns a `&'static mut`
/// reference to it.
///
/// Boards use this to give controllers, reset tables and the reset API the
/// `'static` lifetime drivers expect, without requiring the types to be
/// `Sync`.
///
/// Note: Because this instantiates a static object, you generally cannot pass
/// a type with generic parameters.
///
/// # Safety
///
/// Each expansion owns one buffer. Running the same expansion twice
/// overwrites the first value without dropping it and aliases the returned
/// reference.
#[macro_export]
macro_rules! static_init {
    ($T:ty, $e:expr $(,)?) => {{
        static mut BUF: core::mem::MaybeUninit<$T> = core::mem::MaybeUninit::uninit();
        (*core::ptr::addr_of_mut!(BUF)).write($e)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn returns_the_initialized_buffer() {
        let value: &'static mut [u32; 2] = unsafe { static_init!([u32; 2], [3, 4]) };
        value[1] += 1;
        assert_eq!(*value, [3, 5]);
    }
}
