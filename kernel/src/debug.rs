// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-kernel debugging.
//!
//! For printing, this module uses an `IoWrite` sink that the board installs
//! once, early during boot, with [`set_debug_writer`]. Until a sink is
//! installed all debug output is dropped, so drivers may call `debug!()` from
//! any point of the boot flow without checking whether a console exists yet.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! debug!("Yes the code gets here with value {}", i);
//! debug_verbose!("got here"); // includes the file and line number
//! ```

use core::fmt::{write, Arguments, Result, Write};

/// A byte sink for debug output, usually the boot console UART.
pub trait IoWrite {
    /// Write as much of `buf` as possible and return how many bytes were
    /// consumed. Returning `0` signals that the sink cannot make progress.
    fn write(&self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static dyn IoWrite> = None;

/// Install the sink used by `debug!()`.
///
/// # Safety
///
/// Must be called from the single boot context, before or between (never
/// during) any `debug!()` invocation.
pub unsafe fn set_debug_writer(writer: &'static dyn IoWrite) {
    *core::ptr::addr_of_mut!(DEBUG_WRITER) = Some(writer);
}

fn debug_writer() -> Option<&'static dyn IoWrite> {
    // SAFETY: the boot flow is single threaded and the slot is only written
    // by `set_debug_writer`, whose contract forbids concurrent use.
    unsafe { *core::ptr::addr_of!(DEBUG_WRITER) }
}

struct DebugWriter(&'static dyn IoWrite);

impl Write for DebugWriter {
    fn write_str(&mut self, s: &str) -> Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.0.write(bytes);
            if written == 0 {
                return Err(core::fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

/// Write a debug message followed by a newline. Used by `debug!()`.
pub fn debug_println(args: Arguments) {
    if let Some(sink) = debug_writer() {
        let mut writer = DebugWriter(sink);
        let _ = write(&mut writer, args);
        let _ = writer.write_str("\r\n");
    }
}

/// Write a debug message prefixed with its source location. Used by
/// `debug_verbose!()`.
pub fn debug_verbose_println(args: Arguments, file_line: &(&'static str, u32)) {
    if let Some(sink) = debug_writer() {
        let mut writer = DebugWriter(sink);
        let (file, line) = *file_line;
        let _ = writer.write_fmt(format_args!("TOCK_DEBUG: {}:{}: ", file, line));
        let _ = write(&mut writer, args);
        let _ = writer.write_str("\r\n");
    }
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!($msg));
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+));
    });
}

/// In-kernel `println()` debugging with the file and line of the call site.
#[macro_export]
macro_rules! debug_verbose {
    () => ({
        $crate::debug_verbose!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_verbose_println(format_args!($msg), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_verbose_println(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::boxed::Box;
    use std::string::String;
    use std::sync::Mutex;
    use std::vec::Vec;

    struct Capture {
        out: Mutex<Vec<u8>>,
    }

    impl IoWrite for Capture {
        fn write(&self, buf: &[u8]) -> usize {
            // Accept at most four bytes per call to exercise the retry loop.
            let n = buf.len().min(4);
            self.out.lock().unwrap().extend_from_slice(&buf[..n]);
            n
        }
    }

    #[test]
    fn debug_output_reaches_the_installed_writer() {
        let capture: &'static Capture = Box::leak(Box::new(Capture {
            out: Mutex::new(Vec::new()),
        }));
        unsafe { set_debug_writer(capture) };

        debug!("reset {} -> {}", 3, "deasserted");
        debug_verbose!("probe");

        let out = String::from_utf8(capture.out.lock().unwrap().clone()).unwrap();
        assert!(out.contains("reset 3 -> deasserted\r\n"));
        assert!(out.contains("TOCK_DEBUG: ") && out.contains("debug.rs:"));
        assert!(out.ends_with("probe\r\n"));
    }
}
