// SPDX-License-Identifier: MIT
//
// Terminal queries.
//
// The emitter writes escape sequences whether or not anyone will interpret
// them. Callers that want to stay quiet when redirected to a file or pipe
// ask here first.

/// Whether standard error is connected to a terminal.
#[cfg(unix)]
#[must_use]
#[allow(unsafe_code)]
pub fn stderr_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor; an invalid fd yields 0.
    unsafe { libc::isatty(libc::STDERR_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stderr_is_tty() -> bool {
    false
}
