//! Exit handling: signal handlers, cleanup, and graceful shutdown.

use crate::rand;

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Cleanup registered with atexit - runs on any exit path
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                b"\x1b[0m\x1b[?25h\r\n".as_ptr() as *const libc::c_void,
                11,
            );
        }
    }
    rand::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - wipe RNG state, then re-raise for a proper crash
extern "C" fn crash_handler(sig: libc::c_int) {
    unsafe {
        rand::zeroize_state();
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

fn install(sig: libc::c_int, handler: extern "C" fn(libc::c_int)) {
    unsafe {
        libc::signal(sig, handler as *const () as libc::sighandler_t);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
    }
    install(libc::SIGINT, signal_handler);
    install(libc::SIGTERM, signal_handler);
    install(libc::SIGHUP, signal_handler);
    install(libc::SIGSEGV, crash_handler);
    install(libc::SIGABRT, crash_handler);
}

/// Reset terminal state (public for use at startup)
pub fn reset_terminal() {
    reset_terminal_termios();
}
