//! Exit handling: signal handlers and terminal restoration.

/// Restore cooked mode on stdin using termios directly.
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

/// Registered with atexit. The progress animation hides the cursor, so show it again.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    const SHOW: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SHOW.as_ptr() as *const libc::c_void, SHOW.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise for a proper crash.
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Call early in main().
pub fn install_handlers() {
    let on_exit = signal_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;
    let on_crash = crash_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_exit);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, on_crash);
        }
    }
}

pub fn reset_terminal() {
    reset_terminal_termios();
}
