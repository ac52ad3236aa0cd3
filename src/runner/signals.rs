use log::debug;

/// Keeps the dispatcher alive on Ctrl-C. The terminal delivers SIGINT to
/// the whole foreground process group, so the child still receives it and
/// the dispatcher reports however the child chose to exit.
pub fn ignore_interrupts() {
    if let Err(e) = ctrlc::set_handler(|| {}) {
        debug!("Could not install interrupt handler: {}", e);
    }
}
