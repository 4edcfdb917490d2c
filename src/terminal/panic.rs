use super::setup::emergency_restore;
use std::panic;

/// Chain a hook that restores the terminal before the previous hook prints
/// the panic message.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "panicked");
        original_hook(panic_info);
    }));
}
