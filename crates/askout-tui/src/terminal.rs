//! Terminal setup and restoration

/// Install a panic hook that restores the terminal before the original hook
/// prints the report
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
