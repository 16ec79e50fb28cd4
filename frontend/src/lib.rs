pub mod api;
pub mod components;
pub mod config;
pub mod forms;
pub mod list;
pub mod pages;
pub mod router;
pub mod state;
pub mod test_support;
pub mod utils;

/// Boots the console: panic hook, logging, runtime config, then the router.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", err).into());
    }
    log::info!("Starting homecare console (API default {})", config::build_time_base_url());

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
