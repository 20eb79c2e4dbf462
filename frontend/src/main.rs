#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting LeaveFlow frontend: initializing runtime config");

    leptos::spawn_local(async move {
        leaveflow_frontend::config::init().await;
        log::info!("Runtime config initialized");
        leaveflow_frontend::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("leaveflow-frontend targets the browser; build with --target wasm32-unknown-unknown");
}
