use demat_accel::probe_blocking;

/// Runs the startup capability probe and reports what it found.
fn main() {
    // Initialize logging based on RUST_LOG environment variable, ignoring
    // wgpu's own chatter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu", log::LevelFilter::Off)
        .init();

    let capability = probe_blocking();
    if capability.available() {
        println!(
            "accelerator available: {}",
            capability.adapter_name().unwrap_or("<unnamed adapter>")
        );
    } else {
        println!("accelerator unavailable, CPU path only");
    }
}
