use s3_prefix_mgr::{args, run_app};

fn main() {
    // Credentials may live in a .env file next to the binary
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let args = args::args_checks();

    // Run the application logic; failures are reported as message text
    // and the process still exits 0
    run_app(&args);
}
