use punch::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("punch=debug")))
            .with_target(false)
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
