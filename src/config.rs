use clap::Parser;
use std::time::Duration;

// Rate limit policy - fixed constants, not runtime-adjustable
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 5;
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(1);

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "duescript")]
#[command(about = "Serves a due-date parameterized JavaScript file")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Path to the JavaScript template
    #[arg(short, long, default_value = "templates/script.js")]
    pub template: String,
}
