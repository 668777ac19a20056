use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0,
        value_parser = parse_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "SECONDS",
        help = "Start the stopwatch from this many seconds (overrides the config file)",
        allow_negative_numbers = true
    )]
    pub initial_seconds: Option<i64>,

    #[arg(long, help = "Do not capture the mouse (disables clickable controls)")]
    pub no_mouse: bool,
}

pub const MIN_RATE: f64 = 0.1;
pub const MAX_RATE: f64 = 1000.0;

fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if rate.is_finite() && (MIN_RATE..=MAX_RATE).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("must be between {MIN_RATE} and {MAX_RATE}"))
    }
}
