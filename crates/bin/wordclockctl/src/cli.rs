//! Command-line interface.

use std::str::FromStr;

use wordclock_domain::control::ControlAction;

/// Control a word clock over its local HTTP interface.
#[derive(Debug, clap::Parser)]
#[command(name = "wordclockctl", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// One panel operation requested on the command line.
///
/// Values may start with a dash (`timezone -5`, a password such as
/// `--s3cret`); `--` still ends option parsing.
#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum Command {
    /// Set the display colour.
    Color {
        #[arg(value_name = "#RRGGBB", allow_hyphen_values = true)]
        value: String,
    },
    /// Set the timezone offset.
    Timezone {
        #[arg(allow_hyphen_values = true)]
        tz: String,
        /// Keep the offset through daylight saving changes.
        #[arg(long)]
        no_auto_dst: bool,
    },
    /// Set the brightness (percent).
    Brightness {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Let the light sensor drive the brightness.
        #[arg(long)]
        auto: bool,
    },
    /// Join a Wi-Fi network; the device restarts.
    Connect {
        #[arg(allow_hyphen_values = true)]
        ssid: String,
        #[arg(allow_hyphen_values = true)]
        password: String,
    },
    /// Run a control action: light_on, light_off, disable_wifi, tz_summer or tz_winter.
    Control {
        #[arg(value_parser = ControlAction::from_str)]
        action: ControlAction,
    },
}
