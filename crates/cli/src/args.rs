//! Command-line arguments.

use clap::Parser;
use menu_client::{
    DEFAULT_BASE_URL, DEFAULT_BUILDING_ID, DEFAULT_DISTRICT_ID, DistrictConfig,
};
use std::path::PathBuf;
use std::time::Duration;

/// lunch-menu - School menu for the next few days
#[derive(Parser, Debug, Clone)]
#[command(name = "lunch-menu")]
#[command(about = "Print the school lunch menu for the next N days", long_about = None)]
pub struct Cli {
    /// Number of dates to show
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    pub days: i64,

    /// First date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub start: Option<String>,

    /// Skip Saturdays and Sundays
    #[arg(long)]
    pub skip_weekends: bool,

    /// Serving session to include
    #[arg(long, default_value = "Lunch")]
    pub meal: String,

    /// Only include recipe categories whose name contains this text (e.g. "Main Entree")
    #[arg(long)]
    pub category: Option<String>,

    /// Also exclude recipes containing this text; repeatable
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Show at most this many items per day on the console
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Print the excluded items after the menu
    #[arg(long)]
    pub show_excluded: bool,

    /// Directory for the raw dump and CSV exports
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// FamilyMenu endpoint
    #[arg(long, env = "MENU_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "MENU_BUILDING_ID", default_value = DEFAULT_BUILDING_ID)]
    pub building_id: String,

    #[arg(long, env = "MENU_DISTRICT_ID", default_value = DEFAULT_DISTRICT_ID)]
    pub district_id: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn district_config(&self) -> DistrictConfig {
        DistrictConfig {
            base_url: self.base_url.clone(),
            building_id: self.building_id.clone(),
            district_id: self.district_id.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
