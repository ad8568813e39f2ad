use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Coord;
use std::str::FromStr;
use topo::DEFAULT_API_URL;

/// Fetch elevation profiles along a route and summarize its gradient.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Open-Elevation compatible lookup endpoint.
    #[arg(long, env = "GRADEPATH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Lookup request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Number of samples along the route (defaults to 100 for two
    /// points, 250 for longer routes).
    #[arg(short, long)]
    pub samples: Option<usize>,

    /// Treat two points as a waypoint route instead of a straight
    /// line. Implied by more than two points.
    #[arg(short, long, default_value_t = false)]
    pub multi_point: bool,

    /// Route point "lat,lon"; repeat in route order.
    #[arg(short, long = "point", required = true, num_args = 1, allow_hyphen_values = true)]
    pub points: Vec<LatLon>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon pair"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(anyhow!("latitude {lat} out of range"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(anyhow!("longitude {lon} out of range"));
        }
        Ok(Self(Coord { y: lat, x: lon }))
    }
}

#[derive(Debug, Subcommand, Clone, Copy)]
pub enum Command {
    /// Print distance, location and elevation as CSV.
    Csv,

    /// Print the profile as JSON.
    Json,

    /// Plot elevation against distance in the terminal.
    Plot,

    /// Print distance, elevation range, ascent and descent.
    Stats,

    /// Print the gradient of every segment.
    Gradient,
}
