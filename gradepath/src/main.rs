mod options;

use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use grade::{
    gradient_segments, ElevationSample, GradientClass, LocationPoint, ProfilePoint, ProfileStats,
    RouteMode, Session, Status,
};
use log::debug;
use options::{Cli, Command as CliCmd, LatLon};
use std::{io::Write, time::Duration};
use textplots::{Chart, Plot, Shape};
use topo::{ElevationLookup, HttpLookup, ProfileService};

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let Cli {
        api_url,
        timeout,
        samples,
        multi_point,
        points,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let points: Vec<LocationPoint> = points.into_iter().map(|LatLon(c)| c.into()).collect();
    let mode = if multi_point || points.len() > 2 {
        RouteMode::MultiPoint
    } else {
        RouteMode::TwoPoint
    };
    debug!("api_url: {api_url}, mode: {mode:?}, points: {points:?}, samples: {samples:?}");

    let lookup = HttpLookup::builder()
        .url(api_url)
        .timeout(Duration::from_secs(timeout))
        .build()?;
    let service = match (mode, samples) {
        (RouteMode::TwoPoint, Some(n)) => ProfileService::new(lookup).with_two_point_samples(n),
        (RouteMode::MultiPoint, Some(n)) => ProfileService::new(lookup).with_path_samples(n),
        (_, None) => ProfileService::new(lookup),
    };

    let session = profile_route(&service, mode, &points).await?;

    match session.status() {
        Status::Ready => (),
        Status::Failed(err) if err.is_empty_result() => {
            eprintln!("{err}");
            return Ok(());
        }
        Status::Failed(err) => return Err(err.clone().into()),
        status => return Err(anyhow!("profile not ready: {status:?}")),
    }

    match cmd {
        CliCmd::Csv => print_csv(session.points())?,
        CliCmd::Json => print_json(session.points())?,
        CliCmd::Plot => plot_ascii(session.points()),
        CliCmd::Stats => {
            let stats = session.stats().ok_or_else(|| anyhow!("empty profile"))?;
            print_stats(&stats)?;
        }
        CliCmd::Gradient => print_gradient(session.profile(), session.points())?,
    };
    Ok(())
}

/// Replays `points` as map clicks and runs the resulting request.
async fn profile_route<L: ElevationLookup>(
    service: &ProfileService<L>,
    mode: RouteMode,
    points: &[LocationPoint],
) -> Result<Session, AnyError> {
    let mut session = Session::new(mode);
    let mut pending = None;
    for &point in points {
        let (next, request) = session.click(point);
        session = next;
        pending = request.or(pending);
    }
    if mode == RouteMode::MultiPoint {
        let (next, request) = session.analyze();
        session = next;
        pending = request;
    }

    let pending = pending.ok_or_else(|| anyhow!("a route needs at least 2 points"))?;
    let result = service.run(&pending.request).await;
    Ok(session.complete(pending.generation, result))
}

/// # Example with gnuplot
///
/// ```sh
/// cargo run -- -p 46.5603,7.9792 -p 46.5776,8.0053 csv | tr ',' ' ' > ~/.tmp/plot && gnuplot -p -e "plot '~/.tmp/plot' using 1:4 with lines"
/// ```
fn print_csv(points: &[ProfilePoint]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Latitude,Longitude,Elevation")?;
    for ProfilePoint {
        location: LocationPoint { lat, lng },
        elevation,
        distance_km,
    } in points
    {
        writeln!(stdout, "{distance_km},{lat},{lng},{elevation}")?;
    }
    Ok(())
}

fn print_json(points: &[ProfilePoint]) -> Result<(), AnyError> {
    let json = serde_json::to_string(points)?;
    println!("{json}");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn plot_ascii(points: &[ProfilePoint]) {
    let plot_data: Vec<(f32, f32)> = points
        .iter()
        .map(|point| (point.distance_km as f32, point.elevation as f32))
        .collect();
    let max_km = plot_data.last().map_or(0.0, |(km, _)| *km).max(1e-3);
    Chart::new(300, 150, 0.0, max_km)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}

fn print_stats(stats: &ProfileStats) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "distance:      {:.2} km", stats.distance_km)?;
    writeln!(stdout, "max elevation: {:.0} m", stats.max_elevation_m)?;
    writeln!(stdout, "min elevation: {:.0} m", stats.min_elevation_m)?;
    writeln!(stdout, "total ascent:  {:.0} m", stats.total_ascent_m)?;
    writeln!(stdout, "total descent: {:.0} m", stats.total_descent_m)?;
    Ok(())
}

fn print_gradient(profile: &[ElevationSample], points: &[ProfilePoint]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Gradient,Class,Color")?;
    for (segment, start) in gradient_segments(profile).iter().zip(points) {
        writeln!(
            stdout,
            "{:.3},{:.1},{:?},{}",
            start.distance_km,
            segment.gradient_percent,
            segment.class,
            segment.class.color()
        )?;
    }

    writeln!(stdout)?;
    for class in GradientClass::ALL {
        writeln!(stdout, "{} {}", class.color(), class.label())?;
    }
    Ok(())
}
