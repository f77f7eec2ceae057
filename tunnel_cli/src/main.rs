//! # Tunnel CLI Application
//!
//! Terminal front-end for the tunnel model engine. Prompts for the
//! cross-section parameters, decomposes a built-in demo alignment, builds
//! the structural model, and prints both a human summary and the JSON
//! payloads a host application would ship around.

use std::io::{self, BufRead, Write};

use tunnel_core::exchange::AnalysisJob;
use tunnel_core::geometry::{GeoPoint, GeoPolyline, Projection, RdNew, SegmentDecomposer};
use tunnel_core::handlers::AppConfig;
use tunnel_core::model::{build_cross_section, CrossSectionParams};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Demo alignment along the Utrecht canal zone, roughly 450 m.
fn demo_alignment() -> GeoPolyline {
    GeoPolyline::new(vec![
        GeoPoint::new(52.0860, 5.1214),
        GeoPoint::new(52.0871, 5.1239),
        GeoPoint::new(52.0875, 5.1266),
    ])
}

fn main() {
    println!("Tunnel CLI - Cross-Section Model Builder");
    println!("========================================");
    println!();
    println!("Using the built-in demo alignment. Enter parameters (or accept defaults):");
    println!();

    let segments = prompt_usize("Number of segments [4]: ", 4);
    let width_m = prompt_f64("Section width (m) [10.0]: ", 10.0);
    let height_m = prompt_f64("Section height (m) [6.0]: ", 6.0);
    let floor_thickness_m = prompt_f64("Floor thickness (m) [0.5]: ", 0.5);
    let roof_thickness_m = prompt_f64("Roof thickness (m) [0.5]: ", 0.5);
    let wall_thickness_m = prompt_f64("Wall thickness (m) [1.0]: ", 1.0);
    let sections = prompt_usize("Number of sections [2]: ", 2);
    let soil_stiffness_kn_m3 = prompt_f64("Soil stiffness (kN/m3) [400.0]: ", 400.0);
    let roof_load_kn_m2 = prompt_f64("Roof load (kN/m2) [5.0]: ", 5.0);

    let config = AppConfig::default();
    let params = CrossSectionParams {
        width_m,
        height_m,
        floor_thickness_m,
        roof_thickness_m,
        wall_thickness_m,
        sections,
        soil_stiffness_kn_m3,
        roof_load_kn_m2,
        material: Default::default(),
    };

    println!();
    match run(&config, &params, segments) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn run(
    config: &AppConfig,
    params: &CrossSectionParams,
    segments: usize,
) -> Result<(), tunnel_core::TunnelError> {
    let planar = demo_alignment().project(&RdNew)?;
    let total_length = planar.total_length();
    let decomposition =
        SegmentDecomposer::new(planar, segments, config.ribbon_half_width_m)?.decompose()?;
    let segment_length = total_length / segments as f64;

    let model = build_cross_section(params, segment_length)?;
    let job = AnalysisJob::new(&model, config.analysis_timeout_s);

    println!("═══════════════════════════════════════");
    println!("  TUNNEL MODEL SUMMARY");
    println!("═══════════════════════════════════════");
    println!();
    println!("Alignment:");
    println!("  Length:   {:.1} m", total_length);
    println!("  Segments: {} x {:.1} m", segments, segment_length);
    println!();
    println!("Cross-section:");
    println!("  Size:     {:.1} m x {:.1} m", params.width_m, params.height_m);
    println!("  Material: {}", params.material);
    print!("  Walls at x =");
    for x in params.wall_positions() {
        print!(" {:.2}", x);
    }
    println!(" (m)");
    println!();
    println!("Structural model:");
    println!("  Nodes:         {}", model.nodes.len());
    println!("  Slabs:         {}", model.slabs.len());
    println!("  Supports:      {}", model.supports.len());
    println!(
        "  Roof pressure: {:.0} N/m2 ({})",
        model.surface_loads[0].magnitude_n_m2, model.surface_loads[0].case
    );
    println!();
    println!("First segment footprint (RD):");
    for point in &decomposition.segments[0].polygon {
        let geo = RdNew.to_geographic(point);
        println!(
            "  ({:.1}, {:.1})  ->  ({:.6}, {:.6})",
            point.x, point.y, geo.lat, geo.lon
        );
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  ANALYSIS JOB {} (timeout {} s)",
        job.id, job.timeout_s
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("Exchange JSON (for the analysis worker):");
    println!("{}", job.to_json()?);
    Ok(())
}
