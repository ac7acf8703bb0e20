//! Detect command implementation

use crate::cli::DetectArgs;
use crate::config::Config;
use crate::detection::presenter::{format_json, format_text, write_json_report, PresentOptions};
use crate::detection::{DetectionArbiter, DetectorRegistry};
use crate::error::{DetectError, Result};

/// Run the detect command
pub fn run(args: DetectArgs, config: &Config) -> Result<()> {
    let registry = select_registry(&args, config)?;

    let mut options = config.arbiter_options();
    if let Some(depth) = args.depth {
        options.scanner.depth = depth;
    }
    if let Some(jobs) = args.jobs {
        options.jobs = jobs;
    }

    tracing::info!(
        path = %args.path.display(),
        depth = options.scanner.depth,
        formats = registry.len(),
        "Detecting dataset format"
    );

    let report = DetectionArbiter::new(registry, options).run(&args.path)?;

    if let Some(report_path) = &args.json_report {
        write_json_report(&report, report_path)?;
    }

    if args.json {
        println!("{}", format_json(&report, true)?);
    } else {
        let present = PresentOptions::new()
            .with_rejections(args.show_rejections || config.output.show_rejections);
        print!("{}", format_text(&report, &present));
    }

    Ok(())
}

/// Registry from `--formats` / `--exclude-formats`, falling back to config.
fn select_registry(args: &DetectArgs, config: &Config) -> Result<DetectorRegistry> {
    let requested: Vec<&str> = args
        .formats
        .iter()
        .chain(&args.exclude_formats)
        .flatten()
        .map(String::as_str)
        .collect();

    let unknown = DetectorRegistry::unknown_formats(&requested);
    if !unknown.is_empty() {
        return Err(DetectError::UnknownFormats(format!(
            "{} (valid formats: {})",
            unknown.join(", "),
            DetectorRegistry::new().names().join(", ")
        )));
    }

    let registry = match &args.formats {
        Some(formats) => {
            let formats: Vec<&str> = formats.iter().map(String::as_str).collect();
            DetectorRegistry::with_formats(&formats)
        }
        None => config.registry(),
    };

    let excluded: Vec<&str> = args
        .exclude_formats
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    Ok(registry.excluding(&excluded))
}
