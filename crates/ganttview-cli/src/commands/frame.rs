use clap::Args;
use ganttview_core::{Config, TimelineFrame};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct FrameInput {
    /// Frame JSON file, or "-" for stdin
    pub file: PathBuf,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// One line of `groups` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupRow<'a> {
    group_key: &'a str,
    bars: usize,
    lanes: Vec<u32>,
}

fn read_frame(input: &FrameInput) -> Result<TimelineFrame, Box<dyn std::error::Error>> {
    if input.file.as_os_str() == "-" {
        tracing::debug!("reading frame from stdin");
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(TimelineFrame::from_json(&content)?)
    } else {
        Ok(TimelineFrame::load(&input.file)?)
    }
}

fn print_json<T: Serialize>(value: &T, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

pub fn check(input: FrameInput) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let frame = read_frame(&input)?;
    let opts = config.validation_options();
    tracing::debug!(
        tolerance = opts.tolerance,
        consistency_checks = opts.consistency_checks,
        "validating frame"
    );
    let report = frame.validate(&opts);

    if input.json {
        print_json(&report, &config)?;
    } else if report.is_valid() {
        println!("ok");
    } else {
        for violation in &report {
            println!("{violation}");
        }
    }

    report.into_result()?;
    Ok(())
}

pub fn summary(input: FrameInput) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let frame = read_frame(&input)?;
    let summary = frame.summary();

    if input.json {
        return print_json(&summary, &config);
    }
    println!("hour markers: {}", summary.hour_markers);
    println!("day labels:   {}", summary.day_labels);
    println!("bands:        {}", summary.bands);
    println!("bars:         {}", summary.bars);
    println!("lanes:        {}", summary.lanes);
    println!("groups:       {}", summary.groups);
    println!("sections:     {}", summary.sections);
    println!("targets:      {}", summary.target_bars);
    println!("milestones:   {}", summary.milestones);
    Ok(())
}

pub fn groups(input: FrameInput) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let frame = read_frame(&input)?;

    let rows: Vec<GroupRow<'_>> = frame
        .groups()
        .into_iter()
        .map(|(group_key, bars)| {
            let mut lanes: Vec<u32> = bars.iter().map(|b| b.lane_index).collect();
            lanes.sort_unstable();
            lanes.dedup();
            GroupRow {
                group_key,
                bars: bars.len(),
                lanes,
            }
        })
        .collect();

    if input.json {
        return print_json(&rows, &config);
    }
    for row in &rows {
        let lanes: Vec<String> = row.lanes.iter().map(u32::to_string).collect();
        println!("{}\t{} bar(s)\tlanes {}", row.group_key, row.bars, lanes.join(","));
    }
    Ok(())
}
