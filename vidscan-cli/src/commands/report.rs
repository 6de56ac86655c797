// vidscan-cli/src/commands/report.rs
//
// Implements the 'report' command: scan the tree, select video files,
// probe each one sequentially, assemble the report and export it as CSV.

use crate::cli::ReportArgs;
use crate::logging::get_timestamp;
use anyhow::Context;
use log::info;
use std::path::PathBuf;
use vidscan_core::{ProbeDocument, build_report, probe_file, scan_tree, select_videos, write_csv};

pub fn run_report(args: ReportArgs) -> anyhow::Result<()> {
    let extensions: Vec<String> = args
        .extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect();

    let scan = scan_tree(&args.input_dir, !args.no_sort)
        .with_context(|| format!("scanning '{}'", args.input_dir.display()))?;
    let files = select_videos(&scan, &extensions)?;
    info!("Found {} video file(s) to probe", files.len());

    // Sequential probe-and-collect; row order follows selection order.
    let mut documents: Vec<(PathBuf, ProbeDocument)> = Vec::with_capacity(files.len());
    for path in files {
        info!("Catching video metadata: {}", path.display());
        let document =
            probe_file(&path).with_context(|| format!("probing '{}'", path.display()))?;
        documents.push((path, document));
    }

    let rows = build_report(&documents);
    info!("Report rows assembled: {}", rows.len());

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("vidscan_report_{}.csv", get_timestamp())));
    write_csv(&rows, &output)
        .with_context(|| format!("writing report to '{}'", output.display()))?;
    info!("Report written: {}", output.display());

    Ok(())
}
