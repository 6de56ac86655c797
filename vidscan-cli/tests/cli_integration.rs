use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidscan_cmd() -> Command {
    Command::cargo_bin("vidscan").expect("Failed to find vidscan binary")
}

#[test]
fn test_report_empty_tree_writes_header_only_csv() -> Result<(), Box<dyn Error>> {
    let input = tempdir()?;
    let out_dir = tempdir()?;
    let output = out_dir.path().join("report.csv");

    // No video files selected, so ffprobe is never invoked
    let mut cmd = vidscan_cmd();
    cmd.arg("report")
        .arg(input.path())
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let contents = std::fs::read_to_string(&output)?;
    assert_eq!(contents.lines().count(), 1);
    assert!(
        contents
            .lines()
            .next()
            .unwrap()
            .starts_with("duration,duration_seconds,file_size,format_name")
    );
    Ok(())
}

#[test]
fn test_report_ignores_non_video_files() -> Result<(), Box<dyn Error>> {
    let input = tempdir()?;
    let out_dir = tempdir()?;
    let output = out_dir.path().join("report.csv");

    std::fs::write(input.path().join("notes.txt"), "not a video")?;
    std::fs::write(input.path().join("cover.jpg"), "not a video either")?;

    let mut cmd = vidscan_cmd();
    cmd.arg("report")
        .arg(input.path())
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let contents = std::fs::read_to_string(&output)?;
    assert_eq!(contents.lines().count(), 1); // header only
    Ok(())
}

#[test]
fn test_report_missing_input_dir_fails() {
    let mut cmd = vidscan_cmd();
    cmd.arg("report").arg("surely_this_does_not_exist_42_integration");
    cmd.assert().failure().stderr(contains("FATAL"));
}

#[test]
fn test_report_requires_subcommand_args() {
    let mut cmd = vidscan_cmd();
    cmd.arg("report");
    cmd.assert().failure();
}
