use clap::Parser;
use td_tictactoe::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "td-tictactoe",
        "--games",
        "20",
        "--eval-games",
        "10",
        "--seed",
        "1",
        "--no-progress",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["result"]["total_games"], 20);
    assert_eq!(parsed["training"]["opponent"], "Random");
    assert_eq!(parsed["training"]["config"]["learn"], true);
    assert_eq!(parsed["training"]["config"]["schedule"]["kind"], "constant");
    assert_eq!(parsed["evaluation"]["result"]["total_games"], 10);
    assert_eq!(parsed["evaluation"]["opponent"], "First-Empty");
    assert_eq!(parsed["evaluation"]["config"]["learn"], false);
    assert_eq!(parsed["learner"]["epsilon"], 0.05);
    assert_eq!(parsed["learner"]["seed"], 1);
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}/", summary_dir.display());

    let args = parse_args([
        "td-tictactoe",
        "--games",
        "3",
        "--seed",
        "2",
        "--no-progress",
        "--summary",
        &summary_arg,
    ]);

    execute(args).expect("training with directory summary should succeed");

    let expected_path = summary_dir.join("training_summary.json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["result"]["total_games"], 3);
    // evaluation defaults to the training game count
    assert_eq!(parsed["evaluation"]["result"]["total_games"], 3);
}

#[test]
fn invalid_epsilon_is_reported() {
    let args = parse_args(["td-tictactoe", "--games", "1", "--epsilon", "2.0", "--no-progress"]);
    assert!(execute(args).is_err());
}

#[test]
fn invalid_decay_factor_is_reported() {
    let args = parse_args([
        "td-tictactoe",
        "--games",
        "1",
        "--decay-factor",
        "1.5",
        "--no-progress",
    ]);
    assert!(execute(args).is_err());
}
