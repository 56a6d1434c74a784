use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use vibecode::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("vibecode")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./templates", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template_dir, PathBuf::from("./templates"));
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
    assert!(!parsed.defaults);
    assert!(parsed.answers.is_none());
    assert!(!parsed.verbose);
    assert!(!parsed.skip_git_check);
}

#[test]
fn test_output_dir_defaults_to_current_dir() {
    let parsed = Args::try_parse_from(make_args(&["./templates"])).unwrap();
    assert_eq!(parsed.output_dir, PathBuf::from("."));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--defaults",
        "--verbose",
        "--skip-git-check",
        "./templates",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.defaults);
    assert!(parsed.verbose);
    assert!(parsed.skip_git_check);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-a", "answers.yml", "./templates"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.answers, Some(PathBuf::from("answers.yml")));
}

#[test]
fn test_defaults_conflict_with_answers() {
    let args = make_args(&["--defaults", "--answers", "answers.json", "./templates"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./templates", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
