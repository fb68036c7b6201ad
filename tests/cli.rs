//! End-to-end tests driving the `svgc` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <g stroke-linecap="round">
    <path d="M4 12h16" stroke="#000" stroke-width="2"/>
    <path d="M12 4v16" stroke="#000" stroke-width="2"/>
  </g>
</svg>
"##;

fn svgc(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svgc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run svgc")
}

fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn missing_folder_prints_input_hint() {
    let tmp = TempDir::new().unwrap();
    let out = svgc(tmp.path(), &["--output", "."]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("svgc --folder [pathToFiles]"));
}

#[test]
fn nonexistent_folder_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("out");
    fs::create_dir(&output).unwrap();

    let out = svgc(
        tmp.path(),
        &["--folder", "does-not-exist", "--output", output.to_str().unwrap()],
    );
    assert!(!out.status.success());
    assert!(stderr(&out).contains("svgc --folder [pathToFiles]"));
    assert!(names(&output).is_empty());
}

#[test]
fn output_that_is_a_file_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("icons");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("plus.svg"), ICON).unwrap();
    fs::write(tmp.path().join("target.txt"), "not a directory").unwrap();

    let out = svgc(tmp.path(), &["--folder", "icons", "--output", "target.txt"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("svgc --output [targetPath]"));
    assert_eq!(names(tmp.path()), vec!["icons", "target.txt"]);
    assert_eq!(names(&input), vec!["plus.svg"]);
}

#[test]
fn converts_directory_with_relative_paths() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("icons")).unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("icons/plus.svg"), ICON).unwrap();
    fs::write(tmp.path().join("icons/arrow-left.svg"), ICON).unwrap();
    fs::write(tmp.path().join("icons/readme.md"), "# icons").unwrap();

    let out = svgc(tmp.path(), &["-f", "icons", "-o", "out"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    assert_eq!(names(&tmp.path().join("out")), vec!["Arrow-left.js", "Plus.js"]);
    let content = fs::read_to_string(tmp.path().join("out/Arrow-left.js")).unwrap();
    assert!(content.contains("const ArrowLeft = (props) => {"));
    assert!(content.contains("export default ArrowLeft"));
    assert!(content.contains("viewBox=\"0 0 24 24\""));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Generated 2 components"));
}

#[test]
fn directory_without_svg_files_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("icons")).unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("icons/logo.png"), "png").unwrap();

    let out = svgc(tmp.path(), &["-f", "icons", "-o", "out"]);
    assert!(out.status.success());
    assert!(names(&tmp.path().join("out")).is_empty());
}

#[test]
fn native_typescript_without_optimization() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("plus.svg"), ICON).unwrap();

    let out = svgc(
        tmp.path(),
        &["-f", "plus.svg", "-o", "out", "--typescript", "--react-native", "--no-optimize"],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let content = fs::read_to_string(tmp.path().join("out/Plus.tsx")).unwrap();
    assert!(content.contains("import { Svg, G, Path } from 'react-native-svg'"));
    assert!(content.contains("<G strokeLinecap=\"round\">"));
    assert!(content.contains("strokeWidth=\"2\""));
}

#[test]
fn broken_file_fails_run_but_siblings_are_written() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("icons")).unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("icons/plus.svg"), ICON).unwrap();
    fs::write(tmp.path().join("icons/broken.svg"), &ICON[..40]).unwrap();

    let out = svgc(tmp.path(), &["-f", "icons", "-o", "out"]);
    assert!(!out.status.success());
    assert_eq!(names(&tmp.path().join("out")), vec!["Plus.js"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 failed"));
    assert!(stdout.contains("broken.svg"));
    // Reported once, on stdout
    assert!(!stderr(&out).contains("broken.svg"));
}

#[test]
fn config_file_in_cwd_sets_dialect() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("plus.svg"), ICON).unwrap();
    fs::write(
        tmp.path().join("svgc.toml"),
        "[component]\ntypescript = true\n",
    )
    .unwrap();

    let out = svgc(tmp.path(), &["-f", "plus.svg", "-o", "out"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(names(&tmp.path().join("out")), vec!["Plus.tsx"]);
}

#[test]
fn invalid_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("plus.svg"), ICON).unwrap();
    fs::write(tmp.path().join("svgc.toml"), "[component]\nbogus = 1\n").unwrap();

    let out = svgc(tmp.path(), &["-f", "plus.svg", "-o", "out"]);
    assert!(!out.status.success());
    assert!(names(&tmp.path().join("out")).is_empty());
}

#[test]
fn gen_config_prints_stock_config() {
    let tmp = TempDir::new().unwrap();
    let out = svgc(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[component]"));
    assert!(stdout.contains("[optimize]"));
}
