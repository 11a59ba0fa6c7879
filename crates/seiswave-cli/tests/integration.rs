//! Integration tests for the `seiswave` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// `seiswave` with its config directory redirected into `home`.
fn seiswave_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seiswave"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    seiswave_bin(home)
        .args(args)
        .output()
        .expect("failed to run seiswave")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_ricker_csv() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate", "ricker", "--format", "csv"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("time_s,amplitude"));
    let rows: Vec<(f64, f64)> = lines
        .map(|l| {
            let (t, a) = l.split_once(',').unwrap();
            (t.parse().unwrap(), a.parse().unwrap())
        })
        .collect();
    assert_eq!(rows.len(), 501);
    assert!((rows[0].0 + 0.25).abs() < 1e-9);
    assert!((rows[500].0 - 0.25).abs() < 1e-9);
    assert!((rows[250].1 - 1.0).abs() < 1e-12);
}

#[test]
fn generate_table_summary() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &[
            "generate",
            "klauder",
            "--f1",
            "20",
            "--f2",
            "60",
            "--length",
            "0.2",
            "--spectrum",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Klauder wavelet"), "{text}");
    assert!(text.contains("201 samples"), "{text}");
    assert!(text.contains("  rms "), "{text}");
    assert!(text.contains("spectral centroid"), "{text}");
}

#[test]
fn generate_json_to_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("berlage.json");
    let output = run(
        home.path(),
        &[
            "generate",
            "berlage",
            "--frequency",
            "30",
            "--decay",
            "90",
            "--dt",
            "0.002",
            "--format",
            "json",
            "--spectrum",
            "--output",
            path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["kind"], "berlage");
    assert_eq!(json["sample_rate"], 500);
    assert_eq!(json["times"].as_array().unwrap().len(), 251);
    assert_eq!(json["times"][0], 0.0);
    assert!(json["spectrum"]["frequencies"].is_array());
}

#[test]
fn invalid_parameter_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &["generate", "ormsby", "--f1", "50", "--f2", "40"],
    );
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("invalid parameter"), "{err}");
    assert!(err.contains("f1 < f2 < f3 < f4"), "{err}");
}

#[test]
fn duration_shorter_than_dt_fails() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &[
            "generate",
            "ricker",
            "--duration",
            "0.0005",
            "--dt",
            "0.001",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid parameter"));
}

#[test]
fn foreign_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate", "ricker", "--f3", "10"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--f3 does not apply to a ricker wavelet"));
}

#[test]
fn unknown_kind_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate", "gabor"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown wavelet type"));
}

#[test]
fn out_of_range_frequency_warns() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &[
            "generate",
            "ricker",
            "--frequency",
            "480",
            "--format",
            "csv",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("out of range"), "{err}");
}

// ---------------------------------------------------------------------------
// spectrum / limits / render
// ---------------------------------------------------------------------------

#[test]
fn spectrum_csv_has_half_plus_one_bins() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &["spectrum", "ormsby", "--duration", "0.2", "--format", "csv"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("frequency_hz,magnitude\n"));
    // 201 samples -> 101 bins
    assert_eq!(text.lines().count(), 102);
}

#[test]
fn limits_json() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &["limits", "--dt", "0.002", "--format", "json"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["min"], 0.1);
    assert_eq!(json["max"], 225.0);
    assert_eq!(json["nyquist"], 250.0);
}

#[test]
fn render_writes_looped_wav() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ricker.wav");
    let output = run(
        home.path(),
        &[
            "render",
            path.to_str().unwrap(),
            "ricker",
            "--dt",
            "0.0001",
            "--loops",
            "3",
            "--bits",
            "24",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let (buffer, spec) = seiswave_io::read_wav(&path).unwrap();
    assert_eq!(spec.sample_rate, 10_000);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(buffer.len(), 3 * 5001);
}

#[test]
fn render_rejects_bad_bit_depth() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("x.wav");
    let output = run(
        home.path(),
        &["render", path.to_str().unwrap(), "ricker", "--bits", "8"],
    );
    assert!(!output.status.success());
}

#[test]
fn render_rejects_huge_loop_count() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("x.wav");
    let loops = usize::MAX.to_string();
    let output = run(
        home.path(),
        &[
            "render",
            path.to_str().unwrap(),
            "ricker",
            "--loops",
            &loops,
        ],
    );
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("exceed the limit"), "{err}");
    assert!(!err.contains("panicked"), "{err}");
    assert!(!path.exists());
}

// ---------------------------------------------------------------------------
// presets
// ---------------------------------------------------------------------------

#[test]
fn presets_list_shows_factory() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["presets", "list", "--factory"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["ricker", "ormsby", "klauder", "berlage"] {
        assert!(text.contains(name), "missing {name}: {text}");
    }
}

#[test]
fn presets_save_show_use_delete() {
    let home = TempDir::new().unwrap();

    let output = run(
        home.path(),
        &[
            "presets",
            "save",
            "marine",
            "ormsby",
            "--f1",
            "5",
            "--f2",
            "10",
            "--f3",
            "60",
            "--f4",
            "80",
            "--dt",
            "0.002",
            "--description",
            "Marine band-pass",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let output = run(home.path(), &["presets", "list", "--user"]);
    assert!(stdout(&output).contains("marine"));

    let output = run(home.path(), &["presets", "show", "marine"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Marine band-pass"), "{text}");
    assert!(text.contains("Status: valid"), "{text}");

    let output = run(
        home.path(),
        &["generate", "--preset", "marine", "--format", "csv"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 252);

    let output = run(home.path(), &["presets", "save", "marine", "ricker"]);
    assert!(
        !output.status.success(),
        "saving over an existing preset needs --force"
    );

    let output = run(home.path(), &["presets", "delete", "marine"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let output = run(home.path(), &["presets", "show", "marine"]);
    assert!(!output.status.success());
}

#[test]
fn presets_save_rejects_invalid() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &["presets", "save", "fast", "ricker", "--dt", "0.01"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not valid"));
}

#[test]
fn presets_names_cannot_escape_directory() {
    let home = TempDir::new().unwrap();
    let config = home.path().join(".config");
    std::fs::create_dir_all(&config).unwrap();
    let victim = config.join("victim.toml");
    std::fs::write(&victim, "keep = true\n").unwrap();

    let output = run(home.path(), &["presets", "delete", "../../victim"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid preset name"));
    assert!(victim.exists());

    let output = run(home.path(), &["presets", "save", "../escaped", "ricker"]);
    assert!(!output.status.success());
    assert!(!config.join("seiswave").join("escaped.toml").exists());
}
