use assert_cmd::Command;
use tempfile::TempDir;

fn plot() -> Command {
    Command::cargo_bin("concurio-plot").expect("Failed to find concurio-plot binary")
}

#[test]
fn saves_write_time_plot_to_fixed_filename() {
    let temp = TempDir::new().unwrap();

    plot()
        .current_dir(temp.path())
        .arg("-s")
        .write_stdin("write-time\n1: 10\n1: 12\n1: 11\n2: 20\n2: 18\n2: 22\n")
        .assert()
        .success();

    let image = temp.path().join("concurioplot.png");
    assert!(image.exists());
    assert!(image.metadata().unwrap().len() > 0);
}

#[test]
fn saves_event_plot_with_marker_series() {
    let temp = TempDir::new().unwrap();

    // Series 0 carries reference events; 1 and 2 are ordinary series.
    plot()
        .current_dir(temp.path())
        .arg("-s")
        .write_stdin("absolute\n0: 50\n1: 10\n1: 60\n2: 30\n2: 90\n0: 100\n")
        .assert()
        .success();

    assert!(temp.path().join("concurioplot.png").exists());
}

#[test]
fn save_mode_reads_from_file_argument() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("run.log");
    std::fs::write(&path, "write-time\n1: 5\n1: 6\n").unwrap();

    plot()
        .current_dir(temp.path())
        .arg("-s")
        .arg(&path)
        .assert()
        .success();

    assert!(temp.path().join("concurioplot.png").exists());
}

#[test]
fn rejects_malformed_log() {
    let temp = TempDir::new().unwrap();

    plot()
        .current_dir(temp.path())
        .arg("-s")
        .write_stdin("write-time\nbroken line\n")
        .assert()
        .code(1);

    assert!(!temp.path().join("concurioplot.png").exists());
}
