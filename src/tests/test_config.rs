use std::path::PathBuf;
use crate::config::ReportConfig;
use crate::error::ReportError;

#[test]
fn test_artifact_path_prefix() {
    let config = ReportConfig::with_output_dir("out");
    assert_eq!(config.artifact_path("roc.png", None).unwrap(), PathBuf::from("out/roc.png"));
    assert_eq!(
        config.artifact_path("roc.png", Some("2")).unwrap(),
        PathBuf::from("out/arch_2_roc.png")
    );
    // index 0 is a real architecture id, not "absent"
    assert_eq!(
        config.artifact_path("plot.png", Some("0")).unwrap(),
        PathBuf::from("out/arch_0_plot.png")
    );
}

#[test]
fn test_artifact_path_stays_in_output_dir() {
    let config = ReportConfig::with_output_dir("out");
    for arch in ["a/b", "..\\up", ""] {
        assert!(matches!(
            config.artifact_path("plot.png", Some(arch)),
            Err(ReportError::InvalidParameter { .. })
        ));
    }
    assert!(config.artifact_path("../plot.png", None).is_err());
}

#[test]
fn test_defaults() {
    let config = ReportConfig::default();
    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert_eq!(config.figure_size, (640, 480));
    assert!(!config.create_output_dir);
}

#[test]
fn test_builder_validates_sizes() {
    let config = ReportConfig::builder()
        .output_dir("plots")
        .figure_size(800, 600)
        .create_output_dir(true)
        .build()
        .unwrap();
    assert_eq!(config.output_dir, PathBuf::from("plots"));
    assert_eq!(config.figure_size, (800, 600));
    assert_eq!(config.box_plot_size, (1200, 600));

    let zero = ReportConfig::builder().scatter_panel_size(0).build();
    assert!(matches!(zero, Err(ReportError::InvalidParameter { .. })));
}

#[test]
fn test_from_json_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.json");
    std::fs::write(&file, r#"{"output_dir": "artifacts", "figure_size": [320, 240]}"#).unwrap();

    let config = ReportConfig::from_json_file(&file).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("artifacts"));
    assert_eq!(config.figure_size, (320, 240));
    assert_eq!(config.scatter_panel_size, 250);
}

#[test]
fn test_missing_output_dir_is_an_error_unless_created() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nested").join("results");

    let strict = ReportConfig::with_output_dir(&missing);
    assert!(matches!(strict.prepare_output_dir(), Err(ReportError::MissingOutputDir(_))));

    let lenient = ReportConfig::builder()
        .output_dir(&missing)
        .create_output_dir(true)
        .build()
        .unwrap();
    lenient.prepare_output_dir().unwrap();
    assert!(missing.is_dir());
}
