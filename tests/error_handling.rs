use winnowfp::{
    ConfigLoadError, FileConfig, FingerprintEngine, HashReducer, Md5Reducer, PerceptualError,
    WinnowConfig, Xxh3Reducer,
};

#[test]
fn noise_threshold_above_min_length_is_rejected() {
    let err = FingerprintEngine::new(5, 10).unwrap_err();
    assert_eq!(
        err,
        PerceptualError::InvalidConfiguration {
            noise_threshold: 10,
            min_detected_length: 5,
        }
    );
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn equal_thresholds_are_accepted() {
    let engine = FingerprintEngine::new(4, 4).expect("k == t is valid");
    assert_eq!(engine.params().window_size, 1);
}

#[test]
fn injected_reducer_does_not_bypass_validation() {
    let cfg = WinnowConfig::new()
        .with_min_detected_length(3)
        .with_noise_threshold(4);
    let result = FingerprintEngine::with_reducer(cfg, Xxh3Reducer::default());
    assert!(matches!(
        result,
        Err(PerceptualError::InvalidConfiguration { .. })
    ));
}

#[test]
fn empty_and_whitespace_inputs_never_fail() {
    let engine = FingerprintEngine::default();
    let empty_hash = Md5Reducer.reduce("");
    assert_eq!(engine.fingerprint_chars("").to_vec(), vec![empty_hash]);
    assert_eq!(engine.fingerprint_chars(" \t\n").to_vec(), vec![empty_hash]);
    assert_eq!(engine.fingerprint_words("").to_vec(), vec![empty_hash]);
    assert_eq!(engine.fingerprint_words("     ").to_vec(), vec![empty_hash]);
}

#[test]
fn text_between_one_ngram_and_one_window_yields_single_minimum() {
    // 10 chars => 3 n-grams of 8, fewer than the window of 5.
    let engine = FingerprintEngine::default();
    let text = "abcdefghij";
    let expected = ["abcdefgh", "bcdefghi", "cdefghij"]
        .iter()
        .map(|g| Md5Reducer.reduce(g))
        .min()
        .expect("three n-grams");
    assert_eq!(engine.fingerprint_chars(text).to_vec(), vec![expected]);
}

#[test]
fn config_loader_surfaces_engine_errors_as_validation() {
    let yaml = "version: \"1.0\"\nwinnow:\n  min_detected_length: 2\n  noise_threshold: 3\n";
    let err = FileConfig::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(_)));
}

#[test]
fn missing_config_file_is_io_error() {
    let err = FileConfig::from_file("/definitely/not/here/winnow.yaml").unwrap_err();
    assert!(matches!(err, ConfigLoadError::FileRead(_)));
    assert!(err.to_string().starts_with("failed to read config file"));
}

#[test]
fn window_size_overflow_is_rejected_not_wrapped() {
    let err = FingerprintEngine::new(usize::MAX, 0).unwrap_err();
    assert!(matches!(err, PerceptualError::WindowSizeOverflow { .. }));

    let yaml = format!(
        "version: \"1.0\"\nwinnow:\n  min_detected_length: {}\n  noise_threshold: 0\n",
        usize::MAX
    );
    let cfg = FileConfig::from_yaml(&yaml).expect("k <= t passes file validation");
    assert!(matches!(
        cfg.build_engine(),
        Err(ConfigLoadError::Perceptual(PerceptualError::WindowSizeOverflow { .. }))
    ));
}
