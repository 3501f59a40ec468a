
use leadboard::data::{sample_leads, DataSource, IngestError};
use std::fs;
use tempfile::TempDir;

fn with_home<T>(home: &TempDir, f: impl FnOnce() -> T) -> T {
    let previous = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());
    let result = f();
    match previous {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }
    result
}

#[test]
fn test_resolve_without_rc_uses_samples() {
    let _guard = test_env::lock_test_env();
    let home = TempDir::new().unwrap();

    let source = with_home(&home, || DataSource::resolve(None).unwrap());
    assert_eq!(source, DataSource::Sample);
    assert_eq!(source.load().unwrap(), sample_leads());
}

#[test]
fn test_resolve_from_rc() {
    let _guard = test_env::lock_test_env();
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".leadboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), "# leadboard\ndata.location=pipeline/leads.json\n").unwrap();

    let source = with_home(&home, || DataSource::resolve(None).unwrap());
    assert_eq!(source, DataSource::File(config_dir.join("pipeline/leads.json")));
}

#[test]
fn test_rc_without_location_uses_samples() {
    let _guard = test_env::lock_test_env();
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".leadboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), "color=off\n").unwrap();

    let source = with_home(&home, || DataSource::resolve(None).unwrap());
    assert_eq!(source, DataSource::Sample);
}

#[test]
fn test_absolute_rc_location() {
    let _guard = test_env::lock_test_env();
    let home = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let leads_path = data_dir.path().join("leads.json");
    fs::write(&leads_path, serde_json::to_string(&sample_leads()[..2]).unwrap()).unwrap();

    let config_dir = home.path().join(".leadboard");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), format!("data.location={}\n", leads_path.display())).unwrap();

    let source = with_home(&home, || DataSource::resolve(None).unwrap());
    assert_eq!(source, DataSource::File(leads_path));
    assert_eq!(source.load().unwrap().len(), 2);
}

#[test]
fn test_load_reports_ingest_error() {
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("leads.json");
    fs::write(&path, r#"{"leads": []}"#).unwrap();

    let err = DataSource::File(path).load().unwrap_err();
    assert!(err.chain().any(|cause| cause.is::<IngestError>()));
}
