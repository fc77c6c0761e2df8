use std::fs;

use downloads_engine::SyncSettings;
use downloads_logging::{dl_info, dl_warn, LogDestination};

#[test]
fn configured_level_reaches_the_file_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sync.log");
    let settings = SyncSettings::from_ron_str("(log_level: \"warn\")").unwrap();

    settings.install_logger(LogDestination::File(path.clone()));
    dl_info!("refresh finished");
    dl_warn!("engine slow to answer");
    log::logger().flush();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("engine slow to answer"));
    assert!(!text.contains("refresh finished"));
}
