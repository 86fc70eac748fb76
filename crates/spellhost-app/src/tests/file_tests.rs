use axum::http::StatusCode;
use serde_json::Value;

use super::{app_for, get, test_config, write_pair};

#[tokio::test]
async fn test_serves_registered_files() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "en_GB-ise");

    let app = app_for(test_config(), &[dir.path()]);

    let (status, body) = get(app.clone(), "/spellchecker/en_GB-ise/en_GB-ise.dic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"1\nen_GB-ise\n");

    let (status, body) = get(app, "/spellchecker/en_GB-ise/en_GB-ise.aff").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"SET UTF-8\n");
}

#[tokio::test]
async fn test_files_do_not_need_token() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "pl");

    let mut config = test_config();
    config.auth.token = Some("s3cret".to_string());
    let app = app_for(config, &[dir.path()]);

    let (status, _) = get(app, "/spellchecker/pl/pl.aff").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rejects_unregistered_filenames() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "pl");
    write_pair(dir.path(), "de_CH");
    std::fs::write(dir.path().join("secret.txt"), "hidden").unwrap();

    let app = app_for(test_config(), &[dir.path()]);

    // another dictionary's file under the wrong identifier
    let (status, _) = get(app.clone(), "/spellchecker/pl/de_CH.dic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app.clone(), "/spellchecker/pl/secret.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app.clone(), "/spellchecker/pl/../secret.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app.clone(), "/spellchecker/xx/pl.dic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(app, "/spellchecker/pl").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_file_removed_after_discovery() {
    let dir = tempfile::tempdir().unwrap();
    write_pair(dir.path(), "pl");

    let app = app_for(test_config(), &[dir.path()]);
    std::fs::remove_file(dir.path().join("pl.dic")).unwrap();

    let (status, _) = get(app, "/spellchecker/pl/pl.dic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_colliding_identifier_served_from_its_own_directory() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    write_pair(first.path(), "en");
    write_pair(second.path(), "en");
    std::fs::write(second.path().join("en.dic"), "1\nsecond\n").unwrap();

    let app = app_for(test_config(), &[first.path(), second.path()]);

    let (_, body) = get(app.clone(), "/spellchecker/language_manager").await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    let dictionaries = json["dictionaries"].as_array().unwrap();
    assert_eq!(dictionaries.len(), 2);
    assert_eq!(dictionaries[0]["id"], "en");

    let qualified_url = dictionaries[1]["dic"].as_str().unwrap().to_string();
    assert!(qualified_url.starts_with("/spellchecker/"));
    assert!(qualified_url.ends_with("/en/en.dic"));

    let (status, body) = get(app.clone(), "/spellchecker/en/en.dic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"1\nen\n");

    let (status, body) = get(app, &qualified_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"1\nsecond\n");
}
