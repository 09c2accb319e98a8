use quiz_core::model::TypeTag;
use storage::{DataLoadError, Dataset, FsDataSource, load_quiz_data};

const QUESTIONS: &str = r#"[
    {"text":"Weekend plan?","choices":[
        {"text":"Festival","type":"upbeat"},
        {"text":"Nap","type":"chill"}
    ]},
    {"text":"Rainy day?","choices":[
        {"text":"Window watching","type":"melancholy"},
        {"text":"Gym","type":"energetic"}
    ]}
]"#;

const MUSIC: &str = r#"{
    "upbeat":[{"title":"Spark","artist":"Neon","albumArtUrl":"spark.jpg","youtubeUrl":"https://youtu.be/spark"}],
    "melancholy":[]
}"#;

#[tokio::test]
async fn loads_datasets_from_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("questions.json"), QUESTIONS).unwrap();
    std::fs::write(dir.path().join("music.json"), MUSIC).unwrap();

    let source = FsDataSource::new(dir.path());
    let data = load_quiz_data(&source).await.expect("load");

    assert_eq!(data.question_count(), 2);
    assert_eq!(data.questions()[1].choices[0].tag, TypeTag::Melancholy);
    assert_eq!(data.catalog().tracks(TypeTag::Upbeat).len(), 1);
    assert!(data.catalog().tracks(TypeTag::Melancholy).is_empty());
}

#[tokio::test]
async fn missing_music_file_is_unreachable() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("questions.json"), QUESTIONS).unwrap();

    let err = load_quiz_data(&FsDataSource::new(dir.path()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DataLoadError::Unreachable {
            dataset: Dataset::Music,
            ..
        }
    ));
}

#[tokio::test]
async fn shipped_sample_data_loads() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let data = load_quiz_data(&FsDataSource::new(dir))
        .await
        .expect("sample data should load");

    assert!(data.question_count() > 0);
    for tag in TypeTag::ALL {
        assert!(
            !data.catalog().tracks(tag).is_empty(),
            "sample catalog is missing tracks for {tag}"
        );
    }
}
