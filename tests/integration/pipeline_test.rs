// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{list, TestApp};
use readerscrape::utils::errors::PipelineError;

#[tokio::test]
async fn test_full_run_against_reader() {
    let app = TestApp::start().await;
    app.write_input(&[
        "# pages to ingest",
        "https://sub.example.com/path?x=1",
        "",
        "https://sub.example.com/other",
        "https://docs.test/guide",
    ]);
    app.serve(
        "https://sub.example.com/path",
        200,
        "Title: Example Path\n\nFirst body",
    )
    .await;
    app.serve("https://sub.example.com/other", 200, "No title line\nSecond body")
        .await;
    app.serve("https://docs.test/guide", 200, "Title: Guide: Part 1/2\nGuide body")
        .await;

    let metrics = app.pipeline(4, true).run(&app.input()).await.unwrap();

    assert_eq!(metrics.total_urls, 3);
    assert_eq!(metrics.successful, 3);
    assert_eq!(metrics.failed, 0);
    assert_eq!(metrics.domains_touched, 2);
    assert_eq!(metrics.summaries_written, 2);

    let sub = app.output().join("sub.example.com");
    assert_eq!(
        list(&sub),
        vec![
            "!sub.example.com_summarize.txt",
            "0001_Example Path.txt",
            "0002_Unknown Title.txt",
        ]
    );
    assert_eq!(
        list(&app.output().join("docs.test")),
        vec!["!docs.test_summarize.txt", "0001_Guide_ Part 1_2.txt"]
    );

    let summary = std::fs::read_to_string(sub.join("!sub.example.com_summarize.txt")).unwrap();
    assert_eq!(
        summary,
        "Content summaries for sub.example.com are provided below:\n\n\
         0001_Example Path.txt content is:\n<content>Title: Example Path\n\nFirst body</content>\n\n\
         0002_Unknown Title.txt content is:\n<content>No title line\nSecond body</content>\n\n"
    );
}

#[tokio::test]
async fn test_failed_fetch_in_the_middle() {
    let app = TestApp::start().await;
    app.write_input(&[
        "https://a.test/1",
        "https://a.test/2",
        "https://a.test/3",
    ]);
    app.serve("https://a.test/1", 200, "Title: One\n").await;
    app.serve("https://a.test/2", 503, "unavailable").await;
    app.serve("https://a.test/3", 200, "Title: Three\n").await;

    let metrics = app.pipeline(3, true).run(&app.input()).await.unwrap();

    assert_eq!(metrics.successful, 2);
    assert_eq!(metrics.failed, 1);
    assert!(metrics.is_balanced());
    assert_eq!(
        list(&app.output().join("a.test")),
        vec!["!a.test_summarize.txt", "0001_One.txt", "0002_Three.txt"]
    );
}

#[tokio::test]
async fn test_second_run_appends_and_rebuilds_summary() {
    let app = TestApp::start().await;
    app.write_input(&["https://a.test/1"]);
    app.serve("https://a.test/1", 200, "Title: One\n").await;
    app.pipeline(1, true).run(&app.input()).await.unwrap();

    app.reader.reset().await;
    app.write_input(&["https://a.test/2"]);
    app.serve("https://a.test/2", 200, "Title: Two\n").await;
    app.pipeline(1, true).run(&app.input()).await.unwrap();

    let dir = app.output().join("a.test");
    assert_eq!(
        list(&dir),
        vec!["!a.test_summarize.txt", "0001_One.txt", "0002_Two.txt"]
    );
    let summary = std::fs::read_to_string(dir.join("!a.test_summarize.txt")).unwrap();
    assert_eq!(summary.matches("<content>").count(), 2);
    assert!(!summary.contains("!a.test_summarize.txt content is"));
}

#[tokio::test]
async fn test_missing_input_sends_no_requests() {
    let app = TestApp::start().await;

    let err = app.pipeline(2, true).run(&app.input()).await.unwrap_err();

    assert!(matches!(err, PipelineError::InputMissing(_)));
    assert!(err.is_early_exit());
    assert!(app.reader.received_requests().await.unwrap().is_empty());
    assert!(!app.output().exists());
}
