// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::TestApp;
use readerscrape::application::usecases::summarize_domains::SummarizeDomainsUseCase;

#[tokio::test]
async fn test_summaries_can_be_rebuilt_without_fetching() {
    let app = TestApp::start().await;
    app.write_input(&["https://a.test/1", "https://b.test/1"]);
    app.serve("https://a.test/1", 200, "Title: A\nalpha").await;
    app.serve("https://b.test/1", 200, "Title: B\nbeta").await;

    // fetch without summaries first
    app.pipeline(2, false).run(&app.input()).await.unwrap();
    assert!(!app.output().join("a.test/!a.test_summarize.txt").exists());

    let outcomes = SummarizeDomainsUseCase::new(app.output())
        .execute(None)
        .await
        .unwrap();

    let domains: Vec<_> = outcomes.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(domains, vec!["a.test", "b.test"]);

    let first = std::fs::read(app.output().join("b.test/!b.test_summarize.txt")).unwrap();
    SummarizeDomainsUseCase::new(app.output())
        .execute(Some("b.test"))
        .await
        .unwrap();
    let second = std::fs::read(app.output().join("b.test/!b.test_summarize.txt")).unwrap();
    assert_eq!(first, second);
    // only the reader calls from the run itself
    assert_eq!(app.reader.received_requests().await.unwrap().len(), 2);
}
