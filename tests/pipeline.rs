//! End-to-end tests for `Pipeline` over HTTP.
//!
//! Each test stands up a `wiremock` server playing the directory site and
//! points the pipeline's origin at it. Delays are zeroed.

use std::path::PathBuf;

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use directory_crawl::parsers::fields::{AttributeLocator, CssLocator, DetailLocators, FieldSpec};
use directory_crawl::{DirectoryConfig, NOT_AVAILABLE, Pipeline, store};

fn test_config(server: &MockServer) -> DirectoryConfig {
    let mut config = DirectoryConfig::new(&server.uri(), "/dir/albion/");
    config.page_delay_ms = 0;
    config.detail_delay_ms = 0;
    config.request_timeout_secs = 5;
    config
}

/// Unique path under the system temp dir for one test's files
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("directory-crawl-{}-{}", std::process::id(), name))
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!("<html><body>{body}</body></html>"))
}

#[tokio::test]
async fn walk_category_follows_pagination_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dir/albion/plumbers/"))
        .and(query_param_is_missing("page"))
        .respond_with(html(
            r#"<a placeid="1" href="/biz/a">A</a>
               <ul><li class="page-item"><a href="/dir/albion/plumbers/?page=2">2</a></li></ul>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dir/albion/plumbers/"))
        .and(query_param("page", "2"))
        .respond_with(html(
            r#"<a placeid="2" href="/biz/b">B</a>
               <ul><li class="page-item"><a href="/dir/albion/plumbers/?page=1">1</a></li></ul>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline");
    let urls = pipeline
        .walk_category(&format!("{}/dir/albion/plumbers/", server.uri()))
        .await;

    assert_eq!(
        urls,
        vec![
            format!("{}/biz/a", server.uri()),
            format!("{}/biz/b", server.uri()),
        ]
    );
}

#[tokio::test]
async fn run_urls_discovers_walks_and_writes_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dir/albion/"))
        .respond_with(html(
            r#"<a href="/dir/albion/plumbers/">Plumbers</a>
               <a href="/dir/albion/bakers/">Bakers</a>
               <a href="/dir/albion/bakers/-99">Bakers 99</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dir/albion/bakers/"))
        .respond_with(html(r#"<a placeid="1" href="/biz/bread">Bread</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dir/albion/plumbers/"))
        .respond_with(html(r#"<a placeid="2" href="/biz/pipes">Pipes</a>"#))
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    // The mock origin carries a port, so only exclude numeric path segments
    config.category_exclude_patterns = vec![r"/-?\d+$".to_string()];
    config.url_list_path = temp_path("run-urls.csv");

    let pipeline = Pipeline::new(config.clone()).expect("pipeline");
    let written = pipeline.run_urls().await.expect("run_urls");
    assert_eq!(written, 2);

    let urls = store::read_url_list_from_path(&config.url_list_path).unwrap();
    // Categories are walked in sorted order
    assert_eq!(
        urls,
        vec![
            format!("{}/biz/bread", server.uri()),
            format!("{}/biz/pipes", server.uri()),
        ]
    );

    let _ = std::fs::remove_file(&config.url_list_path);
}

#[tokio::test]
async fn run_details_skips_failed_pages_and_writes_csv() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/biz/a"))
        .respond_with(html(
            r#"<sup style="top:-0.2em;">Acme, Plumbing</sup>
               <a selector-type="Phone">(07) 3000 0000</a>
               <span selector-type="Address1">12 Main St</span>
               <span selector-type="City">Albion</span>
               <span selector-type="State">QLD</span>
               <span selector-type="Zip">4010</span>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/c"))
        .respond_with(html(r#"<sup style="top:-0.2em;">Bolt</sup>"#))
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.url_list_path = temp_path("details-in.csv");
    config.details_path = temp_path("details-out.csv");

    let input = ["a", "b", "c"]
        .iter()
        .map(|slug| format!("{}/biz/{}", server.uri(), slug))
        .collect::<Vec<_>>();
    std::fs::write(&config.url_list_path, format!("{}\n", input.join("\n"))).unwrap();

    let pipeline = Pipeline::new(config.clone()).expect("pipeline");
    let written = pipeline.run_details().await.expect("run_details");
    assert_eq!(written, 2);

    let records = store::read_records_from_path(&config.details_path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, input[0]);
    assert_eq!(records[0].name, "Acme, Plumbing");
    assert_eq!(records[0].address, "12 Main St Albion QLD 4010");
    assert_eq!(records[1].url, input[2]);
    assert_eq!(records[1].phone, NOT_AVAILABLE);
    assert_eq!(records[1].address, NOT_AVAILABLE);

    let _ = std::fs::remove_file(&config.url_list_path);
    let _ = std::fs::remove_file(&config.details_path);
}

#[tokio::test]
async fn run_details_with_missing_input_fails() {
    let server = MockServer::start().await;
    let mut config = test_config(&server);
    config.url_list_path = temp_path("does-not-exist.csv");

    let pipeline = Pipeline::new(config).expect("pipeline");
    assert!(pipeline.run_details().await.is_err());
}

#[tokio::test]
async fn extract_details_uses_swapped_in_locators() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/biz/redesigned"))
        .respond_with(html(
            r#"<h1 class="business-name">Redesign Co</h1>
               <sup style="top:-0.2em;">Old Markup Name</sup>
               <a class="tel" data-field="phone">07 3111 1111</a>
               <p class="address">5 New Rd Albion</p>"#,
        ))
        .mount(&server)
        .await;

    let locators = DetailLocators {
        name: FieldSpec::new("Name")
            .with_locator(CssLocator::new("h1.business-name").unwrap())
            .with_locator(AttributeLocator::style("sup", "top:-0.2em;").unwrap()),
        phone: FieldSpec::new("Phone")
            .with_locator(AttributeLocator::new("a", "data-field", "phone").unwrap()),
        address: vec![FieldSpec::new("Address").with_locator(CssLocator::new("p.address").unwrap())],
    };

    let pipeline = Pipeline::new(test_config(&server))
        .expect("pipeline")
        .with_detail_locators(locators);
    let url = format!("{}/biz/redesigned", server.uri());
    let records = pipeline.extract_details(&[url.clone()]).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, url);
    assert_eq!(records[0].name, "Redesign Co");
    assert_eq!(records[0].phone, "07 3111 1111");
    assert_eq!(records[0].address, "5 New Rd Albion");
}
