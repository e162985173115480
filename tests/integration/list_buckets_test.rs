//! End-to-end ListBuckets tests.

use crate::common::{CollectingOutput, LocalStackTestContext};
use bl_error::BlError;
use bl_lister::{
    BucketListing, BucketLister, CredentialStrategy, OutputFormat, S3BucketSource, S3Config,
    create_s3_client, render,
};

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_lists_created_buckets() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    ctx.create_bucket("bl-it-alpha").await.unwrap();
    ctx.create_bucket("bl-it-beta").await.unwrap();
    let expected = ctx.bucket_names().await.unwrap();

    let client = create_s3_client(&ctx.lister_config()).await.unwrap();
    let output = CollectingOutput::new();
    let lister = BucketLister::new(S3BucketSource::new(client), output.clone());

    let stats = lister.run().await.unwrap();

    let responses = output.responses();
    assert_eq!(responses.len(), 1);
    assert_eq!(stats.requests_sent, 1);

    let listing = BucketListing::from(&responses[0]);
    assert_eq!(listing.names(), expected);
    assert!(listing.names().contains(&"bl-it-alpha"));
    assert!(listing.names().contains(&"bl-it-beta"));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_json_render_of_live_response() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    ctx.create_bucket("bl-it-render").await.unwrap();

    let client = create_s3_client(&ctx.lister_config()).await.unwrap();
    let output = CollectingOutput::new();
    BucketLister::new(S3BucketSource::new(client), output.clone())
        .run()
        .await
        .unwrap();

    let rendered = render(OutputFormat::Jsonl, &output.responses()[0]).unwrap();
    assert!(rendered.contains("bl-it-render"));
    assert!(!rendered.contains('\n'));
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_without_output() {
    let config = S3Config::new(CredentialStrategy::static_keys("test", "test", "us-east-1"))
        .with_endpoint("http://127.0.0.1:1");

    let client = create_s3_client(&config).await.unwrap();
    let output = CollectingOutput::new();
    let lister = BucketLister::new(S3BucketSource::new(client), output.clone());

    let err = lister.run().await.unwrap_err();

    assert!(matches!(err, BlError::ListBuckets(_)));
    assert!(output.responses().is_empty());
}
