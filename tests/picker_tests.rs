// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end capture coordination scenarios
//!
//! These tests stand in for the platform layer: a service task drains the
//! launch-request channel, stores a fake capture on disk and reports the
//! outcome through the correlator, exactly as real platform glue would.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use media_picker::{
    CaptureError, CaptureOptions, CaptureOutcome, ChannelLauncher, CompletionCorrelator,
    LaunchRequest, MediaFile, MediaPicker, RequestId, ResizeBounds, resize, storage,
};
use tokio::sync::mpsc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::from_pixel(width, height, image::Rgb([40, 80, 160]));
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Jpeg)
        .unwrap();
    buffer
}

/// Service launch requests the way platform glue would: store the capture
/// under the photos root and answer through the correlator.
fn spawn_platform_service(
    mut requests: mpsc::UnboundedReceiver<LaunchRequest>,
    correlator: CompletionCorrelator,
    photos_root: PathBuf,
) {
    tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            let dir =
                storage::resolve_media_dir(Some(&photos_root), &request.options.directory).unwrap();
            let path = storage::unique_media_path(&dir, &request.options.name, "jpg");
            tokio::fs::write(&path, jpeg_fixture(2048, 1536)).await.unwrap();

            correlator.complete(
                request.id,
                CaptureOutcome::Success(MediaFile::new(path, "image/jpeg")),
            );
        }
    });
}

#[tokio::test]
async fn capture_round_trip_through_platform_service() {
    init_tracing();

    let photos_root = tempfile::tempdir().unwrap();
    let (launcher, requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    spawn_platform_service(
        requests,
        picker.correlator(),
        photos_root.path().to_path_buf(),
    );

    let media = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap()
        .await
        .unwrap();

    assert_eq!(media.mime_type, "image/jpeg");
    assert!(media.path.starts_with(photos_root.path().join("reports")));

    // The caller post-processes the raw capture independently of the
    // correlation path.
    let raw = media.read().await.unwrap();
    let bounded = resize(&raw, ResizeBounds::square(1024)).unwrap();
    let result = image::load_from_memory(&bounded).unwrap();
    assert_eq!((result.width(), result.height()), (1024, 768));
}

#[tokio::test]
async fn consecutive_captures_store_distinct_files() {
    init_tracing();

    let photos_root = tempfile::tempdir().unwrap();
    let (launcher, requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    spawn_platform_service(
        requests,
        picker.correlator(),
        photos_root.path().to_path_buf(),
    );

    let options = CaptureOptions::new("reports", "incident");
    let first = picker.take_photo(options.clone()).unwrap().await.unwrap();
    let second = picker.pick_photo(options).unwrap().await.unwrap();

    assert_ne!(first.path, second.path);
    assert!(second.path.exists());
}

#[tokio::test]
async fn stale_event_frees_the_slot_for_a_new_request() {
    init_tracing();

    let (launcher, mut requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    let correlator = picker.correlator();

    let abandoned = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let claimed_id = requests.recv().await.unwrap().id;

    // A completion for some other id arrives: it is discarded, the slot is
    // freed and the original caller learns its operation is gone.
    let stale_id = RequestId(claimed_id.0.wrapping_add(100));
    correlator.complete(stale_id, CaptureOutcome::Canceled);
    assert_eq!(abandoned.await.unwrap_err(), CaptureError::Abandoned);

    // The registry is consistent again: a new capture claims and resolves
    // normally.
    let retry = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let retry_id = requests.recv().await.unwrap().id;
    correlator.complete(
        retry_id,
        CaptureOutcome::Success(MediaFile::new("/tmp/retry.jpg", "image/jpeg")),
    );
    assert!(retry.await.is_ok());
}

#[tokio::test]
async fn cancellation_surfaces_as_an_error() {
    init_tracing();

    let (launcher, mut requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    let correlator = picker.correlator();

    let pending = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let id = requests.recv().await.unwrap().id;
    correlator.complete(id, CaptureOutcome::Canceled);

    assert_eq!(pending.await.unwrap_err(), CaptureError::Canceled);
}

#[tokio::test]
async fn platform_failure_is_surfaced_verbatim() {
    init_tracing();

    let (launcher, mut requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    let correlator = picker.correlator();

    let pending = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let id = requests.recv().await.unwrap().id;
    correlator.complete(id, CaptureOutcome::Failed("storage full".into()));

    assert_eq!(
        pending.await.unwrap_err(),
        CaptureError::Failed("storage full".into())
    );
}

#[tokio::test]
async fn caller_giving_up_does_not_wedge_the_next_capture() {
    init_tracing();

    let (launcher, mut requests) = ChannelLauncher::new();
    let picker = MediaPicker::new(Arc::new(launcher));
    let correlator = picker.correlator();

    let pending = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let id = requests.recv().await.unwrap().id;

    // The caller stops waiting; the completion still arrives later and is
    // absorbed without anyone listening.
    drop(pending);
    correlator.complete(
        id,
        CaptureOutcome::Success(MediaFile::new("/tmp/late.jpg", "image/jpeg")),
    );

    let next = picker
        .take_photo(CaptureOptions::new("reports", "incident"))
        .unwrap();
    let next_id = requests.recv().await.unwrap().id;
    correlator.complete(next_id, CaptureOutcome::Canceled);
    assert_eq!(next.await.unwrap_err(), CaptureError::Canceled);
}
