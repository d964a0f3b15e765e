// SPDX-License-Identifier: MPL-2.0
//! Editor session behaviour driven through a scripted gateway.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use iced::Point;
use image_rs::{Rgba, RgbaImage};
use photopro::application::editor::{AiPreset, EditKind, EditorSession, UpscaleFactor};
use photopro::application::port::{EditGateway, EditRequest, GatewayError, InlineImage};
use photopro::domain::editing::{BrushSize, CropRatio, EditorMode, FilterKind};
use photopro::error::Error;
use photopro::media::image::{decode_base64, encode_png};
use std::sync::{Arc, Mutex};

/// Gateway that answers every request with a fixed result and records what
/// it was sent.
struct ScriptedGateway {
    configured: bool,
    reply: Mutex<Result<InlineImage, GatewayError>>,
    requests: Mutex<Vec<EditRequest>>,
}

impl ScriptedGateway {
    fn replying(reply: Result<InlineImage, GatewayError>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: Mutex::new(reply),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            reply: Mutex::new(Err(GatewayError::MissingCredential)),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn set_reply(&self, reply: Result<InlineImage, GatewayError>) {
        *self.reply.lock().expect("reply lock") = reply;
    }

    fn sent(&self) -> Vec<EditRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl EditGateway for ScriptedGateway {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn execute(&self, request: EditRequest) -> BoxFuture<'static, Result<InlineImage, GatewayError>> {
        self.requests.lock().expect("requests lock").push(request);
        let reply = self.reply.lock().expect("reply lock").clone();
        future::ready(reply).boxed()
    }

    fn check_connection(&self) -> BoxFuture<'static, Result<(), GatewayError>> {
        future::ready(Ok(())).boxed()
    }
}

fn png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode_png(&RgbaImage::from_pixel(width, height, Rgba(rgba))).expect("encode")
}

fn inline_png(width: u32, height: u32) -> InlineImage {
    InlineImage::png(STANDARD.encode(png(width, height, [200, 10, 10, 255])))
}

fn session_with(gateway: Arc<ScriptedGateway>, width: u32, height: u32) -> EditorSession {
    let mut session = EditorSession::new(gateway, BrushSize::default());
    session
        .load_image(&png(width, height, [0, 0, 255, 255]))
        .expect("load");
    session
}

async fn run(session: &mut EditorSession, kind: EditKind) -> Result<(), Error> {
    let pending = session.begin_edit(kind)?;
    let outcome = pending.run().await;
    session.complete_edit(outcome)
}

fn ratio(width: f64, height: f64) -> CropRatio {
    CropRatio::new(width, height).expect("ratio")
}

#[test]
fn loading_garbage_keeps_previous_image() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 40, 20);
    assert!(matches!(session.load_image(b"not a png"), Err(Error::Image(_))));
    assert_eq!(session.workspace().dimensions(), Some((40, 20)));
    assert!(matches!(session.last_error(), Some(Error::Image(_))));
}

#[test]
fn crop_previews_always_start_from_the_staged_original() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 160, 90);

    session.preview_crop(ratio(1.0, 1.0)).expect("square");
    assert_eq!(session.mode(), EditorMode::Crop);
    assert_eq!(session.workspace().dimensions(), Some((90, 90)));

    // A wider ratio is taken from the original, not the square preview.
    session.preview_crop(ratio(16.0, 9.0)).expect("wide");
    assert_eq!(session.workspace().dimensions(), Some((160, 90)));
    assert_eq!(
        session.staged_original().map(RgbaImage::dimensions),
        Some((160, 90))
    );
}

#[test]
fn cancelling_a_crop_restores_the_original() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 160, 90);
    session.preview_crop(ratio(1.0, 1.0)).expect("square");
    session.cancel_crop();
    assert_eq!(session.mode(), EditorMode::Adjust);
    assert_eq!(session.workspace().dimensions(), Some((160, 90)));
    assert!(session.staged_original().is_none());
}

#[test]
fn leaving_crop_mode_without_applying_restores_the_original() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 160, 90);
    session.preview_crop(ratio(9.0, 16.0)).expect("story");
    session.set_mode(EditorMode::Ai);
    assert_eq!(session.workspace().dimensions(), Some((160, 90)));
}

#[test]
fn applying_a_crop_discards_the_original() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 160, 90);
    session.preview_crop(ratio(1.0, 1.0)).expect("square");
    session.apply_crop();
    assert_eq!(session.mode(), EditorMode::Adjust);
    assert_eq!(session.workspace().dimensions(), Some((90, 90)));

    // Re-entering Crop stages the cropped image.
    session.set_mode(EditorMode::Crop);
    assert_eq!(
        session.staged_original().map(RgbaImage::dimensions),
        Some((90, 90))
    );
}

#[test]
fn leaving_erase_mode_clears_the_mask() {
    for target in [EditorMode::Adjust, EditorMode::Crop, EditorMode::Ai] {
        let mut session = session_with(ScriptedGateway::unconfigured(), 200, 100);
        session.set_mode(EditorMode::Erase);
        let rect = session.workspace().image_rect().expect("rect");
        session.pointer_down(rect.center());
        session.pointer_moved(Point::new(rect.center_x() + 30.0, rect.center_y()));
        session.pointer_up();
        assert!(session.workspace().mask().is_some_and(|m| !m.is_empty()));

        session.set_mode(target);
        assert!(
            session.workspace().mask().is_some_and(|m| m.is_empty()),
            "mask kept when switching to {target:?}"
        );
        if target == EditorMode::Crop {
            let staged = session.staged_original().expect("staged");
            assert!(staged.pixels().all(|px| px == &Rgba([0, 0, 255, 255])));
        }
    }
}

#[test]
fn object_removal_sends_the_clean_image_as_reference() {
    let gateway = ScriptedGateway::replying(Ok(inline_png(8, 8)));
    let mut session = session_with(Arc::clone(&gateway), 8, 8);

    let pending = session
        .begin_edit(EditKind::Preset(AiPreset::Portrait))
        .expect("preset");
    assert!(pending.request().reference.is_none());
    drop(pending);

    let pending = session.begin_edit(EditKind::RemoveObjects).expect("removal");
    let reference = pending.request().reference.as_ref().expect("reference");
    let clean = decode_base64(&reference.data).expect("reference payload");
    assert!(clean.pixels().all(|px| px == &Rgba([0, 0, 255, 255])));
}

#[tokio::test]
async fn loading_or_clearing_is_refused_while_an_edit_is_in_flight() {
    let mut session = session_with(ScriptedGateway::replying(Ok(inline_png(10, 10))), 64, 64);
    let pending = session
        .begin_edit(EditKind::Preset(AiPreset::Portrait))
        .expect("edit");

    assert!(matches!(
        session.load_image(&png(300, 200, [1, 2, 3, 255])),
        Err(Error::Busy)
    ));
    session.clear();
    assert!(matches!(session.last_error(), Some(Error::Busy)));
    assert!(matches!(session.preview_crop(ratio(1.0, 1.0)), Err(Error::Busy)));
    assert_eq!(session.workspace().dimensions(), Some((64, 64)));

    session.complete_edit(pending.run().await).expect("applied");
    assert_eq!(session.workspace().dimensions(), Some((10, 10)));
    session.load_image(&png(300, 200, [1, 2, 3, 255])).expect("load");
    assert_eq!(session.workspace().dimensions(), Some((300, 200)));
}

#[test]
fn missing_credential_short_circuits_without_a_request() {
    let gateway = ScriptedGateway::unconfigured();
    let mut session = session_with(Arc::clone(&gateway), 64, 64);

    let result = session.begin_edit(EditKind::Upscale(UpscaleFactor::X2));
    assert!(matches!(
        result,
        Err(Error::Gateway(GatewayError::MissingCredential))
    ));
    assert!(!session.is_processing());
    assert!(gateway.sent().is_empty());
}

#[test]
fn editing_without_an_image_fails() {
    let mut session = EditorSession::new(
        ScriptedGateway::replying(Ok(inline_png(8, 8))),
        BrushSize::default(),
    );
    assert!(matches!(
        session.begin_edit(EditKind::Preset(AiPreset::Portrait)),
        Err(Error::NoImage)
    ));
}

#[tokio::test]
async fn second_request_is_rejected_while_one_is_in_flight() {
    let mut session = session_with(ScriptedGateway::replying(Ok(inline_png(32, 16))), 64, 64);

    let pending = session
        .begin_edit(EditKind::Preset(AiPreset::Landscape))
        .expect("first request");
    assert!(session.is_processing());
    assert!(matches!(
        session.begin_edit(EditKind::Upscale(UpscaleFactor::X4)),
        Err(Error::Busy)
    ));

    let outcome = pending.run().await;
    assert!(session.is_processing());
    session.complete_edit(outcome).expect("applied");
    assert!(!session.is_processing());
    assert_eq!(session.workspace().dimensions(), Some((32, 16)));
}

#[tokio::test]
async fn success_replaces_image_and_resets_filters() {
    let gateway = ScriptedGateway::replying(Ok(inline_png(128, 128)));
    let mut session = session_with(Arc::clone(&gateway), 64, 64);
    session.set_filter(FilterKind::Brightness, 150.0);
    session.set_filter(FilterKind::Blur, 2.0);

    run(&mut session, EditKind::Upscale(UpscaleFactor::X2))
        .await
        .expect("upscale");

    assert_eq!(session.workspace().dimensions(), Some((128, 128)));
    assert!(session.filters().is_default());
    assert!(session.last_error().is_none());

    let sent = gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].image.mime_type, "image/png");
    assert!(sent[0].instruction.contains("2x"));
}

#[tokio::test]
async fn failure_keeps_filters_and_records_the_error() {
    let gateway = ScriptedGateway::replying(Err(GatewayError::Remote {
        status: 500,
        message: Some("boom".into()),
    }));
    let mut session = session_with(Arc::clone(&gateway), 64, 64);
    session.set_filter(FilterKind::Sepia, 40.0);

    let result = run(&mut session, EditKind::Instruction("warmer".into())).await;
    assert!(matches!(
        result,
        Err(Error::Gateway(GatewayError::Remote { status: 500, .. }))
    ));
    assert_eq!(session.filters().get(FilterKind::Sepia), 40.0);
    assert_eq!(session.workspace().dimensions(), Some((64, 64)));
    assert!(!session.is_processing());

    // The gate is released, so a retry goes through.
    gateway.set_reply(Ok(inline_png(64, 64)));
    run(&mut session, EditKind::Instruction("warmer".into()))
        .await
        .expect("retry");
    assert!(session.filters().is_default());
}

#[tokio::test]
async fn response_without_image_is_reported() {
    let mut session = session_with(
        ScriptedGateway::replying(Err(GatewayError::NoImageInResponse)),
        64,
        64,
    );
    let _ = run(&mut session, EditKind::Preset(AiPreset::Document)).await;
    assert!(matches!(
        session.last_error(),
        Some(Error::Gateway(GatewayError::NoImageInResponse))
    ));
}

#[tokio::test]
async fn undecodable_payload_is_invalid() {
    let mut session = session_with(
        ScriptedGateway::replying(Ok(InlineImage::png("%%% not base64".into()))),
        64,
        64,
    );
    let result = run(&mut session, EditKind::Preset(AiPreset::RemoveBackground)).await;
    assert!(matches!(
        result,
        Err(Error::Gateway(GatewayError::InvalidPayload(_)))
    ));
    assert_eq!(session.workspace().dimensions(), Some((64, 64)));
}

#[tokio::test]
async fn object_removal_sends_the_mask_and_returns_to_adjust() {
    let gateway = ScriptedGateway::replying(Ok(inline_png(200, 100)));
    let mut session = session_with(Arc::clone(&gateway), 200, 100);
    session.set_mode(EditorMode::Erase);
    session.set_brush(BrushSize::new(40));

    let rect = session.workspace().image_rect().expect("rect");
    session.pointer_down(rect.center());
    session.pointer_moved(Point::new(rect.center_x() + 10.0, rect.center_y()));
    session.pointer_up();

    run(&mut session, EditKind::RemoveObjects).await.expect("removal");
    assert_eq!(session.mode(), EditorMode::Adjust);

    let sent = gateway.sent();
    let payload = decode_base64(&sent[0].image.data).expect("payload");
    // Blue image with the red mask blended over the painted centre.
    let centre = payload.get_pixel(100, 50);
    assert!(centre[0] > 100, "mask not visible in payload: {centre:?}");
    assert_eq!(payload.get_pixel(2, 2), &Rgba([0, 0, 255, 255]));
}

#[tokio::test]
async fn ai_edit_in_crop_mode_restages_the_result() {
    let mut session = session_with(ScriptedGateway::replying(Ok(inline_png(50, 50))), 160, 90);
    session.preview_crop(ratio(1.0, 1.0)).expect("square");

    run(&mut session, EditKind::Preset(AiPreset::WhiteIdBackground))
        .await
        .expect("edit");
    assert_eq!(session.mode(), EditorMode::Crop);
    assert!(session.crop_ratio().is_none());
    assert_eq!(
        session.staged_original().map(RgbaImage::dimensions),
        Some((50, 50))
    );

    session.cancel_crop();
    assert_eq!(session.workspace().dimensions(), Some((50, 50)));
}

#[test]
fn export_encodes_the_filtered_composite() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 10, 10);
    session.set_filter(FilterKind::Grayscale, 100.0);
    let png = session.export_png().expect("png");
    let exported = image_rs::load_from_memory(&png).expect("decode").to_rgba8();
    let pixel = exported.get_pixel(5, 5);
    assert_eq!(pixel[0], pixel[1]);
    assert_eq!(pixel[1], pixel[2]);

    let uri = session.export_data_uri().expect("uri");
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn clear_returns_to_the_empty_state() {
    let mut session = session_with(ScriptedGateway::unconfigured(), 10, 10);
    session.set_filter(FilterKind::Contrast, 120.0);
    session.clear();
    assert!(!session.has_image());
    assert!(session.filters().is_default());
    assert!(matches!(session.export_png(), Err(Error::NoImage)));
}
