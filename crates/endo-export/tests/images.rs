use std::io::Cursor;

use endo_core::models::referral_template::ReferralTemplate;
use endo_export::error::ExportError;
use endo_export::export::{build_referral_document, probe_missing_ratios};
use endo_export::images::{
    ImageSlot, attach_image, clear_image, decode_data_url, encode_data_url, load_image_descriptor,
    probe_aspect_ratio,
};
use endo_export::layout::Block;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200u8, 200, 200]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageOutputFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[tokio::test]
async fn loads_a_complete_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pa.png");
    std::fs::write(&path, png(40, 20)).unwrap();

    let descriptor = load_image_descriptor(&path).await.unwrap();
    assert_eq!(descriptor.file_name, "pa.png");
    assert_eq!((descriptor.width_px, descriptor.height_px), (40, 20));
    assert_eq!(descriptor.aspect_ratio, Some(2.0));
    assert!(descriptor.data_url.starts_with("data:image/png;base64,"));
    assert_eq!(decode_data_url(&descriptor.data_url).unwrap(), png(40, 20));
}

#[tokio::test]
async fn attaching_a_radiograph_grows_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("post-op.png");
    std::fs::write(&path, png(20, 30)).unwrap();

    let mut template = ReferralTemplate::default();
    attach_image(&mut template, ImageSlot::Radiograph(2), &path)
        .await
        .unwrap();
    assert_eq!(template.radiographs.slots, 3);
    assert!(template.radiographs.images[0].is_none());
    let image = template.radiographs.images[2].as_ref().unwrap();
    assert!(!image.is_landscape());
}

#[tokio::test]
async fn failed_upload_leaves_the_template_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut template = ReferralTemplate::default();
    let before = template.clone();

    let missing = attach_image(&mut template, ImageSlot::Logo, dir.path().join("nope.png")).await;
    assert!(matches!(missing, Err(ExportError::ImageRead { .. })));

    let corrupt = dir.path().join("corrupt.png");
    std::fs::write(&corrupt, b"not an image").unwrap();
    let result = attach_image(&mut template, ImageSlot::Signature, &corrupt).await;
    assert!(matches!(result, Err(ExportError::ImageDecode(_))));

    assert_eq!(template, before);
}

#[tokio::test]
async fn probes_ratio_from_a_data_url() {
    let data_url = encode_data_url(&png(30, 10));
    assert_eq!(probe_aspect_ratio(&data_url).await.unwrap(), 3.0);
    assert!(matches!(
        probe_aspect_ratio("not a data url").await,
        Err(ExportError::InvalidDataUrl(_))
    ));
}

#[tokio::test]
async fn missing_ratios_are_probed_before_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, png(60, 20)).unwrap();

    let mut template = ReferralTemplate::default();
    attach_image(&mut template, ImageSlot::Logo, &path).await.unwrap();
    if let Some(logo) = template.header.logo.as_mut() {
        logo.aspect_ratio = None;
        logo.width_px = 0;
    }

    let probed = probe_missing_ratios(&template).await;
    assert_eq!(probed.header.logo.as_ref().unwrap().aspect_ratio, Some(3.0));
    assert_eq!(probed.header.logo.as_ref().unwrap().width_px, 60);
    assert_eq!(template.header.logo.as_ref().unwrap().aspect_ratio, None);

    let model = build_referral_document(&Default::default(), &template).await;
    assert!(matches!(model.header.blocks[0], Block::Image { .. }));
}

#[tokio::test]
async fn clearing_a_radiograph_keeps_its_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pa.png");
    std::fs::write(&path, png(30, 20)).unwrap();

    let mut template = ReferralTemplate::default();
    attach_image(&mut template, ImageSlot::Radiograph(1), &path)
        .await
        .unwrap();
    attach_image(&mut template, ImageSlot::Logo, &path).await.unwrap();

    clear_image(&mut template, ImageSlot::Radiograph(1));
    clear_image(&mut template, ImageSlot::Logo);
    clear_image(&mut template, ImageSlot::Radiograph(9));

    assert_eq!(template.radiographs.slots, 2);
    assert_eq!(template.radiographs.images.len(), 2);
    assert!(template.radiographs.images.iter().all(Option::is_none));
    assert!(template.header.logo.is_none());
}
