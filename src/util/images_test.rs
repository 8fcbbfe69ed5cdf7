use super::*;

fn stored(url: &str, caption: &str) -> StagedImage {
    StagedImage {
        url: Some(url.to_owned()),
        base64: None,
        caption: caption.to_owned(),
    }
}

#[test]
fn can_accept_enforces_the_cap_inclusively() {
    assert!(can_accept(0, MAX_IMAGES));
    assert!(can_accept(3, 2));
    assert!(!can_accept(3, 3));
    assert!(!can_accept(MAX_IMAGES, 1));
}

#[test]
fn caption_or_default_fills_blank_captions() {
    assert_eq!(caption_or_default("  "), DEFAULT_CAPTION);
    assert_eq!(caption_or_default(" Lobby "), "Lobby");
}

#[test]
fn create_payload_defaults_captions_and_keeps_sources() {
    let images = vec![
        StagedImage::from_data_url("data:image/png;base64,AAAA"),
        stored("https://cdn.example/1.jpg", "Front"),
    ];

    let payload = create_payload(&images);
    assert_eq!(payload[0].base64.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(payload[0].caption, DEFAULT_CAPTION);
    assert_eq!(payload[1].url.as_deref(), Some("https://cdn.example/1.jpg"));
    assert_eq!(payload[1].caption, "Front");
}

#[test]
fn edit_payload_passes_captions_through_verbatim() {
    let images = vec![stored("https://cdn.example/1.jpg", "")];
    let payload = edit_payload(&images);
    assert_eq!(payload[0].caption, "");
}

#[test]
fn remove_image_ignores_out_of_range_indices() {
    let mut images = vec![stored("https://cdn.example/1.jpg", "a")];
    remove_image(&mut images, 5);
    assert_eq!(images.len(), 1);
    remove_image(&mut images, 0);
    assert!(images.is_empty());
}

#[test]
fn set_caption_updates_only_the_target() {
    let mut images = vec![stored("https://cdn.example/1.jpg", "a"), stored("https://cdn.example/2.jpg", "b")];
    set_caption(&mut images, 1, "Rear elevation".to_owned());
    assert_eq!(images[0].caption, "a");
    assert_eq!(images[1].caption, "Rear elevation");
    set_caption(&mut images, 9, "ignored".to_owned());
}

#[test]
fn src_prefers_stored_url_over_staged_data() {
    let mut image = stored("https://cdn.example/1.jpg", "");
    image.base64 = Some("data:image/png;base64,AAAA".to_owned());
    assert_eq!(image.src(), "https://cdn.example/1.jpg");
    assert_eq!(StagedImage::from_data_url("data:x").src(), "data:x");
    assert_eq!(StagedImage::default().src(), "");
}
