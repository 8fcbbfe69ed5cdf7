use super::*;

#[test]
fn project_deserializes_backend_document() {
    let raw = serde_json::json!({
        "_id": "66f0a",
        "title": "Hillside Residence",
        "category": "Residential",
        "year": 2023,
        "location": "Pune",
        "description": "Three-level hillside home.",
        "images": [{ "url": "https://cdn.example/1.jpg", "caption": "Front elevation" }]
    });

    let project: Project = serde_json::from_value(raw).expect("valid project");
    assert_eq!(project.id, "66f0a");
    assert_eq!(project.year, 2023);
    assert_eq!(project.images.len(), 1);
    assert_eq!(project.images[0].caption, "Front elevation");
}

#[test]
fn project_tolerates_sparse_documents() {
    let raw = serde_json::json!({ "_id": "66f0b", "title": "Untitled" });
    let project: Project = serde_json::from_value(raw).expect("sparse project");
    assert_eq!(project.category, "");
    assert_eq!(project.year, 0);
    assert!(project.images.is_empty());
}

#[test]
fn image_caption_defaults_when_missing() {
    let raw = serde_json::json!({ "url": "https://cdn.example/1.jpg" });
    let image: ProjectImage = serde_json::from_value(raw).expect("image");
    assert_eq!(image.caption, "");
}

#[test]
fn payload_omits_absent_image_halves() {
    let payload = ProjectPayload {
        title: "T".to_owned(),
        category: "C".to_owned(),
        year: 2024,
        location: "L".to_owned(),
        description: "D".to_owned(),
        images: vec![ProjectImage {
            url: None,
            base64: Some("data:image/png;base64,AAAA".to_owned()),
            caption: "New".to_owned(),
        }],
    };

    let value = serde_json::to_value(&payload).expect("serializable");
    let image = &value["images"][0];
    assert!(image.get("url").is_none());
    assert_eq!(image["base64"], "data:image/png;base64,AAAA");
}

#[test]
fn image_src_prefers_stored_url() {
    let both = ProjectImage {
        url: Some("https://cdn.example/1.jpg".to_owned()),
        base64: Some("data:image/png;base64,AAAA".to_owned()),
        caption: String::new(),
    };
    assert_eq!(both.src(), "https://cdn.example/1.jpg");

    let staged = ProjectImage {
        url: None,
        base64: Some("data:image/png;base64,AAAA".to_owned()),
        caption: String::new(),
    };
    assert_eq!(staged.src(), "data:image/png;base64,AAAA");

    assert_eq!(ProjectImage::default().src(), "");
}
