use super::*;
use crate::net::types::{Project, ProjectImage};

#[test]
fn title_category_and_year_are_required() {
    assert_eq!(validate_update("", "Residential", "2024"), Err("Required fields missing"));
    assert_eq!(validate_update("Title", "  ", "2024"), Err("Required fields missing"));
    assert_eq!(validate_update("Title", "Residential", ""), Err("Required fields missing"));
}

#[test]
fn year_must_parse_as_a_number() {
    assert_eq!(validate_update("Title", "Residential", "next year"), Err("Year must be a number"));
    assert_eq!(validate_update("Title", "Residential", " 2021 "), Ok(2021));
}

#[test]
fn staged_images_keep_source_and_caption() {
    let project = Project {
        id: "1".to_owned(),
        title: "Hillside Residence".to_owned(),
        category: "Residential".to_owned(),
        year: 2023,
        location: "Pune".to_owned(),
        description: String::new(),
        images: vec![
            ProjectImage {
                url: Some("https://cdn.example/1.jpg".to_owned()),
                base64: None,
                caption: "Front".to_owned(),
            },
            ProjectImage {
                url: None,
                base64: Some("data:image/png;base64,AAAA".to_owned()),
                caption: String::new(),
            },
        ],
    };

    let staged = staged_from_project(&project);
    assert_eq!(staged.len(), 2);
    assert_eq!(staged[0].url.as_deref(), Some("https://cdn.example/1.jpg"));
    assert_eq!(staged[0].caption, "Front");
    assert_eq!(staged[1].base64.as_deref(), Some("data:image/png;base64,AAAA"));
}
