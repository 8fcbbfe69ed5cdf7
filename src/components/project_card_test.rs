use super::*;
use crate::net::types::{Project, ProjectImage};

fn project_with_images(images: Vec<ProjectImage>) -> Project {
    Project {
        id: "1".to_owned(),
        title: "Hillside Residence".to_owned(),
        category: "Residential".to_owned(),
        year: 2023,
        location: "Pune".to_owned(),
        description: String::new(),
        images,
    }
}

#[test]
fn card_uses_the_first_image() {
    let project = project_with_images(vec![ProjectImage {
        url: Some("https://cdn.example/1.jpg".to_owned()),
        base64: None,
        caption: String::new(),
    }]);
    assert_eq!(card_image_src(&project), "https://cdn.example/1.jpg");
}

#[test]
fn card_falls_back_to_the_placeholder() {
    assert_eq!(card_image_src(&project_with_images(Vec::new())), PLACEHOLDER_IMAGE);
    assert_eq!(
        card_image_src(&project_with_images(vec![ProjectImage::default()])),
        PLACEHOLDER_IMAGE
    );
}
