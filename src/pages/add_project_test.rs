use super::*;

#[test]
fn every_field_is_required() {
    assert_eq!(
        validate_new_project("Title", "", "2024", "Pune", "Desc", 1),
        Err("Please fill all fields")
    );
    assert_eq!(
        validate_new_project("Title", "Residential", "2024", "Pune", "   ", 1),
        Err("Please fill all fields")
    );
}

#[test]
fn year_must_parse_as_a_number() {
    assert_eq!(
        validate_new_project("Title", "Residential", "MMXXIV", "Pune", "Desc", 1),
        Err("Year must be a number")
    );
}

#[test]
fn at_least_one_image_is_required() {
    assert_eq!(
        validate_new_project("Title", "Residential", "2024", "Pune", "Desc", 0),
        Err("Please add at least one image")
    );
}

#[test]
fn valid_input_yields_the_parsed_year() {
    assert_eq!(
        validate_new_project("Title", "Residential", " 2024 ", "Pune", "Desc", 2),
        Ok(2024)
    );
}
