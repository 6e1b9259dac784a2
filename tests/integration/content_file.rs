use filecrc::{calculate_checksum, ContentError, ContentFile, FileType};

#[test]
fn fresh_file_has_present_empty_content_and_zero_checksum() {
    let file = ContentFile::new();
    assert_eq!(file.content().len(), 0);
    assert_eq!(file.checksum(), 0);
}

#[test]
fn absent_content_wins_over_image_rejection() {
    let mut file = ContentFile::with_kind(FileType::Image);
    assert_eq!(file.append(None), Err(ContentError::InvalidContent));
    assert_eq!(
        file.append_units(&[]),
        Err(ContentError::WrongFileType {
            kind: FileType::Image
        })
    );
    assert!(file.is_empty());
}

#[test]
fn mixed_appends_checksum_like_their_low_bytes() {
    let mut file = ContentFile::with_kind(FileType::Text);
    file.append_str("Hi").unwrap();
    file.append_units(&[0x0141, 0x00F1]).unwrap();
    file.append(Some(&[][..])).unwrap();

    assert_eq!(file.content(), &[0x48u16, 0x69, 0x0141, 0x00F1]);
    assert_eq!(file.low_bytes(), vec![0x48u8, 0x69, 0x41, 0xF1]);
    assert_eq!(file.checksum(), calculate_checksum(&[0x48, 0x69, 0x41, 0xF1]));
}

#[test]
fn abc_matches_reference_crc() {
    let mut file = ContentFile::new();
    file.append_units(&[65, 66, 67]).unwrap();
    assert_eq!(file.checksum(), 0xA383_0348);
    assert_eq!(file.checksum(), file.checksum());
}

#[test]
fn rejected_append_does_not_disturb_checksum() {
    let mut file = ContentFile::new();
    file.append_str("stable").unwrap();
    let before = file.checksum();

    assert!(file.append(None).is_err());
    file.set_kind(FileType::Image);
    assert!(file.append_str("more").is_err());

    assert_eq!(file.checksum(), before);
}
