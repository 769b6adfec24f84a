use signscan::signature::signs_from_view;
use signscan::{ImageView, OwnedImage, SignMap, SignScanError, SignValue, Template};

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u32; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        SignScanError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u32; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, SignScanError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u32> = (0u32..16).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.as_slice(), data.as_slice());

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5u32, 6u32]);
    assert_eq!(roi.row(1).unwrap(), &[9u32, 10u32]);
    assert_eq!(roi.get(0, 0).copied(), Some(5u32));
    assert!(roi.get(2, 0).is_none());

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        SignScanError::RoiOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );
    assert!(view.roi(0, 0, 0, 1).is_err());
}

#[test]
fn owned_image_from_rgb8_packs_pixels() {
    let bytes = [0xFFu8, 0x00, 0x00, 0x00, 0x80, 0x01];
    let img = OwnedImage::from_rgb8(&bytes, 2, 1).unwrap();
    assert_eq!(img.data(), &[0x00FF_0000, 0x0000_8001]);

    let err = OwnedImage::from_rgb8(&bytes[..5], 2, 1).err().unwrap();
    assert_eq!(err, SignScanError::BufferTooSmall { needed: 6, got: 5 });
}

#[test]
fn packed_rgb_view_reads_back_channels() {
    let bytes = [
        0x10u8, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, //
        0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0, 0x01, 0x02, 0x03,
    ];
    let img = OwnedImage::from_rgb8(&bytes, 3, 2).unwrap();
    let view = img.view();
    assert_eq!((view.width(), view.height(), view.stride()), (3, 2, 3));
    assert_eq!(view.row(1).unwrap(), &[0x00A0_B0C0u32, 0x00D0_E0F0, 0x0001_0203]);

    let roi = view.roi(1, 0, 2, 2).unwrap();
    assert_eq!(roi.get(0, 0).copied(), Some(0x0040_5060));
    assert_eq!(roi.get(1, 1).copied(), Some(0x0001_0203));
    let signs: Vec<u32> = signs_from_view(roi).into_iter().map(u32::from).collect();
    assert_eq!(signs, vec![0x0040_5060, 0x0070_8090, 0x00D0_E0F0, 0x0001_0203]);
}

#[test]
fn owned_image_rejects_mismatched_buffers() {
    assert_eq!(
        OwnedImage::new(vec![0; 3], 2, 2).err().unwrap(),
        SignScanError::BufferTooSmall { needed: 4, got: 3 }
    );
    assert!(matches!(
        OwnedImage::new(vec![0; 5], 2, 2),
        Err(SignScanError::InvalidInput(_))
    ));
}

#[test]
fn template_reports_dimensions() {
    let tpl = Template::new(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    assert_eq!((tpl.width(), tpl.height()), (3, 2));
    assert_eq!(tpl.view().row(1).unwrap(), &[4u32, 5, 6]);
}

#[test]
fn sign_values_are_bounded() {
    assert_eq!(SignValue::MAX.value(), 0x00FF_FFFF);
    assert_eq!(SignValue::new(0x0100_0000), SignValue::MAX);
    assert!(SignValue::MIN < SignValue::MAX);
}

#[test]
fn sign_map_is_numbered_in_order() {
    let map = SignMap::from_signs([SignValue::new(3), SignValue::new(1)]);
    let entries = map.entries();
    assert_eq!(entries[0].number, 0);
    assert_eq!(entries[1].number, 1);
    assert_eq!(entries[1].sign, SignValue::new(1));
}
