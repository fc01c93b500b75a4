use glam::DVec3;
use crate::error::Error;
use crate::draw_list::{PrimitiveKind, Style, Rgba};
use super::*;

fn triangle() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ]
}

// ============================================================================
// Append
// ============================================================================

#[test]
fn test_new_list_is_empty() {
    let list = DrawList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.payload_len(), 0);
    assert_eq!(list.watermark(), Watermark::default());
}

#[test]
fn test_append_polygon_three_points() {
    let mut list = DrawList::new();
    let index = list.append_polygon(&triangle()).unwrap();

    assert_eq!(index, 0);
    assert_eq!(list.len(), 1);
    assert_eq!(list.payload_len(), 9);

    let primitive = list.primitive(0).unwrap();
    assert_eq!(primitive.kind, PrimitiveKind::Polygon);
    assert_eq!(primitive.offset, 0);
    assert_eq!(primitive.len, 9);
    assert_eq!(primitive.vertex_count(), 3);
    assert_eq!(list.values(0).unwrap(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_append_polygon_two_points_fails_without_mutation() {
    let mut list = DrawList::new();
    list.append_point(DVec3::ONE).unwrap();

    let result = list.append_polygon(&triangle()[..2]);

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(list.len(), 1);
    assert_eq!(list.payload_len(), 3);
}

#[test]
fn test_minimum_counts() {
    let mut list = DrawList::new();

    assert!(matches!(list.append_points(&[]), Err(Error::InvalidArgument(_))));
    assert!(matches!(list.append_lines(&[]), Err(Error::InvalidArgument(_))));
    assert!(matches!(list.append_polyline(&[DVec3::ZERO]), Err(Error::InvalidArgument(_))));
    assert!(list.is_empty());

    assert!(list.append_polyline(&[DVec3::ZERO, DVec3::X]).is_ok());
    assert!(list.append_points(&[DVec3::ZERO]).is_ok());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_append_lines_flattens_segments() {
    let mut list = DrawList::new();
    list.append_lines(&[
        [DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)],
        [DVec3::ZERO, DVec3::ONE],
    ]).unwrap();

    let primitive = list.primitive(0).unwrap();
    assert_eq!(primitive.kind, PrimitiveKind::Line);
    assert_eq!(primitive.len, 12);
    assert_eq!(&list.values(0).unwrap()[..6], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_offsets_are_contiguous_and_indices_sequential() {
    let mut list = DrawList::new();
    let a = list.append_point(DVec3::ZERO).unwrap();
    let b = list.append_style(1.0, 0.0, 0.0, 1.0, 2.0);
    let c = list.append_clear();
    let d = list.append_line(DVec3::ZERO, DVec3::X).unwrap();

    assert_eq!((a, b, c, d), (0, 1, 2, 3));

    let offsets: Vec<(usize, usize)> = list.iter().map(|(p, _)| (p.offset, p.len)).collect();
    assert_eq!(offsets, vec![(0, 3), (3, 5), (8, 0), (8, 6)]);
    assert_eq!(list.payload_len(), 14);
}

#[test]
fn test_style_record_payload() {
    let mut list = DrawList::new();
    list.append_style_value(&Style::new(Rgba::new(0.1, 0.2, 0.3, 0.4), 3.0));

    let values = list.values(0).unwrap();
    assert_eq!(values, &[0.1, 0.2, 0.3, 0.4, 3.0]);
    assert_eq!(
        Style::from_values(values),
        Some(Style::new(Rgba::new(0.1, 0.2, 0.3, 0.4), 3.0))
    );
    assert_eq!(list.primitive(0).unwrap().vertex_count(), 0);
}

#[test]
fn test_clear_record_is_empty() {
    let mut list = DrawList::new();
    list.append_clear();
    let primitive = list.primitive(0).unwrap();
    assert_eq!(primitive.kind, PrimitiveKind::Clear);
    assert_eq!(primitive.len, 0);
    assert!(list.values(0).unwrap().is_empty());
}

// ============================================================================
// append_flat
// ============================================================================

#[test]
fn test_append_flat_valid() {
    let mut list = DrawList::new();
    list.append_flat(PrimitiveKind::Polyline, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
    list.append_flat(PrimitiveKind::Style, &[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
    list.append_flat(PrimitiveKind::Clear, &[]).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.payload_len(), 11);
}

#[test]
fn test_append_flat_rejects_bad_stride() {
    let mut list = DrawList::new();

    assert!(matches!(
        list.append_flat(PrimitiveKind::Line, &[0.0; 9]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        list.append_flat(PrimitiveKind::Point, &[0.0; 4]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        list.append_flat(PrimitiveKind::Polygon, &[0.0; 6]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        list.append_flat(PrimitiveKind::Style, &[0.0; 4]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        list.append_flat(PrimitiveKind::Clear, &[0.0]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(list.is_empty());
    assert_eq!(list.payload_len(), 0);
}

// ============================================================================
// Addressing
// ============================================================================

#[test]
fn test_out_of_range() {
    let mut list = DrawList::new();
    list.append_clear();

    assert!(matches!(list.primitive(1), Err(Error::OutOfRange(_))));
    assert!(matches!(list.values(5), Err(Error::OutOfRange(_))));
}

// ============================================================================
// Save / restore / reset
// ============================================================================

#[test]
fn test_save_append_restore() {
    let mut list = DrawList::new();
    list.append_polygon(&triangle()).unwrap();
    list.save();

    list.append_points(&[DVec3::ZERO, DVec3::ONE]).unwrap();
    list.append_clear();
    assert_eq!(list.len(), 3);

    list.restore();
    assert_eq!(list.len(), 1);
    assert_eq!(list.payload_len(), 9);
    assert_eq!(list.watermark(), Watermark { records: 1, values: 9 });

    // Mark survives a restore
    list.append_point(DVec3::ZERO).unwrap();
    list.restore();
    assert_eq!(list.len(), 1);
}

#[test]
fn test_second_save_overwrites() {
    let mut list = DrawList::new();
    list.append_point(DVec3::ZERO).unwrap();
    list.save();
    list.append_point(DVec3::ONE).unwrap();
    list.save();
    list.append_point(DVec3::X).unwrap();

    list.restore();
    assert_eq!(list.len(), 2);
    assert_eq!(list.payload_len(), 6);
}

#[test]
fn test_restore_without_save_empties() {
    let mut list = DrawList::new();
    list.append_point(DVec3::ZERO).unwrap();
    list.restore();
    assert!(list.is_empty());
    assert_eq!(list.payload_len(), 0);
}

#[test]
fn test_reset_clears_records_and_mark() {
    let mut list = DrawList::new();
    list.append_polygon(&triangle()).unwrap();
    list.save();
    list.reset();

    assert!(list.is_empty());
    assert_eq!(list.payload_len(), 0);
    assert_eq!(list.watermark(), Watermark::default());

    list.append_point(DVec3::ZERO).unwrap();
    list.restore();
    assert!(list.is_empty());
}

// ============================================================================
// Growth
// ============================================================================

#[test]
fn test_growth_keeps_indices_and_content() {
    let mut list = DrawList::with_capacity(1, 1);
    for i in 0..1000 {
        let index = list.append_point(DVec3::splat(i as f64)).unwrap();
        assert_eq!(index, i);
    }
    assert_eq!(list.len(), 1000);
    assert_eq!(list.payload_len(), 3000);
    assert_eq!(list.values(777).unwrap(), &[777.0, 777.0, 777.0]);
}

#[test]
fn test_reserve_does_not_append() {
    let mut list = DrawList::new();
    list.reserve(64, 1024);
    assert!(list.is_empty());
    assert_eq!(list.payload_len(), 0);
}
