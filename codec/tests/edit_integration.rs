use codec::{
    apply_json_object, decode_edit, encode_edit, to_json_object, CodecError, CodecLimits, Color,
    EncodeState, EntityId, EntityRecord, LimitKind, PropertyValue,
};
use glam::Vec3;
use schema::{validate_flags, EntityType, Property, PropertyFlags, MAX_POINTS_PER_LINE};
use wire::EditHeader;

fn decode(bytes: &[u8]) -> codec::DecodedEdit {
    decode_edit(bytes, &wire::Limits::default(), &CodecLimits::default()).unwrap()
}

fn points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| Vec3::new(i as f32, -(i as f32), 0.5))
        .collect()
}

#[test]
fn light_changes_only_what_was_set() {
    let mut light = EntityRecord::new(EntityType::Light, PropertyFlags::new());
    assert!(light.set_intensity(2.5));
    assert!(light.set_color(Color::new(255, 0, 0)));

    let changed = light.get_changed();
    let expected: PropertyFlags = [Property::Color, Property::Intensity].into_iter().collect();
    assert_eq!(changed, expected);
    assert!(!changed.test(Property::FalloffRadius));
    assert!(!changed.test(Property::Position));

    let id = EntityId::random();
    let roomy = encode_edit(id, &light, &changed, 9999).unwrap();
    assert!(roomy.didnt_fit.is_empty());
    assert!(roomy.is_complete());
    validate_flags(EntityType::Light, &roomy.emitted).unwrap();

    let tiny = encode_edit(id, &light, &changed, 10).unwrap();
    assert_eq!(tiny.state, EncodeState::Overflowed);
    assert!(tiny.didnt_fit.test(Property::Color));
    validate_flags(EntityType::Light, &tiny.didnt_fit).unwrap();

    let decoded = decode(&roomy.bytes);
    assert_eq!(decoded.record.intensity(), 2.5);
    assert_eq!(decoded.record.color(), Color::new(255, 0, 0));
}

#[test]
fn line_points_at_the_cap_roundtrip() {
    let mut line = EntityRecord::new(EntityType::Line, PropertyFlags::new());
    assert!(line.set_line_points(points(MAX_POINTS_PER_LINE)));

    let requested: PropertyFlags = [Property::LinePoints].into_iter().collect();
    let outcome = encode_edit(EntityId::random(), &line, &requested, 9999).unwrap();
    assert!(outcome.is_complete());

    let decoded = decode(&outcome.bytes);
    assert_eq!(decoded.record.line_points(), points(MAX_POINTS_PER_LINE).as_slice());
}

#[test]
fn line_points_over_the_cap_keep_old_value() {
    let mut line = EntityRecord::new(EntityType::Line, PropertyFlags::new());
    assert!(line.set_line_points(points(3)));
    line.clear_changed();

    assert!(!line.set_line_points(points(MAX_POINTS_PER_LINE + 1)));
    assert_eq!(line.line_points(), points(3).as_slice());
    assert!(line.get_changed().is_empty());
}

#[test]
fn line_points_over_the_cap_on_the_wire_are_rejected() {
    let flags: PropertyFlags = [Property::LinePoints].into_iter().collect();
    let count = MAX_POINTS_PER_LINE + 1;
    let mut bytes = vec![0u8];
    bytes.extend(EditHeader::new(1, [4; 16], EntityType::Line.tag()).encode());
    bytes.extend(flags.encode());
    bytes.extend((count as u16).to_le_bytes());
    bytes.extend(std::iter::repeat(0u8).take(count * 12));

    let err = decode_edit(&bytes, &wire::Limits::default(), &CodecLimits::default()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::LimitsExceeded {
            kind: LimitKind::PropertyMaxLen,
            ..
        }
    ));
}

#[test]
fn box_alias_survives_the_wire() {
    let mut cube = EntityRecord::new(EntityType::Box, PropertyFlags::new());
    cube.set_dimensions(Vec3::splat(2.0));
    assert_eq!(cube.entity_type(), EntityType::Box);
    assert_eq!(cube.base_type(), EntityType::Shape);
    assert_eq!(cube.shape(), "Cube");

    let requested = cube.get_changed();
    let outcome = encode_edit(EntityId::random(), &cube, &requested, 1492).unwrap();
    let decoded = decode(&outcome.bytes);
    assert_eq!(decoded.record.entity_type(), EntityType::Box);
    assert_eq!(decoded.record.base_type(), EntityType::Shape);
    assert_eq!(decoded.record.shape(), "Cube");
    assert_eq!(decoded.record.dimensions(), Vec3::splat(2.0));
}

#[test]
fn box_becomes_sphere_after_shape_edit() {
    let id = EntityId::random();
    let mut cube = EntityRecord::new(EntityType::Box, PropertyFlags::new());
    cube.set_dimensions(Vec3::splat(2.0));
    let first = encode_edit(id, &cube, &cube.get_changed(), 1492).unwrap();

    let mut receiver = decode(&first.bytes).record;
    assert_eq!(receiver.entity_type(), EntityType::Box);

    cube.clear_changed();
    assert!(cube.set_shape("Sphere"));
    let requested = cube.get_changed();
    assert_eq!(requested.iter().collect::<Vec<_>>(), vec![Property::Shape]);
    let second = encode_edit(id, &cube, &requested, 1492).unwrap();

    let edit = decode(&second.bytes);
    assert_eq!(edit.record.entity_type(), EntityType::Sphere);
    receiver.merge(&edit.record);
    assert_eq!(receiver.entity_type(), EntityType::Sphere);
    assert_eq!(receiver.base_type(), EntityType::Shape);
    assert_eq!(receiver.shape(), "Sphere");
    assert_eq!(receiver.dimensions(), Vec3::splat(2.0));
}

#[test]
fn shape_type_tag_survives_edits_without_shape() {
    let mut torus = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
    assert_eq!(torus.entity_type(), EntityType::Shape);
    assert!(torus.set_shape("Torus"));
    torus.clear_changed();
    assert!(torus.set_color(Color::new(10, 20, 30)));

    let requested = torus.get_changed();
    let outcome = encode_edit(EntityId::random(), &torus, &requested, 1492).unwrap();
    let decoded = decode(&outcome.bytes);
    assert_eq!(decoded.record.entity_type(), EntityType::Shape);
    assert_eq!(decoded.record.color(), Color::new(10, 20, 30));
    assert_eq!(decoded.record, torus.restricted(&requested));
}

#[test]
fn box_alias_survives_json() {
    let cube = EntityRecord::new(EntityType::Box, PropertyFlags::new());
    let object = to_json_object(&cube, false);
    assert_eq!(object["type"], "Box");
    assert_eq!(object["shape"], "Cube");

    let mut shape = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
    apply_json_object(&mut shape, &object).unwrap();
    assert_eq!(shape.entity_type(), EntityType::Box);
}

#[test]
fn shape_name_drives_visible_type() {
    let mut shape = EntityRecord::new(EntityType::Shape, PropertyFlags::new());
    assert_eq!(shape.entity_type(), EntityType::Shape);
    shape.set_shape("Sphere");
    assert_eq!(shape.entity_type(), EntityType::Sphere);
    shape.set_shape("Cube");
    assert_eq!(shape.entity_type(), EntityType::Box);
    shape.set_shape("Tetrahedron");
    assert_eq!(shape.entity_type(), EntityType::Shape);
}

#[test]
fn didnt_fit_resend_reassembles_the_record() {
    let mut text = EntityRecord::new(EntityType::Text, PropertyFlags::new());
    text.set_name("sign");
    text.set_text("welcome");
    text.set_position(Vec3::new(4.0, 5.0, 6.0));
    text.set_color(Color::new(9, 8, 7));
    text.set_alpha(0.25);
    text.set_last_edited(1_000);

    let id = EntityId::random();
    let mut receiver = EntityRecord::new(EntityType::Text, PropertyFlags::new());
    let mut pending = text.get_changed();
    let mut messages = 0;
    while !pending.is_empty() {
        let outcome = encode_edit(id, &text, &pending, 64).unwrap();
        assert!(!outcome.is_empty(), "no progress with {pending:?}");
        assert!(outcome.bytes.len() <= 64);
        let decoded = decode(&outcome.bytes);
        assert_eq!(decoded.emitted, outcome.emitted);
        receiver.merge(&decoded.record);
        pending = outcome.didnt_fit;
        messages += 1;
    }
    assert!(messages > 1);

    for property in text.get_changed().iter() {
        assert_eq!(receiver.get(property), text.get(property), "{property}");
    }
    assert_eq!(receiver.last_edited(), 1_000);
}

#[test]
fn merge_is_idempotent() {
    let mut update = EntityRecord::new(EntityType::Light, PropertyFlags::new());
    update.set_intensity(7.0);
    update.set_locked(true);
    update.set_last_edited(50);

    let mut once = EntityRecord::new(EntityType::Light, PropertyFlags::new());
    once.merge(&update);
    let mut twice = once.clone();
    twice.merge(&update);
    assert_eq!(once, twice);
    assert_eq!(twice.intensity(), 7.0);
    assert!(twice.locked());
}

#[test]
fn group_members_travel_with_their_group() {
    let mut zone = EntityRecord::new(EntityType::Zone, PropertyFlags::new());
    zone.set(Property::HazeRange, PropertyValue::F32(250.0))
        .unwrap();
    let changed = zone.get_changed();
    assert!(changed.test(Property::HazeRange));

    let outcome = encode_edit(EntityId::random(), &zone, &changed, 1492).unwrap();
    let decoded = decode(&outcome.bytes);
    assert_eq!(
        decoded.record.get(Property::HazeRange),
        Some(&PropertyValue::F32(250.0))
    );
}
