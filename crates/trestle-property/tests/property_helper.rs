//! Reference vectors for property string marshaling.

use trestle_property::{
    format, parse, Colour, ColourRect, Point, PropertyError, PropertyValue, Rect, Size, UDim,
    URect, UVector2,
};

fn udims(values: [(f32, f32); 4]) -> URect {
    let [l, t, r, b] = values.map(|(scale, offset)| UDim::new(scale, offset));
    URect::new(l, t, r, b)
}

fn assert_round_trip<T: PropertyValue + PartialEq + std::fmt::Debug>(value: T) {
    let text = format(&value);
    assert_eq!(parse::<T>(&text).unwrap(), value, "round trip through '{text}'");
}

#[test]
fn integer() {
    assert_eq!(format(&0_i32), "0");
    assert_eq!(format(&1230_i32), "1230");
    assert_eq!(format(&-1230_i32), "-1230");

    assert_eq!(parse::<i32>("0").unwrap(), 0);
    assert_eq!(parse::<i32>("1230").unwrap(), 1230);
    assert_eq!(parse::<i32>("-1230").unwrap(), -1230);
}

#[test]
fn float() {
    assert_eq!(format(&0.0_f32), "0");
    assert_eq!(format(&123.0_f32), "123");
    assert_eq!(format(&-123.0_f32), "-123");
    assert_eq!(format(&123.1_f32), "123.1");
    assert_eq!(format(&-123.1_f32), "-123.1");

    assert_eq!(parse::<f32>("0").unwrap(), 0.0);
    assert_eq!(parse::<f32>("123").unwrap(), 123.0);
    assert_eq!(parse::<f32>("-123").unwrap(), -123.0);
    assert_eq!(parse::<f32>("123.1").unwrap(), 123.1);
    assert_eq!(parse::<f32>("-123.1").unwrap(), -123.1);
}

#[test]
fn double() {
    assert_eq!(format(&0.0_f64), "0");
    assert_eq!(format(&123.0_f64), "123");
    assert_eq!(format(&-123.0_f64), "-123");
    assert_eq!(format(&123.1_f64), "123.1");
    assert_eq!(format(&-123.1_f64), "-123.1");

    assert_eq!(parse::<f64>("0").unwrap(), 0.0);
    assert_eq!(parse::<f64>("123.1").unwrap(), 123.1);
    assert_eq!(parse::<f64>("-123.1").unwrap(), -123.1);
}

#[test]
fn colour() {
    assert_eq!(format(&Colour(0xFFAA_00C9)), "ffaa00c9");
    assert_eq!(format(&Colour(0x0000_0000)), "00000000");
    assert_eq!(format(&Colour(0xFFFF_FFFF)), "ffffffff");

    assert_eq!(parse::<Colour>("ffaa00c9").unwrap(), Colour(0xFFAA_00C9));
    assert_eq!(parse::<Colour>("00000000").unwrap(), Colour(0));
    assert_eq!(parse::<Colour>("ffffffff").unwrap(), Colour(0xFFFF_FFFF));
}

#[test]
fn colour_rect() {
    let rect = ColourRect::new(
        Colour(0xFFAA_00C9),
        Colour(0xAAC9_FF00),
        Colour(0x0000_0000),
        Colour(0x1234_5678),
    );
    let text = "tl:ffaa00c9 tr:aac9ff00 bl:00000000 br:12345678";

    assert_eq!(format(&rect), text);
    assert_eq!(parse::<ColourRect>(text).unwrap(), rect);
    assert_eq!(
        parse::<ColourRect>("").unwrap(),
        ColourRect::uniform(Colour(0xFF00_0000))
    );
}

#[test]
fn colour_rect_braced_and_comma_separated() {
    let rect = ColourRect::new(
        Colour(0xFFAA_00C9),
        Colour(0xAAC9_FF00),
        Colour(0x0000_0000),
        Colour(0x1234_5678),
    );
    for text in [
        "{tl:ffaa00c9 tr:aac9ff00 bl:00000000 br:12345678}",
        "tl:ffaa00c9,tr:aac9ff00,bl:00000000,br:12345678",
        "tl:ffaa00c9, tr:aac9ff00, bl:00000000, br:12345678",
    ] {
        assert_eq!(parse::<ColourRect>(text).unwrap(), rect, "parsing '{text}'");
    }
    assert_eq!(
        parse::<ColourRect>("{ffaa00c9}").unwrap(),
        ColourRect::uniform(Colour(0xFFAA_00C9))
    );
}

#[test]
fn urect_format() {
    assert_eq!(
        format(&udims([(0.25, 0.0), (0.25, 0.0), (0.75, 0.0), (0.75, 0.0)])),
        "{{0.25,0},{0.25,0},{0.75,0},{0.75,0}}"
    );
    assert_eq!(
        format(&udims([(0.25, 7.0), (0.25, 222.0), (0.0078125, 15.0), (1.0, 13.0)])),
        "{{0.25,7},{0.25,222},{0.0078125,15},{1,13}}"
    );
    assert_eq!(format(&URect::default()), "{{0,0},{0,0},{0,0},{0,0}}");
    assert_eq!(
        format(&udims([
            (-123456.25, 1234567.0),
            (1234567.0, 1234567.0),
            (1234567.0, 1234567.0),
            (1234567.0, 1234567.0),
        ])),
        "{{-123456.25,1234567},{1234567,1234567},{1234567,1234567},{1234567,1234567}}"
    );
}

#[test]
fn urect_parse() {
    // Missing final brace.
    assert_eq!(
        parse::<URect>("{{0.25,0},{0.25,0},{0.75,0},{0.75,0}").unwrap(),
        udims([(0.25, 0.0), (0.25, 0.0), (0.75, 0.0), (0.75, 0.0)])
    );
    assert_eq!(parse::<URect>("{{0.0,0},{0,0.0},{0,0},{0,0}}").unwrap(), URect::default());
    assert_eq!(
        parse::<URect>(
            "{-1234567.25 1234567} {1234567 1234567} {1234567 1234567} {1234567 1234567}"
        )
        .unwrap(),
        udims([
            (-1234567.25, 1234567.0),
            (1234567.0, 1234567.0),
            (1234567.0, 1234567.0),
            (1234567.0, 1234567.0),
        ])
    );
    assert_eq!(parse::<URect>("").unwrap(), URect::default());
}

#[test]
fn empty_text_defaults() {
    assert_eq!(parse::<Size>("").unwrap(), Size::ZERO);
    assert_eq!(parse::<Point>("").unwrap(), Point::ZERO);
    assert_eq!(parse::<Rect>("").unwrap(), Rect::default());
    assert_eq!(parse::<UDim>("").unwrap(), UDim::ZERO);
    assert_eq!(parse::<UVector2>("").unwrap(), UVector2::default());
    assert_eq!(parse::<Colour>("").unwrap(), Colour::OPAQUE_BLACK);

    for result in [
        parse::<i32>("").map(|_| ()),
        parse::<u32>("").map(|_| ()),
        parse::<f32>("").map(|_| ()),
        parse::<f64>("").map(|_| ()),
        parse::<bool>("").map(|_| ()),
    ] {
        assert!(matches!(result, Err(PropertyError::Malformed { .. })));
    }
}

#[test]
fn values_round_trip() {
    assert_round_trip(i32::MIN);
    assert_round_trip(u32::MAX);
    assert_round_trip(0.1_f32);
    assert_round_trip(-1.0e-7_f64);
    assert_round_trip(true);
    assert_round_trip(String::from("Hello, {world}"));
    assert_round_trip(Size::new(1920.0, 1080.0));
    assert_round_trip(Point::new(-0.5, 3.75));
    assert_round_trip(Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_round_trip(Colour(0x0102_0304));
    assert_round_trip(ColourRect::uniform(Colour(0x80FF_FFFF)));
    assert_round_trip(ColourRect::new(Colour(1), Colour(2), Colour(3), Colour(4)));
    assert_round_trip(UDim::new(1.0 / 3.0, -12.0));
    assert_round_trip(UVector2::new(UDim::new(0.5, 0.0), UDim::new(0.0, 0.5)));
    assert_round_trip(udims([(0.1, 0.2), (0.3, 0.4), (0.5, 0.6), (0.7, 0.8)]));
}

#[test]
fn malformed_errors_name_the_type() {
    let err = parse::<URect>("{{a,b},{c,d},{e,f},{g,h}}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed URect value: '{{a,b},{c,d},{e,f},{g,h}}'"
    );
}
