use super::*;

#[test]
fn ring_follow_covers_a_tenth_per_tick() {
    let ring = Point::new(0.0, 0.0);
    let mouse = Point::new(100.0, 50.0);
    let next = ring_follow(ring, mouse);
    assert!((next.x - 10.0).abs() < 1e-12);
    assert!((next.y - 5.0).abs() < 1e-12);
}

#[test]
fn ring_follow_converges_to_the_pointer() {
    let mouse = Point::new(100.0, -40.0);
    let mut ring = Point::new(0.0, 0.0);
    for _ in 0..200 {
        ring = ring_follow(ring, mouse);
    }
    assert!((ring - mouse).hypot() < 1e-6);
}

#[test]
fn parallax_is_a_quarter_of_scroll() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert_eq!(parallax_offset(400.0), 100.0);
}

#[test]
fn magnetic_offset_is_zero_at_center() {
    let size = Vec2::new(120.0, 40.0);
    let offset = magnetic_offset(Point::new(60.0, 20.0), size);
    assert_eq!(offset, Vec2::ZERO);
}

#[test]
fn magnetic_offset_pulls_harder_vertically() {
    let size = Vec2::new(100.0, 100.0);
    let offset = magnetic_offset(Point::new(100.0, 100.0), size);
    assert!((offset.x - 6.0).abs() < 1e-12);
    assert!((offset.y - 12.5).abs() < 1e-12);
}

#[test]
fn burst_emits_seven_sparks() {
    let burst = SparkBurst::at(Point::new(10.0, 20.0), 7);
    assert_eq!(burst.sparks.len(), SPARKS_PER_BURST);
    for spark in &burst.sparks {
        assert_eq!(spark.origin, Point::new(10.0, 20.0));
        assert!(SPARK_GLYPHS.contains(&spark.glyph));
        let dist = spark.offset.hypot();
        assert!((28.0..64.0).contains(&dist), "distance {dist}");
        assert!((-100.0..100.0).contains(&spark.rotation_deg));
        assert!((0.6..1.3).contains(&spark.font_size_rem));
    }
}

#[test]
fn burst_angles_fan_a_full_turn() {
    let burst = SparkBurst::at(Point::ZERO, 3);
    for (i, spark) in burst.sparks.iter().enumerate() {
        let expected = (i as f64 / SPARKS_PER_BURST as f64) * std::f64::consts::TAU;
        let angle = spark.offset.y.atan2(spark.offset.x).rem_euclid(std::f64::consts::TAU);
        assert!((angle - expected).abs() < 1e-9, "spark {i}");
    }
}

#[test]
fn bursts_replay_per_seed() {
    let at = Point::new(5.0, 5.0);
    assert_eq!(SparkBurst::at(at, 99), SparkBurst::at(at, 99));
    assert_ne!(SparkBurst::at(at, 99), SparkBurst::at(at, 100));
}
