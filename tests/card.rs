use energy_card::{EnergyCard, EnergyCardConfig};

#[test]
fn footprint_includes_frame_and_caption() {
    let cfg = EnergyCardConfig::default();
    let card = EnergyCard::new(&cfg);
    let size = card.desired_size();
    // 860x460 canvas plus a 20 px frame margin on each side, plus the
    // caption strip below.
    assert_eq!(size.x, 900.0);
    assert_eq!(size.y, 526.0);
}

#[test]
fn caption_strip_is_dropped_without_a_caption() {
    let mut cfg = EnergyCardConfig::default();
    cfg.caption = None;
    let card = EnergyCard::new(&cfg);
    assert_eq!(card.desired_size().y, 500.0);

    let mut cfg = EnergyCardConfig::default();
    cfg.features.caption = false;
    let card = EnergyCard::new(&cfg);
    assert_eq!(card.desired_size().y, 500.0);
}

#[test]
fn card_clock_uses_the_configured_duration() {
    let mut cfg = EnergyCardConfig::default();
    cfg.duration_secs = 12.0;
    let card = EnergyCard::new(&cfg);
    assert_eq!(card.clock().period_secs(), 12.0);
}
