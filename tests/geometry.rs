use egui::{Pos2, Rect, Vec2};
use energy_card::geometry::{AreaPath, CardGeometry, ChartFrame, LinePath, Scale, PAD};
use energy_card::profile::day_profile;

fn canvas() -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(860.0, 460.0))
}

#[test]
fn scale_fully_contains_the_combined_curves() {
    let p = day_profile();
    let scale = Scale::from_profile(p);
    let top = p.charge_top();
    let bottom = p.discharge_bottom();
    for i in 0..p.samples() {
        assert!(scale.max >= top[i]);
        assert!(scale.min <= bottom[i]);
    }
    assert!(scale.range() > 0.0);
}

#[test]
fn scale_minimum_is_floored_at_zero() {
    // The synthesized curves never go negative, so the floor wins.
    let scale = Scale::from_profile(day_profile());
    assert_eq!(scale.min, 0.0);
}

#[test]
fn frame_mapping_matches_the_fixed_dimensions() {
    let frame = ChartFrame::new(canvas());
    let inner = frame.inner();
    assert_eq!(inner.width(), 780.0);
    assert_eq!(inner.height(), 380.0);

    let scale = Scale::from_profile(day_profile());
    assert_eq!(frame.y(scale.min, &scale), PAD + 380.0);
    assert_eq!(frame.y(scale.max, &scale), PAD);
}

#[test]
fn sample_positions_span_the_inner_width() {
    let frame = ChartFrame::new(canvas());
    assert_eq!(frame.x(0, 97), 40.0);
    assert_eq!(frame.x(96, 97), 820.0);
}

#[test]
fn line_path_has_one_point_per_sample() {
    let p = day_profile();
    let frame = ChartFrame::new(canvas());
    let scale = Scale::from_profile(p);
    let line = LinePath::through(&p.baseline, &frame, &scale);
    assert_eq!(line.points.len(), 97);
}

#[test]
fn area_outline_has_both_boundaries() {
    let p = day_profile();
    let frame = ChartFrame::new(canvas());
    let scale = Scale::from_profile(p);
    let floor = vec![scale.min; p.samples()];
    let area = AreaPath::between(&p.baseline, &floor, &frame, &scale);

    let outline = area.outline();
    assert_eq!(outline.len(), 2 * 97);
    // Top boundary runs left-to-right, bottom boundary returns
    // right-to-left, so consecutive halves meet at the right edge.
    assert_eq!(outline[0].x, 40.0);
    assert_eq!(outline[96].x, 820.0);
    assert_eq!(outline[97].x, 820.0);
    assert_eq!(outline[193].x, 40.0);
}

#[test]
fn area_mesh_has_two_triangles_per_slice() {
    let p = day_profile();
    let frame = ChartFrame::new(canvas());
    let scale = Scale::from_profile(p);
    let floor = vec![scale.min; p.samples()];
    let area = AreaPath::between(&p.baseline, &floor, &frame, &scale);

    let mesh = area.mesh(egui::Color32::WHITE);
    assert_eq!(mesh.vertices.len(), 2 * 97);
    assert_eq!(mesh.indices.len(), 6 * 96);
    let max_idx = *mesh.indices.iter().max().unwrap() as usize;
    assert!(max_idx < mesh.vertices.len());
}

#[test]
fn geometry_builds_all_four_paths() {
    let geo = CardGeometry::build(day_profile(), canvas());
    assert_eq!(geo.base_line.points.len(), 97);
    assert_eq!(geo.base_area.outline().len(), 194);
    assert_eq!(geo.charge_area.outline().len(), 194);
    assert_eq!(geo.discharge_area.outline().len(), 194);
}

#[test]
fn curves_stay_inside_the_padded_area() {
    let geo = CardGeometry::build(day_profile(), canvas());
    let inner = geo.frame.inner();
    for p in &geo.base_line.points {
        assert!(p.y >= inner.top() && p.y <= inner.bottom());
    }
    for p in geo.charge_area.outline() {
        assert!(p.y >= inner.top() && p.y <= inner.bottom());
    }
}
