use bullets_shared::modules::{
    dirty::Region,
    layout::{Layout, LayoutConfig, LayoutError},
};
use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    !a.intersection(b).is_zero_sized()
}

fn right(rect: &Rectangle) -> i32 {
    rect.top_left.x + rect.size.width as i32
}

fn bottom(rect: &Rectangle) -> i32 {
    rect.top_left.y + rect.size.height as i32
}

#[test]
fn should_lay_out_pebble_sized_screen() {
    let layout = Layout::compute(Size::new(144, 168), &LayoutConfig::default()).unwrap();

    assert_eq!(layout.battery, Rectangle::new(Point::new(0, 2), Size::new(144, 14)));
    assert_eq!(layout.date, Rectangle::new(Point::new(0, 152), Size::new(144, 14)));

    let cell = Size::new(66, 66);

    assert_eq!(layout.bullets[0], Rectangle::new(Point::new(4, 16), cell));
    assert_eq!(layout.bullets[1], Rectangle::new(Point::new(74, 16), cell));
    assert_eq!(layout.bullets[2], Rectangle::new(Point::new(4, 86), cell));
    assert_eq!(layout.bullets[3], Rectangle::new(Point::new(74, 86), cell));
}

#[test]
fn should_map_regions_to_their_cells() {
    let layout = Layout::compute(Size::new(144, 168), &LayoutConfig::default()).unwrap();

    assert_eq!(layout.bounds_of(Region::Battery), layout.battery);
    assert_eq!(layout.bounds_of(Region::HourTens), layout.bullets[0]);
    assert_eq!(layout.bounds_of(Region::HourOnes), layout.bullets[1]);
    assert_eq!(layout.bounds_of(Region::MinuteTens), layout.bullets[2]);
    assert_eq!(layout.bounds_of(Region::MinuteOnes), layout.bullets[3]);
    assert_eq!(layout.bounds_of(Region::Date), layout.date);
}

#[test]
fn should_keep_bullets_square_disjoint_and_symmetric() {
    let config = LayoutConfig::default();

    for width in 40..=240 {
        for height in 60..=260 {
            let layout = Layout::compute(Size::new(width, height), &config).unwrap();
            let cells = layout.bullets;
            let size = cells[0].size;

            assert_eq!(size.width, size.height, "{}x{}", width, height);

            for (index, cell) in cells.iter().enumerate() {
                assert_eq!(cell.size, size, "{}x{}", width, height);
                assert!(cell.top_left.x >= 0 && right(cell) <= width as i32);
                assert!(cell.top_left.y >= 0 && bottom(cell) <= height as i32);
                assert!(!overlaps(cell, &layout.battery), "{}x{}", width, height);
                assert!(!overlaps(cell, &layout.date), "{}x{}", width, height);

                for other in cells.iter().skip(index + 1) {
                    assert!(!overlaps(cell, other), "{}x{}", width, height);
                }
            }

            assert_eq!(cells[0].top_left.x + right(&cells[1]), width as i32);
            assert_eq!(cells[2].top_left.x + right(&cells[3]), width as i32);
            assert_eq!(cells[0].top_left.y + bottom(&cells[2]), height as i32);
            assert_eq!(cells[1].top_left.y + bottom(&cells[3]), height as i32);
        }
    }
}

#[test]
fn should_center_bullets_on_odd_sized_screen() {
    let layout = Layout::compute(Size::new(145, 169), &LayoutConfig::default()).unwrap();
    let cells = layout.bullets;

    assert_eq!(cells[0].size, Size::new(66, 66));

    let left_margin = cells[0].top_left.x;
    let right_margin = 145 - right(&cells[1]);
    assert_eq!(left_margin, right_margin);

    let top_gap = cells[0].top_left.y - bottom(&layout.battery);
    let bottom_gap = layout.date.top_left.y - bottom(&cells[2]);
    assert_eq!(top_gap, bottom_gap);

    assert_eq!(cells[1].top_left.x - right(&cells[0]), 5);
    assert_eq!(cells[2].top_left.y - bottom(&cells[0]), 5);
}

#[test]
fn should_reject_screen_without_room_for_bullets() {
    let config = LayoutConfig::default();

    assert_eq!(
        Layout::compute(Size::new(144, 36), &config),
        Err(LayoutError::DegenerateBullet { size: 0 })
    );

    assert_eq!(
        Layout::compute(Size::new(4, 168), &config),
        Err(LayoutError::DegenerateBullet { size: 0 })
    );
}

#[test]
fn should_reject_screen_without_room_for_strips() {
    assert_eq!(
        Layout::compute(Size::new(144, 20), &LayoutConfig::default()),
        Err(LayoutError::ScreenTooSmall {
            width: 144,
            height: 20
        })
    );
}
