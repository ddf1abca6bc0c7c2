use super::*;
use crate::draw::{RED, WHITE};
use crate::input::{Direction, Key, Viewport};
use crate::source::{BaseImage, DataUri};
use crate::testing::solid_png_uri;
use std::collections::HashSet;

const WHITE_PIXEL: [u8; 4] = [255, 255, 255, 255];
const OUTLINE_PIXEL: [u8; 4] = [255, 0, 0, 255];

fn create_test_editor(width: i32, height: i32) -> ShapeEditor {
    let mut editor = ShapeEditor::new(width, height).with_placement(Placement::new(0x5eed));
    editor
        .load(&solid_png_uri(10, 10, WHITE))
        .expect("white base loads");
    editor
}

fn center(shape: &Shape) -> (f64, f64) {
    (
        shape.x() + shape.width() / 2.0,
        shape.y() + shape.height() / 2.0,
    )
}

fn is_translucent_red_over_white(pixel: [u8; 4]) -> bool {
    pixel[0] == 255 && (126..=129).contains(&pixel[1]) && pixel[1] == pixel[2] && pixel[3] == 255
}

#[test]
fn add_square_creates_fixed_size_shape_on_top() {
    let mut editor = create_test_editor(800, 600);
    let first = editor.add(ShapeKind::Square);
    let second = editor.add(ShapeKind::Rectangle);

    let shapes = editor.shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].id(), first);
    assert_eq!(shapes[1].id(), second);
    assert_eq!((shapes[0].width(), shapes[0].height()), (100.0, 100.0));
    assert_eq!((shapes[1].width(), shapes[1].height()), (150.0, 100.0));
    assert_eq!(shapes[1].kind(), ShapeKind::Rectangle);
    assert!(first.starts_with("square-"));
    assert!(second.starts_with("rectangle-"));
    assert_eq!(editor.selected(), None);
}

#[test]
fn add_does_not_change_selection() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());
    editor.select_at(cx, cy);

    editor.add(ShapeKind::Rectangle);
    assert_eq!(editor.selected(), Some(id.as_str()));
}

#[test]
fn placement_stays_inside_surface_for_many_samples() {
    let mut editor = create_test_editor(800, 600);
    for i in 0..1000 {
        let kind = if i % 2 == 0 {
            ShapeKind::Square
        } else {
            ShapeKind::Rectangle
        };
        let id = editor.add(kind);
        let shape = editor.shape(&id).unwrap().clone();

        assert!((0.0..=800.0 - shape.width()).contains(&shape.x()), "{shape:?}");
        assert!((0.0..=600.0 - shape.height()).contains(&shape.y()), "{shape:?}");

        let (cx, cy) = center(&shape);
        assert_eq!(editor.select_at(cx, cy), Some(id.as_str()));
        assert_eq!(editor.remove().map(|s| s.id().to_string()), Some(id));
    }
    assert!(editor.shapes().is_empty());
}

#[test]
fn shape_larger_than_surface_is_pinned_to_origin() {
    let mut editor = create_test_editor(120, 80);
    let id = editor.add(ShapeKind::Rectangle);
    let shape = editor.shape(&id).unwrap();
    assert_eq!((shape.x(), shape.y()), (0.0, 0.0));
}

#[test]
fn ids_stay_unique_and_count_tracks_adds_minus_removes() {
    let mut editor = create_test_editor(800, 600);
    let mut adds = 0;
    let mut removes = 0;

    for round in 0..40 {
        let kind = if round % 3 == 0 {
            ShapeKind::Rectangle
        } else {
            ShapeKind::Square
        };
        let id = editor.add(kind);
        adds += 1;

        if round % 4 == 0 {
            let (cx, cy) = center(editor.shape(&id).unwrap());
            editor.select_at(cx, cy);
            if editor.remove().is_some() {
                removes += 1;
            }
        }

        let ids: HashSet<_> = editor.shapes().iter().map(Shape::id).collect();
        assert_eq!(ids.len(), editor.shapes().len());
        assert_eq!(editor.shapes().len(), adds - removes);
    }
}

#[test]
fn select_hits_single_shape_and_misses_clear() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Square);
    let shape = editor.shape(&id).unwrap().clone();

    assert_eq!(editor.select_at(shape.x(), shape.y()), Some(id.as_str()));
    assert_eq!(editor.selected(), Some(id.as_str()));

    // Edges are inclusive
    let far_corner = (shape.x() + shape.width(), shape.y() + shape.height());
    editor.clear_selection();
    assert_eq!(editor.select_at(far_corner.0, far_corner.1), Some(id.as_str()));

    assert_eq!(editor.select_at(-10.0, -10.0), None);
    assert_eq!(editor.selected(), None);
}

#[test]
fn select_prefers_topmost_of_overlapping_shapes() {
    // On a 150x100 surface both kinds overlap around (50, 50)
    let mut editor = create_test_editor(150, 100);
    let square = editor.add(ShapeKind::Square);
    let rectangle = editor.add(ShapeKind::Rectangle);

    assert_eq!(editor.select_at(50.0, 50.0), Some(rectangle.as_str()));

    let top_square = editor.add(ShapeKind::Square);
    assert_ne!(square, top_square);
    assert_eq!(editor.select_at(50.0, 50.0), Some(top_square.as_str()));
}

#[test]
fn select_maps_through_viewport() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());

    editor.set_viewport(Viewport {
        left: 20.0,
        top: 40.0,
        rendered_width: 400.0,
        rendered_height: 300.0,
    });
    assert_eq!(
        editor.select_at(20.0 + cx / 2.0, 40.0 + cy / 2.0),
        Some(id.as_str())
    );
}

#[test]
fn move_shifts_only_position_by_one_step() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Rectangle);
    let before = editor.shape(&id).unwrap().clone();
    let (cx, cy) = center(&before);
    editor.select_at(cx, cy);

    let expectations = [
        (Direction::Right, (10.0, 0.0)),
        (Direction::Down, (10.0, 10.0)),
        (Direction::Left, (0.0, 10.0)),
        (Direction::Up, (0.0, 0.0)),
    ];
    for (direction, (dx, dy)) in expectations {
        assert!(editor.move_selected(direction));
        let after = editor.shape(&id).unwrap();
        assert_eq!(after.x(), before.x() + dx);
        assert_eq!(after.y(), before.y() + dy);
        assert_eq!(after.id(), before.id());
        assert_eq!(after.kind(), before.kind());
        assert_eq!((after.width(), after.height()), (before.width(), before.height()));
    }
    assert_eq!(MOVE_STEP, 10.0);
}

#[test]
fn move_keeps_collection_order() {
    let mut editor = create_test_editor(800, 600);
    let first = editor.add(ShapeKind::Square);
    editor.add(ShapeKind::Square);
    editor.add(ShapeKind::Square);

    let (cx, cy) = center(editor.shapes().last().unwrap());
    editor.select_at(cx, cy);
    let selected = editor.selected().unwrap().to_string();
    editor.move_selected(Direction::Down);

    assert_eq!(editor.shapes()[0].id(), first);
    assert_eq!(editor.shapes()[2].id(), selected);
}

#[test]
fn move_may_leave_the_surface() {
    let mut editor = create_test_editor(100, 100);
    let id = editor.add(ShapeKind::Square);
    editor.select_at(50.0, 50.0);

    for _ in 0..3 {
        editor.move_selected(Direction::Left);
    }
    assert_eq!(editor.shape(&id).unwrap().x(), -30.0);
}

#[test]
fn move_without_selection_is_a_no_op() {
    let mut editor = create_test_editor(800, 600);
    editor.add(ShapeKind::Square);
    editor.add(ShapeKind::Rectangle);
    let before = editor.shapes().to_vec();

    assert!(!editor.move_selected(Direction::Up));
    assert!(!editor.on_key(Key::ArrowRight));
    assert_eq!(editor.shapes(), before.as_slice());
    assert_eq!(editor.selected(), None);
}

#[test]
fn unrecognized_key_is_a_no_op() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());
    editor.select_at(cx, cy);
    let before = editor.shapes().to_vec();

    assert!(!editor.on_key(Key::from_name("PageDown")));
    assert_eq!(editor.shapes(), before.as_slice());
    assert_eq!(editor.selected(), Some(id.as_str()));
}

#[test]
fn remove_deletes_exactly_the_selected_shape() {
    let mut editor = create_test_editor(800, 600);
    let a = editor.add(ShapeKind::Square);
    let b = editor.add(ShapeKind::Rectangle);
    let c = editor.add(ShapeKind::Square);

    let (cx, cy) = center(editor.shape(&c).unwrap());
    editor.select_at(cx, cy);
    assert!(editor.can_remove());

    let removed = editor.remove().unwrap();
    assert_eq!(removed.id(), c);
    assert_eq!(editor.selected(), None);
    assert!(!editor.can_remove());

    let remaining: Vec<_> = editor.shapes().iter().map(|s| s.id().to_string()).collect();
    assert_eq!(remaining, vec![a, b]);
}

#[test]
fn remove_without_selection_is_a_no_op() {
    let mut editor = create_test_editor(800, 600);
    editor.add(ShapeKind::Square);
    let before = editor.shapes().to_vec();

    assert!(editor.remove().is_none());
    assert_eq!(editor.shapes(), before.as_slice());
}

#[test]
fn delete_and_escape_keys() {
    let mut editor = create_test_editor(800, 600);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());

    editor.select_at(cx, cy);
    assert!(editor.on_key(Key::Escape));
    assert_eq!(editor.selected(), None);
    assert!(!editor.on_key(Key::Escape));

    editor.select_at(cx, cy);
    assert!(editor.on_key(Key::Delete));
    assert!(editor.shapes().is_empty());
    assert!(!editor.on_key(Key::Backspace));
}

#[test]
fn end_to_end_square_lifecycle() {
    let mut editor = ShapeEditor::new(800, 600);
    assert!(editor.shapes().is_empty());

    let id = editor.add(ShapeKind::Square);
    let shape = editor.shape(&id).unwrap().clone();
    assert_eq!((shape.width(), shape.height()), (100.0, 100.0));
    assert!((0.0..=700.0).contains(&shape.x()));
    assert!((0.0..=500.0).contains(&shape.y()));

    assert_eq!(
        editor.select_at(shape.x() + 50.0, shape.y() + 50.0),
        Some(id.as_str())
    );
    assert!(editor.on_key(Key::from_name("ArrowRight")));
    assert_eq!(editor.shape(&id).unwrap().x(), shape.x() + 10.0);

    assert!(editor.remove().is_some());
    assert!(editor.shapes().is_empty());
    assert_eq!(editor.selected(), None);
}

#[test]
fn render_fills_shapes_and_outlines_selection() {
    let mut editor = create_test_editor(400, 300);
    let id = editor.add(ShapeKind::Square);
    let shape = editor.shape(&id).unwrap().clone();
    let (cx, cy) = center(&shape);
    let left_edge = (shape.x() as i32, cy as i32);

    assert!(is_translucent_red_over_white(
        editor.pixel(cx as i32, cy as i32).unwrap()
    ));
    assert!(is_translucent_red_over_white(
        editor.pixel(left_edge.0, left_edge.1).unwrap()
    ));

    editor.select_at(cx, cy);
    assert_eq!(editor.pixel(left_edge.0, left_edge.1), Some(OUTLINE_PIXEL));
    assert!(is_translucent_red_over_white(
        editor.pixel(cx as i32, cy as i32).unwrap()
    ));
}

#[test]
fn moving_leaves_no_ghost() {
    let mut editor = create_test_editor(400, 300);
    let id = editor.add(ShapeKind::Square);
    let shape = editor.shape(&id).unwrap().clone();
    let (cx, cy) = center(&shape);
    editor.select_at(cx, cy);

    for _ in 0..2 {
        editor.move_selected(Direction::Right);
    }

    // The strip the box slid off of is back to the base image
    let vacated = (shape.x() as i32 + 5, cy as i32);
    assert_eq!(editor.pixel(vacated.0, vacated.1), Some(WHITE_PIXEL));
}

#[test]
fn removing_restores_the_base_image() {
    let mut editor = create_test_editor(400, 300);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());
    editor.select_at(cx, cy);
    editor.remove();

    assert_eq!(editor.pixel(cx as i32, cy as i32), Some(WHITE_PIXEL));
}

#[test]
fn overlapping_fills_accumulate_in_order() {
    let mut editor = create_test_editor(100, 100);
    editor.add(ShapeKind::Square);
    editor.add(ShapeKind::Square);

    // Two 50% red layers over white leave a quarter of the green channel
    let pixel = editor.pixel(50, 50).unwrap();
    assert_eq!(pixel[0], 255);
    assert!((62..=66).contains(&pixel[1]), "{pixel:?}");
}

#[test]
fn shapes_added_while_loading_appear_when_load_completes() {
    let mut editor = ShapeEditor::new(200, 200).with_placement(Placement::new(9));
    let ticket = editor.begin_load();
    assert!(!editor.is_ready());

    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());
    assert_eq!(editor.pixel(cx as i32, cy as i32), Some([0, 0, 0, 0]));

    let base = BaseImage::decode(&solid_png_uri(4, 4, WHITE)).unwrap();
    assert!(editor.finish_load(ticket, base));
    assert!(is_translucent_red_over_white(
        editor.pixel(cx as i32, cy as i32).unwrap()
    ));
}

#[test]
fn stale_base_image_is_discarded() {
    let mut editor = create_test_editor(200, 200);
    let older = editor.begin_load();
    let newer = editor.begin_load();

    let red = BaseImage::decode(&solid_png_uri(4, 4, RED)).unwrap();
    assert!(!editor.finish_load(older, red));

    let white = BaseImage::decode(&solid_png_uri(4, 4, WHITE)).unwrap();
    assert!(editor.finish_load(newer, white));
    assert_eq!(editor.pixel(100, 100), Some(WHITE_PIXEL));
}

#[test]
fn undecodable_base_keeps_previous_one() {
    let mut editor = create_test_editor(200, 200);
    assert!(editor.load(&DataUri::png(b"nope".to_vec())).is_err());
    assert!(editor.is_ready());
    assert_eq!(editor.pixel(100, 100), Some(WHITE_PIXEL));
}

#[test]
fn snapshot_encodes_rendered_surface() {
    let mut editor = create_test_editor(300, 200);
    let id = editor.add(ShapeKind::Rectangle);
    let (cx, cy) = center(editor.shape(&id).unwrap());

    let mut image = BaseImage::decode(&editor.snapshot().unwrap()).unwrap();
    assert_eq!((image.width(), image.height()), (300, 200));
    assert!(is_translucent_red_over_white(
        image.pixel(cx as i32, cy as i32).unwrap()
    ));
}

#[test]
fn custom_style_is_used_for_rendering() {
    let style = ShapeStyle {
        fill: crate::draw::BLUE,
        outline: crate::draw::GREEN,
        outline_width: 4.0,
    };
    let mut editor = create_test_editor(300, 200).with_style(style);
    let id = editor.add(ShapeKind::Square);
    let (cx, cy) = center(editor.shape(&id).unwrap());

    assert_eq!(editor.pixel(cx as i32, cy as i32), Some([0, 0, 255, 255]));
}
