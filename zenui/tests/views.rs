use zenui::ViewError;
use zenui::views::{
    Column, ColumnView, ListView, ListViewState, Row, RowView, RowViewState, Scrolling,
};
use zenui::zendom::{
    Align, AutomaticSize, Element, FillDirection, Kind, ListLayout, Padding, Separators,
    SizeConstraint, UDim, UDim2, Vec2, find_element, layout,
};

const EPSILON: f32 = 1e-4;

fn approx_udim(a: UDim, b: UDim) -> bool {
    (a.scale - b.scale).abs() < EPSILON && (a.offset - b.offset).abs() < EPSILON
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn list_of(element: &Element) -> ListLayout {
    element
        .find_modifier(|kind| match kind {
            Kind::ListLayout(list) => Some(*list),
            _ => None,
        })
        .unwrap_or_else(|| panic!("'{}' has no list layout", element.id))
}

fn get<'a>(root: &'a Element, id: &str) -> &'a Element {
    find_element(root, id).unwrap_or_else(|| panic!("no element {id}"))
}

fn square(id: &str, side: f32) -> Element {
    Element::frame().id(id).size(UDim2::from_offset(side, side))
}

// ============================================================================
// ColumnView
// ============================================================================

#[test]
fn test_columns_share_width() {
    let view = ColumnView::new("cv")
        .column_spacing(UDim::from_offset(10.0))
        .column(Column::new())
        .column(Column::new())
        .column(Column::new())
        .build()
        .unwrap();

    for index in 0..3 {
        let column = get(&view, &format!("cv-column-{index}"));
        assert!(approx_udim(column.size.x, UDim::new(1.0 / 3.0, -10.0)));
        assert_eq!(column.size.y, UDim::FULL);
        assert_eq!(column.layout_order, index);
        assert_eq!(column.automatic_size, AutomaticSize::Y);
    }
}

#[test]
fn test_fixed_column_leaves_rest_to_auto() {
    let view = ColumnView::new("cv")
        .column_spacing(UDim::from_offset(10.0))
        .column(Column::new().width(UDim::from_offset(100.0)))
        .column(Column::new())
        .build()
        .unwrap();

    assert_eq!(get(&view, "cv-column-0").size.x, UDim::from_offset(100.0));
    assert!(approx_udim(get(&view, "cv-column-1").size.x, UDim::new(1.0, -120.0)));
}

#[test]
fn test_between_separators() {
    let view = ColumnView::new("cv")
        .column_spacing(UDim::from_offset(10.0))
        .separators(Separators::Between)
        .column(Column::new())
        .column(Column::new())
        .build()
        .unwrap();

    assert!(approx_udim(get(&view, "cv-column-0").size.x, UDim::new(0.5, -5.0)));
}

#[test]
fn test_column_default_alignment() {
    let view = ColumnView::new("cv")
        .column(Column::new())
        .column(Column::new())
        .column(Column::new())
        .build()
        .unwrap();

    let aligns: Vec<Align> = (0..3)
        .map(|i| list_of(get(&view, &format!("cv-column-{i}"))).horizontal_alignment)
        .collect();
    assert_eq!(aligns, [Align::Start, Align::Center, Align::End]);
}

#[test]
fn test_column_alignment_override_and_key() {
    let view = ColumnView::new("cv")
        .column(
            Column::new()
                .key("left")
                .horizontal_alignment(Align::Center),
        )
        .column(Column::new().vertical_alignment(Align::End))
        .build()
        .unwrap();

    let left = list_of(get(&view, "left"));
    assert_eq!(left.horizontal_alignment, Align::Center);
    assert_eq!(left.fill_direction, FillDirection::Vertical);

    let right = list_of(get(&view, "cv-column-1"));
    assert_eq!(right.horizontal_alignment, Align::End);
    assert_eq!(right.vertical_alignment, Align::End);
}

#[test]
fn test_column_view_ignores_other_children() {
    let view = ColumnView::new("cv")
        .child(square("stray", 10.0))
        .column(Column::new())
        .build()
        .unwrap();

    assert!(find_element(&view, "stray").is_none());
    assert_eq!(get(&view, "cv-column-0").size.x, UDim::FULL);
}

#[test]
fn test_column_view_container() {
    let view = ColumnView::new("cv")
        .column_spacing(UDim::from_offset(4.0))
        .padding(Padding::all(UDim::from_offset(2.0)))
        .build()
        .unwrap();

    assert_eq!(view.size, UDim2::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(view.automatic_size, AutomaticSize::Y);

    let list = list_of(&view);
    assert_eq!(list.fill_direction, FillDirection::Horizontal);
    assert_eq!(list.padding, UDim::from_offset(4.0));
    assert!(find_element(&view, "cv-padding").is_some());
}

#[test]
fn test_column_view_rejects_non_finite_width() {
    let result = ColumnView::new("cv")
        .column(Column::new().width(UDim::new(f32::NAN, 0.0)))
        .build();

    assert_eq!(
        result.unwrap_err(),
        ViewError::NonFinite {
            view: "ColumnView",
            field: "column 0 width".to_string(),
        }
    );
}

#[test]
fn test_column_view_layout() {
    let view = ColumnView::new("cv")
        .size(UDim2::from_offset(600.0, 100.0))
        .column_spacing(UDim::from_offset(10.0))
        .column(Column::new().child(square("a", 20.0)))
        .column(Column::new().child(square("b", 20.0)))
        .column(Column::new().child(square("c", 20.0)))
        .build()
        .unwrap();
    let result = layout(&view, Vec2::new(1000.0, 500.0));

    let columns: Vec<_> = (0..3)
        .map(|i| *result.get(&format!("cv-column-{i}")).unwrap())
        .collect();
    assert!(approx(columns[0].x, 0.0));
    assert!(approx(columns[1].x, 200.0));
    assert!(approx(columns[2].x, 400.0));
    assert!(columns.iter().all(|c| approx(c.width, 190.0)));

    assert!(approx(result.get("a").unwrap().x, 0.0));
    assert!(approx(result.get("b").unwrap().x, 285.0));
    assert!(approx(result.get("c").unwrap().x, 570.0));
}

// ============================================================================
// RowView
// ============================================================================

#[test]
fn test_rows_share_height() {
    let view = RowView::new("rv")
        .row(Row::new().height(UDim::from_offset(100.0)))
        .row(Row::new())
        .build(&RowViewState::new())
        .unwrap();

    let first = get(&view, "rv-row-0");
    assert_eq!(
        first.size,
        UDim2::from_udims(UDim::ZERO, UDim::from_offset(100.0))
    );
    assert_eq!(first.automatic_size, AutomaticSize::X);

    let second = get(&view, "rv-row-1");
    assert!(approx_udim(second.size.y, UDim::new(1.0, -100.0)));
    assert_eq!(second.layout_order, 1);
}

#[test]
fn test_row_default_alignment() {
    let view = RowView::new("rv")
        .row(Row::new())
        .row(Row::new())
        .row(Row::new().vertical_alignment(Align::Start))
        .build(&RowViewState::new())
        .unwrap();

    let aligns: Vec<Align> = (0..3)
        .map(|i| list_of(get(&view, &format!("rv-row-{i}"))).vertical_alignment)
        .collect();
    assert_eq!(aligns, [Align::Start, Align::Center, Align::Start]);
}

#[test]
fn test_automatic_height_row() {
    let view = RowView::new("rv")
        .row_width(UDim::FULL)
        .row(Row::new().automatic_height(true))
        .build(&RowViewState::new())
        .unwrap();

    let row = get(&view, "rv-row-0");
    assert_eq!(row.size, UDim2::from_udims(UDim::FULL, UDim::ZERO));
    assert_eq!(row.automatic_size, AutomaticSize::Y);
}

#[test]
fn test_row_height_constraint() {
    let view = RowView::new("rv")
        .row(Row::new().key("top").min_height(20.0).max_height(80.0))
        .build(&RowViewState::new())
        .unwrap();

    let constraint = get(&view, "top-constraint");
    assert_eq!(
        constraint.kind,
        Kind::SizeConstraint(SizeConstraint {
            min: Vec2::new(0.0, 20.0),
            max: Vec2::new(f32::INFINITY, 80.0),
        })
    );
}

#[test]
fn test_row_view_container_defaults() {
    let view = RowView::new("rv").build(&RowViewState::new()).unwrap();

    assert_eq!(view.kind, Kind::Frame);
    assert_eq!(view.automatic_size, AutomaticSize::X);
    assert_eq!(list_of(&view).vertical_alignment, Align::Center);
    assert!(find_element(&view, "rv-constraint").is_none());

    let fixed = RowView::new("rv")
        .row_width(UDim::from_offset(50.0))
        .build(&RowViewState::new())
        .unwrap();
    assert_eq!(fixed.automatic_size, AutomaticSize::None);
}

#[test]
fn test_row_view_ignores_other_children() {
    let view = RowView::new("rv")
        .child(square("stray", 10.0))
        .row(Row::new())
        .build(&RowViewState::new())
        .unwrap();

    assert!(find_element(&view, "stray").is_none());
    assert_eq!(get(&view, "rv-row-0").size.y, UDim::FULL);
}

#[test]
fn test_row_view_rejects_non_finite_height() {
    let result = RowView::new("rv")
        .row(Row::new())
        .row(Row::new().height(UDim::from_offset(f32::INFINITY)))
        .build(&RowViewState::new());

    assert_eq!(
        result.unwrap_err(),
        ViewError::NonFinite {
            view: "RowView",
            field: "row 1 height".to_string(),
        }
    );
}

#[test]
fn test_scrolling_canvas_follows_content() {
    let build = |state: &RowViewState| {
        RowView::new("rv")
            .size(UDim2::from_offset(200.0, 300.0))
            .row_width(UDim::FULL)
            .scrolling(Scrolling::enabled())
            .row(Row::new().height(UDim::from_offset(100.0)))
            .row(Row::new().height(UDim::from_offset(250.0)))
            .build(state)
            .unwrap()
    };

    let mut state = RowViewState::new();
    let first = build(&state);
    assert_eq!(list_of(&first).vertical_alignment, Align::Start);

    let result = layout(&first, Vec2::new(800.0, 600.0));
    assert!(state.sync("rv", &result));
    assert_eq!(state.content_size(), Vec2::new(200.0, 350.0));
    assert!(!state.sync("rv", &result));

    let second = build(&state);
    match &second.kind {
        Kind::ScrollingFrame(frame) => {
            assert_eq!(frame.canvas_size, UDim2::from_offset(200.0, 350.0));
            assert_eq!(frame.scroll_bar_thickness, 5.0);
        }
        other => panic!("expected a scrolling frame, got {other:?}"),
    }
}

// ============================================================================
// ListView
// ============================================================================

#[test]
fn test_list_view_drops_duplicate_layouts() {
    let view = ListView::new("lv")
        .child(Element::list_layout(ListLayout::new(FillDirection::Horizontal)).id("dup"))
        .child(square("a", 10.0))
        .build(&ListViewState::new());

    assert!(find_element(&view, "dup").is_none());
    assert!(find_element(&view, "a").is_some());
    assert_eq!(list_of(&view).fill_direction, FillDirection::Vertical);
}

#[test]
fn test_list_view_drops_padding_only_when_padded() {
    let padded = ListView::new("lv")
        .padding(Padding::all(UDim::from_offset(5.0)))
        .child(Element::padding(Padding::ZERO).id("extra"))
        .build(&ListViewState::new());
    assert!(find_element(&padded, "extra").is_none());
    assert!(find_element(&padded, "lv-padding").is_some());

    let unpadded = ListView::new("lv")
        .child(Element::padding(Padding::ZERO).id("extra"))
        .build(&ListViewState::new());
    assert!(find_element(&unpadded, "extra").is_some());
}

#[test]
fn test_list_view_item_padding() {
    let view = ListView::new("lv")
        .item_padding(6.0_f32)
        .build(&ListViewState::new());
    assert_eq!(list_of(&view).padding, UDim::from_offset(6.0));

    let view = ListView::new("lv")
        .item_padding(UDim::from_scale(0.1))
        .build(&ListViewState::new());
    assert_eq!(list_of(&view).padding, UDim::from_scale(0.1));
}

#[test]
fn test_list_view_automatic_size() {
    let build = |state: &ListViewState| {
        ListView::new("lv")
            .automatic_size(true)
            .item_padding(4.0_f32)
            .padding(Padding::all(UDim::from_offset(5.0)))
            .child(
                Element::frame()
                    .id("a")
                    .size(UDim2::from_offset(50.0, 20.0)),
            )
            .child(
                Element::frame()
                    .id("b")
                    .size(UDim2::from_offset(50.0, 30.0)),
            )
            .build(state)
    };

    let mut state = ListViewState::new();
    let first = build(&state);
    assert_eq!(first.size.y, UDim::from_offset(10.0));

    let result = layout(&first, Vec2::new(800.0, 600.0));
    assert!(state.sync("lv", &result));
    assert_eq!(state.content_size(), Vec2::new(50.0, 54.0));

    let second = build(&state);
    assert_eq!(
        second.size,
        UDim2::from_udims(UDim::FULL, UDim::from_offset(64.0))
    );
}

#[test]
fn test_list_view_horizontal_automatic_size() {
    let mut state = ListViewState::new();
    state.on_content_size(Vec2::new(120.0, 30.0));

    let view = ListView::new("lv")
        .fill_direction(FillDirection::Horizontal)
        .automatic_size(true)
        .build(&state);

    assert_eq!(
        view.size,
        UDim2::from_udims(UDim::from_offset(120.0), UDim::FULL)
    );
}
