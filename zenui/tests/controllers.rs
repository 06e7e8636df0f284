use std::cell::{Cell, RefCell};
use std::rc::Rc;

use zenui::ControllerError;
use zenui::controllers::{
    DragMode, DragTarget, PageController, PageState, SnapConfig, SnapMargin, SortableTab, TabClick,
    TabController, TabRequest, Titlebar, WindowController,
};
use zenui::zendom::{Element, FillDirection, Kind, UDim, UDim2, Vec2, find_element, layout};

fn pages() -> Vec<Element> {
    (0..3)
        .map(|i| Element::view().id(format!("page-{i}")).layout_order(i))
        .collect()
}

// ============================================================================
// PageController
// ============================================================================

#[test]
fn test_page_controller_builds_page_layout() {
    let controller = PageController::new("pc")
        .pages(pages())
        .selected_page_index(1);
    let mut state = PageState::new(&controller);
    state.did_mount(&controller).unwrap();

    let element = controller.build(&state);
    assert_eq!(element.z_index, 2);
    assert!(element.clips_descendants);

    let pages = find_element(&element, "pc-pages").unwrap();
    match &pages.kind {
        Kind::PageLayout(page) => {
            assert_eq!(page.current_index, 1);
            assert!(!page.animated);
        }
        other => panic!("expected a page layout, got {other:?}"),
    }
}

#[test]
fn test_page_controller_shows_one_page() {
    let controller = PageController::new("pc")
        .size(UDim2::from_offset(300.0, 200.0))
        .pages(pages())
        .selected_page_index(2);
    let state = PageState::new(&controller);
    let result = layout(&controller.build(&state), Vec2::new(800.0, 600.0));

    assert!(result.get("page-0").is_none());
    assert!(result.get("page-1").is_none());
    assert_eq!(
        result.get("page-2").unwrap().size(),
        Vec2::new(300.0, 200.0)
    );
}

#[test]
fn test_page_change_fires_callback_once() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&changes);
    let controller = PageController::new("pc")
        .pages(pages())
        .on_page_changed(move |index| recorded.borrow_mut().push(index));

    let mut state = PageState::new(&controller);
    state.did_mount(&controller).unwrap();
    assert_eq!(state.page_index(), 0);

    let controller = controller.selected_page_index(2);
    assert_eq!(state.did_update(&controller), Ok(true));
    assert_eq!(state.page_index(), 2);

    assert_eq!(state.did_update(&controller), Ok(false));
    assert_eq!(*changes.borrow(), vec![2]);
}

#[test]
fn test_page_out_of_range() {
    let controller = PageController::new("pc")
        .pages(pages())
        .selected_page_index(5);
    let mut state = PageState::default();

    assert_eq!(
        state.did_mount(&controller),
        Err(ControllerError::PageOutOfRange { index: 5, count: 3 })
    );
    assert_eq!(
        state.did_update(&controller),
        Err(ControllerError::PageOutOfRange { index: 5, count: 3 })
    );
    assert_eq!(state.page_index(), 0);
}

// ============================================================================
// TabController
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Tab {
    name: &'static str,
    index: i32,
}

impl SortableTab for Tab {
    fn tab_index(&self) -> i32 {
        self.index
    }
}

fn tab(name: &'static str, index: i32) -> Tab {
    Tab { name, index }
}

type Rendered = Rc<RefCell<Vec<(&'static str, i32, bool)>>>;

fn render_into(rendered: Rendered) -> impl Fn(TabRequest<'_, Tab>) -> Element {
    move |request: TabRequest<'_, Tab>| {
        rendered.borrow_mut().push((
            request.tab_item.name,
            request.layout_order,
            request.is_active,
        ));
        Element::frame()
            .id(format!("tab-{}", request.tab_item.name))
            .layout_order(request.layout_order)
    }
}

#[test]
fn test_tab_controller_without_children() {
    let controller = TabController::<Tab>::new("tabs", |_| Element::frame(), |_, _| {});
    assert!(controller.build().is_none());
}

#[test]
fn test_tabs_render_with_active_state() {
    let rendered: Rendered = Rc::default();
    let element = TabController::new("tabs", render_into(Rc::clone(&rendered)), |_, _| {})
        .tab(tab("home", 3))
        .tab(tab("settings", 1))
        .selected_tab_index(1)
        .build()
        .unwrap();

    assert_eq!(
        *rendered.borrow(),
        vec![("home", 3, false), ("settings", 1, true)]
    );
    assert_eq!(
        find_element(&element, "tab-settings").unwrap().layout_order,
        1
    );
}

#[test]
fn test_tab_click_reports_tab_index() {
    let clicks: Rc<RefCell<Vec<TabClick<Tab>>>> = Rc::default();
    let captured = Rc::clone(&clicks);
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&clicked);

    TabController::new(
        "tabs",
        move |request: TabRequest<'_, Tab>| {
            captured.borrow_mut().push(request.click.clone());
            Element::frame()
        },
        move |index, item: &Tab| recorded.borrow_mut().push((index, item.name)),
    )
    .other(Element::frame().id("header"))
    .tab(tab("a", 0))
    .other(Element::frame().id("footer"))
    .tab(tab("b", 1))
    .build()
    .unwrap();

    let clicks = clicks.borrow();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[1].index(), 1);

    clicks[1].invoke();
    clicks[0].invoke();
    assert_eq!(*clicked.borrow(), vec![(1, "b"), (0, "a")]);
}

#[test]
fn test_default_tab_container() {
    let rendered: Rendered = Rc::default();
    let element = TabController::new("tabs", render_into(Rc::clone(&rendered)), |_, _| {})
        .tab_padding(UDim::from_offset(4.0))
        .other(Element::frame().id("extra"))
        .tab(tab("a", 0))
        .build()
        .unwrap();

    assert_eq!(element.id, "tabs");
    let layout = find_element(&element, "tabs-layout").unwrap();
    match &layout.kind {
        Kind::ListLayout(list) => {
            assert_eq!(list.fill_direction, FillDirection::Horizontal);
            assert_eq!(list.padding, UDim::from_offset(4.0));
        }
        other => panic!("expected a list layout, got {other:?}"),
    }

    let ids: Vec<&str> = element.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["tabs-layout", "extra", "tab-a"]);
}

#[test]
fn test_custom_tab_container() {
    let rendered: Rendered = Rc::default();
    let element = TabController::new("tabs", render_into(Rc::clone(&rendered)), |_, _| {})
        .tab_direction(FillDirection::Vertical)
        .other(Element::frame().id("extra"))
        .tab(tab("a", 0))
        .render_tab_container(|request| {
            Element::frame()
                .id(format!("{}-custom", request.controller.id()))
                .children(request.tabs)
                .children(request.other)
        })
        .build()
        .unwrap();

    assert_eq!(element.id, "tabs-custom");
    let ids: Vec<&str> = element.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["tab-a", "extra"]);
}

// ============================================================================
// WindowController
// ============================================================================

#[test]
fn test_drag_target() {
    let with_titlebar = || WindowController::new("w").child(Titlebar::new());
    let without = || WindowController::new("w");

    assert_eq!(with_titlebar().drag_target(), Some(DragTarget::Titlebar));
    assert_eq!(without().drag_target(), Some(DragTarget::Window));

    assert_eq!(
        with_titlebar().drag_mode(DragMode::Window).drag_target(),
        Some(DragTarget::Window)
    );
    assert_eq!(
        with_titlebar().drag_mode(DragMode::Titlebar).drag_target(),
        Some(DragTarget::Titlebar)
    );
    assert_eq!(without().drag_mode(DragMode::Titlebar).drag_target(), None);
    assert_eq!(with_titlebar().draggable(false).drag_target(), None);
}

#[test]
fn test_snap_to_edges() {
    let snap = SnapConfig {
        threshold: SnapMargin::symmetric(10.0, 10.0),
        ..Default::default()
    };
    let screen = Vec2::new(1000.0, 800.0);
    let size = Vec2::new(200.0, 100.0);

    assert_eq!(
        snap.apply(Vec2::new(5.0, 300.0), size, screen),
        Vec2::new(0.0, 300.0)
    );
    assert_eq!(
        snap.apply(Vec2::new(795.0, 300.0), size, screen),
        Vec2::new(800.0, 300.0)
    );
    assert_eq!(
        snap.apply(Vec2::new(500.0, 695.0), size, screen),
        Vec2::new(500.0, 700.0)
    );
    assert_eq!(
        snap.apply(Vec2::new(500.0, 300.0), size, screen),
        Vec2::new(500.0, 300.0)
    );
}

#[test]
fn test_snap_margin_and_inset() {
    let snap = SnapConfig {
        margin: SnapMargin::symmetric(8.0, 8.0),
        threshold: SnapMargin::symmetric(10.0, 10.0),
        gui_inset: Vec2::new(0.0, 36.0),
        ..Default::default()
    };
    let screen = Vec2::new(1000.0, 800.0);
    let size = Vec2::new(200.0, 100.0);

    assert_eq!(
        snap.apply(Vec2::new(12.0, 50.0), size, screen),
        Vec2::new(8.0, 44.0)
    );

    let ignoring = SnapConfig {
        ignores_offset: true,
        ..snap
    };
    assert_eq!(
        ignoring.apply(Vec2::new(12.0, 50.0), size, screen),
        Vec2::new(8.0, 50.0)
    );

    let disabled = SnapConfig {
        enabled: false,
        ..snap
    };
    assert_eq!(
        disabled.apply(Vec2::new(1.0, 1.0), size, screen),
        Vec2::new(1.0, 1.0)
    );
}

#[test]
fn test_window_drag_callbacks() {
    let began = Rc::new(Cell::new(None));
    let ended = Rc::new(Cell::new(None));
    let moved = Rc::new(Cell::new(None));
    let (b, e, m) = (Rc::clone(&began), Rc::clone(&ended), Rc::clone(&moved));

    let controller = WindowController::new("w")
        .on_drag_began(move |pointer| b.set(Some(pointer)))
        .on_drag_ended(move |pointer| e.set(Some(pointer)))
        .on_position_changed(move |position| m.set(Some(position)));

    let mut drag = controller.drag(Vec2::new(100.0, 100.0));
    assert!(!drag.is_dragging());
    assert!(drag.begin(Vec2::new(110.0, 110.0)));
    assert_eq!(began.get(), Some(Vec2::new(110.0, 110.0)));

    let screen = Vec2::new(1000.0, 800.0);
    let size = Vec2::new(200.0, 100.0);
    assert_eq!(
        drag.drag_to(Vec2::new(160.0, 130.0), size, screen),
        Vec2::new(150.0, 120.0)
    );
    assert!(drag.is_dragging());

    assert_eq!(
        drag.end(Vec2::new(160.0, 130.0)),
        Some(Vec2::new(150.0, 120.0))
    );
    assert_eq!(ended.get(), Some(Vec2::new(160.0, 130.0)));
    assert_eq!(moved.get(), Some(UDim2::from_offset(150.0, 120.0)));
    assert!(!drag.is_dragging());
    assert_eq!(drag.end(Vec2::ZERO), None);
}

#[test]
fn test_window_drag_snaps() {
    let controller = WindowController::new("w").snap(SnapConfig {
        threshold: SnapMargin::symmetric(20.0, 20.0),
        ..Default::default()
    });

    let mut drag = controller.drag(Vec2::new(100.0, 100.0));
    drag.begin(Vec2::ZERO);
    let position = drag.drag_to(
        Vec2::new(-90.0, 0.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(1000.0, 800.0),
    );
    assert_eq!(position, Vec2::new(0.0, 100.0));
}

#[test]
fn test_undraggable_window_ignores_pointer() {
    let controller = WindowController::new("w").drag_mode(DragMode::Titlebar);
    let mut drag = controller.drag(Vec2::new(10.0, 10.0));

    assert_eq!(drag.target(), None);
    assert!(!drag.begin(Vec2::ZERO));
    let position = drag.drag_to(
        Vec2::new(50.0, 50.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(position, Vec2::new(10.0, 10.0));
    assert_eq!(drag.end(Vec2::ZERO), None);
}

#[test]
fn test_window_build() {
    let window = WindowController::new("w")
        .child(
            Titlebar::new()
                .height(30.0)
                .child(Element::frame().id("title")),
        )
        .child(Element::frame().id("body"))
        .build();

    assert_eq!(window.size, UDim2::from_offset(800.0, 600.0));
    assert!(find_element(&window, "w-padding").is_some());
    assert!(find_element(&window, "body").is_some());

    let titlebar = find_element(&window, "w-titlebar").unwrap();
    assert_eq!(
        titlebar.size,
        UDim2::from_udims(UDim::FULL, UDim::from_offset(30.0))
    );
    assert!(find_element(titlebar, "title").is_some());

    let result = layout(&window, Vec2::new(1920.0, 1080.0));
    assert_eq!(
        result.get("w-titlebar").unwrap().size(),
        Vec2::new(800.0, 30.0)
    );
}
