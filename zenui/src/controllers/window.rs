//! WindowController - a draggable window with an optional titlebar.

use std::fmt;
use std::rc::Rc;

use zendom::{Element, Padding, UDim, UDim2, Vec2};

/// Which part of a window starts a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// The titlebar if there is one, otherwise the whole window.
    #[default]
    Contextual,
    /// Only the titlebar. Without one the window cannot be dragged.
    Titlebar,
    /// The whole window, titlebar or not.
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Window,
    Titlebar,
}

/// Distance from each screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapMargin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl SnapMargin {
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }
}

/// Edge snapping of a dragged window.
///
/// A window edge closer to the screen edge than `margin + threshold` snaps to `margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    pub enabled: bool,
    /// Snap against the full screen instead of the area below `gui_inset`.
    pub ignores_offset: bool,
    pub margin: SnapMargin,
    pub threshold: SnapMargin,
    /// Top-left area reserved by the host (e.g. a top bar).
    pub gui_inset: Vec2,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignores_offset: false,
            margin: SnapMargin::default(),
            threshold: SnapMargin::default(),
            gui_inset: Vec2::ZERO,
        }
    }
}

impl SnapConfig {
    /// Snap `position` of a window of `size` on a screen of `screen` size.
    pub fn apply(&self, position: Vec2, size: Vec2, screen: Vec2) -> Vec2 {
        if !self.enabled {
            return position;
        }

        let origin = if self.ignores_offset {
            Vec2::ZERO
        } else {
            self.gui_inset
        };
        let (m, t) = (self.margin, self.threshold);

        let x = snap_axis(
            position.x,
            size.x,
            origin.x + m.left,
            screen.x - m.right,
            (t.left, t.right),
        );
        let y = snap_axis(
            position.y,
            size.y,
            origin.y + m.top,
            screen.y - m.bottom,
            (t.top, t.bottom),
        );
        Vec2::new(x, y)
    }
}

fn snap_axis(start: f32, len: f32, low: f32, high: f32, (low_t, high_t): (f32, f32)) -> f32 {
    if start < low + low_t {
        low
    } else if start + len > high - high_t {
        high - len
    } else {
        start
    }
}

/// The part of a window that drags it when the drag mode allows.
#[derive(Debug, Clone)]
pub struct Titlebar {
    height: f32,
    children: Vec<Element>,
}

impl Default for Titlebar {
    fn default() -> Self {
        Self {
            height: 24.0,
            children: Vec::new(),
        }
    }
}

impl Titlebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    fn build(self, id: String) -> Element {
        Element::frame()
            .id(id)
            .size(UDim2::from_udims(UDim::FULL, UDim::from_offset(self.height)))
            .children(self.children)
    }
}

#[derive(Debug, Clone)]
pub enum WindowChild {
    Titlebar(Titlebar),
    Other(Element),
}

impl From<Titlebar> for WindowChild {
    fn from(titlebar: Titlebar) -> Self {
        Self::Titlebar(titlebar)
    }
}

impl From<Element> for WindowChild {
    fn from(element: Element) -> Self {
        Self::Other(element)
    }
}

#[derive(Clone, Default)]
struct DragHandlers {
    drag_began: Option<Rc<dyn Fn(Vec2)>>,
    drag_ended: Option<Rc<dyn Fn(Vec2)>>,
    position_changed: Option<Rc<dyn Fn(UDim2)>>,
}

/// A window controller builder.
#[derive(Clone)]
pub struct WindowController {
    id: String,
    size: UDim2,
    padding: Padding,
    draggable: bool,
    drag_mode: DragMode,
    snap: SnapConfig,
    children: Vec<WindowChild>,
    handlers: DragHandlers,
}

impl fmt::Debug for WindowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowController")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("draggable", &self.draggable)
            .field("drag_mode", &self.drag_mode)
            .field("snap", &self.snap)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl WindowController {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: UDim2::from_offset(800.0, 600.0),
            padding: Padding::ZERO,
            draggable: true,
            drag_mode: DragMode::Contextual,
            snap: SnapConfig::default(),
            children: Vec::new(),
            handlers: DragHandlers::default(),
        }
    }

    pub fn size(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn drag_mode(mut self, mode: DragMode) -> Self {
        self.drag_mode = mode;
        self
    }

    pub fn snap(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    pub fn child(mut self, child: impl Into<WindowChild>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn on_drag_began(mut self, handler: impl Fn(Vec2) + 'static) -> Self {
        self.handlers.drag_began = Some(Rc::new(handler));
        self
    }

    pub fn on_drag_ended(mut self, handler: impl Fn(Vec2) + 'static) -> Self {
        self.handlers.drag_ended = Some(Rc::new(handler));
        self
    }

    pub fn on_position_changed(mut self, handler: impl Fn(UDim2) + 'static) -> Self {
        self.handlers.position_changed = Some(Rc::new(handler));
        self
    }

    pub fn has_titlebar(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, WindowChild::Titlebar(_)))
    }

    /// What starts a drag of this window, if anything.
    pub fn drag_target(&self) -> Option<DragTarget> {
        if !self.draggable {
            return None;
        }

        match (self.drag_mode, self.has_titlebar()) {
            (DragMode::Window, _) | (DragMode::Contextual, false) => Some(DragTarget::Window),
            (DragMode::Contextual | DragMode::Titlebar, true) => Some(DragTarget::Titlebar),
            (DragMode::Titlebar, false) => None,
        }
    }

    /// Start tracking drags of a window currently at `position`.
    pub fn drag(&self, position: Vec2) -> WindowDrag {
        WindowDrag {
            target: self.drag_target(),
            snap: self.snap,
            position,
            start: None,
            handlers: self.handlers.clone(),
        }
    }

    /// Id of the generated titlebar frame.
    pub fn titlebar_id(&self) -> String {
        format!("{}-titlebar", self.id)
    }

    /// Build the window element.
    pub fn build(self) -> Element {
        let titlebar_id = self.titlebar_id();
        let children = self.children.into_iter().map(|child| match child {
            WindowChild::Titlebar(titlebar) => titlebar.build(titlebar_id.clone()),
            WindowChild::Other(element) => element,
        });

        Element::view()
            .id(&self.id)
            .size(self.size)
            .child(Element::padding(self.padding).id(format!("{}-padding", self.id)))
            .children(children)
    }
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer: Vec2,
    position: Vec2,
}

/// One window's drag gesture state.
pub struct WindowDrag {
    target: Option<DragTarget>,
    snap: SnapConfig,
    position: Vec2,
    start: Option<DragStart>,
    handlers: DragHandlers,
}

impl fmt::Debug for WindowDrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowDrag")
            .field("target", &self.target)
            .field("position", &self.position)
            .field("dragging", &self.start.is_some())
            .finish_non_exhaustive()
    }
}

impl WindowDrag {
    pub fn target(&self) -> Option<DragTarget> {
        self.target
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer went down on the drag target. Returns false if the window cannot be dragged.
    pub fn begin(&mut self, pointer: Vec2) -> bool {
        if self.target.is_none() {
            return false;
        }

        self.start = Some(DragStart {
            pointer,
            position: self.position,
        });
        if let Some(handler) = &self.handlers.drag_began {
            handler(pointer);
        }
        true
    }

    /// Pointer moved. Returns the new (snapped) window position.
    pub fn drag_to(&mut self, pointer: Vec2, window_size: Vec2, screen: Vec2) -> Vec2 {
        let Some(start) = self.start else {
            return self.position;
        };

        let raw = start.position + (pointer - start.pointer);
        self.position = self.snap.apply(raw, window_size, screen);
        self.position
    }

    /// Pointer released. Returns the final position if a drag was in progress.
    pub fn end(&mut self, pointer: Vec2) -> Option<Vec2> {
        self.start.take()?;

        log::debug!("[window] drag ended at {:?}", self.position);
        if let Some(handler) = &self.handlers.drag_ended {
            handler(pointer);
        }
        if let Some(handler) = &self.handlers.position_changed {
            handler(UDim2::from_offset(self.position.x, self.position.y));
        }
        Some(self.position)
    }
}
