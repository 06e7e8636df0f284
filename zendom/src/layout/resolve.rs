use std::collections::HashMap;

use super::Rect;
use crate::element::{Element, Kind, ListLayout, PageLayout, SizeConstraint};
use crate::text::measure_text;
use crate::types::{AutomaticSize, Insets, Padding, SortOrder, Vec2};

/// Rects of every laid-out element plus the content size of every list layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    content_sizes: HashMap<String, Vec2>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Measured content size of the list layout `id`.
    pub fn content_size(&self, id: &str) -> Option<Vec2> {
        self.content_sizes.get(id).copied()
    }

    pub fn content_sizes(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.content_sizes
            .iter()
            .map(|(id, size)| (id.as_str(), *size))
    }

    pub fn rects(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.rects.iter().map(|(id, rect)| (id.as_str(), rect))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Resolve `root` inside a viewport of the given size.
pub fn layout(root: &Element, viewport: Vec2) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, Rect::from_size(viewport), None, &mut result);
    result
}

#[derive(Clone, Copy)]
enum Arrangement<'a> {
    List(&'a Element, &'a ListLayout),
    Page(&'a PageLayout),
}

/// The modifier children that apply to an element. The first of each kind wins.
struct Modifiers<'a> {
    arrangement: Option<Arrangement<'a>>,
    padding: Option<&'a Padding>,
    size_constraint: Option<&'a SizeConstraint>,
    ignored: Vec<&'a Element>,
}

impl<'a> Modifiers<'a> {
    fn of(element: &'a Element) -> Self {
        let mut mods = Self {
            arrangement: None,
            padding: None,
            size_constraint: None,
            ignored: Vec::new(),
        };

        for child in &element.children {
            match &child.kind {
                Kind::ListLayout(list) if mods.arrangement.is_none() => {
                    mods.arrangement = Some(Arrangement::List(child, list));
                }
                Kind::PageLayout(page) if mods.arrangement.is_none() => {
                    mods.arrangement = Some(Arrangement::Page(page));
                }
                Kind::Padding(padding) if mods.padding.is_none() => {
                    mods.padding = Some(padding);
                }
                Kind::SizeConstraint(constraint) if mods.size_constraint.is_none() => {
                    mods.size_constraint = Some(constraint);
                }
                Kind::ListLayout(_)
                | Kind::PageLayout(_)
                | Kind::Padding(_)
                | Kind::SizeConstraint(_) => mods.ignored.push(child),
                _ => {}
            }
        }

        mods
    }

    fn insets(&self, size: Vec2) -> Insets {
        self.padding.map(|p| p.resolve(size)).unwrap_or_default()
    }
}

fn layout_element(
    element: &Element,
    parent: Rect,
    placed: Option<Vec2>,
    result: &mut LayoutResult,
) {
    if !element.visible || element.is_modifier() {
        return;
    }

    let mods = Modifiers::of(element);
    let size = element_size(element, parent.size(), &mods);
    let origin = placed.unwrap_or_else(|| {
        let position = element.position.resolve(parent.size());
        parent.origin() + position - anchor_offset(element.anchor_point, size)
    });

    let rect = Rect::new(origin.x, origin.y, size.x, size.y);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, &mods, result);
}

fn layout_children(element: &Element, rect: Rect, mods: &Modifiers<'_>, result: &mut LayoutResult) {
    for ignored in &mods.ignored {
        log::warn!(
            "[layout] duplicate {} '{}' under '{}' ignored",
            ignored.kind.name(),
            ignored.id,
            element.id
        );
    }

    let mut inner = rect.shrink(mods.insets(rect.size()));
    if let Kind::ScrollingFrame(frame) = &element.kind {
        let canvas = frame.canvas_size.resolve(inner.size()).max(inner.size());
        inner = Rect::new(inner.x, inner.y, canvas.x, canvas.y);
    }

    match mods.arrangement {
        Some(Arrangement::List(node, list)) => layout_list(element, node, list, inner, result),
        Some(Arrangement::Page(page)) => layout_page(element, page, inner, result),
        None => {
            for child in element.content_children() {
                layout_element(child, inner, None, result);
            }
        }
    }
}

fn ordered_children(element: &Element, sort_order: SortOrder) -> Vec<&Element> {
    let mut children: Vec<_> = element.content_children().filter(|c| c.visible).collect();
    if sort_order == SortOrder::LayoutOrder {
        children.sort_by_key(|c| c.layout_order);
    }
    children
}

fn layout_list(
    element: &Element,
    node: &Element,
    list: &ListLayout,
    inner: Rect,
    result: &mut LayoutResult,
) {
    let children = ordered_children(element, list.sort_order);
    let horizontal = list.fill_direction.is_horizontal();
    let (main_len, cross_len) = if horizontal {
        (inner.width, inner.height)
    } else {
        (inner.height, inner.width)
    };

    let sizes: Vec<Vec2> = children
        .iter()
        .map(|c| element_size(c, inner.size(), &Modifiers::of(c)))
        .collect();
    let content = list_content_size(list, &sizes, main_len);
    result.content_sizes.insert(node.id.clone(), content);

    let gap = list.padding.resolve(main_len);
    let main_total = if horizontal { content.x } else { content.y };
    let mut cursor = list.main_alignment().offset(main_len, main_total);

    for (child, size) in children.into_iter().zip(sizes) {
        let (main, cross) = if horizontal {
            (size.x, size.y)
        } else {
            (size.y, size.x)
        };
        let cross_offset = list.cross_alignment().offset(cross_len, cross);
        let origin = if horizontal {
            Vec2::new(inner.x + cursor, inner.y + cross_offset)
        } else {
            Vec2::new(inner.x + cross_offset, inner.y + cursor)
        };

        layout_element(child, inner, Some(origin), result);
        cursor += main + gap;
    }
}

fn layout_page(element: &Element, page: &PageLayout, inner: Rect, result: &mut LayoutResult) {
    let children = ordered_children(element, page.sort_order);
    match children.get(page.current_index) {
        Some(current) => layout_element(current, inner, Some(inner.origin()), result),
        None => log::debug!(
            "[layout] page {} of '{}' does not exist ({} pages)",
            page.current_index,
            element.id,
            children.len()
        ),
    }
}

fn anchor_offset(anchor_point: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(anchor_point.x * size.x, anchor_point.y * size.y)
}

/// Sum along the fill direction with gaps, max across it.
fn list_content_size(list: &ListLayout, sizes: &[Vec2], main_len: f32) -> Vec2 {
    let gap = list.padding.resolve(main_len);
    let gaps = gap * sizes.len().saturating_sub(1) as f32;

    if list.fill_direction.is_horizontal() {
        let main = sizes.iter().map(|s| s.x).sum::<f32>() + gaps;
        let cross = sizes.iter().map(|s| s.y).fold(0.0, f32::max);
        Vec2::new(main, cross)
    } else {
        let main = sizes.iter().map(|s| s.y).sum::<f32>() + gaps;
        let cross = sizes.iter().map(|s| s.x).fold(0.0, f32::max);
        Vec2::new(cross, main)
    }
}

fn element_size(element: &Element, parent: Vec2, mods: &Modifiers<'_>) -> Vec2 {
    let mut size = element.size.resolve(parent);

    if element.automatic_size != AutomaticSize::None {
        let content = measure_content(element, size, mods);
        if element.automatic_size.x() {
            size.x = size.x.max(content.x);
        }
        if element.automatic_size.y() {
            size.y = size.y.max(content.y);
        }
    }

    if let Some(constraint) = mods.size_constraint {
        size = constraint.clamp(size);
    }

    size.max(Vec2::ZERO)
}

/// Extent of an element's content, padding included.
fn measure_content(element: &Element, size: Vec2, mods: &Modifiers<'_>) -> Vec2 {
    let insets = mods.insets(size);
    let padding = Vec2::new(insets.horizontal_total(), insets.vertical_total());
    let inner = (size - padding).max(Vec2::ZERO);

    let content = match &element.kind {
        Kind::Text(label) => {
            let mut limits = Vec2::new(f32::INFINITY, f32::INFINITY);
            if label.wrapped && !element.automatic_size.x() {
                limits.x = inner.x;
            }
            measure_text(&label.text, label.text_size, label.font, limits)
        }
        _ => match mods.arrangement {
            Some(Arrangement::List(_, list)) => {
                let sizes: Vec<Vec2> = ordered_children(element, list.sort_order)
                    .iter()
                    .map(|c| element_size(c, inner, &Modifiers::of(c)))
                    .collect();
                let main_len = if list.fill_direction.is_horizontal() {
                    inner.x
                } else {
                    inner.y
                };
                list_content_size(list, &sizes, main_len)
            }
            Some(Arrangement::Page(_)) => element
                .content_children()
                .map(|c| element_size(c, inner, &Modifiers::of(c)))
                .fold(Vec2::ZERO, Vec2::max),
            None => element
                .content_children()
                .filter(|c| c.visible)
                .map(|c| {
                    let child_size = element_size(c, inner, &Modifiers::of(c));
                    let position = c.position.resolve(inner);
                    position - anchor_offset(c.anchor_point, child_size) + child_size
                })
                .fold(Vec2::ZERO, Vec2::max),
        },
    };

    content + padding
}
