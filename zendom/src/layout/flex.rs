//! Proportional distribution of a container's main axis among its slots.
//!
//! Every size here is a [`UDim`]: a fraction of the container plus a fixed
//! offset. Explicitly sized slots keep what they ask for; auto slots split the
//! remainder evenly, with the fixed-pixel deficit of their siblings and the
//! spacing subtracted from each of them in equal parts.

use crate::types::{Align, UDim};

/// How many spacings are deducted from the auto slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separators {
    /// One spacing per slot.
    #[default]
    PerSlot,
    /// One spacing per gap between adjacent slots.
    Between,
}

impl Separators {
    pub fn count(self, slots: usize) -> usize {
        match self {
            Self::PerSlot => slots,
            Self::Between => slots.saturating_sub(1),
        }
    }
}

/// One child's sizing request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotSpec {
    /// Main-axis size; `None` makes the slot auto.
    pub size: Option<UDim>,
    /// Cross-axis size; defaults to the full span.
    pub cross_size: Option<UDim>,
    /// Overrides the position-based default alignment.
    pub align: Option<Align>,
}

impl SlotSpec {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn fixed(size: UDim) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: UDim) -> Self {
        self.size = Some(size);
        self
    }

    pub fn cross_size(mut self, size: UDim) -> Self {
        self.cross_size = Some(size);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn is_auto(&self) -> bool {
        self.size.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSlot {
    pub index: usize,
    pub main: UDim,
    pub cross: UDim,
    pub align: Align,
    pub auto: bool,
}

impl ResolvedSlot {
    /// Main-axis length in pixels for a container of `container_px`.
    pub fn main_px(&self, container_px: f32) -> f32 {
        self.main.resolve(container_px)
    }
}

/// The outcome of one distribution pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotLayout {
    pub axis_size: UDim,
    pub spacing: UDim,
    slots: Vec<ResolvedSlot>,
}

impl SlotLayout {
    pub fn slots(&self) -> &[ResolvedSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Container length in pixels inside a parent of `parent_px`.
    pub fn container_px(&self, parent_px: f32) -> f32 {
        self.axis_size.resolve(parent_px)
    }

    /// Pixel length of every slot inside a parent of `parent_px`.
    pub fn resolve(&self, parent_px: f32) -> Vec<f32> {
        let container = self.container_px(parent_px);
        self.slots.iter().map(|s| s.main_px(container)).collect()
    }

    /// Pixel length of one spacing inside a parent of `parent_px`.
    pub fn spacing_px(&self, parent_px: f32) -> f32 {
        self.spacing.resolve(self.container_px(parent_px))
    }
}

impl<'a> IntoIterator for &'a SlotLayout {
    type Item = &'a ResolvedSlot;
    type IntoIter = std::slice::Iter<'a, ResolvedSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// First slot at the start edge, last at the end edge, the rest centered.
pub fn default_align(index: usize, count: usize) -> Align {
    if index == 0 {
        Align::Start
    } else if index + 1 == count {
        Align::End
    } else {
        Align::Center
    }
}

/// Partition the main axis among `children`.
///
/// Explicit slots are returned unchanged. Auto slots each get
/// `(1 - proportion_deficit) / autos` of the container and
/// `-offset_deficit / autos` pixels, where the deficits sum the explicit
/// slots and `separators.count(n)` spacings. With no auto slots nothing is
/// redistributed.
pub fn compute_slots(
    children: &[SlotSpec],
    spacing: UDim,
    axis_size: UDim,
    separators: Separators,
) -> SlotLayout {
    let count = children.len();
    let auto_count = children.iter().filter(|c| c.is_auto()).count();
    let sep_count = separators.count(count) as f32;

    let explicit = children
        .iter()
        .filter_map(|c| c.size)
        .fold(UDim::ZERO, |acc, size| acc + size);
    let deficit = explicit + spacing * sep_count;

    let auto_size = if auto_count > 0 {
        let autos = auto_count as f32;
        UDim::new((1.0 - deficit.scale) / autos, -deficit.offset / autos)
    } else {
        UDim::ZERO
    };

    log::trace!(
        "[flex] {} slots ({} auto), deficit {:?}, auto size {:?}",
        count,
        auto_count,
        deficit,
        auto_size
    );

    let slots = children
        .iter()
        .enumerate()
        .map(|(index, child)| ResolvedSlot {
            index,
            main: child.size.unwrap_or(auto_size),
            cross: child.cross_size.unwrap_or(UDim::FULL),
            align: child.align.unwrap_or_else(|| default_align(index, count)),
            auto: child.is_auto(),
        })
        .collect();

    SlotLayout {
        axis_size,
        spacing,
        slots,
    }
}
