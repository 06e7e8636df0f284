use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use zenui::prelude::*;
use zenui::zendom::{Color, ListLayout, MeasureState};

const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);
const ACCENT: Color = Color::oklch(0.75, 0.12, 250.0);

struct Gallery {
    rows: RowViewState,
    list: ListViewState,
}

impl Gallery {
    fn ui(&self) -> Result<Element, Error> {
        let title = AutoSizedText::new("ZenUI gallery")
            .text_size(18.0)
            .text_color(ACCENT)
            .build();
        let header = ColumnView::new("header")
            .size(UDim2::new(1.0, 0.0, 0.0, 40.0))
            .column_spacing(UDim::from_offset(8.0))
            .column(Column::new().width(UDim::from_offset(160.0)).child(title))
            .column(Column::new().child(AutoSizedText::new("columns share the rest").build()))
            .column(Column::new().child(AutoSizedText::new("v0.1").build()))
            .build()?;

        let sidebar = ListView::new("sidebar")
            .size(UDim2::new(0.0, 200.0, 1.0, 0.0))
            .automatic_size(true)
            .item_padding(4.0_f32)
            .padding(Padding::all(UDim::from_offset(6.0)))
            .children((0..5).map(|i| {
                AutoSizedText::new(format!("Item {i}"))
                    .build()
                    .id(format!("sidebar-item-{i}"))
                    .layout_order(i)
            }))
            .build(&self.list);

        let body = RowView::new("body")
            .row_width(UDim::FULL)
            .row_spacing(UDim::from_offset(4.0))
            .scrolling(Scrolling::enabled())
            .row(Row::new().height(UDim::from_offset(120.0)).child(sidebar))
            .row(Row::new().child(AutoSizedText::new("middle").build()))
            .row(Row::new().child(AutoSizedText::new("footer").build()))
            .build(&self.rows)?;

        let window = WindowController::new("window")
            .padding(Padding::all(UDim::from_offset(4.0)))
            .child(Titlebar::new().child(AutoSizedText::new("Gallery").build()))
            .child(
                view()
                    .id("content")
                    .child(Element::list_layout(ListLayout::new(FillDirection::Vertical)))
                    .child(header.layout_order(0))
                    .child(body.size(UDim2::new(1.0, 0.0, 1.0, -40.0)).layout_order(1)),
            )
            .build();

        Ok(window)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut gallery = Gallery {
        rows: RowViewState::new(),
        list: ListViewState::new(),
    };
    let mut measured = MeasureState::new();

    // Content sizes feed the next build, so lay out until they settle
    let mut result = layout(&gallery.ui()?, SCREEN);
    for pass in 1..=4 {
        let changed = measured.sync(&result);
        let rows = gallery.rows.sync("body", &result);
        let list = gallery.list.sync("sidebar", &result);
        if changed.is_empty() && !rows && !list {
            log::info!("[gallery] settled after {pass} passes");
            break;
        }
        result = layout(&gallery.ui()?, SCREEN);
    }

    let mut rects: Vec<_> = result.rects().collect();
    rects.sort_by(|a, b| a.0.cmp(b.0));
    for (id, rect) in rects {
        println!(
            "{id:<24} {:>7.1} {:>7.1} {:>7.1} x {:<7.1}",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    println!("title color {:?}", ACCENT.to_rgb());

    let mut drag = WindowController::new("window").drag(Vec2::ZERO);
    drag.begin(Vec2::new(10.0, 10.0));
    drag.drag_to(Vec2::new(400.0, 200.0), Vec2::new(800.0, 600.0), SCREEN);
    if let Some(position) = drag.end(Vec2::new(400.0, 200.0)) {
        println!("window dragged to {position:?}");
    }

    Ok(())
}
