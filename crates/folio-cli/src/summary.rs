//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use folio_contact::FieldErrors;
use folio_gallery::{Carousel, Gallery, ImageSource, ProjectCard};
use folio_model::CategoryTable;

pub fn print_gallery(gallery: &Gallery<'_>) {
    let buttons: Vec<String> = gallery
        .category_buttons()
        .into_iter()
        .map(|(token, active)| {
            if active {
                format!("[{token}]")
            } else {
                token.to_string()
            }
        })
        .collect();
    println!("Categories: {}", buttons.join("  "));
    if !gallery.search_text().is_empty() {
        println!("Search: {:?}", gallery.search_text());
    }
    if let Some(empty) = gallery.empty_state() {
        println!();
        println!("{}", empty.title);
        println!("{}", empty.hint);
    } else {
        println!("{}", projects_table(&gallery.cards()));
    }
    println!("{}", gallery.count_label());
}

/// One row per card, in display order.
pub fn projects_table(cards: &[ProjectCard<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell(""),
        header_cell("Title"),
        header_cell("Technologies"),
        header_cell("Featured"),
        header_cell("Images"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for card in cards {
        let mut tags = card.tags.join(", ");
        if let Some(overflow) = card.overflow_label() {
            tags.push(' ');
            tags.push_str(&overflow);
        }
        table.add_row(vec![
            dim_cell(&card.project.id),
            Cell::new(&card.monogram)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&card.project.title),
            Cell::new(tags),
            featured_cell(card.is_featured()),
            Cell::new(card.project.image_count()),
        ]);
    }
    table
}

/// Category tokens in button order with their rules.
pub fn categories_table(categories: &CategoryTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Matches")]);
    apply_table_style(&mut table);
    for category in categories.categories() {
        table.add_row(vec![
            Cell::new(&category.token).add_attribute(Attribute::Bold),
            Cell::new(category.rule.to_string()),
        ]);
    }
    table
}

/// The open carousel's images, marking the one on screen.
pub fn carousel_table<S: ImageSource>(carousel: &Carousel<'_, S>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Image"), header_cell("")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let current = carousel.image_index();
    for (index, image) in carousel.images().into_iter().enumerate() {
        let marker = if current == Some(index) {
            Cell::new("◀")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![dim_cell(index), Cell::new(image), marker]);
    }
    table
}

/// Validation errors in field order.
pub fn errors_table(errors: &FieldErrors) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Error")]);
    apply_table_style(&mut table);
    for (field, message) in errors.iter() {
        table.add_row(vec![
            Cell::new(field.as_str()).add_attribute(Attribute::Bold),
            Cell::new(message).fg(Color::Red),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn featured_cell(featured: bool) -> Cell {
    if featured {
        Cell::new("★")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
